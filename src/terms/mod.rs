//! Trending search terms and the per-day set they accumulate into.
//!
//! A term is identified by its trimmed title alone. The URL travels with the
//! record but never participates in equality, so two observations of the same
//! phrase with different links are the same term.

pub mod merge;

pub use merge::merge_terms;

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use tracing::warn;

/// One observed trending search phrase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermRecord {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TermRecord {
    /// Builds a normalized record: both fields trimmed, blank URL dropped.
    pub fn new(title: impl Into<String>, url: Option<String>) -> Self {
        Self {
            title: title.into().trim().to_string(),
            url: normalize_url(url),
        }
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self::new(title, None)
    }

    pub fn linked(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(title, Some(url.into()))
    }

    /// Identity key used for deduplication.
    pub fn key(&self) -> &str {
        self.title.trim()
    }

    pub fn is_valid(&self) -> bool {
        !self.key().is_empty()
    }

    /// Re-applies construction normalization to a record that bypassed `new`
    /// (deserialized from disk or built field-by-field by a parser).
    pub fn normalized(self) -> Self {
        Self::new(self.title, self.url)
    }
}

impl PartialEq for TermRecord {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for TermRecord {}

impl Hash for TermRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

fn normalize_url(url: Option<String>) -> Option<String> {
    url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty())
}

/// Normalizes a batch and drops records whose title is blank.
pub fn sanitize_terms(records: Vec<TermRecord>) -> Vec<TermRecord> {
    let before = records.len();
    let cleaned: Vec<TermRecord> = records
        .into_iter()
        .map(TermRecord::normalized)
        .filter(TermRecord::is_valid)
        .collect();
    let dropped = before - cleaned.len();
    if dropped > 0 {
        warn!(dropped, "discarded term records with an empty title");
    }
    cleaned
}
