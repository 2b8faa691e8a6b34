//! Durable per-day term sets.
//!
//! Each calendar day owns one pretty-printed JSON file under the raw
//! directory. Saving replaces the whole file; there is no append log.

mod atomic;

pub use atomic::write_atomic;

use crate::terms::{sanitize_terms, TermRecord};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

/// `yyyy-MM-dd`, used for day-file and archive names.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
const DAY_FILE_EXTENSION: &str = "json";

/// Reads and replaces the stored term set for a calendar day.
#[derive(Debug, Clone)]
pub struct DayStore {
    raw_dir: PathBuf,
}

impl DayStore {
    pub fn new(raw_dir: impl Into<PathBuf>) -> Self {
        Self {
            raw_dir: raw_dir.into(),
        }
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.raw_dir.join(format!(
            "{}.{DAY_FILE_EXTENSION}",
            date.format(DATE_FORMAT)
        ))
    }

    /// Returns the stored set for `date`, or an empty set on the first run of
    /// the day. Unreadable or unparseable files are errors.
    pub fn load(&self, date: NaiveDate) -> Result<Vec<TermRecord>> {
        let path = self.path_for(date);
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no day file yet");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Unable to read day file {:?}", path))
            }
        };
        let records: Vec<TermRecord> = serde_json::from_slice(&data)
            .with_context(|| format!("Day file {:?} is corrupt", path))?;
        Ok(sanitize_terms(records))
    }

    /// Overwrites the stored set for `date`.
    pub fn save(&self, date: NaiveDate, records: &[TermRecord]) -> Result<PathBuf> {
        let path = self.path_for(date);
        let mut data = serde_json::to_vec_pretty(records)?;
        data.push(b'\n');
        write_atomic(&path, &data)?;
        debug!(path = %path.display(), count = records.len(), "saved day file");
        Ok(path)
    }

    /// Every date with a stored day file, ascending. Files whose stem is not
    /// a date are ignored.
    pub fn list_dates(&self) -> Result<Vec<NaiveDate>> {
        if !self.raw_dir.exists() {
            return Ok(Vec::new());
        }
        let mut dates = Vec::new();
        for entry in WalkDir::new(&self.raw_dir).min_depth(1).max_depth(1) {
            let entry =
                entry.with_context(|| format!("Unable to list {:?}", self.raw_dir))?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(DAY_FILE_EXTENSION)
            {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Ok(date) = NaiveDate::parse_from_str(stem, DATE_FORMAT) {
                dates.push(date);
            }
        }
        dates.sort();
        Ok(dates)
    }
}
