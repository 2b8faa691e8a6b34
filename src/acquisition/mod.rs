//! Acquisition strategies producing trending terms from the remote site.
//!
//! Every strategy implements [`TermSource`] and normalizes to the same
//! `Vec<TermRecord>`. The pipeline only sees the trait; which strategy runs is
//! a configuration choice (`[source] kind`).

pub mod billboard;
pub mod http;
pub mod initial_data;
pub mod top_search;

pub use billboard::{parse_billboard, BillboardHtml};
pub use http::HttpFetcher;
pub use initial_data::{parse_initial_data, InitialData};
pub use top_search::{parse_top_search, TopSearchApi};

use crate::config::{SourceKind, SourceSettings};
use crate::terms::{sanitize_terms, TermRecord};
use tracing::{debug, info};
use url::Url;

/// Failure to obtain a usable batch of terms. Always fatal to a run.
#[derive(thiserror::Error, Debug)]
pub enum AcquisitionError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("Malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected payload: {0}")]
    Parse(String),

    #[error("{source_name} returned no terms")]
    Empty { source_name: String },
}

/// Produces the current ranked list of trending terms.
pub trait TermSource {
    fn name(&self) -> &str;

    fn fetch(&self) -> Result<Vec<TermRecord>, AcquisitionError>;
}

/// Fetches from `source`, drops blank titles, and rejects an empty batch.
pub fn acquire(source: &dyn TermSource) -> Result<Vec<TermRecord>, AcquisitionError> {
    info!(source = source.name(), "fetching trending terms");
    let records = sanitize_terms(source.fetch()?);
    if records.is_empty() {
        return Err(AcquisitionError::Empty {
            source_name: source.name().to_string(),
        });
    }
    info!(source = source.name(), count = records.len(), "fetched trending terms");
    Ok(records)
}

/// Instantiates the strategy selected by `settings.kind`.
pub fn build_source(settings: &SourceSettings) -> Result<Box<dyn TermSource>, AcquisitionError> {
    let http = HttpFetcher::new(settings)?;
    let endpoint = settings.endpoint().to_string();
    let search_url = settings.search_url.clone();
    debug!(kind = settings.kind.label(), %endpoint, "configuring term source");
    let source: Box<dyn TermSource> = match settings.kind {
        SourceKind::TopSearchApi => Box::new(TopSearchApi::new(http, endpoint, search_url)),
        SourceKind::BillboardHtml => Box::new(BillboardHtml::new(http, endpoint, search_url)),
        SourceKind::InitialData => Box::new(InitialData::new(http, endpoint)),
    };
    Ok(source)
}

/// Search-page link for `query`, or `None` if the base URL is unusable.
pub fn search_link(search_url: &str, query: &str) -> Option<String> {
    Url::parse_with_params(search_url, &[("q", query)])
        .ok()
        .map(|url| url.to_string())
}

/// Serves a fixed batch. Used for replays and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<TermRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<TermRecord>) -> Self {
        Self { records }
    }
}

impl TermSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch(&self) -> Result<Vec<TermRecord>, AcquisitionError> {
        Ok(self.records.clone())
    }
}
