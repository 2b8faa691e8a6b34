use serde::Deserialize;

use super::{search_link, AcquisitionError, HttpFetcher, TermSource};
use crate::terms::TermRecord;

#[derive(Deserialize)]
struct TopSearchPayload {
    top_search: TopSearch,
}

#[derive(Deserialize)]
struct TopSearch {
    #[serde(default)]
    words: Vec<SearchWord>,
}

#[derive(Deserialize)]
struct SearchWord {
    #[serde(default)]
    query: String,
    #[serde(default)]
    display_query: String,
}

/// Parses a `top_search` API response.
///
/// The display text becomes the title (falling back to the raw query) and the
/// raw query drives the search link.
pub fn parse_top_search(body: &str, search_url: &str) -> Result<Vec<TermRecord>, AcquisitionError> {
    let payload: TopSearchPayload = serde_json::from_str(body)?;
    let records = payload
        .top_search
        .words
        .into_iter()
        .map(|word| {
            let query = word.query.trim();
            let display = word.display_query.trim();
            let title = if display.is_empty() { query } else { display };
            let link_query = if query.is_empty() { title } else { query };
            let url = if link_query.is_empty() {
                None
            } else {
                search_link(search_url, link_query)
            };
            TermRecord::new(title, url)
        })
        .collect();
    Ok(records)
}

/// JSON top-search endpoint.
pub struct TopSearchApi {
    http: HttpFetcher,
    endpoint: String,
    search_url: String,
}

impl TopSearchApi {
    pub fn new(http: HttpFetcher, endpoint: String, search_url: String) -> Self {
        Self {
            http,
            endpoint,
            search_url,
        }
    }
}

impl TermSource for TopSearchApi {
    fn name(&self) -> &str {
        "top_search_api"
    }

    fn fetch(&self) -> Result<Vec<TermRecord>, AcquisitionError> {
        let body = self.http.get_text(&self.endpoint)?;
        parse_top_search(&body, &self.search_url)
    }
}
