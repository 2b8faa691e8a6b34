//! Scrapes hot-list titles straight out of the billboard page markup.

use scraper::{Html, Selector};

use super::{search_link, AcquisitionError, HttpFetcher, TermSource};
use crate::terms::TermRecord;

const TITLE_SELECTOR: &str = ".HotList-itemTitle";

pub fn parse_billboard(html: &str, search_url: &str) -> Result<Vec<TermRecord>, AcquisitionError> {
    let selector = Selector::parse(TITLE_SELECTOR)
        .map_err(|err| AcquisitionError::Parse(format!("bad selector {TITLE_SELECTOR}: {err:?}")))?;
    let document = Html::parse_document(html);
    let records = document
        .select(&selector)
        .map(|element| {
            let title = element.text().collect::<String>();
            let title = title.trim();
            TermRecord::new(title, search_link(search_url, title))
        })
        .collect();
    Ok(records)
}

pub struct BillboardHtml {
    http: HttpFetcher,
    endpoint: String,
    search_url: String,
}

impl BillboardHtml {
    pub fn new(http: HttpFetcher, endpoint: String, search_url: String) -> Self {
        Self {
            http,
            endpoint,
            search_url,
        }
    }
}

impl TermSource for BillboardHtml {
    fn name(&self) -> &str {
        "billboard_html"
    }

    fn fetch(&self) -> Result<Vec<TermRecord>, AcquisitionError> {
        let html = self.http.get_text(&self.endpoint)?;
        parse_billboard(&html, &self.search_url)
    }
}
