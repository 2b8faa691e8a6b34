//! Reads the hot list from the JSON state the billboard page embeds in its
//! `js-initialData` script tag.

use scraper::{Html, Selector};
use serde_json::Value;

use super::{AcquisitionError, HttpFetcher, TermSource};
use crate::terms::TermRecord;

const SCRIPT_SELECTOR: &str = "script#js-initialData";
const HOT_LIST_POINTER: &str = "/initialState/topstory/hotList";

pub fn parse_initial_data(html: &str) -> Result<Vec<TermRecord>, AcquisitionError> {
    let selector = Selector::parse(SCRIPT_SELECTOR)
        .map_err(|err| AcquisitionError::Parse(format!("bad selector {SCRIPT_SELECTOR}: {err:?}")))?;
    let document = Html::parse_document(html);
    let script = document
        .select(&selector)
        .next()
        .ok_or_else(|| AcquisitionError::Parse("js-initialData script not found".into()))?;
    let state: Value = serde_json::from_str(&script.text().collect::<String>())?;
    let hot_list = state
        .pointer(HOT_LIST_POINTER)
        .and_then(Value::as_array)
        .ok_or_else(|| AcquisitionError::Parse(format!("{HOT_LIST_POINTER} missing")))?;

    let records = hot_list
        .iter()
        .map(|item| {
            let title = item
                .pointer("/target/titleArea/text")
                .and_then(Value::as_str)
                .unwrap_or_default();
            let url = item
                .pointer("/target/link/url")
                .and_then(Value::as_str)
                .map(str::to_string);
            TermRecord::new(title, url)
        })
        .collect();
    Ok(records)
}

pub struct InitialData {
    http: HttpFetcher,
    endpoint: String,
}

impl InitialData {
    pub fn new(http: HttpFetcher, endpoint: String) -> Self {
        Self { http, endpoint }
    }
}

impl TermSource for InitialData {
    fn name(&self) -> &str {
        "initial_data"
    }

    fn fetch(&self) -> Result<Vec<TermRecord>, AcquisitionError> {
        let html = self.http.get_text(&self.endpoint)?;
        parse_initial_data(&html)
    }
}
