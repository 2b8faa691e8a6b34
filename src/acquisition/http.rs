//! Blocking HTTP client wrapping reqwest.
//!
//! One request per call, no retries: a failed fetch aborts the run.

use super::AcquisitionError;
use crate::config::SourceSettings;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(settings: &SourceSettings) -> Result<Self, AcquisitionError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(settings.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    /// GETs `url` and returns the body; non-2xx statuses are errors.
    pub fn get_text(&self, url: &str) -> Result<String, AcquisitionError> {
        debug!(url, "GET");
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(AcquisitionError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text()?)
    }
}
