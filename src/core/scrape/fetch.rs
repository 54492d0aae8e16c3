//! Blocking page fetcher

use crate::core::error::{CourseGraphError, Result};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client used to download calendar pages
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    /// Build a fetcher with the given timeout (0 selects the default)
    ///
    /// # Errors
    /// Returns [`CourseGraphError::HttpClient`] if the client cannot be initialized.
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let timeout = if timeout_secs == 0 {
            DEFAULT_TIMEOUT_SECS
        } else {
            timeout_secs
        };
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("coursegraph/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|source| CourseGraphError::HttpClient { source })?;
        Ok(Self { client })
    }

    /// Download `url` and return the response body
    ///
    /// # Errors
    /// Returns [`CourseGraphError::Http`] if the request fails and
    /// [`CourseGraphError::HttpStatus`] for a non-success status.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let http_err = |source| CourseGraphError::Http {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(CourseGraphError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(http_err)
    }
}
