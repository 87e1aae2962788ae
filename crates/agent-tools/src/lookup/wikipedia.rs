//! Wikipedia Summary Client
//!
//! Fetches page summaries from the MediaWiki REST API
//! (`/api/rest_v1/page/summary/{title}`).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use super::{first_sentences, SummarySource};
use crate::error::{LookupError, Result};

const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Wikipedia page-summary endpoint
pub struct WikipediaClient {
    client: reqwest::Client,
    base_url: String,
}

/// Relevant subset of the summary response
#[derive(Debug, Deserialize)]
struct SummaryPage {
    #[serde(rename = "type")]
    page_type: Option<String>,
    extract: Option<String>,
}

impl WikipediaClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("agent-tools/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.into(),
        })
    }

    /// Point the client at a different endpoint (for tests/mirrors)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl SummarySource for WikipediaClient {
    async fn summary(&self, title: &str, sentences: usize) -> Result<String> {
        // Wikipedia titles use underscores; reqwest percent-encodes the rest
        let title = title.trim().replace(' ', "_");
        let url = format!("{}/page/summary/{}", self.base_url, title);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(title));
        }
        let response = response.error_for_status()?;
        let page: SummaryPage = response.json().await?;

        if page.page_type.as_deref() == Some("disambiguation") {
            return Err(LookupError::Ambiguous(title));
        }

        match page.extract {
            Some(extract) if !extract.trim().is_empty() => {
                Ok(first_sentences(extract.trim(), sentences))
            }
            _ => Err(LookupError::Malformed(format!(
                "summary for '{title}' has no extract"
            ))),
        }
    }

    fn name(&self) -> &str {
        "Wikipedia"
    }
}
