//! Remote document fetch with content-type dispatch.

use crate::source::DocumentSource;
use crate::{html, pdf};
use billscope_common::{Config, Error, Result};
use std::time::Duration;

/// Fetches remote documents and extracts their text.
///
/// Holds a configured `reqwest::Client`; one outbound GET per URL
/// extraction, no retries.
pub struct DocumentFetcher {
    client: reqwest::Client,
}

impl DocumentFetcher {
    /// Create a fetcher with an explicit user agent and request timeout.
    pub fn new(user_agent: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }

    /// Create a fetcher from billscope configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.user_agent,
            Duration::from_secs(config.fetch_timeout_secs),
        )
    }

    /// Extract plain text from a document source.
    ///
    /// Uploads are parsed offline; URLs cause one outbound GET.
    pub async fn extract(&self, source: DocumentSource) -> Result<String> {
        match source {
            DocumentSource::Upload { bytes } => pdf::extract_pdf(&bytes),
            DocumentSource::Url { url } => self.fetch(&url).await,
        }
    }

    /// Fetch a remote document and extract its text.
    ///
    /// The response's declared content type decides the parse path: a PDF
    /// body goes through the PDF extractor, everything else is treated as
    /// HTML.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("GET {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("GET {url} returned {status}")));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_lowercase();

        tracing::debug!(url = %url, content_type = %content_type, "Fetched document");

        if content_type.contains("application/pdf") {
            let bytes = response
                .bytes()
                .await
                .map_err(|e| Error::Fetch(format!("Reading body of {url} failed: {e}")))?;
            pdf::extract_pdf(&bytes)
        } else {
            let body = response
                .text()
                .await
                .map_err(|e| Error::Fetch(format!("Reading body of {url} failed: {e}")))?;
            Ok(html::extract_html(&body))
        }
    }
}
