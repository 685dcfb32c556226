//! Remote quote source.
//!
//! `QuoteSource` is the seam to the random-quote endpoint; `HttpQuoteSource`
//! is the reqwest-backed implementation.

use std::time::Duration;

use async_trait::async_trait;

use crate::types::errors::{AppError, SourceError};
use crate::types::quote::RemoteQuote;
use crate::types::settings::SourceSettings;

/// Something that can produce one random quote per call.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn random_quote(&self) -> Result<RemoteQuote, SourceError>;
}

/// Fetches quotes with a `GET` against a JSON endpoint returning
/// `{"quote": "...", "author": "..."}`.
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    client: reqwest::Client,
    url: String,
}

impl HttpQuoteSource {
    /// Builds a source from settings, applying the configured request timeout.
    pub fn new(settings: &SourceSettings) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;
        Ok(Self::with_client(client, settings.random_url()))
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn convert_error(err: reqwest::Error) -> SourceError {
        if err.is_timeout() {
            SourceError::Timeout
        } else if let Some(status) = err.status() {
            SourceError::Status(status.as_u16())
        } else if err.is_decode() || err.is_body() {
            SourceError::Parse(err.to_string())
        } else {
            SourceError::Network(err.to_string())
        }
    }

    /// Parses a response body, rejecting quotes with no text.
    pub fn parse_body(body: &str) -> Result<RemoteQuote, SourceError> {
        let remote: RemoteQuote =
            serde_json::from_str(body).map_err(|e| SourceError::Parse(e.to_string()))?;
        if remote.quote.trim().is_empty() {
            return Err(SourceError::Parse("empty quote".to_string()));
        }
        Ok(remote)
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn random_quote(&self) -> Result<RemoteQuote, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(Self::convert_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(Self::convert_error)?;
        Self::parse_body(&body)
    }
}
