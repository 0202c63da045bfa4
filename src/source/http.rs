//! HTTP record source backed by `reqwest::blocking`.

use super::traits::RecordSource;
use crate::config::SourceConfig;
use crate::error::{
    DecodeErrorKind, ErrorContext, FetchListError, Result, TransportErrorKind,
};
use crate::model::RawRecord;
use std::time::Duration;

/// Default endpoint serving the record list.
pub const DEFAULT_SOURCE_URL: &str = "https://fetch-hiring.s3.amazonaws.com/hiring.json";

/// Configuration for the HTTP source.
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Full URL of the JSON document
    pub url: String,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: default_user_agent(),
        }
    }
}

impl From<&SourceConfig> for HttpSourceConfig {
    fn from(config: &SourceConfig) -> Self {
        Self {
            url: config.url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            user_agent: config.user_agent.clone(),
        }
    }
}

pub(crate) fn default_user_agent() -> String {
    format!("fetchlist/{}", env!("CARGO_PKG_VERSION"))
}

/// Fetches the record list from a single JSON endpoint.
pub struct HttpRecordSource {
    config: HttpSourceConfig,
    client: reqwest::blocking::Client,
}

impl HttpRecordSource {
    /// Create a new HTTP source. Fails only if the HTTP client cannot be built.
    pub fn new(config: HttpSourceConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                FetchListError::transport(
                    "building HTTP client",
                    TransportErrorKind::Client(e.to_string()),
                )
            })?;

        Ok(Self { config, client })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    fn fetch_body(&self) -> Result<String> {
        tracing::debug!(url = %self.config.url, "Requesting record list");

        let response = self
            .client
            .get(&self.config.url)
            .header("Accept", "application/json")
            .send()
            .map_err(classify_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchListError::transport(
                "record list request",
                TransportErrorKind::Status {
                    status: status.as_u16(),
                },
            ));
        }

        response.text().map_err(classify_request_error)
    }
}

impl RecordSource for HttpRecordSource {
    fn fetch_raw_records(&self) -> Result<Vec<RawRecord>> {
        let body = self
            .fetch_body()
            .with_context(|| format!("fetching {}", self.config.url))?;

        let records = decode_records(&body)
            .with_context(|| format!("decoding response from {}", self.config.url))?;

        tracing::debug!(count = records.len(), "Decoded raw records");
        Ok(records)
    }

    fn name(&self) -> &'static str {
        "HTTP"
    }
}

/// Decode a response body into raw records.
pub fn decode_records(body: &str) -> Result<Vec<RawRecord>> {
    if body.trim().is_empty() {
        return Err(FetchListError::decode(
            "empty response body",
            DecodeErrorKind::InvalidJson("expected a JSON array".to_string()),
        ));
    }
    Ok(serde_json::from_str(body)?)
}

fn classify_request_error(err: reqwest::Error) -> FetchListError {
    let kind = if err.is_timeout() {
        TransportErrorKind::Timeout(err.to_string())
    } else if let Some(status) = err.status() {
        TransportErrorKind::Status {
            status: status.as_u16(),
        }
    } else {
        TransportErrorKind::Network(err.to_string())
    };
    FetchListError::transport("record list request", kind)
}
