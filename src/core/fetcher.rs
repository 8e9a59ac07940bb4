use crate::core::{Fetcher, Record};
use crate::utils::error::{Result, TodoError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TodoError::ConfigError {
                message: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<Record>> {
        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("HTTP error occurred: {} {}", status, body);
            return Err(TodoError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|e| classify(url, e))?;
        Ok(parse_records(&body))
    }
}

fn classify(url: &str, err: reqwest::Error) -> TodoError {
    if err.is_timeout() {
        tracing::error!("Request to {} timed out.", url);
        TodoError::Timeout {
            url: url.to_string(),
        }
    } else if err.is_connect() {
        tracing::error!("Could not connect to {}: {}", url, err);
        TodoError::Connection {
            url: url.to_string(),
            source: err,
        }
    } else {
        tracing::error!("An error occurred during the request to {}: {}", url, err);
        TodoError::Request {
            url: url.to_string(),
            source: err,
        }
    }
}

/// Decodes a response body into records. A body that is not JSON yields no
/// records rather than an error.
pub fn parse_records(body: &str) -> Vec<Record> {
    let json_data: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to decode JSON from response: {}", e);
            return Vec::new();
        }
    };

    match json_data {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match Record::try_from(item) {
                Ok(record) => Some(record),
                Err(other) => {
                    tracing::warn!("Skipping non-object element at index {}: {}", index, other);
                    None
                }
            })
            .collect(),
        Value::Object(obj) => vec![Record::from(obj)],
        other => {
            tracing::warn!("Expected a JSON array of objects, got: {}", other);
            Vec::new()
        }
    }
}
