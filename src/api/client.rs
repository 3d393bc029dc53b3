use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::core::error::{ConnectionError, Error, ParseError};
use crate::pipeline::FetchUsers;

/// HTTP client for the users-collection endpoint
pub struct ApiClient {
    client: reqwest::Client,
    endpoint: String,
    timeout_secs: u64,
}

impl ApiClient {
    pub fn new(endpoint: String, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            timeout_secs,
        })
    }

    /// Fetch the users collection with a single GET. No retry; any
    /// transport-level failure or non-2xx status is terminal for the run.
    ///
    /// Returns the raw array elements. Shape validation of the individual
    /// objects is the parse stage's job, but a body that is not a JSON
    /// array at all is already a parse failure here.
    pub async fn fetch_users(&self) -> std::result::Result<Vec<Value>, Error> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| self.classify_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConnectionError::BadStatus {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ConnectionError::BodyRead {
                url: self.endpoint.clone(),
                source,
            })?;

        let decoded: Value =
            serde_json::from_slice(&body).map_err(ParseError::InvalidJson)?;

        match decoded {
            Value::Array(values) => Ok(values),
            other => Err(ParseError::NotAnArray {
                found: json_type_name(&other),
            }
            .into()),
        }
    }

    fn classify_request_error(&self, source: reqwest::Error) -> Error {
        if source.is_timeout() {
            ConnectionError::Timeout {
                url: self.endpoint.clone(),
                timeout_secs: self.timeout_secs,
            }
            .into()
        } else {
            ConnectionError::RequestFailed {
                url: self.endpoint.clone(),
                source,
            }
            .into()
        }
    }
}

#[async_trait::async_trait]
impl FetchUsers for ApiClient {
    async fn fetch_users(&self) -> std::result::Result<Vec<Value>, Error> {
        ApiClient::fetch_users(self).await
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
