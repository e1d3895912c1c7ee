//! HTTP client for the remote ingestion endpoint.
//!
//! One blocking POST per record, JSON body, single attempt. The relay loop
//! is deliberately sequential (one request in flight at a time), so a
//! blocking client is the right shape here.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use relay_model::Record;

use crate::error::SubmitError;
use crate::sink::RecordSink;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP client that delivers one record per request.
pub struct IngestClient {
    client: Client,
    endpoint: String,
    auth_header: Option<String>,
}

impl IngestClient {
    /// Create a client for the given endpoint. When present, `auth_header`
    /// is forwarded verbatim as the `Authorization` value on every request;
    /// this crate implements no authentication mechanics of its own.
    pub fn new(
        endpoint: impl Into<String>,
        auth_header: Option<String>,
    ) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(SubmitError::Client)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            auth_header,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RecordSink for IngestClient {
    fn post(&mut self, record: &Record) -> Result<(), String> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(record);
        if let Some(value) = &self.auth_header {
            request = request.header(AUTHORIZATION, value.clone());
        }
        let response = match request.send() {
            Ok(response) => response,
            Err(error) => return Err(error.to_string()),
        };
        let status = response.status();
        if status.is_success() {
            debug!(endpoint = %self.endpoint, %status, "record delivered");
            return Ok(());
        }
        // Failure detail preference: response body, then status reason.
        let body = response.text().unwrap_or_default();
        if body.trim().is_empty() {
            Err(status
                .canonical_reason()
                .unwrap_or(status.as_str())
                .to_string())
        } else {
            Err(body)
        }
    }
}
