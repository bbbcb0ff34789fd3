//! HTTP transport used to reach the sign-in and sign-up endpoints.
//!
//! The controller only needs "POST this JSON, tell me the status and body, or
//! tell me nothing came back". [`Transport`] is that seam; [`HttpTransport`] is
//! the reqwest-backed implementation with the connect and request timeouts the
//! controller relies on, since it imposes none of its own.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::{future::Future, time::Duration};
use thiserror::Error;
use tracing::{debug, instrument};

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A response that made it back, whatever its status.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub url: String,
    pub status: StatusCode,
    pub body: Value,
}

/// No response was received.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("unable to reach the server: {0}")]
    Network(String),
    #[error("failed to build request: {0}")]
    Build(String),
}

pub trait Transport: Send + Sync {
    /// POSTs `body` as JSON to `url`.
    ///
    /// # Errors
    /// Returns `TransportError` when no response was received.
    fn post_json(
        &self,
        url: &str,
        body: &Value,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport with the default timeouts.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(user_agent: &str) -> Result<Self, TransportError> {
        Self::with_timeout(user_agent, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Build a transport with an explicit request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_timeout(user_agent: &str, request_timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT.min(request_timeout))
            .timeout(request_timeout)
            .build()
            .map_err(|err| TransportError::Build(err.to_string()))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    #[instrument(skip(self, body))]
    async fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        debug!("response status: {}", status);

        // A body that is not JSON still counts as a received response.
        let bytes = response.bytes().await.map_err(map_request_error)?;
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        Ok(TransportResponse {
            url: url.to_string(),
            status,
            body,
        })
    }
}

fn map_request_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_builder() {
        TransportError::Build(err.to_string())
    } else {
        TransportError::Network(err.to_string())
    }
}
