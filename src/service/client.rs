//! HTTP client for the matching service

use std::time::Duration;

use super::{DebugRequest, ServiceError, decode_response};
use crate::span::MatchSpan;

/// Posts debug requests to the matching endpoint
#[derive(Debug, Clone)]
pub struct MatchClient {
    http: reqwest::Client,
    url: String,
}

impl MatchClient {
    /// Create a client for `url` with a per-request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                log::debug!("Failed to build HTTP client: {}", e);
                ServiceError::Setup(e.to_string())
            })?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one request and decode the matches it returns
    pub async fn debug(&self, request: &DebugRequest) -> Result<Vec<MatchSpan>, ServiceError> {
        log::debug!(
            "POST {} (pattern {} chars, text {} chars, flags {:?})",
            self.url,
            request.pattern.chars().count(),
            request.text.chars().count(),
            request.flags
        );

        let response = self
            .http
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_transport_error)?;
        log::debug!("Response {} ({} bytes)", status, body.len());

        decode_response(status, &body)
    }
}

fn map_transport_error(e: reqwest::Error) -> ServiceError {
    log::debug!("Request failed: {}", e);
    if e.is_builder() {
        ServiceError::Setup(e.to_string())
    } else if e.is_timeout() {
        ServiceError::Timeout
    } else {
        ServiceError::Unreachable
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
