//! Matching service protocol
//!
//! Request and response shapes for the remote matching endpoint, and the
//! decoding of its replies into match spans.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::span::MatchSpan;

mod client;

pub use client::MatchClient;

/// Fallback message when the service fails without a `detail`
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Errors that can occur while talking to the matching service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service could not be reached
    #[error("Could not connect to the server.")]
    Unreachable,

    /// The request did not finish within the configured timeout
    #[error("The server did not respond in time.")]
    Timeout,

    /// The service rejected the request; the message is shown verbatim
    #[error("{message}")]
    Api { code: u16, message: String },

    /// The response body could not be decoded
    #[error("Invalid response from the server: {0}")]
    Parse(String),

    /// The HTTP client or request could not be built, e.g. a malformed URL
    #[error("Failed to set up HTTP client: {0}")]
    Setup(String),
}

/// Matching options understood by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Flag {
    IgnoreCase,
    Multiline,
    DotAll,
    Verbose,
}

impl Flag {
    pub const ALL: [Flag; 4] = [Flag::IgnoreCase, Flag::Multiline, Flag::DotAll, Flag::Verbose];

    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::IgnoreCase => "IGNORECASE",
            Flag::Multiline => "MULTILINE",
            Flag::DotAll => "DOTALL",
            Flag::Verbose => "VERBOSE",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], "");
        Flag::ALL
            .into_iter()
            .find(|flag| flag.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                format!(
                    "unknown flag '{}' (expected one of: ignorecase, multiline, dotall, verbose)",
                    s
                )
            })
    }
}

/// Body of a debug request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugRequest {
    pub pattern: String,
    pub text: String,
    pub flags: Vec<Flag>,
}

impl DebugRequest {
    /// Build a request; repeated flags are sent once
    pub fn new(pattern: impl Into<String>, text: impl Into<String>, mut flags: Vec<Flag>) -> Self {
        let mut seen = Vec::with_capacity(flags.len());
        flags.retain(|flag| {
            if seen.contains(flag) {
                false
            } else {
                seen.push(*flag);
                true
            }
        });

        Self {
            pattern: pattern.into(),
            text: text.into(),
            flags,
        }
    }

    /// A request needs both a pattern and some text
    pub fn is_complete(&self) -> bool {
        !self.pattern.is_empty() && !self.text.is_empty()
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Decode a service response into match spans.
///
/// Success bodies are a JSON array of matches. Failures surface the `detail`
/// string when the body carries one.
pub fn decode_response(status: u16, body: &str) -> Result<Vec<MatchSpan>, ServiceError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| ServiceError::Parse(e.to_string()));
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|detail| detail.as_str().map(str::to_owned))
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string());

    Err(ServiceError::Api {
        code: status,
        message,
    })
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod service_tests;
