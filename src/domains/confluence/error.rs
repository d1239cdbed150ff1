//! Errors raised while talking to the Confluence REST API.

use thiserror::Error;

/// Errors that can occur during an upstream request.
#[derive(Debug, Error)]
pub enum ConfluenceError {
    /// The request never produced an HTTP response (DNS, connect, TLS, ...).
    #[error("API request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// Confluence answered with a non-2xx status.
    #[error("API request failed: {status} {status_text}")]
    HttpStatus { status: u16, status_text: String },

    /// The response body was not valid JSON.
    #[error("API response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),

    /// The request URL could not be built from the base URL and endpoint.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),
}

impl ConfluenceError {
    /// Build an HTTP status error from a response status.
    pub fn http_status(status: reqwest::StatusCode) -> Self {
        Self::HttpStatus {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// The HTTP status code, when the upstream produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Network(e) | Self::Decode(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
