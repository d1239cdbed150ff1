//! Error types and handling for the MCP server.
//!
//! Startup failures: invalid configuration or a Confluence client that
//! cannot be built from it. Tool-call failures are `ToolError`s and never
//! reach this type.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the Confluence client.
    #[error("Confluence error: {0}")]
    Confluence(#[from] crate::domains::confluence::ConfluenceError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
