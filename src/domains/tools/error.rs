//! Tool-specific error types.

use rmcp::{ErrorData as McpError, model::ErrorCode};
use thiserror::Error;

use crate::domains::confluence::ConfluenceError;

/// Errors that can occur during tool dispatch and execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The call arguments did not match the tool's parameters.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The upstream Confluence request failed.
    #[error(transparent)]
    Upstream(#[from] ConfluenceError),

    /// The upstream JSON could not be projected or the output serialized.
    #[error("Projection failed: {0}")]
    Projection(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Convert into the protocol error returned to the client.
    ///
    /// Unknown tools map to `METHOD_NOT_FOUND`; every failure raised by a
    /// handler maps to `INTERNAL_ERROR` carrying the original message.
    pub fn into_mcp_error(self) -> McpError {
        match self {
            Self::UnknownTool(_) => McpError::new(ErrorCode::METHOD_NOT_FOUND, self.to_string(), None),
            other => McpError::internal_error(format!("Tool execution failed: {}", other), None),
        }
    }
}
