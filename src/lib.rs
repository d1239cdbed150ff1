//! Confluence MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing
//! read-only Confluence tools: `search_confluence`, `get_page`,
//! `list_spaces` and `get_space_content`.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP handler and transport
//! - **domains**: business logic organized by bounded contexts
//!   - **confluence**: REST client, credentials and wire models
//!   - **tools**: tool definitions, registry and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use confluence_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
