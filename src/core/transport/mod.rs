//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output; framing is handled by
//! `rmcp`.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
