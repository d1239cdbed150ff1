//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are read-only Confluence operations that MCP clients can call.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The `ToolHandler` trait every tool implements
//! - `registry.rs` - Tool catalog and name-based dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params, output, `execute()` and implement `ToolHandler`
//! 3. Export in `definitions/mod.rs`
//! 4. Register it in `ToolRegistry::new`

pub mod definitions;
mod error;
mod handlers;
mod registry;

pub use error::ToolError;
pub use handlers::ToolHandler;
pub use registry::ToolRegistry;
