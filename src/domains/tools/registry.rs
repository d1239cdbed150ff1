//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The ordered catalog answered to `tools/list`
//! - Name-based dispatch for `tools/call`

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{info, warn};

use super::definitions::{GetPageTool, GetSpaceContentTool, ListSpacesTool, SearchConfluenceTool};
use super::{ToolError, ToolHandler};
use crate::domains::confluence::ConfluenceClient;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - owns one handler per tool and the shared upstream client.
#[derive(Clone)]
pub struct ToolRegistry {
    handlers: Arc<[Arc<dyn ToolHandler>]>,
    client: Arc<ConfluenceClient>,
}

impl ToolRegistry {
    /// Create a registry with every Confluence tool, in listing order.
    pub fn new(client: Arc<ConfluenceClient>) -> Self {
        let handlers: Vec<Arc<dyn ToolHandler>> = vec![
            Arc::new(SearchConfluenceTool),
            Arc::new(GetPageTool),
            Arc::new(ListSpacesTool),
            Arc::new(GetSpaceContentTool),
        ];

        Self {
            handlers: handlers.into(),
            client,
        }
    }

    /// Get all tool names, in listing order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn list_tools(&self) -> Vec<Tool> {
        self.handlers.iter().map(|h| h.definition()).collect()
    }

    /// Look up the handler registered under `name`.
    pub fn handler(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.handlers.iter().find(|h| h.name() == name)
    }

    /// Dispatch a tool call to the matching handler.
    ///
    /// Unknown names fail with [`ToolError::UnknownTool`] before any handler
    /// runs. Handler failures are returned as-is; the protocol layer decides
    /// how to surface them.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let Some(handler) = self.handler(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::unknown_tool(name));
        };

        info!("Calling tool: {}", name);
        handler
            .call(arguments.unwrap_or_default(), &self.client)
            .await
            .inspect_err(|e| warn!("Tool {} failed: {}", name, e))
    }
}
