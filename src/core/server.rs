//! MCP Server implementation.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool listing and tool calls to the
//! [`ToolRegistry`].

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::confluence::ConfluenceClient;
use crate::domains::tools::{ToolError, ToolRegistry};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool catalog and dispatcher.
    registry: ToolRegistry,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Builds the shared Confluence client; fails if the base URL is invalid.
    pub fn new(config: Config) -> Result<Self> {
        let client = ConfluenceClient::new(
            &config.confluence.base_url,
            config.confluence.credentials.clone(),
        )?;

        Ok(Self {
            registry: ToolRegistry::new(Arc::new(client)),
            config: Arc::new(config),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Run a tool and convert failures into protocol errors.
    pub async fn invoke_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.registry
            .dispatch(name, arguments)
            .await
            .map_err(ToolError::into_mcp_error)
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            instructions: Some(
                "Read-only access to Confluence: search content, fetch pages by ID, \
                 list spaces and list the content of a space."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _request, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.registry.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.invoke_tool(&request.name, request.arguments).await
    }
}
