//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP. Stdout carries protocol frames
//! only; all logging goes to stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the client disconnects or the process
    /// is interrupted.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        info!("Confluence MCP server running on stdio");

        tokio::select! {
            result = service.waiting() => {
                let reason = result.map_err(|e| TransportError::service(e.to_string()))?;
                info!("STDIO transport finished: {:?}", reason);
            }
            _ = tokio::signal::ctrl_c() => {
                // Dropping the running service cancels it.
                info!("Interrupt received, shutting down");
            }
        }

        Ok(())
    }
}
