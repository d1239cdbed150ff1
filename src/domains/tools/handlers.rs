//! Tool handler trait.
//!
//! Each tool in `definitions/` implements [`ToolHandler`]; the
//! [`ToolRegistry`](super::ToolRegistry) owns one instance per tool and
//! dispatches calls by name.

use rmcp::model::{CallToolResult, JsonObject, Tool};

use super::ToolError;
use crate::domains::confluence::ConfluenceClient;

#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Tool name as registered in MCP.
    fn name(&self) -> &'static str;

    /// Tool metadata (name, description, input schema).
    fn definition(&self) -> Tool;

    /// Decode the arguments, run the tool and wrap its output.
    async fn call(
        &self,
        arguments: JsonObject,
        client: &ConfluenceClient,
    ) -> Result<CallToolResult, ToolError>;
}
