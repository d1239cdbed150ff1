//! Common utilities shared across the Confluence tools.
//!
//! Argument decoding, tool metadata and the text envelope every tool
//! returns its projection in.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};

use crate::domains::tools::ToolError;

/// Default page size for `search_confluence`.
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Default page size for `get_space_content`.
pub const DEFAULT_SPACE_CONTENT_LIMIT: u32 = 20;

/// Serde default for `search_confluence`'s `limit`; also the schema default.
pub fn default_search_limit() -> Option<u32> {
    Some(DEFAULT_SEARCH_LIMIT)
}

/// Serde default for `get_space_content`'s `limit`; also the schema default.
pub fn default_space_content_limit() -> Option<u32> {
    Some(DEFAULT_SPACE_CONTENT_LIMIT)
}

/// Effective page size: `null` and `0` fall back to `default`.
pub fn resolve_limit(limit: Option<u32>, default: u32) -> u32 {
    limit.filter(|&l| l > 0).unwrap_or(default)
}

/// Decode call arguments into a tool's parameter struct.
///
/// Omitted optional parameters take their serde defaults here.
pub fn parse_params<P: DeserializeOwned>(arguments: JsonObject) -> Result<P, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Wrap a projection as a single pretty-printed JSON text item.
pub fn text_result<T: Serialize>(output: &T) -> Result<CallToolResult, ToolError> {
    let text = serde_json::to_string_pretty(output)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Build the Tool model for a parameter type.
pub fn tool_definition<P>(name: &'static str, description: &'static str) -> Tool
where
    P: JsonSchema + 'static,
{
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: Some(read_only_annotations()),
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// All tools only read from Confluence.
fn read_only_annotations() -> ToolAnnotations {
    ToolAnnotations {
        title: None,
        read_only_hint: Some(true),
        destructive_hint: Some(false),
        idempotent_hint: Some(true),
        open_world_hint: Some(true),
    }
}
