//! Confluence space content tool.
//!
//! Lists the content of one space (pages and blog posts) without bodies.

use rmcp::model::{CallToolResult, JsonObject, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::common::{
    DEFAULT_SPACE_CONTENT_LIMIT, default_space_content_limit, parse_params, resolve_limit,
    text_result, tool_definition,
};
use crate::domains::confluence::{
    ConfluenceClient,
    model::{Content, PagedResponse},
};
use crate::domains::tools::{ToolError, ToolHandler};

/// Parameters for `get_space_content`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetSpaceContentParams {
    #[serde(rename = "spaceKey")]
    #[schemars(description = "Confluence space key")]
    pub space_key: String,

    #[schemars(description = "Maximum number of results")]
    #[serde(default = "default_space_content_limit")]
    pub limit: Option<u32>,
}

impl GetSpaceContentParams {
    pub fn limit(&self) -> u32 {
        resolve_limit(self.limit, DEFAULT_SPACE_CONTENT_LIMIT)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceContentOutput {
    pub content: Vec<SpaceContentItem>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceContentItem {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub url: String,
    pub last_modified: String,
}

/// Confluence space content tool implementation.
#[derive(Debug, Clone, Default)]
pub struct GetSpaceContentTool;

impl GetSpaceContentTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_space_content";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get content from a specific space";

    const ENDPOINT: &'static str = "/content";
    const EXPAND: &'static str = "space,version";

    /// Query parameters sent to `/content`.
    pub fn query_params(params: &GetSpaceContentParams) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("spaceKey", Some(params.space_key.clone())),
            ("limit", Some(params.limit().to_string())),
            ("expand", Some(Self::EXPAND.to_string())),
        ]
    }

    pub async fn execute(
        params: &GetSpaceContentParams,
        client: &ConfluenceClient,
    ) -> Result<SpaceContentOutput, ToolError> {
        info!("Listing content of space: {}", params.space_key);

        let raw = client
            .get(Self::ENDPOINT, &Self::query_params(params))
            .await?;
        let response: PagedResponse<Content> = serde_json::from_value(raw)?;

        Ok(Self::project(response, client))
    }

    pub fn project(
        response: PagedResponse<Content>,
        client: &ConfluenceClient,
    ) -> SpaceContentOutput {
        let total = response.total();
        let content = response
            .into_results()
            .into_iter()
            .map(|item| SpaceContentItem {
                url: client.web_url(item.webui()),
                last_modified: item.last_modified().unwrap_or_default().to_string(),
                id: item.id.unwrap_or_default(),
                title: item.title.unwrap_or_default(),
                content_type: item.content_type.unwrap_or_default(),
            })
            .collect();

        SpaceContentOutput { content, total }
    }
}

#[async_trait::async_trait]
impl ToolHandler for GetSpaceContentTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn definition(&self) -> Tool {
        tool_definition::<GetSpaceContentParams>(Self::NAME, Self::DESCRIPTION)
    }

    async fn call(
        &self,
        arguments: JsonObject,
        client: &ConfluenceClient,
    ) -> Result<CallToolResult, ToolError> {
        let params: GetSpaceContentParams = parse_params(arguments)?;
        let output = Self::execute(&params, client).await?;
        text_result(&output)
    }
}
