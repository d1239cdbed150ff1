//! Confluence search tool.
//!
//! Runs a CQL full-text search (`text ~ "..."`) and returns a flat list of
//! matching content with absolute browser URLs.

use rmcp::model::{CallToolResult, JsonObject, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::common::{
    DEFAULT_SEARCH_LIMIT, default_search_limit, parse_params, resolve_limit, text_result,
    tool_definition,
};
use crate::domains::confluence::{
    ConfluenceClient,
    model::{Content, PagedResponse},
};
use crate::domains::tools::{ToolError, ToolHandler};

/// Parameters for `search_confluence`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchConfluenceParams {
    /// Free text to search for.
    #[schemars(description = "Search query")]
    pub query: String,

    /// Maximum number of results (default: 10).
    #[schemars(description = "Maximum number of results")]
    #[serde(default = "default_search_limit")]
    pub limit: Option<u32>,
}

impl SearchConfluenceParams {
    /// Page size to request; `null` or `0` means the default.
    pub fn limit(&self) -> u32 {
        resolve_limit(self.limit, DEFAULT_SEARCH_LIMIT)
    }
}

/// Structured output for search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutput {
    pub results: Vec<SearchHit>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub space: String,
    pub url: String,
    pub excerpt: String,
    pub last_modified: String,
}

/// Confluence search tool implementation.
#[derive(Debug, Clone, Default)]
pub struct SearchConfluenceTool;

impl SearchConfluenceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_confluence";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for content in Confluence";

    const ENDPOINT: &'static str = "/content/search";
    const EXPAND: &'static str = "body.view,space,version";

    /// Build the CQL expression for a free-text query.
    ///
    /// The query is embedded in a double-quoted CQL string; `\` and `"` are
    /// backslash-escaped so the text cannot close the literal.
    pub fn cql(query: &str) -> String {
        let mut escaped = String::with_capacity(query.len());
        for c in query.chars() {
            if c == '"' || c == '\\' {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        format!("text ~ \"{}\"", escaped)
    }

    /// Query parameters sent to `/content/search`.
    pub fn query_params(params: &SearchConfluenceParams) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("cql", Some(Self::cql(&params.query))),
            ("limit", Some(params.limit().to_string())),
            ("expand", Some(Self::EXPAND.to_string())),
        ]
    }

    /// Execute the search against Confluence.
    pub async fn execute(
        params: &SearchConfluenceParams,
        client: &ConfluenceClient,
    ) -> Result<SearchOutput, ToolError> {
        info!("Searching Confluence for: {}", params.query);

        let raw = client
            .get(Self::ENDPOINT, &Self::query_params(params))
            .await?;
        let response: PagedResponse<Content> = serde_json::from_value(raw)?;

        Ok(Self::project(response, client))
    }

    /// Map the upstream search response to the output shape.
    pub fn project(response: PagedResponse<Content>, client: &ConfluenceClient) -> SearchOutput {
        let total = response.total();
        let results = response
            .into_results()
            .into_iter()
            .map(|item| SearchHit {
                space: item.space_name().unwrap_or_default().to_string(),
                url: client.web_url(item.webui()),
                last_modified: item.last_modified().unwrap_or_default().to_string(),
                id: item.id.unwrap_or_default(),
                title: item.title.unwrap_or_default(),
                content_type: item.content_type.unwrap_or_default(),
                excerpt: item.excerpt.unwrap_or_default(),
            })
            .collect();

        SearchOutput { results, total }
    }
}

#[async_trait::async_trait]
impl ToolHandler for SearchConfluenceTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn definition(&self) -> Tool {
        tool_definition::<SearchConfluenceParams>(Self::NAME, Self::DESCRIPTION)
    }

    async fn call(
        &self,
        arguments: JsonObject,
        client: &ConfluenceClient,
    ) -> Result<CallToolResult, ToolError> {
        let params: SearchConfluenceParams = parse_params(arguments)?;
        let output = Self::execute(&params, client).await?;
        text_result(&output)
    }
}
