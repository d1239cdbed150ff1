//! Confluence page retrieval tool.

use rmcp::model::{CallToolResult, JsonObject, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::common::{parse_params, text_result, tool_definition};
use crate::domains::confluence::{ConfluenceClient, model::Content};
use crate::domains::tools::{ToolError, ToolHandler};

/// Parameters for `get_page`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPageParams {
    #[serde(rename = "pageId")]
    #[schemars(description = "Confluence page ID")]
    pub page_id: String,
}

/// A single page with its storage-format body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOutput {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub space: String,
    pub content: String,
    pub url: String,
    pub last_modified: String,
    pub version: u64,
}

/// Confluence page retrieval tool implementation.
#[derive(Debug, Clone, Default)]
pub struct GetPageTool;

impl GetPageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_page";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a specific Confluence page by ID";

    const EXPAND: &'static str = "body.storage,space,version,ancestors";

    /// Endpoint for a page id. The id becomes a path segment, so it must
    /// not be empty or contain URL delimiters.
    pub fn endpoint(page_id: &str) -> Result<String, ToolError> {
        if page_id.is_empty() || page_id.contains(['/', '?', '#']) {
            return Err(ToolError::invalid_arguments(format!(
                "Invalid pageId: {:?}",
                page_id
            )));
        }
        Ok(format!("/content/{}", page_id))
    }

    /// Fetch a page from Confluence.
    pub async fn execute(
        params: &GetPageParams,
        client: &ConfluenceClient,
    ) -> Result<PageOutput, ToolError> {
        info!("Fetching page: {}", params.page_id);

        let endpoint = Self::endpoint(&params.page_id)?;
        let raw = client
            .get(&endpoint, &[("expand", Some(Self::EXPAND.to_string()))])
            .await?;
        let page: Content = serde_json::from_value(raw)?;

        Ok(Self::project(page, client))
    }

    /// Map the upstream content object to the output shape.
    pub fn project(page: Content, client: &ConfluenceClient) -> PageOutput {
        PageOutput {
            space: page.space_name().unwrap_or_default().to_string(),
            content: page.storage_value().unwrap_or_default().to_string(),
            url: client.web_url(page.webui()),
            last_modified: page.last_modified().unwrap_or_default().to_string(),
            version: page.version_number().unwrap_or(0),
            id: page.id.unwrap_or_default(),
            title: page.title.unwrap_or_default(),
            content_type: page.content_type.unwrap_or_default(),
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for GetPageTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn definition(&self) -> Tool {
        tool_definition::<GetPageParams>(Self::NAME, Self::DESCRIPTION)
    }

    async fn call(
        &self,
        arguments: JsonObject,
        client: &ConfluenceClient,
    ) -> Result<CallToolResult, ToolError> {
        let params: GetPageParams = parse_params(arguments)?;
        let output = Self::execute(&params, client).await?;
        text_result(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::confluence::Credentials;
    use rmcp::model::RawContent;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn params(page_id: &str) -> GetPageParams {
        GetPageParams {
            page_id: page_id.to_string(),
        }
    }

    #[test]
    fn test_params_use_camel_case_key() {
        let params: GetPageParams = serde_json::from_value(json!({ "pageId": "42" })).unwrap();
        assert_eq!(params.page_id, "42");
        assert!(serde_json::from_value::<GetPageParams>(json!({ "page_id": "42" })).is_err());
    }

    #[test]
    fn test_endpoint_validation() {
        assert_eq!(GetPageTool::endpoint("12345").unwrap(), "/content/12345");
        assert!(matches!(
            GetPageTool::endpoint(""),
            Err(ToolError::InvalidArguments(_))
        ));
        assert!(GetPageTool::endpoint("1/../../space").is_err());
        assert!(GetPageTool::endpoint("1?expand=x").is_err());
        assert!(GetPageTool::endpoint("1#frag").is_err());
    }

    #[tokio::test]
    async fn test_get_page_example() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/api/content/12345"))
            .and(query_param("expand", "body.storage,space,version,ancestors"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "12345",
                "title": "T",
                "type": "page",
                "space": { "name": "S" },
                "body": { "storage": { "value": "<p>hi</p>" } },
                "version": { "when": "2024-01-01", "number": 3 },
                "_links": { "webui": "/x" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ConfluenceClient::new(&server.uri(), Credentials::None).unwrap();
        let arguments = json!({ "pageId": "12345" }).as_object().cloned().unwrap();
        let result = GetPageTool.call(arguments, &client).await.unwrap();

        let text = match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        };
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "12345",
                "title": "T",
                "type": "page",
                "space": "S",
                "content": "<p>hi</p>",
                "url": format!("{}/x", server.uri()),
                "lastModified": "2024-01-01",
                "version": 3
            })
        );
    }

    #[tokio::test]
    async fn test_missing_body_yields_empty_content() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/api/content/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "7",
                "title": "No body",
                "type": "page"
            })))
            .mount(&server)
            .await;

        let client = ConfluenceClient::new(&server.uri(), Credentials::None).unwrap();
        let output = GetPageTool::execute(&params("7"), &client).await.unwrap();

        assert_eq!(output.content, "");
        assert_eq!(output.space, "");
        assert_eq!(output.last_modified, "");
        assert_eq!(output.version, 0);
    }

    #[tokio::test]
    async fn test_not_found_is_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ConfluenceClient::new(&server.uri(), Credentials::None).unwrap();
        let err = GetPageTool::execute(&params("999"), &client)
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::Upstream(_)));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_invalid_page_id_makes_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let client = ConfluenceClient::new(&server.uri(), Credentials::None).unwrap();
        let err = GetPageTool::execute(&params("../space"), &client)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_non_object_body_is_projection_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!("unexpected")))
            .mount(&server)
            .await;

        let client = ConfluenceClient::new(&server.uri(), Credentials::None).unwrap();
        let err = GetPageTool::execute(&params("1"), &client)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Projection(_)));
    }
}
