//! Confluence space listing tool.

use rmcp::model::{CallToolResult, JsonObject, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::common::{parse_params, text_result, tool_definition};
use crate::domains::confluence::{
    ConfluenceClient,
    model::{PagedResponse, Space},
};
use crate::domains::tools::{ToolError, ToolHandler};

/// `list_spaces` takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListSpacesParams {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacesOutput {
    pub spaces: Vec<SpaceInfo>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceInfo {
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub space_type: String,
    pub description: String,
    pub url: String,
}

/// Confluence space listing tool implementation.
#[derive(Debug, Clone, Default)]
pub struct ListSpacesTool;

impl ListSpacesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_spaces";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all available Confluence spaces";

    const ENDPOINT: &'static str = "/space";

    /// Fixed page size; only the first page is returned.
    const PAGE_SIZE: u32 = 50;

    /// List the first page of spaces visible to the configured credentials.
    pub async fn execute(client: &ConfluenceClient) -> Result<SpacesOutput, ToolError> {
        info!("Listing spaces");

        let raw = client
            .get(
                Self::ENDPOINT,
                &[
                    ("limit", Some(Self::PAGE_SIZE.to_string())),
                    ("expand", Some("description".to_string())),
                ],
            )
            .await?;
        let response: PagedResponse<Space> = serde_json::from_value(raw)?;

        Ok(Self::project(response, client))
    }

    pub fn project(response: PagedResponse<Space>, client: &ConfluenceClient) -> SpacesOutput {
        let total = response.total();
        let spaces = response
            .into_results()
            .into_iter()
            .map(|space| SpaceInfo {
                description: space.plain_description().unwrap_or_default().to_string(),
                url: client.web_url(space.webui()),
                key: space.key.unwrap_or_default(),
                name: space.name.unwrap_or_default(),
                space_type: space.space_type.unwrap_or_default(),
            })
            .collect();

        SpacesOutput { spaces, total }
    }
}

#[async_trait::async_trait]
impl ToolHandler for ListSpacesTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn definition(&self) -> Tool {
        tool_definition::<ListSpacesParams>(Self::NAME, Self::DESCRIPTION)
    }

    async fn call(
        &self,
        arguments: JsonObject,
        client: &ConfluenceClient,
    ) -> Result<CallToolResult, ToolError> {
        // Unexpected keys are ignored.
        let _params: ListSpacesParams = parse_params(arguments)?;
        let output = Self::execute(client).await?;
        text_result(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::confluence::Credentials;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_spaces() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/api/space"))
            .and(query_param("limit", "50"))
            .and(query_param("expand", "description"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    {
                        "key": "ENG",
                        "name": "Engineering",
                        "type": "global",
                        "description": { "plain": { "value": "Engineering docs" } },
                        "_links": { "webui": "/display/ENG" }
                    },
                    {
                        "key": "~alice",
                        "name": "Alice",
                        "type": "personal",
                        "_links": { "webui": "/display/~alice" }
                    }
                ],
                "size": 2
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ConfluenceClient::new(&server.uri(), Credentials::None).unwrap();
        let output = ListSpacesTool::execute(&client).await.unwrap();

        assert_eq!(output.total, 2);
        assert_eq!(
            output.spaces[0],
            SpaceInfo {
                key: "ENG".to_string(),
                name: "Engineering".to_string(),
                space_type: "global".to_string(),
                description: "Engineering docs".to_string(),
                url: format!("{}/display/ENG", server.uri()),
            }
        );
        assert_eq!(output.spaces[1].description, "");
    }

    #[tokio::test]
    async fn test_call_ignores_extra_arguments() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = ConfluenceClient::new(&server.uri(), Credentials::None).unwrap();
        let arguments = json!({ "unused": true }).as_object().cloned().unwrap();
        let result = ListSpacesTool.call(arguments, &client).await.unwrap();
        assert_eq!(result.content.len(), 1);
    }

    #[test]
    fn test_project_empty_response() {
        let client = ConfluenceClient::new("https://wiki.example.com", Credentials::None).unwrap();
        let output = ListSpacesTool::project(PagedResponse::default(), &client);
        assert!(output.spaces.is_empty());
        assert_eq!(output.total, 0);
    }
}
