//! Confluence REST client.
//!
//! The single network-call site of the server: every tool builds its query
//! and hands it to [`ConfluenceClient::get`].

use reqwest::{
    Client,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde_json::Value;
use tracing::{debug, error, instrument};
use url::Url;

use super::{ConfluenceError, Credentials};

/// Query parameters for an upstream request. `None` values are omitted.
pub type QueryParams<'a> = [(&'a str, Option<String>)];

/// Authenticated client for `{base_url}/rest/api`.
#[derive(Debug, Clone)]
pub struct ConfluenceClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
}

impl ConfluenceClient {
    /// Create a client for the given base URL.
    ///
    /// A trailing `/` on the base URL is ignored.
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self, ConfluenceError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ConfluenceError::Client)?;

        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute browser URL for a `_links.webui` path.
    pub fn web_url(&self, webui: Option<&str>) -> String {
        format!("{}{}", self.base_url, webui.unwrap_or_default())
    }

    /// Full REST URL for an endpoint such as `/content/search`.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, ConfluenceError> {
        Ok(Url::parse(&format!("{}/rest/api{}", self.base_url, endpoint))?)
    }

    /// Issue one GET request and return the parsed JSON body.
    ///
    /// Non-2xx responses fail with [`ConfluenceError::HttpStatus`]. The
    /// response body of a failed request is logged, never returned.
    #[instrument(skip(self, query))]
    pub async fn get(&self, endpoint: &str, query: &QueryParams<'_>) -> Result<Value, ConfluenceError> {
        let url = self.endpoint_url(endpoint)?;
        let params: Vec<(&str, &str)> = query
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (*key, v)))
            .collect();

        debug!(url = %url, auth = self.credentials.mode(), "GET request");

        let request = self.credentials.apply(self.http.get(url).query(&params));
        let response = request.send().await.map_err(|e| {
            error!("Request failed: {}", e);
            ConfluenceError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "Request failed");
            return Err(ConfluenceError::http_status(status));
        }

        response.json::<Value>().await.map_err(ConfluenceError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer, credentials: Credentials) -> ConfluenceClient {
        ConfluenceClient::new(&server.uri(), credentials).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ConfluenceClient::new("https://wiki.example.com/", Credentials::None).unwrap();
        assert_eq!(client.base_url(), "https://wiki.example.com");
        assert_eq!(
            client.endpoint_url("/space").unwrap().as_str(),
            "https://wiki.example.com/rest/api/space"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = ConfluenceClient::new("not a url", Credentials::None);
        assert!(matches!(result, Err(ConfluenceError::InvalidUrl(_))));
    }

    #[test]
    fn test_web_url() {
        let client = ConfluenceClient::new("https://wiki.example.com", Credentials::None).unwrap();
        assert_eq!(
            client.web_url(Some("/display/ENG/Home")),
            "https://wiki.example.com/display/ENG/Home"
        );
        assert_eq!(client.web_url(None), "https://wiki.example.com");
    }

    #[tokio::test]
    async fn test_get_sends_fixed_headers_and_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/api/space"))
            .and(query_param("limit", "50"))
            .and(query_param("expand", "description"))
            .and(header("Accept", "application/json"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "size": 0 })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server, Credentials::None);
        let body = assert_ok!(
            client
                .get(
                    "/space",
                    &[
                        ("limit", Some("50".to_string())),
                        ("expand", Some("description".to_string())),
                    ],
                )
                .await
        );
        assert_eq!(body, json!({ "size": 0 }));
    }

    #[tokio::test]
    async fn test_absent_query_values_are_omitted() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/api/content"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = client(&server, Credentials::None);
        assert_ok!(
            client
                .get(
                    "/content",
                    &[("spaceKey", Some("ENG".to_string())), ("limit", None)],
                )
                .await
        );

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.query(), Some("spaceKey=ENG"));
    }

    #[tokio::test]
    async fn test_basic_auth_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(header("Authorization", "Basic dXNlcjpzZWNyZXQ="))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let credentials =
            Credentials::from_parts(Some("user".to_string()), Some("secret".to_string()));
        assert_ok!(client(&server, credentials).get("/space", &[]).await);
    }

    #[tokio::test]
    async fn test_bearer_auth_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(header("Authorization", "Bearer pat-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let credentials = Credentials::from_parts(None, Some("pat-123".to_string()));
        assert_ok!(client(&server, credentials).get("/space", &[]).await);
    }

    #[tokio::test]
    async fn test_anonymous_sends_no_authorization() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        assert_ok!(client(&server, Credentials::None).get("/space", &[]).await);

        let requests = server.received_requests().await.unwrap();
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_typed_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/api/content/999"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({ "message": "No content found with id 999" })),
            )
            .mount(&server)
            .await;

        let err = assert_err!(client(&server, Credentials::None).get("/content/999", &[]).await);
        assert!(matches!(err, ConfluenceError::HttpStatus { status: 404, .. }));
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("Not Found"));
        assert!(!message.contains("No content found"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&server)
            .await;

        let err = assert_err!(client(&server, Credentials::None).get("/space", &[]).await);
        assert!(matches!(err, ConfluenceError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Nothing listens on port 1.
        let client = ConfluenceClient::new("http://127.0.0.1:1", Credentials::None).unwrap();
        let err = assert_err!(client.get("/space", &[]).await);
        assert!(matches!(err, ConfluenceError::Network(_)));
        assert_eq!(err.status(), None);
    }
}
