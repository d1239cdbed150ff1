//! Upstream authentication modes.
//!
//! Credentials are resolved once at startup and handed to the
//! [`ConfluenceClient`](super::ConfluenceClient), which applies them to every
//! outbound request.

use reqwest::RequestBuilder;

/// Credentials used to authenticate against the Confluence REST API.
///
/// Exactly one mode is active for a given value, so a request never carries
/// both Basic and Bearer authorization.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Credentials {
    /// Anonymous access, no `Authorization` header.
    #[default]
    None,

    /// HTTP Basic authentication with the API token used as password.
    Basic { username: String, password: String },

    /// `Authorization: Bearer <token>` (personal access token).
    Bearer { token: String },
}

impl Credentials {
    /// Select the auth mode from an optional username and token.
    ///
    /// Username and token together select Basic, a token alone selects
    /// Bearer, anything else is anonymous. Empty strings count as absent.
    pub fn from_parts(username: Option<String>, token: Option<String>) -> Self {
        let username = username.filter(|u| !u.is_empty());
        let token = token.filter(|t| !t.is_empty());

        match (username, token) {
            (Some(username), Some(password)) => Self::Basic { username, password },
            (None, Some(token)) => Self::Bearer { token },
            _ => Self::None,
        }
    }

    /// Read `CONFLUENCE_USERNAME` and `CONFLUENCE_TOKEN` from the environment.
    pub fn from_env() -> Self {
        Self::from_parts(
            std::env::var("CONFLUENCE_USERNAME").ok(),
            std::env::var("CONFLUENCE_TOKEN").ok(),
        )
    }

    /// Short name of the active mode, safe to log.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic { .. } => "basic",
            Self::Bearer { .. } => "bearer",
        }
    }

    /// Attach the matching authorization to an outgoing request.
    pub(crate) fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::None => request,
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
            Self::Bearer { token } => request.bearer_auth(token),
        }
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"[REDACTED]")
                .finish(),
        }
    }
}
