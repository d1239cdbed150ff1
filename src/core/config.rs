//! Configuration management for the MCP server.
//!
//! Configuration is read once at startup from environment variables (and an
//! optional `.env` file), then shared immutably.

use url::Url;

use super::error::{Error, Result};
use crate::domains::confluence::Credentials;

/// Confluence instance used when `CONFLUENCE_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://projectwiki.ssgadm.com";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Upstream Confluence instance and credentials.
    pub confluence: ConfluenceConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Upstream Confluence configuration.
#[derive(Debug, Clone)]
pub struct ConfluenceConfig {
    /// Base URL of the instance, without the `/rest/api` suffix.
    pub base_url: String,

    /// Resolved authentication mode.
    pub credentials: Credentials,
}

impl Default for ConfluenceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials::None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "confluence-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            confluence: ConfluenceConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `CONFLUENCE_BASE_URL`, `CONFLUENCE_USERNAME`, `CONFLUENCE_TOKEN`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("CONFLUENCE_BASE_URL") {
            if !base_url.trim().is_empty() {
                config.confluence.base_url = base_url.trim().trim_end_matches('/').to_string();
            }
        }

        config.confluence.credentials = Credentials::from_env();

        config.validate()?;
        Ok(config)
    }

    /// Check that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.confluence.base_url).map_err(|e| {
            Error::config(format!(
                "invalid CONFLUENCE_BASE_URL {:?}: {}",
                self.confluence.base_url, e
            ))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(Error::config(format!(
                "CONFLUENCE_BASE_URL must use http or https, got {:?}",
                scheme
            ))),
        }
    }
}
