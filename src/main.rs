//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration and serves the Confluence tools
//! over stdio.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use confluence_mcp_server::core::{Config, McpServer, StdioTransport};
use confluence_mcp_server::domains::confluence::Credentials;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("Confluence base URL: {}", config.confluence.base_url);

    if config.confluence.credentials == Credentials::None {
        warn!(
            "No Confluence credentials configured. Set CONFLUENCE_TOKEN \
             (and CONFLUENCE_USERNAME for basic auth) to access private spaces."
        );
    } else {
        info!(
            "Confluence authentication: {}",
            config.confluence.credentials.mode()
        );
    }

    let server = McpServer::new(config)?;

    info!("Server initialized");

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout is reserved for MCP messages.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}
