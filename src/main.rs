//! LOVD FAIR Data Point entry point.
//!
//! Initializes logging, loads the remaining configuration, builds the server and serves
//! it over HTTP.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use lovd_fdp::core::{Config, FdpServer, HttpTransport, LoggingConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging before the rest of the configuration is read
    dotenvy::dotenv().ok();
    init_logging(&LoggingConfig::from_env().level);

    // Load configuration from environment
    let config = Config::from_env();

    info!("Starting {} v{}", config.server.name, config.server.version);
    match &config.server.base_url {
        Some(base_url) => info!("Resource IRIs are minted under {}", base_url),
        None => info!("Resource IRIs follow each request's Host header"),
    }

    let server = FdpServer::new(config.clone())?;

    info!("Server initialized");

    HttpTransport::new(config.http).run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
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
        .with_writer(std::io::stderr)
        .init();
}
