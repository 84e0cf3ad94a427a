//! hello-pipeline: a minimal web service for deployment pipeline demos.
//!
//! This is the application entry point. It loads configuration from a TOML
//! file, initializes tracing, sets up the Axum router with the greeting and
//! health-check routes, and starts the HTTP server.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_pipeline::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER, DEV_LOG_FILTER};
use hello_pipeline::http::start_server;
use hello_pipeline::routes::create_router;

/// hello-pipeline: a minimal web service for deployment pipeline demos
#[derive(Parser, Debug)]
#[command(name = "hello-pipeline", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "hello_pipeline=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration; a missing file means built-in defaults
    let have_config_file = Path::new(&args.config).exists();
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default.
    // Dev mode raises the default filter to debug level.
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| {
            if config.dev_mode {
                DEV_LOG_FILTER.to_string()
            } else {
                DEFAULT_LOG_FILTER.to_string()
            }
        });

    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.format.as_str() {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        _ => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    if have_config_file {
        tracing::info!(path = %args.config, "Loaded configuration");
    } else {
        tracing::info!("No configuration file found, using built-in defaults");
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        dev_mode = config.dev_mode,
        "HTTP server configured"
    );

    if config.dev_mode {
        tracing::warn!(
            "Dev mode enabled - verbose diagnostics active, disable for production deployments"
        );
    }

    // Create router
    let app = create_router();

    // Start server
    start_server(app, &config).await?;

    Ok(())
}
