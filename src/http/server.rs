//! HTTP server startup logic.
//!
//! Binds the configured listen address and serves the router until a
//! shutdown signal arrives. The only failure modes are at startup: an
//! unparseable listen address or a TCP bind failure (port already in use),
//! both fatal with a diagnostic naming the address.

use std::net::SocketAddr;

use axum::Router;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address {addr}: {source}")]
    Addr {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

/// Start the HTTP server on the configured address.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr_str = format!("{}:{}", config.http.host, config.http.port);
    let addr: SocketAddr = addr_str
        .parse()
        .map_err(|source| ServerError::Addr { addr: addr_str, source })?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "Starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Server stopped");
    Ok(())
}
