//! HTTP server module.
//!
//! The server includes:
//! - Explicit listener bind with typed startup errors
//! - Graceful shutdown on SIGTERM/SIGINT

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
