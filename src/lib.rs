//! hello-pipeline - a minimal web service for deployment pipeline demos.
//!
//! Exposes a greeting page at `/` and a health-check endpoint at `/health`.
//! Handlers are stateless; the router, configuration, and server startup are
//! exposed as a library so integration tests can drive the full HTTP surface
//! in-process.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
