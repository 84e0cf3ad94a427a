//! Handler for the greeting page.
//!
//! Serves the fixed deployment greeting with the published service version.
//! The body is assembled at compile time, so every response is byte-identical.

use axum::response::Html;
use tracing::instrument;

use crate::config::GREETING_HTML;

/// Greeting page handler.
#[instrument(name = "home::index")]
pub async fn index() -> Html<&'static str> {
    Html(GREETING_HTML)
}
