//! Page rendering helpers.
//!
//! Handlers render askama templates to a `String` and respond with
//! `Html`. A template that fails to render is an internal fault: the
//! cause is logged for the operator and the user gets a generic
//! in-page error, still with a 200 status.

use askama::Template;
use axum::response::Html;
use tracing::error;

/// Fallback body served when a template fails to render.
const RENDER_FALLBACK: &str =
    "<!DOCTYPE html><html><body><p>An unexpected error occurred.</p></body></html>";

/// Render a template into an HTML response.
pub fn render_page<T: Template>(page: T) -> Html<String> {
    match page.render() {
        Ok(body) => Html(body),
        Err(err) => {
            error!("Template rendering failed: {err}");
            Html(RENDER_FALLBACK.to_string())
        }
    }
}
