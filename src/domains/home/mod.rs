//! Home domain module - the toolbox homepage.
//!
//! Serves the landing page listing every registered tool with a link to
//! its endpoint.

use askama::Template;
use axum::{Router, extract::State, response::Html, routing::get};

use crate::core::render::render_page;
use crate::core::server::AppState;
use crate::domains::tools::ToolEntry;

/// The home page template.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    /// The tools to list, in registration order.
    pub tools: &'a [ToolEntry],
}

/// GET / - the homepage with the tool listing.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    render_page(IndexTemplate {
        tools: state.registry.entries(),
    })
}

/// Routes for the home feature slice.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_template_lists_tools() {
        let tools = [ToolEntry {
            name: "BMI Calculator",
            path: "/bmi-calculator/",
        }];
        let body = IndexTemplate { tools: &tools }.render().unwrap();
        assert!(body.contains("BMI Calculator"));
        assert!(body.contains(r#"href="/bmi-calculator/""#));
    }

    #[test]
    fn test_index_template_empty_registry() {
        let body = IndexTemplate { tools: &[] }.render().unwrap();
        assert!(body.contains("Available Tools"));
        assert!(!body.contains("<li>"));
    }
}
