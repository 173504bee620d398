//! BMI calculator tool definition.
//!
//! A browser tool that computes the Body Mass Index from a weight (kg) and
//! a height (cm) submitted through an HTML form, and classifies the result.
//!
//! - `engine.rs` - pure computation and classification
//! - `handlers.rs` - form parsing, HTTP handlers, and the page template

pub mod engine;
pub mod handlers;

use axum::{Router, routing::get};

use crate::core::server::AppState;
use crate::domains::tools::ToolEntry;

/// BMI calculator tool.
pub struct BmiTool;

impl BmiTool {
    /// Display name shown on the homepage listing.
    pub const NAME: &'static str = "BMI Calculator";

    /// URL path the tool is served at.
    pub const PATH: &'static str = "/bmi-calculator/";

    /// The homepage listing entry for this tool.
    pub fn entry() -> ToolEntry {
        ToolEntry {
            name: Self::NAME,
            path: Self::PATH,
        }
    }

    /// Routes for this tool: GET renders the empty form, POST evaluates
    /// a submission and re-renders the form.
    pub fn routes() -> Router<AppState> {
        Router::new().route(
            Self::PATH,
            get(handlers::show_form).post(handlers::handle_submission),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_matches_constants() {
        let entry = BmiTool::entry();
        assert_eq!(entry.name, "BMI Calculator");
        assert_eq!(entry.path, "/bmi-calculator/");
    }
}
