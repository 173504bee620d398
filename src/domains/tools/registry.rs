//! Tool Registry - central registration point for all tools.
//!
//! This module provides:
//! - The listing entries shown on the homepage
//! - Route aggregation for every tool's endpoints
//!
//! The registry is built once at startup and never mutated afterwards.

use axum::Router;

use crate::core::server::AppState;

use super::definitions::bmi::BmiTool;

// ============================================================================
// Tool Listing Entry
// ============================================================================

/// A single entry on the homepage tool listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolEntry {
    /// Display name of the tool.
    pub name: &'static str,

    /// URL path the tool is served at.
    pub path: &'static str,
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct is the single source of truth for which tools exist: the
/// homepage renders `entries()` and the server merges `routes()`.
pub struct ToolRegistry {
    entries: Vec<ToolEntry>,
}

impl ToolRegistry {
    /// Create a new tool registry with every tool registered.
    pub fn new() -> Self {
        Self {
            entries: vec![BmiTool::entry()],
        }
    }

    /// The listing entries, in registration order.
    pub fn entries(&self) -> &[ToolEntry] {
        &self.entries
    }

    /// Aggregate the routes of every registered tool.
    pub fn routes(&self) -> Router<AppState> {
        Router::new().merge(BmiTool::routes())
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
