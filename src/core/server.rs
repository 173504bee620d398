//! Web server implementation and lifecycle management.
//!
//! This module assembles the application router from the domain slices,
//! binds the listener, and serves requests.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one directory per
//! tool. Each tool defines its listing entry (display name + path) and its
//! own routes. The `ToolRegistry` aggregates both, so adding a new tool does
//! NOT require modifying this file.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::config::Config;
use super::error::{Error, Result};
use crate::domains::{home, tools::ToolRegistry};

/// Application state shared across HTTP handlers.
///
/// Built once at startup and immutable afterwards; requests only read it.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<Config>,

    /// Registry of the available tools, shown on the homepage.
    pub registry: Arc<ToolRegistry>,
}

/// The main web server.
///
/// Owns the configuration and the tool registry, and exposes the assembled
/// axum router both for serving and for in-process testing.
pub struct WebServer {
    config: Config,
    registry: Arc<ToolRegistry>,
}

impl WebServer {
    /// Create a new web server with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registry: Arc::new(ToolRegistry::new()),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Build the application router with all routes and middleware.
    pub fn router(&self) -> Router {
        let state = AppState {
            config: Arc::new(self.config.clone()),
            registry: self.registry.clone(),
        };

        Router::new()
            .merge(home::routes())
            .merge(self.registry.routes())
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Run the server until shutdown.
    ///
    /// Binds the configured address and serves requests.
    pub async fn run(self) -> Result<()> {
        let addr = self.config.http.address();
        let app = self.router();

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::bind(&addr, e))?;

        info!("Ready - listening on http://{}", addr);
        info!("  → Home:  GET /");
        for entry in self.registry.entries() {
            info!("  → Tool:  {} at {}", entry.name, entry.path);
        }

        axum::serve(listener, app).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_name() {
        let server = WebServer::new(Config::default());
        assert_eq!(server.name(), "toolbox-server");
    }

    #[test]
    fn test_router_builds() {
        let server = WebServer::new(Config::default());
        let _app = server.router();
    }
}
