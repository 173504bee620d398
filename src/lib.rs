//! Toolbox Web Server Library
//!
//! This crate provides a small web application that serves a homepage
//! listing browser tools, with each tool implemented as its own HTML
//! form endpoint.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the web server
//! - **domains**: Business logic organized by bounded contexts
//!   - **home**: The homepage listing every registered tool
//!   - **tools**: The tool registry and the individual tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use toolbox_server::{core::Config, core::WebServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = WebServer::new(config);
//!     server.run().await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, WebServer};
