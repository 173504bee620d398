//! Core infrastructure module.
//!
//! Contains the foundational components of the web server:
//! configuration, error handling, and the server itself.

pub mod config;
pub mod error;
pub mod render;
pub mod server;

pub use config::Config;
pub use error::{Error, Result};
pub use server::{AppState, WebServer};
