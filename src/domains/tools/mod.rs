//! Tools domain module.
//!
//! This module handles everything tool-related: the registry that drives
//! the homepage listing and the individual tool implementations.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one directory per tool)
//! - `registry.rs` - Central tool registry: listing entries + route aggregation
//!
//! ## Adding a New Tool
//!
//! 1. Create a new directory in `definitions/` (e.g., `my_tool/`)
//! 2. Define `NAME`, `PATH`, `entry()`, and `routes()`
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs` (entry + routes)
//!
//! **No need to modify `core/server.rs`!** The router is assembled from
//! the registry.

pub mod definitions;
mod registry;

pub use registry::{ToolEntry, ToolRegistry};
