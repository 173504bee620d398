//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the
//! toolbox server.

pub mod home;
pub mod tools;
