//! Configuration management for the pastebin client
//!
//! This crate loads the local, staging and production records from YAML and
//! resolves the one matching the process environment indicator.

pub mod loader;
pub mod resolver;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::*;
