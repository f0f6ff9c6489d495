//! Shared types for the pastebin client workspace
//!
//! This crate contains the wire envelopes, deployment environments and error
//! types used across the client and configuration crates.

pub mod environment;
pub mod error;
pub mod paste;

// Re-export commonly used types
pub use environment::{Environment, ENVIRONMENT_VAR};
pub use error::{ConfigError, PastebinError, Result};
pub use paste::*;
