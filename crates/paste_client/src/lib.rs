//! Client for the pastebin actor backend
//!
//! Builds the `get_paste` / `new_paste` actor calls and hands them to a
//! [`PostTransport`]. Responses and transport errors are returned to the
//! caller exactly as the transport produced them.

pub mod client;
pub mod transport;

pub use client::*;
pub use transport::*;
