//! API Layer
//!
//! HTTP access to the entries API and the writing assistant.

pub mod client;

pub use client::{resolve_endpoint, BrowserStore};
