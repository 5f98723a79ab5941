//! src/net.rs
//!
//! Top-level `net` module: the backend HTTP client.

pub mod api;

pub use api::{ApiClient, FetchError};
