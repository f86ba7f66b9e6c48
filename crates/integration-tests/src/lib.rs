//! Integration tests for ShrimpTrack.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the mock API
//! cargo run -p shrimptrack-server
//!
//! # Run integration tests
//! cargo test -p shrimptrack-integration-tests -- --ignored
//! ```
//!
//! The base URL defaults to `http://localhost:3000` and can be overridden
//! with `SHRIMPTRACK_BASE_URL`.
//!
//! # Test Categories
//!
//! - `server_api` - Endpoint shapes, pagination, and the response envelope
//! - `server_auth` - Demo login flow and token resolution
//! - `client_layer` - The typed client and cache against a live server

/// Base URL for the mock API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("SHRIMPTRACK_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}
