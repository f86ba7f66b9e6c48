//! ShrimpTrack client data layer.
//!
//! UI views declare the resource they want via a [`QueryKey`]; the
//! [`DataLayer`] fetches from the mock API when the cached entry is absent
//! or stale, shares results across views, and deduplicates concurrent
//! fetches of the same key onto one in-flight request. Mutation helpers
//! conservatively invalidate related keys so dependent aggregates refresh.
//!
//! Everything here is explicitly constructed and dependency-injected; there
//! is no global cache instance. Construct one [`DataLayer`] at process start
//! and clone it (cheap, `Arc`-backed) wherever it is needed.
//!
//! # Example
//!
//! ```rust,ignore
//! let api = ApiClient::new("http://localhost:3000");
//! let data = DataLayer::new(api, CacheConfig::default());
//!
//! data.prefetch_dashboard().await?;
//! let orders = data.orders(PageQuery::default()).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cache;
pub mod error;
pub mod keys;
pub mod layer;
pub mod retry;

pub use api::ApiClient;
pub use cache::{CacheConfig, QueryCache, QueryValue};
pub use error::QueryError;
pub use keys::{KeyGroup, QueryKey};
pub use layer::DataLayer;
pub use retry::RetryPolicy;
