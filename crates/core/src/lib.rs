//! ShrimpTrack Core - Shared types library.
//!
//! This crate provides common types used across all ShrimpTrack components:
//! - `server` - Mock REST API consumed by the dashboard SPA
//! - `client` - Client data layer (query cache, key registry, prefetch)
//! - `cli` - Command-line tools for database seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, status enums, the response envelope, pagination,
//!   and the entity records (orders, customers, stats)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
