//! ShrimpTrack server library.
//!
//! This crate provides the mock API as a library, allowing it to be tested
//! and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod data;
pub mod error;
pub mod routes;
pub mod state;
