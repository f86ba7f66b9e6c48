//! HTTP route handlers for the mock API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                   - Health/uptime report
//!
//! # Auth (mock)
//! POST /auth/login               - Demo credential login
//! POST /auth/logout              - Logout (ephemeral, no store)
//! GET  /auth/me                  - Current user from bearer token
//!
//! # Resources
//! GET  /customers                - Paginated customer list (?limit&offset)
//! GET  /customers/stats/summary  - Customer aggregates
//! GET  /orders                   - Paginated order list (?limit&offset)
//! GET  /orders/stats/summary     - Order aggregates
//! GET  /batches/stats/summary    - Hatchery batch summary
//! GET  /dashboard/stats          - Combined dashboard aggregates
//! ```
//!
//! Every success response is `{"success": true, "data": ...}`; every failure
//! is `{"success": false, "error": ...}` (401/500), except `/health` which
//! returns its report bare.

pub mod auth;
pub mod batches;
pub mod customers;
pub mod dashboard;
pub mod health;
pub mod orders;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(customers::index))
        .route("/stats/summary", get(customers::stats))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/stats/summary", get(orders::stats))
}

/// Create all routes for the mock API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .nest("/auth", auth_routes())
        .nest("/customers", customer_routes())
        .nest("/orders", order_routes())
        .route("/batches/stats/summary", get(batches::stats))
        .route("/dashboard/stats", get(dashboard::stats))
}
