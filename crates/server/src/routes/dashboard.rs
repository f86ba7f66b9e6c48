//! Dashboard route handlers.

use axum::Json;

use shrimptrack_core::{ApiEnvelope, DashboardStats};

use crate::data;

/// Combined dashboard aggregates.
pub async fn stats() -> Json<ApiEnvelope<DashboardStats>> {
    Json(ApiEnvelope::ok(data::dashboard_stats()))
}
