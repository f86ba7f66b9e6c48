//! Batch route handlers.

use axum::Json;

use shrimptrack_core::{ApiEnvelope, BatchStats};

use crate::data;

/// Hatchery batch summary (aggregate counts only).
pub async fn stats() -> Json<ApiEnvelope<BatchStats>> {
    Json(ApiEnvelope::ok(data::batch_stats()))
}
