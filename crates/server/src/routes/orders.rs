//! Order route handlers.

use axum::{Json, extract::Query};

use shrimptrack_core::{ApiEnvelope, Order, OrderStats, PageQuery, Paginated};

use crate::data;

/// Paginated order list, newest first.
pub async fn index(Query(query): Query<PageQuery>) -> Json<ApiEnvelope<Paginated<Order>>> {
    Json(ApiEnvelope::ok(Paginated::slice(data::orders::all(), query)))
}

/// Order aggregate stats.
pub async fn stats() -> Json<ApiEnvelope<OrderStats>> {
    Json(ApiEnvelope::ok(data::order_stats()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_pages_envelope() {
        let response = index(Query(PageQuery {
            limit: 5,
            offset: 0,
        }))
        .await;
        let page = response.0.data.expect("payload");
        assert_eq!(page.pages, page.total.div_ceil(5));
        assert_eq!(page.items.len(), 5.min(page.total));
    }
}
