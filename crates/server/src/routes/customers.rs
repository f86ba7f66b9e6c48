//! Customer route handlers.

use axum::{Json, extract::Query};

use shrimptrack_core::{ApiEnvelope, Customer, CustomerStats, PageQuery, Paginated};

use crate::data;

/// Paginated customer list.
pub async fn index(Query(query): Query<PageQuery>) -> Json<ApiEnvelope<Paginated<Customer>>> {
    Json(ApiEnvelope::ok(Paginated::slice(
        data::customers::all(),
        query,
    )))
}

/// Customer aggregate stats.
pub async fn stats() -> Json<ApiEnvelope<CustomerStats>> {
    Json(ApiEnvelope::ok(data::customer_stats()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_defaults_to_first_ten() {
        let response = index(Query(PageQuery::default())).await;
        let page = response.0.data.expect("payload");
        assert_eq!(page.limit, 10);
        assert_eq!(page.offset, 0);
        assert_eq!(page.items.len(), 10.min(page.total));
    }

    #[tokio::test]
    async fn test_index_respects_offset() {
        let all_len = data::customers::all().len();
        let response = index(Query(PageQuery {
            limit: 4,
            offset: all_len - 2,
        }))
        .await;
        let page = response.0.data.expect("payload");
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, all_len);
    }
}
