//! Integration tests for the typed client and cache against a live server.
//!
//! These tests require the server running (cargo run -p shrimptrack-server).
//!
//! Run with: cargo test -p shrimptrack-integration-tests -- --ignored

use shrimptrack_client::{ApiClient, CacheConfig, DataLayer, QueryError};
use shrimptrack_core::PageQuery;

use shrimptrack_integration_tests::base_url;

fn layer() -> DataLayer {
    DataLayer::new(ApiClient::new(base_url()), CacheConfig::default())
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_typed_accessors_decode() {
    let layer = layer();

    let customers = layer.customers(PageQuery::default()).await.expect("customers");
    assert_eq!(customers.total, 10);

    let orders = layer.orders(PageQuery::default()).await.expect("orders");
    assert_eq!(orders.total, 12);

    let stats = layer.order_stats().await.expect("order stats");
    assert_eq!(stats.total_orders, 12);
    assert_eq!(stats.cancelled, 2);
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_login_round_trip() {
    let layer = layer();

    let response = layer
        .login("demo@shrimptrack.io", "demo123")
        .await
        .expect("login");

    let user = layer
        .current_user(&response.tokens.access_token)
        .await
        .expect("current user");
    assert_eq!(user.email, "demo@shrimptrack.io");

    layer.logout().await.expect("logout");
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_bad_login_is_api_error_not_retried() {
    let layer = layer();

    let err = layer
        .login("demo@shrimptrack.io", "wrong")
        .await
        .expect_err("login must fail");
    match err {
        QueryError::Api { status, .. } => assert_eq!(status, 401),
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_prefetch_then_reads_hit_cache() {
    let layer = layer();

    layer.prefetch_dashboard().await.expect("prefetch");

    // Warmed by the prefetch; these resolve from the cache
    layer.order_stats().await.expect("order stats");
    layer.customer_stats().await.expect("customer stats");
    layer.batch_stats().await.expect("batch stats");

    layer.invalidate_stats();
    layer.order_stats().await.expect("refetch after invalidation");
}
