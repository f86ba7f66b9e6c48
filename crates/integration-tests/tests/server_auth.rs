//! Integration tests for the demo login flow.
//!
//! These tests require the server running (cargo run -p shrimptrack-server).
//!
//! Run with: cargo test -p shrimptrack-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use shrimptrack_integration_tests::base_url;

async fn login(email: &str, password: &str) -> (StatusCode, Value) {
    let resp = Client::new()
        .post(format!("{}/auth/login", base_url()))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("request failed");
    let status = resp.status();
    let body: Value = resp.json().await.expect("response is not JSON");
    (status, body)
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_demo_accounts_log_in() {
    for (email, password, role) in [
        ("admin@shrimptrack.io", "admin123", "admin"),
        ("manager@shrimptrack.io", "manager123", "manager"),
        ("demo@shrimptrack.io", "demo123", "editor"),
    ] {
        let (status, body) = login(email, password).await;
        assert_eq!(status, StatusCode::OK, "{email}");
        assert_eq!(body["success"], Value::Bool(true));

        let data = &body["data"];
        assert_eq!(data["user"]["email"], email);
        assert_eq!(data["user"]["role"], role);
        assert!(data["tokens"]["access_token"].as_str().is_some());
        assert!(data["tokens"]["refresh_token"].as_str().is_some());
        assert_eq!(data["tokens"]["expires_in"], 3600);
    }
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_wrong_password_yields_401_with_hint() {
    let (status, body) = login("admin@shrimptrack.io", "wrong").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], Value::Bool(false));
    let error = body["error"].as_str().expect("error message");
    // The hint lists the valid demo pairs
    assert!(error.contains("admin@shrimptrack.io"));
}

// ============================================================================
// Current user
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_me_resolves_fresh_token() {
    let (_, body) = login("manager@shrimptrack.io", "manager123").await;
    let token = body["data"]["tokens"]["access_token"]
        .as_str()
        .expect("access token")
        .to_string();

    let resp = Client::new()
        .get(format!("{}/auth/me", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("response is not JSON");
    assert_eq!(body["data"]["user"]["email"], "manager@shrimptrack.io");
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_me_rejects_unknown_token() {
    let resp = Client::new()
        .get(format!("{}/auth/me", base_url()))
        .bearer_auth("st-99-deadbeef")
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_me_rejects_missing_header() {
    let resp = Client::new()
        .get(format!("{}/auth/me", base_url()))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Logout
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_logout_acknowledges() {
    let resp = Client::new()
        .post(format!("{}/auth/logout", base_url()))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("response is not JSON");
    // Flat acknowledgement, not the data envelope
    assert_eq!(body["success"], Value::Bool(true));
    assert!(body["message"].as_str().is_some());
}
