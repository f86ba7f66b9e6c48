//! Mock auth route handlers.
//!
//! Login checks the literal demo credential pairs and manufactures ephemeral
//! tokens; `/auth/me` maps a bearer token back to a demo user by the
//! `-<id>-` substring the token embeds. No token is stored or validated
//! beyond that. Placeholder, not a reference auth scheme.

use axum::{Json, http::HeaderMap};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shrimptrack_core::{ApiEnvelope, AuthTokens, DemoUser, LoginResponse};

use crate::data::users;
use crate::error::{AppError, Result};

/// Access token lifetime reported to the client, in seconds.
const TOKEN_TTL_SECS: u64 = 3600;

/// `POST /auth/login` request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `GET /auth/me` payload.
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user: DemoUser,
}

/// `POST /auth/logout` response; flat, not enveloped data.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Log in with one of the demo credential pairs.
pub async fn login(Json(body): Json<LoginRequest>) -> Result<Json<ApiEnvelope<LoginResponse>>> {
    let user = users::authenticate(&body.email, &body.password)
        .ok_or_else(|| AppError::Unauthorized(users::login_hint()))?;

    tracing::info!(email = %user.email, role = %user.role, "demo login");

    Ok(Json(ApiEnvelope::ok(LoginResponse {
        user: user.clone(),
        tokens: mint_tokens(user),
    })))
}

/// Log out. There is no token store, so this only acknowledges.
pub async fn logout() -> Json<LogoutResponse> {
    Json(LogoutResponse {
        success: true,
        message: "Logged out",
    })
}

/// Resolve the current user from the `Authorization: Bearer <token>` header.
pub async fn me(headers: HeaderMap) -> Result<Json<ApiEnvelope<CurrentUserResponse>>> {
    let token = bearer_token(&headers)
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".to_string()))?;

    let user = users::user_for_token(token)
        .ok_or_else(|| AppError::Unauthorized("Invalid or expired token".to_string()))?;

    Ok(Json(ApiEnvelope::ok(CurrentUserResponse {
        user: user.clone(),
    })))
}

/// Manufacture an ephemeral token pair embedding the user id, so that
/// `/auth/me` can map the token back without a store.
fn mint_tokens(user: &DemoUser) -> AuthTokens {
    AuthTokens {
        access_token: format!("st-{}-{}", user.id, Uuid::new_v4().simple()),
        refresh_token: format!("rt-{}-{}", user.id, Uuid::new_v4().simple()),
        expires_in: TOKEN_TTL_SECS,
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use shrimptrack_core::UserRole;

    #[test]
    fn test_minted_token_maps_back_to_its_user() {
        for account in users::accounts() {
            let tokens = mint_tokens(&account.user);
            let resolved = users::user_for_token(&tokens.access_token).expect("resolvable");
            assert_eq!(resolved.id, account.user.id);
        }
    }

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_none());

        headers.insert(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_static("Bearer st-1-abc"),
        );
        assert_eq!(bearer_token(&headers), Some("st-1-abc"));

        headers.insert(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwdw=="),
        );
        assert!(bearer_token(&headers).is_none());
    }

    #[tokio::test]
    async fn test_login_rejects_unknown_pair() {
        let result = login(Json(LoginRequest {
            email: "admin@shrimptrack.io".to_string(),
            password: "not-the-password".to_string(),
        }))
        .await;

        match result {
            Err(AppError::Unauthorized(hint)) => {
                assert!(hint.contains("demo@shrimptrack.io"));
            }
            _ => panic!("expected unauthorized"),
        }
    }

    #[tokio::test]
    async fn test_login_accepts_demo_pair() {
        let response = login(Json(LoginRequest {
            email: "manager@shrimptrack.io".to_string(),
            password: "manager123".to_string(),
        }))
        .await
        .expect("login succeeds");

        let data = response.0.data.expect("payload");
        assert_eq!(data.user.role, UserRole::Manager);
        assert!(data.tokens.access_token.contains("-2-"));
    }

    #[tokio::test]
    async fn test_me_maps_token_substrings() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_static("Bearer anything-3-goes"),
        );
        let response = me(headers).await.expect("resolves");
        let data = response.0.data.expect("payload");
        assert_eq!(data.user.role, UserRole::Editor);
    }

    #[tokio::test]
    async fn test_me_rejects_unknown_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_static("Bearer st-9-unknown"),
        );
        assert!(matches!(
            me(headers).await,
            Err(AppError::Unauthorized(_))
        ));
    }
}
