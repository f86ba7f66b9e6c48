//! Demo dashboard users and the ephemeral token shape.
//!
//! Authentication here is a mock: three fixed demo accounts, tokens that are
//! matched by substring. This is a placeholder, not a reference auth scheme.

use serde::{Deserialize, Serialize};

use super::id::UserId;
use super::status::UserRole;

/// A fixed demo dashboard user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoUser {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

/// Ephemeral token pair manufactured at login. No backing store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
}

/// Payload of a successful `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: DemoUser,
    pub tokens: AuthTokens,
}
