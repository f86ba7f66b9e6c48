//! HTTP client for the mock API.
//!
//! Thin reqwest wrapper that decodes the `{success, data|error}` envelope
//! into `Result<T, QueryError>`. No caching or retries here; both belong to
//! the layers above.

use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use shrimptrack_core::{
    ApiEnvelope, BatchStats, Customer, CustomerStats, DashboardStats, DemoUser, LoginResponse,
    Order, OrderStats, PageQuery, Paginated,
};

use crate::error::QueryError;

/// Client for the ShrimpTrack mock API.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

/// `GET /auth/me` payload shape.
#[derive(Debug, Deserialize)]
struct CurrentUserPayload {
    user: DemoUser,
}

/// `POST /auth/logout` response; flat, not enveloped.
#[derive(Debug, Deserialize)]
pub struct LogoutAck {
    pub success: bool,
    pub message: String,
}

impl ApiClient {
    /// Create a client for the API at `base_url` (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.into(),
            }),
        }
    }

    /// Raw health report (served bare, without the envelope).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decode fails.
    pub async fn health(&self) -> Result<serde_json::Value, QueryError> {
        let response = self
            .inner
            .client
            .get(self.url("/health"))
            .send()
            .await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| QueryError::Decode(e.to_string()))
    }

    /// Log in with a demo credential pair.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Api` with status 401 for any non-demo pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, QueryError> {
        let response = self
            .inner
            .client
            .post(self.url("/auth/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        decode_envelope(response).await
    }

    /// Log out. The server holds no token state; this only acknowledges.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decode fails.
    pub async fn logout(&self) -> Result<LogoutAck, QueryError> {
        let response = self
            .inner
            .client
            .post(self.url("/auth/logout"))
            .send()
            .await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| QueryError::Decode(e.to_string()))
    }

    /// Resolve the user behind a bearer token.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Api` with status 401 for unknown tokens.
    pub async fn me(&self, token: &str) -> Result<DemoUser, QueryError> {
        let response = self
            .inner
            .client
            .get(self.url("/auth/me"))
            .bearer_auth(token)
            .send()
            .await?;
        let payload: CurrentUserPayload = decode_envelope(response).await?;
        Ok(payload.user)
    }

    /// Paginated customer list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decode fails.
    pub async fn customers(&self, query: PageQuery) -> Result<Paginated<Customer>, QueryError> {
        self.get_paged("/customers", query).await
    }

    /// Customer aggregate stats.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decode fails.
    pub async fn customer_stats(&self) -> Result<CustomerStats, QueryError> {
        self.get_enveloped("/customers/stats/summary").await
    }

    /// Paginated order list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decode fails.
    pub async fn orders(&self, query: PageQuery) -> Result<Paginated<Order>, QueryError> {
        self.get_paged("/orders", query).await
    }

    /// Order aggregate stats.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decode fails.
    pub async fn order_stats(&self) -> Result<OrderStats, QueryError> {
        self.get_enveloped("/orders/stats/summary").await
    }

    /// Hatchery batch summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decode fails.
    pub async fn batch_stats(&self) -> Result<BatchStats, QueryError> {
        self.get_enveloped("/batches/stats/summary").await
    }

    /// Combined dashboard aggregates.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decode fails.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, QueryError> {
        self.get_enveloped("/dashboard/stats").await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    async fn get_enveloped<T: DeserializeOwned>(&self, path: &str) -> Result<T, QueryError> {
        let response = self.inner.client.get(self.url(path)).send().await?;
        decode_envelope(response).await
    }

    async fn get_paged<T: DeserializeOwned>(
        &self,
        path: &str,
        query: PageQuery,
    ) -> Result<Paginated<T>, QueryError> {
        let response = self
            .inner
            .client
            .get(self.url(path))
            .query(&[("limit", query.limit), ("offset", query.offset)])
            .send()
            .await?;
        decode_envelope(response).await
    }
}

/// Decode a response into the envelope's payload.
///
/// Non-success statuses map to `QueryError::Api` carrying the envelope's
/// error string when present (the retry policy keys off the status).
async fn decode_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, QueryError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&text)
            .ok()
            .and_then(|envelope| envelope.error)
            .unwrap_or_else(|| format!("HTTP {status}"));
        return Err(QueryError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let envelope: ApiEnvelope<T> = serde_json::from_str(&text).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %text.chars().take(500).collect::<String>(),
            "Failed to parse API response"
        );
        QueryError::Decode(e.to_string())
    })?;

    envelope.into_result().map_err(|message| QueryError::Api {
        status: status.as_u16(),
        message,
    })
}
