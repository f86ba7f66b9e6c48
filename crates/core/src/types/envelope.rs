//! The `{success, data|error}` response envelope shared by all endpoints.

use serde::{Deserialize, Serialize};

/// Wrapper shape used by every API response.
///
/// Success responses carry `{"success": true, "data": ...}`; failures carry
/// `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Wrap a payload in a success envelope.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Build a failure envelope with a human-readable message.
    #[must_use]
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Unwrap the envelope into the payload or the error message.
    ///
    /// A success envelope with no data (server bug) maps to a generic error
    /// string rather than panicking.
    ///
    /// # Errors
    ///
    /// Returns the envelope's error message when `success` is false.
    pub fn into_result(self) -> Result<T, String> {
        if self.success {
            self.data
                .ok_or_else(|| "success envelope with no data".to_string())
        } else {
            Err(self
                .error
                .unwrap_or_else(|| "unknown error".to_string()))
        }
    }
}
