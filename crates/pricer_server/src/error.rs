//! HTTP error mapping
//!
//! Every engine failure is a `PricingError::InvalidInput`; it leaves the
//! service as `422 Unprocessable Entity` with the rejected field name so the
//! presentation layer can highlight the offending widget.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use pricer_core::types::PricingError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable error kind
    pub error: String,
    /// Rejected request field
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

/// Handler error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request rejected by validation
    #[error(transparent)]
    InvalidInput(#[from] PricingError),
}

impl ApiError {
    /// Rejects a sample count above the configured limit.
    pub fn too_many_points(requested: usize, max_points: usize) -> Self {
        ApiError::InvalidInput(PricingError::invalid_input(
            "points",
            format!(
                "at most {} points are allowed (got {})",
                max_points, requested
            ),
        ))
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::InvalidInput(err) => {
                tracing::warn!(field = %err.field(), reason = %err.reason(), "Rejected input");
                ErrorResponse {
                    error: "invalid_input".to_string(),
                    field: err.field().to_string(),
                    message: err.reason().to_string(),
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_input_maps_to_422() {
        let err = ApiError::from(PricingError::invalid_input(
            "volatility",
            "volatility must be non-negative (got -0.1)",
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.error, "invalid_input");
        assert_eq!(parsed.field, "volatility");
        assert!(parsed.message.starts_with("volatility must be non-negative"));
    }

    #[test]
    fn test_too_many_points() {
        let err = ApiError::too_many_points(20_000, 10_000);
        match err {
            ApiError::InvalidInput(inner) => {
                assert_eq!(inner.field(), "points");
                assert!(inner.reason().contains("10000"));
            }
        }
    }
}
