//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use queryfilter_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// An [`AppError`] returned from a handler.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Machine-readable code for an error kind.
    pub fn code(kind: ErrorKind) -> &'static str {
        match kind {
            ErrorKind::Database => "DATABASE_ERROR",
            ErrorKind::Configuration => "CONFIGURATION_ERROR",
            ErrorKind::Serialization => "SERIALIZATION_ERROR",
            ErrorKind::Internal => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        // Request-side problems never reach here; every kind is a server fault.
        tracing::error!(
            kind = %err.kind,
            error = %err.message,
            source = ?err.source,
            "Internal server error"
        );

        let body = ApiErrorResponse {
            error: Self::code(err.kind).to_string(),
            message: "Internal server error".to_string(),
            details: None,
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_codes_per_kind() {
        assert_eq!(ApiError::code(ErrorKind::Database), "DATABASE_ERROR");
        assert_eq!(ApiError::code(ErrorKind::Configuration), "CONFIGURATION_ERROR");
    }

    #[tokio::test]
    async fn test_message_is_not_echoed() {
        let response = ApiError::from(AppError::configuration("duplicate exposed name 'email'"))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ApiErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.error, "CONFIGURATION_ERROR");
        assert_eq!(body.message, "Internal server error");
    }
}
