//! HTTP-facing error type.
//!
//! # Design
//! Every handler returns `Result<_, ApiError>`; `IntoResponse` turns each
//! variant into a status code and a `{"error": "..."}` body. Store failures
//! are logged here and never leak backend details to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was missing or empty.
    #[error("{0}")]
    Validation(String),

    #[error("Todo not found")]
    NotFound,

    /// The request body was not a JSON object of the expected shape.
    #[error("Invalid JSON body")]
    MalformedBody,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Store(err) => {
                error!(error = %err, "store operation failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_variants() {
        assert_eq!(
            ApiError::Validation("Title is required".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::MalformedBody.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Store(StoreError::Database(sqlx::Error::PoolClosed)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_are_client_facing() {
        assert_eq!(ApiError::NotFound.to_string(), "Todo not found");
        assert_eq!(
            ApiError::Validation("Title is required".into()).to_string(),
            "Title is required"
        );
    }

    #[tokio::test]
    async fn store_errors_hide_backend_details() {
        let response = ApiError::Store(StoreError::Database(sqlx::Error::PoolClosed)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Internal server error"}));
    }
}
