// ABOUTME: The API error taxonomy and its mapping onto HTTP status codes.
// ABOUTME: Store failures stay opaque to clients; auth failures never say which credential was wrong.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use caterd_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Login failed. Unknown username and wrong password share this variant
    /// so the response cannot be used for username enumeration.
    #[error("incorrect username or password")]
    BadCredentials,

    #[error("invalid authentication credentials")]
    InvalidToken,

    #[error("menu item not found")]
    MenuItemNotFound,

    #[error("token signing failed")]
    TokenSigning,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadCredentials | ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::MenuItemNotFound => StatusCode::NOT_FOUND,
            ApiError::TokenSigning | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            ApiError::Store(err) => {
                tracing::error!("store failure: {err}");
                "internal server error".to_string()
            }
            ApiError::TokenSigning => {
                tracing::error!("token signing failed");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
