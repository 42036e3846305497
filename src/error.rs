use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Everything a request can fail with. The display strings double as the
/// `detail` field of the error body, so clients match on them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up")]
    AlreadySignedUp,

    #[error("Student is not registered for this activity")]
    NotRegistered,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::ActivityNotFound | ApiError::NotRegistered => StatusCode::NOT_FOUND,
            ApiError::AlreadySignedUp => StatusCode::BAD_REQUEST,
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
