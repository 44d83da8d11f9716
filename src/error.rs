//! Error types for the profile service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Profile Error Enum ==
/// Unified error type for the profile service.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// No stored record for this ENS name. Internal: absence triggers synthesis.
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// ENS name is unusable as a key
    #[error("Invalid ENS name: {0}")]
    InvalidName(String),

    /// Store could not be read
    #[error("Store read failed: {0}")]
    StoreReadFailed(String),

    /// Store write was rolled back
    #[error("Store write failed: {0}")]
    StoreWriteFailed(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProfileError::RecordNotFound(_) => StatusCode::NOT_FOUND,
            ProfileError::InvalidName(_) => StatusCode::BAD_REQUEST,
            ProfileError::StoreReadFailed(_) | ProfileError::StoreWriteFailed(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ProfileError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the profile service.
pub type Result<T> = std::result::Result<T, ProfileError>;
