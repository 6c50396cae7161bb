//! API error taxonomy and its mapping onto the wire envelope.
//!
//! Every failure a handler can produce is one of these variants. The wire
//! contract collapses everything except a missing course onto a generic 500
//! with the underlying message attached for diagnostics.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::protocol::ErrorOut;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A required field is missing or out of range, or a required collection
    /// is empty.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No course document exists for the requested `courseId`.
    #[error("course '{0}' not found")]
    NotFound(String),

    /// Create was called with a `courseId` that already exists.
    #[error("course '{0}' already exists")]
    Conflict(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::NotFound(_) => ErrorOut {
                success: false,
                message: "Course not found".into(),
                error: None,
            },
            other => ErrorOut {
                success: false,
                message: "Server error".into(),
                error: Some(other.to_string()),
            },
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_without_detail() {
        let err = ApiError::NotFound("CS101".into());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_and_conflict_map_to_500() {
        assert_eq!(
            ApiError::Validation("courseName is required".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Conflict("CS101".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
