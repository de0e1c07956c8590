//! Unified error handling with Sentry integration.
//!
//! Every route handler returns `Result<T, AppError>`. `AppError` is the only
//! place where a failure becomes an HTTP status code and an error body.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use buttons_core::UseCaseError;
use thiserror::Error;

use crate::dto::ErrorResponse;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// A use case failed.
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::UseCase(UseCaseError::NotFound(_)) | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UseCase(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UseCase(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code for the response body.
    #[must_use]
    pub fn code(&self) -> &'static str {
        let status = self.status();
        if status == StatusCode::NOT_FOUND {
            "NOT_FOUND"
        } else if status == StatusCode::BAD_REQUEST {
            "BAD_REQUEST"
        } else {
            "INTERNAL_SERVER_ERROR"
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        // Don't expose internal error details to clients
        let message = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse::new(self.code(), message))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use buttons_core::{ButtonError, ButtonId, NameError, RepositoryError};

    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_use_case_error_status_codes() {
        assert_eq!(
            get_status(UseCaseError::Validation(ButtonError::InvalidName(NameError::Blank)).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(UseCaseError::DuplicateName("Submit".into()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(UseCaseError::InvalidQuery("bad".into()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(UseCaseError::NotFound(ButtonId::random()).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(UseCaseError::Repository(RepositoryError::Backend("down".into())).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("x".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_codes() {
        assert_eq!(AppError::NotFound("x".into()).code(), "NOT_FOUND");
        assert_eq!(AppError::BadRequest("x".into()).code(), "BAD_REQUEST");
        assert_eq!(
            AppError::Internal("x".into()).code(),
            "INTERNAL_SERVER_ERROR"
        );
    }

    #[tokio::test]
    async fn test_server_error_body_hides_details() {
        let err: AppError =
            UseCaseError::Repository(RepositoryError::Backend("secret detail".into())).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        let body: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(body["error"], "INTERNAL_SERVER_ERROR");
        assert_eq!(body["message"], "Internal server error");
        assert!(!text.contains("secret detail"));
    }

    #[test]
    fn test_client_message_is_kept() {
        let err: AppError = UseCaseError::DuplicateName("Submit".into()).into();
        assert_eq!(err.to_string(), "Button with name 'Submit' already exists");
    }
}
