//! Typed errors and HTTP mapping.

use crate::domain::BookError;
use crate::schema::ErrorMessage;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl From<BookError> for AppError {
    fn from(e: BookError) -> Self {
        match e {
            BookError::AlreadyExists => AppError::Conflict(e.to_string()),
            BookError::NotFound | BookError::BooksNotFound => AppError::NotFound(e.to_string()),
            BookError::Storage(_) | BookError::Unexpected(_) => AppError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(cause) => {
                // Cause stays in the log; the client gets a bare 500.
                tracing::error!(error = %cause, "request failed");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };
        let body = ErrorMessage {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    #[tokio::test]
    async fn already_exists_is_409_with_detail() {
        let response = AppError::from(BookError::AlreadyExists).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body: ErrorMessage = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(body.detail, "The book with the ISBN code already exists.");
    }

    #[tokio::test]
    async fn both_not_found_kinds_are_404() {
        for e in [BookError::NotFound, BookError::BooksNotFound] {
            let response = AppError::from(e).into_response();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn storage_failure_is_bodiless_500() {
        let response = AppError::from(BookError::Storage(sqlx::Error::PoolTimedOut)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn bad_request_is_400() {
        let response = AppError::BadRequest("title must not be empty".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
