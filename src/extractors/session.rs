//! Open a book session for the request. The session is released when the handler returns.

use crate::error::AppError;
use crate::service::{BookUseCase, BookUseCaseImpl};
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Use case bound to a session opened for this request only.
pub struct BookSession(pub Box<dyn BookUseCase>);

impl BookSession {
    /// Open a session directly. Handlers with a body call this after the body is validated,
    /// so a bad or slow upload never holds a pooled connection.
    pub async fn open(state: &AppState) -> Result<Self, AppError> {
        let repo = state.sessions.open().await?;
        Ok(BookSession(Box::new(BookUseCaseImpl::new(repo))))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for BookSession {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        BookSession::open(state).await
    }
}
