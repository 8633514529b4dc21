//! Router assembly: book API, common routes and OpenAPI document.

mod book;
mod common;
mod openapi;
pub use book::book_routes;
pub use common::common_routes;
pub use openapi::{openapi_routes, ApiDoc};

use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application router with request tracing and a body size limit.
pub fn router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(openapi_routes())
        .merge(book_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}
