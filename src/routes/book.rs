//! Book CRUD routes.

use crate::handlers::{create_book, delete_book, get_book, list_books};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/:book_id", get(get_book).delete(delete_book))
        .with_state(state)
}
