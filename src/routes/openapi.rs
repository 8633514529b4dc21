//! OpenAPI document for the book API.

use crate::schema::{BookCreate, BookRead, ErrorMessage};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::book::create_book,
        crate::handlers::book::list_books,
        crate::handlers::book::get_book,
        crate::handlers::book::delete_book,
    ),
    components(schemas(BookCreate, BookRead, ErrorMessage)),
    tags((name = "books", description = "Book catalogue"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /openapi.json.
pub fn openapi_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_book_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = &doc["paths"];
        assert!(paths["/books"]["post"]["responses"]["409"].is_object());
        assert!(paths["/books"]["get"]["responses"]["404"].is_object());
        assert!(paths["/books/{book_id}"]["get"].is_object());
        assert!(paths["/books/{book_id}"]["delete"]["responses"]["202"].is_object());
        assert!(doc["components"]["schemas"]["ErrorMessage"].is_object());
    }
}
