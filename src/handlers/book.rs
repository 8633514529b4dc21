//! Book handlers: create, list, read, delete.

use crate::error::AppError;
use crate::extractors::{BookSession, ValidJson};
use crate::schema::{BookCreate, BookRead, ErrorMessage};
use crate::service::BookUseCase;
use crate::state::AppState;
use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookCreate,
    responses(
        (status = 201, description = "Book created", body = BookRead),
        (status = 400, description = "Invalid request body", body = ErrorMessage),
        (status = 409, description = "The book with the ISBN code already exists.", body = ErrorMessage),
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidJson(data): ValidJson<BookCreate>,
) -> Result<impl IntoResponse, AppError> {
    let BookSession(mut usecase) = BookSession::open(&state).await?;
    let book = usecase.create_book(&data.isbn, &data.title, data.page).await?;
    tracing::info!(isbn = %book.isbn, "book created");
    Ok((StatusCode::CREATED, Json(BookRead::from(book))))
}

#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = [BookRead]),
        (status = 404, description = "No books were found.", body = ErrorMessage),
    )
)]
pub async fn list_books(BookSession(mut usecase): BookSession) -> Result<impl IntoResponse, AppError> {
    let books = usecase.fetch_books().await?;
    let data: Vec<BookRead> = books.into_iter().map(BookRead::from).collect();
    Ok((StatusCode::OK, Json(data)))
}

#[utoipa::path(
    get,
    path = "/books/{book_id}",
    tag = "books",
    params(("book_id" = String, Path, description = "ISBN of the book")),
    responses(
        (status = 200, description = "The book", body = BookRead),
        (status = 404, description = "The book you specified does not exist.", body = ErrorMessage),
    )
)]
pub async fn get_book(
    BookSession(mut usecase): BookSession,
    Path(book_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let book = usecase.fetch_book_by_isbn(&book_id).await?;
    Ok((StatusCode::OK, Json(BookRead::from(book))))
}

#[utoipa::path(
    delete,
    path = "/books/{book_id}",
    tag = "books",
    params(("book_id" = String, Path, description = "ISBN of the book")),
    responses(
        (status = 202, description = "Book deleted"),
        (status = 404, description = "The book you specified does not exist.", body = ErrorMessage),
    )
)]
pub async fn delete_book(
    BookSession(mut usecase): BookSession,
    Path(book_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    usecase.delete_book_by_isbn(&book_id).await?;
    tracing::info!(isbn = %book_id, "book deleted");
    Ok(StatusCode::ACCEPTED)
}
