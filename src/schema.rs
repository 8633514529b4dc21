//! Request and response bodies of the book API.

use crate::domain::Book;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BookCreate {
    #[schema(example = "9780134190440", min_length = 1)]
    pub isbn: String,
    #[schema(example = "The C Programming Language", min_length = 1)]
    pub title: String,
    #[schema(example = 272, minimum = 0)]
    pub page: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookRead {
    #[schema(example = "9780134190440")]
    pub isbn: String,
    #[schema(example = "The C Programming Language")]
    pub title: String,
    #[schema(example = 272)]
    pub page: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Book> for BookRead {
    fn from(book: Book) -> Self {
        Self {
            isbn: book.isbn,
            title: book.title,
            page: book.page,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    #[schema(example = "error message.")]
    pub detail: String,
}
