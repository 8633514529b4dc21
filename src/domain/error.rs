use thiserror::Error;

/// Failures of repository and use-case calls. Display text of the first three is the
/// client-facing detail message.
#[derive(Error, Debug)]
pub enum BookError {
    #[error("The book with the ISBN code already exists.")]
    AlreadyExists,
    #[error("The book you specified does not exist.")]
    NotFound,
    #[error("No books were found.")]
    BooksNotFound,
    #[error("storage: {0}")]
    Storage(sqlx::Error),
    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl From<sqlx::Error> for BookError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => BookError::AlreadyExists,
            _ => BookError::Storage(e),
        }
    }
}
