//! Book persistence: a repository per session, and the sources that open sessions.

mod memory;
mod postgres;
pub use memory::{MemoryBookRepository, MemoryStore};
pub use postgres::{ensure_database_exists, PgBookRepository, PgSessionSource, BOOKS_TABLE};

use crate::domain::{Book, BookError};
use async_trait::async_trait;

/// Book reads and writes bound to one session. Dropping the value releases the session.
#[async_trait]
pub trait BookRepository: Send {
    /// Insert a new book. Fails with `AlreadyExists` when the ISBN is taken.
    async fn create(&mut self, isbn: &str, title: &str, page: i32) -> Result<Book, BookError>;

    async fn find_by_isbn(&mut self, isbn: &str) -> Result<Book, BookError>;

    /// All books, oldest first. An empty collection is `BooksNotFound`.
    async fn find_all(&mut self) -> Result<Vec<Book>, BookError>;

    async fn delete_by_isbn(&mut self, isbn: &str) -> Result<(), BookError>;
}

/// Hands out one repository session per request.
#[async_trait]
pub trait SessionSource: Send + Sync {
    async fn open(&self) -> Result<Box<dyn BookRepository>, BookError>;

    /// True when the backing storage answers.
    async fn ping(&self) -> bool;
}
