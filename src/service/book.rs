//! BookUseCase: one method per HTTP operation, each delegating to the session's repository.

use crate::domain::{Book, BookError};
use crate::store::BookRepository;
use async_trait::async_trait;

#[async_trait]
pub trait BookUseCase: Send {
    async fn create_book(&mut self, isbn: &str, title: &str, page: i32) -> Result<Book, BookError>;
    async fn fetch_books(&mut self) -> Result<Vec<Book>, BookError>;
    async fn fetch_book_by_isbn(&mut self, isbn: &str) -> Result<Book, BookError>;
    async fn delete_book_by_isbn(&mut self, isbn: &str) -> Result<(), BookError>;
}

pub struct BookUseCaseImpl {
    repo: Box<dyn BookRepository>,
}

impl BookUseCaseImpl {
    pub fn new(repo: Box<dyn BookRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl BookUseCase for BookUseCaseImpl {
    async fn create_book(&mut self, isbn: &str, title: &str, page: i32) -> Result<Book, BookError> {
        self.repo.create(isbn, title, page).await
    }

    async fn fetch_books(&mut self) -> Result<Vec<Book>, BookError> {
        self.repo.find_all().await
    }

    async fn fetch_book_by_isbn(&mut self, isbn: &str) -> Result<Book, BookError> {
        self.repo.find_by_isbn(isbn).await
    }

    async fn delete_book_by_isbn(&mut self, isbn: &str) -> Result<(), BookError> {
        self.repo.delete_by_isbn(isbn).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, SessionSource};

    async fn usecase(store: &MemoryStore) -> BookUseCaseImpl {
        BookUseCaseImpl::new(store.open().await.unwrap())
    }

    #[tokio::test]
    async fn create_then_fetch() {
        let store = MemoryStore::new();
        let mut uc = usecase(&store).await;
        let created = uc.create_book("9780134190440", "The C Programming Language", 272).await.unwrap();
        let fetched = uc.fetch_book_by_isbn("9780134190440").await.unwrap();
        assert_eq!(created, fetched);
        assert_eq!(uc.fetch_books().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn errors_pass_through_unchanged() {
        let store = MemoryStore::new();
        let mut uc = usecase(&store).await;
        assert!(matches!(uc.fetch_books().await, Err(BookError::BooksNotFound)));
        assert!(matches!(uc.fetch_book_by_isbn("none").await, Err(BookError::NotFound)));
        assert!(matches!(uc.delete_book_by_isbn("none").await, Err(BookError::NotFound)));
        uc.create_book("a", "A", 1).await.unwrap();
        assert!(matches!(uc.create_book("a", "A", 1).await, Err(BookError::AlreadyExists)));
    }
}
