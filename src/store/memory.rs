//! Process-local book storage. Every session shares the same map.

use super::{BookRepository, SessionSource};
use crate::domain::{Book, BookError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone, Default)]
pub struct MemoryStore {
    books: Arc<Mutex<HashMap<String, Book>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionSource for MemoryStore {
    async fn open(&self) -> Result<Box<dyn BookRepository>, BookError> {
        Ok(Box::new(MemoryBookRepository {
            books: self.books.clone(),
        }))
    }

    async fn ping(&self) -> bool {
        !self.books.is_poisoned()
    }
}

pub struct MemoryBookRepository {
    books: Arc<Mutex<HashMap<String, Book>>>,
}

impl MemoryBookRepository {
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Book>>, BookError> {
        self.books
            .lock()
            .map_err(|_| BookError::Unexpected("book store lock poisoned".into()))
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn create(&mut self, isbn: &str, title: &str, page: i32) -> Result<Book, BookError> {
        // Check and insert under one lock.
        let mut books = self.lock()?;
        if books.contains_key(isbn) {
            return Err(BookError::AlreadyExists);
        }
        let book = Book::new(isbn, title, page);
        books.insert(book.isbn.clone(), book.clone());
        Ok(book)
    }

    async fn find_by_isbn(&mut self, isbn: &str) -> Result<Book, BookError> {
        self.lock()?.get(isbn).cloned().ok_or(BookError::NotFound)
    }

    async fn find_all(&mut self) -> Result<Vec<Book>, BookError> {
        let mut books: Vec<Book> = self.lock()?.values().cloned().collect();
        if books.is_empty() {
            return Err(BookError::BooksNotFound);
        }
        books.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.isbn.cmp(&b.isbn)));
        Ok(books)
    }

    async fn delete_by_isbn(&mut self, isbn: &str) -> Result<(), BookError> {
        self.lock()?.remove(isbn).map(|_| ()).ok_or(BookError::NotFound)
    }
}
