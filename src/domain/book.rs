use chrono::{DateTime, Utc};

/// One row of the `books` table. The ISBN is the identity and never changes after insert.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub page: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Fresh book stamped with the current time; both timestamps are equal.
    pub fn new(isbn: impl Into<String>, title: impl Into<String>, page: i32) -> Self {
        let now = Utc::now();
        Self {
            isbn: isbn.into(),
            title: title.into(),
            page,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_book_has_equal_timestamps() {
        let book = Book::new("9780134190440", "The C Programming Language", 272);
        assert_eq!(book.isbn, "9780134190440");
        assert_eq!(book.page, 272);
        assert_eq!(book.created_at, book.updated_at);
    }
}
