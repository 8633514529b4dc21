//! Book entity and the errors its operations can raise.

mod book;
mod error;
pub use book::Book;
pub use error::BookError;
