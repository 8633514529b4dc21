//! Use-case layer between handlers and storage, plus request validation.

mod book;
mod validation;
pub use book::{BookUseCase, BookUseCaseImpl};
pub use validation::{RequestValidator, Validate};
