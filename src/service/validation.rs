//! Request body validation. Runs before a body reaches the use-case layer.

use crate::error::AppError;
use crate::schema::BookCreate;

/// Field rules for a request body.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

pub struct RequestValidator;

impl RequestValidator {
    /// Reject empty strings. Whitespace counts as content.
    pub fn non_empty(field: &str, value: &str) -> Result<(), AppError> {
        if value.is_empty() {
            return Err(AppError::BadRequest(format!("{} must not be empty", field)));
        }
        Ok(())
    }

    pub fn minimum(field: &str, value: i64, min: i64) -> Result<(), AppError> {
        if value < min {
            return Err(AppError::BadRequest(format!("{} must be at least {}", field, min)));
        }
        Ok(())
    }
}

impl Validate for BookCreate {
    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::non_empty("isbn", &self.isbn)?;
        RequestValidator::non_empty("title", &self.title)?;
        RequestValidator::minimum("page", i64::from(self.page), 0)?;
        Ok(())
    }
}
