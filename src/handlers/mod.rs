//! HTTP handlers for the book API.

pub mod book;
pub use book::*;
