//! Bookshelf: book catalogue REST service backed by PostgreSQL.

pub mod config;
pub mod domain;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod routes;
pub mod schema;
pub mod service;
pub mod state;
pub mod store;

pub use config::{ServerConfig, StorageKind};
pub use domain::{Book, BookError};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{book_routes, common_routes, openapi_routes, router};
pub use state::AppState;
pub use store::{ensure_database_exists, BookRepository, MemoryStore, PgSessionSource, SessionSource};
pub use service::{BookUseCase, BookUseCaseImpl};
