//! PostgreSQL repository over a pooled connection held for the length of one request.

use super::{BookRepository, SessionSource};
use crate::domain::{Book, BookError};
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool, Postgres};
use std::str::FromStr;

pub const BOOKS_TABLE: &str = "books";

pub struct PgBookRepository {
    conn: PoolConnection<Postgres>,
}

impl PgBookRepository {
    pub fn new(conn: PoolConnection<Postgres>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn create(&mut self, isbn: &str, title: &str, page: i32) -> Result<Book, BookError> {
        // The primary key decides the race between concurrent creates of one ISBN.
        let sql = format!(
            "INSERT INTO {} (isbn, title, page) VALUES ($1, $2, $3) \
             ON CONFLICT (isbn) DO NOTHING \
             RETURNING isbn, title, page, created_at, updated_at",
            BOOKS_TABLE
        );
        tracing::debug!(sql = %sql, isbn = %isbn, "query");
        let row = sqlx::query_as::<_, Book>(&sql)
            .bind(isbn)
            .bind(title)
            .bind(page)
            .fetch_optional(&mut *self.conn)
            .await?;
        row.ok_or(BookError::AlreadyExists)
    }

    async fn find_by_isbn(&mut self, isbn: &str) -> Result<Book, BookError> {
        let sql = format!(
            "SELECT isbn, title, page, created_at, updated_at FROM {} WHERE isbn = $1",
            BOOKS_TABLE
        );
        tracing::debug!(sql = %sql, isbn = %isbn, "query");
        sqlx::query_as::<_, Book>(&sql)
            .bind(isbn)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or(BookError::NotFound)
    }

    async fn find_all(&mut self) -> Result<Vec<Book>, BookError> {
        let sql = format!(
            "SELECT isbn, title, page, created_at, updated_at FROM {} ORDER BY created_at, isbn",
            BOOKS_TABLE
        );
        tracing::debug!(sql = %sql, "query");
        let books = sqlx::query_as::<_, Book>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;
        if books.is_empty() {
            return Err(BookError::BooksNotFound);
        }
        Ok(books)
    }

    async fn delete_by_isbn(&mut self, isbn: &str) -> Result<(), BookError> {
        let sql = format!("DELETE FROM {} WHERE isbn = $1 RETURNING isbn", BOOKS_TABLE);
        tracing::debug!(sql = %sql, isbn = %isbn, "query");
        let deleted: Option<(String,)> = sqlx::query_as(&sql)
            .bind(isbn)
            .fetch_optional(&mut *self.conn)
            .await?;
        deleted.map(|_| ()).ok_or(BookError::NotFound)
    }
}

/// Acquires one pool connection per session.
#[derive(Clone)]
pub struct PgSessionSource {
    pool: PgPool,
}

impl PgSessionSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionSource for PgSessionSource {
    async fn open(&self) -> Result<Box<dyn BookRepository>, BookError> {
        let conn = self.pool.acquire().await?;
        Ok(Box::new(PgBookRepository::new(conn)))
    }

    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await.is_ok()
    }
}

/// Create the database named in `database_url` when it does not exist yet.
/// Connects to the `postgres` maintenance database on the same server to do so.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), sqlx::Error> {
    let (admin, target) = admin_options(database_url)?;
    let db_name = match target {
        Some(name) if !name.is_empty() && name != "postgres" => name,
        _ => return Ok(()),
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Connect options for the maintenance database on the same server, plus the database
/// `database_url` points at (None when the URL names no database).
fn admin_options(database_url: &str) -> Result<(PgConnectOptions, Option<String>), sqlx::Error> {
    let opts = PgConnectOptions::from_str(database_url)?;
    let target = opts.get_database().map(str::to_owned);
    Ok((opts.database("postgres"), target))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
