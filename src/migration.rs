//! Schema setup: the `books` table keyed by ISBN. Safe to run on every start.

use crate::store::BOOKS_TABLE;
use sqlx::PgPool;

/// Create the books table if it does not exist. The primary key on `isbn` is what
/// enforces one book per ISBN under concurrent creates.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    let sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            isbn TEXT NOT NULL,
            title TEXT NOT NULL,
            page INTEGER NOT NULL CHECK (page >= 0),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            PRIMARY KEY (isbn)
        )
        "#,
        BOOKS_TABLE
    );
    tracing::debug!(sql = %sql, "migration");
    sqlx::query(&sql).execute(pool).await?;
    tracing::info!(table = BOOKS_TABLE, "books table ready");
    Ok(())
}
