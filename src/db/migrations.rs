//! Schema setup for the todos table

use sqlx::SqlitePool;

use super::repos::DbError;

/// Create the todos table if it does not exist. Idempotent.
///
/// Must run before the server accepts requests; a failure here is fatal
/// and propagates out of `main`.
pub async fn run(pool: &SqlitePool) -> Result<(), DbError> {
    tracing::info!("Ensuring todos schema exists...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            completed BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
