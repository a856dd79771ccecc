//! Shared SQLite connection pool.

use sqlx::SqlitePool;

use crate::infrastructure::ports::RepoError;

/// Open (creating if needed) the database file at `db_path`.
///
/// Character, race and preference repositories share the returned pool; each
/// operation checks a connection out and returns it when done.
pub async fn open_pool(db_path: &str) -> Result<SqlitePool, RepoError> {
    SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
        .await
        .map_err(|e| RepoError::database("connect", e))
}
