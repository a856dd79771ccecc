//! SQLite-backed character storage.
//!
//! One row per character: the name is the key and `data` holds the JSON
//! record.

use async_trait::async_trait;
use charsheet_domain::{CharacterName, CharacterRecord};
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::infrastructure::ports::{CharacterRepo, ClockPort, RepoError};

/// SQLite implementation of [`CharacterRepo`].
pub struct SqliteCharacterRepo {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteCharacterRepo {
    /// Wrap `pool`, creating the `characters` table if it is missing.
    pub async fn new(pool: SqlitePool, clock: Arc<dyn ClockPort>) -> Result<Self, RepoError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS characters (
                name TEXT PRIMARY KEY,
                data TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("init_characters", e))?;

        Ok(Self { pool, clock })
    }
}

#[async_trait]
impl CharacterRepo for SqliteCharacterRepo {
    async fn save_character(
        &self,
        name: &CharacterName,
        record: &CharacterRecord,
    ) -> Result<(), RepoError> {
        let json = serde_json::to_string(record).map_err(RepoError::serialization)?;
        let now = self.clock.now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO characters (name, data, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(name) DO UPDATE SET
                data = excluded.data,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(name.as_str())
        .bind(json)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("save_character", e))?;

        Ok(())
    }

    async fn load_character(&self, name: &str) -> Result<Option<CharacterRecord>, RepoError> {
        let row = sqlx::query("SELECT data FROM characters WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("load_character", e))?;

        match row {
            Some(row) => {
                let json: String = row.get("data");
                let record = serde_json::from_str(&json).map_err(RepoError::serialization)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn list_character_names(&self) -> Result<Vec<String>, RepoError> {
        let rows = sqlx::query("SELECT name FROM characters ORDER BY name COLLATE NOCASE, name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("list_character_names", e))?;

        Ok(rows.iter().map(|row| row.get("name")).collect())
    }
}
