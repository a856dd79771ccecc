//! SQLite-backed user preferences storage.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, PreferencesRepo, RepoError, UserPreferences};

/// SQLite implementation of [`PreferencesRepo`].
///
/// One row per user; `preferences` holds a JSON object grouped by tool name.
pub struct SqlitePreferencesRepo {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqlitePreferencesRepo {
    /// Wrap `pool`, creating the `users` table if it is missing.
    pub async fn new(pool: SqlitePool, clock: Arc<dyn ClockPort>) -> Result<Self, RepoError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                username TEXT PRIMARY KEY,
                preferences TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("init_users", e))?;

        Ok(Self { pool, clock })
    }
}

#[async_trait]
impl PreferencesRepo for SqlitePreferencesRepo {
    async fn load_preferences(
        &self,
        username: &str,
    ) -> Result<Option<UserPreferences>, RepoError> {
        let row = sqlx::query("SELECT preferences FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("load_preferences", e))?;

        match row {
            Some(row) => {
                let json: String = row.get("preferences");
                let preferences = serde_json::from_str(&json).map_err(RepoError::serialization)?;
                Ok(Some(preferences))
            }
            None => Ok(None),
        }
    }

    async fn save_preferences(
        &self,
        username: &str,
        preferences: &UserPreferences,
    ) -> Result<(), RepoError> {
        let json = serde_json::to_string(preferences).map_err(RepoError::serialization)?;
        let now = self.clock.now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO users (username, preferences, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(username) DO UPDATE SET
                preferences = excluded.preferences,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(username)
        .bind(json)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("save_preferences", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::SystemClock;
    use crate::infrastructure::ports::MockClockPort;
    use crate::infrastructure::sqlite::open_pool;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    async fn create_test_repo(dir: &tempfile::TempDir) -> SqlitePreferencesRepo {
        let db_path = dir.path().join("prefs.db");
        let pool = open_pool(db_path.to_str().unwrap()).await.unwrap();
        let mut clock = MockClockPort::new();
        clock
            .expect_now()
            .returning(|| Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap());
        SqlitePreferencesRepo::new(pool, Arc::new(clock))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn unknown_user_has_no_preferences() {
        let dir = tempfile::tempdir().unwrap();
        let repo = create_test_repo(&dir).await;

        assert_eq!(repo.load_preferences("alice").await.unwrap(), None);
    }

    #[tokio::test]
    async fn preferences_round_trip_per_user() {
        let dir = tempfile::tempdir().unwrap();
        let repo = create_test_repo(&dir).await;

        let mut alice = UserPreferences::new();
        alice.set("Character Sheet", "show_bonuses", json!(true));
        let mut bob = UserPreferences::new();
        bob.set("Character Sheet", "show_bonuses", json!(false));

        repo.save_preferences("alice", &alice).await.unwrap();
        repo.save_preferences("bob", &bob).await.unwrap();

        alice.set("Dice Roller", "sides", json!(20));
        repo.save_preferences("alice", &alice).await.unwrap();

        assert_eq!(repo.load_preferences("alice").await.unwrap(), Some(alice));
        assert_eq!(repo.load_preferences("bob").await.unwrap(), Some(bob));
    }

    #[tokio::test]
    async fn save_stamps_updated_at() {
        let dir = tempfile::tempdir().unwrap();
        let repo = create_test_repo(&dir).await;

        repo.save_preferences("alice", &UserPreferences::new())
            .await
            .unwrap();

        let row = sqlx::query("SELECT updated_at FROM users WHERE username = ?")
            .bind("alice")
            .fetch_one(&repo.pool)
            .await
            .unwrap();
        let updated_at: String = row.get("updated_at");
        assert_eq!(updated_at, "2024-06-01T09:30:00+00:00");
    }

    #[tokio::test]
    async fn shares_a_database_with_characters() {
        use crate::infrastructure::characters::SqliteCharacterRepo;
        use crate::infrastructure::ports::CharacterRepo;

        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("shared.db");
        let pool = open_pool(db_path.to_str().unwrap()).await.unwrap();
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

        let characters = SqliteCharacterRepo::new(pool.clone(), clock.clone())
            .await
            .unwrap();
        let preferences = SqlitePreferencesRepo::new(pool, clock).await.unwrap();

        assert!(characters.list_character_names().await.unwrap().is_empty());
        assert_eq!(preferences.load_preferences("alice").await.unwrap(), None);
    }
}
