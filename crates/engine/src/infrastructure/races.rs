//! SQLite-backed race catalog.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use crate::infrastructure::ports::{RaceRepo, RepoError};

/// Races written into an empty catalog.
pub const PLAYERS_HANDBOOK_RACES: [&str; 9] = [
    "Dragonborn",
    "Dwarf",
    "Elf",
    "Gnome",
    "Half-Elf",
    "Half-Orc",
    "Halfling",
    "Human",
    "Tiefling",
];

/// SQLite implementation of [`RaceRepo`].
pub struct SqliteRaceRepo {
    pool: SqlitePool,
}

impl SqliteRaceRepo {
    /// Wrap `pool`, creating the `races` table if it is missing and seeding
    /// it when it holds no rows. Existing rows are never touched.
    pub async fn new(pool: SqlitePool) -> Result<Self, RepoError> {
        sqlx::query("CREATE TABLE IF NOT EXISTS races (name TEXT PRIMARY KEY)")
            .execute(&pool)
            .await
            .map_err(|e| RepoError::database("init_races", e))?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM races")
            .fetch_one(&pool)
            .await
            .map_err(|e| RepoError::database("init_races", e))?;

        if count == 0 {
            let mut tx = pool
                .begin()
                .await
                .map_err(|e| RepoError::database("seed_races", e))?;
            for race in PLAYERS_HANDBOOK_RACES {
                sqlx::query("INSERT INTO races (name) VALUES (?)")
                    .bind(race)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| RepoError::database("seed_races", e))?;
            }
            tx.commit()
                .await
                .map_err(|e| RepoError::database("seed_races", e))?;
            tracing::debug!(count = PLAYERS_HANDBOOK_RACES.len(), "Seeded race catalog");
        }

        Ok(Self { pool })
    }
}

#[async_trait]
impl RaceRepo for SqliteRaceRepo {
    async fn list_races(&self) -> Result<Vec<String>, RepoError> {
        let rows = sqlx::query("SELECT name FROM races ORDER BY name COLLATE NOCASE, name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("list_races", e))?;

        Ok(rows.iter().map(|row| row.get("name")).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::sqlite::open_pool;

    async fn create_test_pool(dir: &tempfile::TempDir) -> SqlitePool {
        let db_path = dir.path().join("races.db");
        open_pool(db_path.to_str().unwrap()).await.unwrap()
    }

    #[tokio::test]
    async fn new_database_is_seeded_alphabetically() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteRaceRepo::new(create_test_pool(&dir).await)
            .await
            .unwrap();

        assert_eq!(repo.list_races().await.unwrap(), PLAYERS_HANDBOOK_RACES);
    }

    #[tokio::test]
    async fn existing_catalog_is_not_reseeded() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_test_pool(&dir).await;
        sqlx::query("CREATE TABLE races (name TEXT PRIMARY KEY)")
            .execute(&pool)
            .await
            .unwrap();
        for race in ["Warforged", "aasimar", "Kenku"] {
            sqlx::query("INSERT INTO races (name) VALUES (?)")
                .bind(race)
                .execute(&pool)
                .await
                .unwrap();
        }

        let repo = SqliteRaceRepo::new(pool).await.unwrap();

        assert_eq!(
            repo.list_races().await.unwrap(),
            vec!["aasimar", "Kenku", "Warforged"]
        );
    }

    #[tokio::test]
    async fn reopening_keeps_hand_added_races() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_test_pool(&dir).await;
        SqliteRaceRepo::new(pool.clone()).await.unwrap();
        sqlx::query("INSERT INTO races (name) VALUES ('Goliath')")
            .execute(&pool)
            .await
            .unwrap();

        let repo = SqliteRaceRepo::new(pool).await.unwrap();
        let races = repo.list_races().await.unwrap();

        assert_eq!(races.len(), PLAYERS_HANDBOOK_RACES.len() + 1);
        assert_eq!(races[4], "Goliath");
    }
}
