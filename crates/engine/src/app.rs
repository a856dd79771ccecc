//! Application state and composition.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::infrastructure::{
    characters::SqliteCharacterRepo,
    clock::SystemClock,
    ports::{CharacterRepo, ClockPort, PreferencesRepo, RaceRepo, RepoError},
    preferences::SqlitePreferencesRepo,
    races::SqliteRaceRepo,
    sqlite::open_pool,
};
use crate::use_cases::{CharacterSheetUseCases, PreferencesOps, RaceCatalog};

/// Main application state.
///
/// Built once at startup and passed explicitly to whatever presents it.
pub struct App {
    pub config: AppConfig,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub character_sheet: Arc<CharacterSheetUseCases>,
    pub races: Arc<RaceCatalog>,
    pub preferences: Arc<PreferencesOps>,
}

impl App {
    /// Wire use cases over the given repositories.
    pub fn new(
        config: AppConfig,
        character: Arc<dyn CharacterRepo>,
        races: Arc<dyn RaceRepo>,
        preferences: Arc<dyn PreferencesRepo>,
    ) -> Self {
        let use_cases = UseCases {
            character_sheet: Arc::new(CharacterSheetUseCases::new(character)),
            races: Arc::new(RaceCatalog::new(races)),
            preferences: Arc::new(PreferencesOps::new(preferences)),
        };

        Self { config, use_cases }
    }

    /// Open the SQLite database named by `config` and build the application
    /// on top of it.
    pub async fn connect(config: AppConfig) -> Result<Self, RepoError> {
        tracing::info!(db = %config.db_path, "Opening character database");

        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        let pool = open_pool(&config.db_path).await?;
        let character = Arc::new(SqliteCharacterRepo::new(pool.clone(), clock.clone()).await?);
        let races = Arc::new(SqliteRaceRepo::new(pool.clone()).await?);
        let preferences = Arc::new(SqlitePreferencesRepo::new(pool, clock).await?);

        Ok(Self::new(config, character, races, preferences))
    }
}
