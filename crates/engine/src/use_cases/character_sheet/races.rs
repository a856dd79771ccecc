//! Race names for the sheet's race picker.

use std::sync::Arc;

use crate::infrastructure::ports::RaceRepo;

use super::CharacterSheetError;

pub struct RaceCatalog {
    race_repo: Arc<dyn RaceRepo>,
}

impl RaceCatalog {
    pub fn new(race_repo: Arc<dyn RaceRepo>) -> Self {
        Self { race_repo }
    }

    /// Every race in the catalog, alphabetically.
    pub async fn list_races(&self) -> Result<Vec<String>, CharacterSheetError> {
        let races = self.race_repo.list_races().await?;
        tracing::debug!(count = races.len(), "Listed races");
        Ok(races)
    }
}
