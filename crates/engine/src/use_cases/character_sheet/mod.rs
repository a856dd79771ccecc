//! Character sheet use cases.
//!
//! Moves characters between the domain aggregate and the persistence
//! gateway: save under the validated name, load by name, list the roster.
//! The race catalog that feeds the race picker lives here too.

mod error;
mod races;

pub use error::CharacterSheetError;
pub use races::RaceCatalog;

use std::sync::Arc;

use charsheet_domain::{Character, CharacterName};

use crate::infrastructure::ports::CharacterRepo;

/// Container for character sheet use cases.
pub struct CharacterSheetUseCases {
    character_repo: Arc<dyn CharacterRepo>,
}

impl CharacterSheetUseCases {
    pub fn new(character_repo: Arc<dyn CharacterRepo>) -> Self {
        Self { character_repo }
    }

    /// Save a character under its current name.
    ///
    /// An empty or placeholder name is rejected with `InvalidName` before any
    /// storage call is made.
    pub async fn save(&self, character: &Character) -> Result<CharacterName, CharacterSheetError> {
        let name = match character.storage_name() {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(name = %character.name(), error = %e, "Rejected character save");
                return Err(e.into());
            }
        };

        self.character_repo
            .save_character(&name, &character.to_record())
            .await?;

        tracing::info!(
            character = %name,
            level = character.level(),
            "Saved character"
        );
        Ok(name)
    }

    /// Load the character stored under `name`.
    pub async fn load(&self, name: &str) -> Result<Character, CharacterSheetError> {
        let record = self
            .character_repo
            .load_character(name)
            .await?
            .ok_or_else(|| CharacterSheetError::CharacterNotFound(name.to_string()))?;

        let character = Character::from_record(record);
        tracing::info!(
            character = %name,
            level = character.level(),
            "Loaded character"
        );
        Ok(character)
    }

    /// Replace `character` with the one stored under `name`.
    ///
    /// On any error `character` is left exactly as it was.
    pub async fn reload_into(
        &self,
        character: &mut Character,
        name: &str,
    ) -> Result<(), CharacterSheetError> {
        *character = self.load(name).await?;
        Ok(())
    }

    /// Names of all stored characters, alphabetically.
    pub async fn list_names(&self) -> Result<Vec<String>, CharacterSheetError> {
        let names = self.character_repo.list_character_names().await?;
        tracing::debug!(count = names.len(), "Listed characters");
        Ok(names)
    }
}
