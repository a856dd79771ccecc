//! Repository port traits for database access.

use async_trait::async_trait;
use charsheet_domain::{CharacterName, CharacterRecord};

use super::error::RepoError;
use super::types::UserPreferences;

// =============================================================================
// Character Storage
// =============================================================================

/// Stores one record per character, keyed by name.
///
/// Concurrent writers to the same name are not coordinated; the last
/// `save_character` wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    /// Insert or replace the record stored under `name`.
    async fn save_character(
        &self,
        name: &CharacterName,
        record: &CharacterRecord,
    ) -> Result<(), RepoError>;

    /// `None` when nothing is stored under `name`.
    async fn load_character(&self, name: &str) -> Result<Option<CharacterRecord>, RepoError>;

    /// Every stored name in alphabetical order.
    async fn list_character_names(&self) -> Result<Vec<String>, RepoError>;
}

// =============================================================================
// Race Catalog
// =============================================================================

/// Race names offered by the sheet's race picker.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RaceRepo: Send + Sync {
    /// Every race name in alphabetical order.
    async fn list_races(&self) -> Result<Vec<String>, RepoError>;
}

// =============================================================================
// User Preferences Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferencesRepo: Send + Sync {
    /// `None` when the user has never saved a preference.
    async fn load_preferences(&self, username: &str)
        -> Result<Option<UserPreferences>, RepoError>;

    /// Insert or replace all preferences of a user.
    async fn save_preferences(
        &self,
        username: &str,
        preferences: &UserPreferences,
    ) -> Result<(), RepoError>;
}
