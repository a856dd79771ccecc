//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Character storage (SQLite today)
//! - Race catalog
//! - User preferences storage
//! - Clock (for testing)

mod error;
mod repos;
mod testing;
mod types;

pub use error::RepoError;
pub use repos::{CharacterRepo, PreferencesRepo, RaceRepo};
pub use testing::ClockPort;
pub use types::{ToolPreferenceMap, UserPreferences};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockCharacterRepo, MockPreferencesRepo, MockRaceRepo};
#[cfg(test)]
pub use testing::MockClockPort;
