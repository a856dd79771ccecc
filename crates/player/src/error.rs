//! Errors surfaced to the user by screens.

use charsheet_domain::DomainError;
use charsheet_engine::use_cases::{CharacterSheetError, PreferencesError};

#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("No screen named '{0}'")]
    UnknownScreen(String),

    #[error("A screen named '{0}' is already registered")]
    DuplicateScreen(String),

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    CharacterSheet(#[from] CharacterSheetError),

    #[error("Preferences unavailable: {0}")]
    Preferences(#[from] PreferencesError),
}
