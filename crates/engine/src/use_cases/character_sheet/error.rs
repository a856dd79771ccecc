//! Character sheet operation errors.

use crate::infrastructure::ports::RepoError;
use charsheet_domain::DomainError;

/// Errors that can occur during character sheet operations.
#[derive(Debug, thiserror::Error)]
pub enum CharacterSheetError {
    #[error("Character not found: {0}")]
    CharacterNotFound(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Persistence failure: {0}")]
    Persistence(#[from] RepoError),
}
