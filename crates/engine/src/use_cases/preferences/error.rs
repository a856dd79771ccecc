//! Preference operation errors.

use crate::infrastructure::ports::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Tool name cannot be empty")]
    EmptyToolName,

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
