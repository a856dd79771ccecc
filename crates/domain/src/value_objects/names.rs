//! Validated character name used as the persistence key.
//!
//! A `Character` may carry any name while it is being edited; only a
//! `CharacterName` can be used to store it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Name a freshly created character carries until the user renames it.
pub const PLACEHOLDER_CHARACTER_NAME: &str = "Character Name";

/// Maximum length for a character name
pub const MAX_NAME_LENGTH: usize = 200;

/// A character name accepted as a storage key (non-empty, not the
/// placeholder, <=200 chars)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a new validated character name.
    ///
    /// The name is kept exactly as given so it matches the `charactername`
    /// field of the stored record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if:
    /// - The name is empty or whitespace only
    /// - The name equals the "Character Name" placeholder
    /// - The name exceeds 200 characters
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_name("Character name cannot be empty"));
        }
        if name.trim() == PLACEHOLDER_CHARACTER_NAME {
            return Err(DomainError::invalid_name(
                "Please enter a character name before saving",
            ));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::invalid_name(format!(
                "Character name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for CharacterName {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name_is_kept_verbatim() {
        let name = CharacterName::new("Tordek").unwrap();
        assert_eq!(name.as_str(), "Tordek");
    }

    #[test]
    fn empty_and_blank_names_are_rejected() {
        assert!(matches!(
            CharacterName::new(""),
            Err(DomainError::InvalidName(_))
        ));
        assert!(matches!(
            CharacterName::new("   "),
            Err(DomainError::InvalidName(_))
        ));
    }

    #[test]
    fn placeholder_is_rejected() {
        assert!(matches!(
            CharacterName::new(PLACEHOLDER_CHARACTER_NAME),
            Err(DomainError::InvalidName(_))
        ));
    }

    #[test]
    fn overlong_name_is_rejected() {
        let long = "x".repeat(201);
        assert!(CharacterName::new(long).is_err());
        assert!(CharacterName::new("x".repeat(200)).is_ok());
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let parsed: Result<CharacterName, _> = serde_json::from_str("\"Character Name\"");
        assert!(parsed.is_err());
        let parsed: CharacterName = serde_json::from_str("\"Mialee\"").unwrap();
        assert_eq!(parsed.as_str(), "Mialee");
    }
}
