//! Unified error types for the domain layer
//!
//! Every rejected mutation on a character returns one of these variants and
//! leaves the character exactly as it was before the call.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Ability name is not one of the six fixed abilities
    #[error("Unknown ability: {0}")]
    UnknownAbility(String),

    /// Skill does not belong to the given ability's fixed skill list
    #[error("Unknown skill '{skill}' for ability {ability}")]
    UnknownSkill { ability: String, skill: String },

    /// Name cannot be used as a persistence key
    #[error("Invalid character name: {0}")]
    InvalidName(String),

    /// Level outside the supported 1-20 range
    #[error("Invalid level {0}: must be between 1 and 20")]
    InvalidLevel(i32),

    /// Validation failed (e.g., negative hit point maximum)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for raw text input forwarded from a form)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create an unknown ability error
    pub fn unknown_ability(name: impl Into<String>) -> Self {
        Self::UnknownAbility(name.into())
    }

    /// Create an unknown skill error
    pub fn unknown_skill(ability: impl Into<String>, skill: impl Into<String>) -> Self {
        Self::UnknownSkill {
            ability: ability.into(),
            skill: skill.into(),
        }
    }

    /// Create an invalid name error
    pub fn invalid_name(msg: impl Into<String>) -> Self {
        Self::InvalidName(msg.into())
    }

    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if max_hp < 0 {
    ///     return Err(DomainError::validation("Maximum hit points cannot be negative"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
