//! Character sheet domain: the modifier engine, the character aggregate and
//! the stored record format.
//!
//! Pure and synchronous. No I/O, no async runtime, no logging.

pub mod aggregates;
pub mod error;
pub mod events;
pub mod game_systems;
pub mod value_objects;

pub use aggregates::{AbilityBlock, Character, DEFAULT_ABILITY_SCORE};
pub use error::DomainError;
pub use events::SheetUpdate;

// Re-export the rules engine
pub use game_systems::{
    ability_modifier, checked_proficiency_bonus, format_modifier, passive_score,
    proficiency_bonus, skill_bonus, CalculationEngine, Dnd5eSystem, GameSystem, MAX_LEVEL,
    MIN_LEVEL,
};

pub use value_objects::{
    Ability, AbilityRecord, CharacterName, CharacterRecord, IntoAbility, NumberField, SkillRecord,
    TextField, MAX_NAME_LENGTH, PLACEHOLDER_CHARACTER_NAME, SAVING_THROW,
};
