//! Value objects - Immutable objects defined by their attributes

mod ability;
mod character_record;
mod names;
mod sheet_field;

pub use ability::{Ability, IntoAbility, SAVING_THROW};
pub use character_record::{AbilityRecord, CharacterRecord, SkillRecord};
pub use names::{CharacterName, MAX_NAME_LENGTH, PLACEHOLDER_CHARACTER_NAME};
pub use sheet_field::{NumberField, TextField};
