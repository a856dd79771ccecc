//! Character sheet domain events
//!
//! Returned from `Character` mutations so callers can refresh exactly the
//! values that changed, including the derived ones.

use crate::value_objects::{Ability, NumberField, TextField};

/// Outcome of a successful character sheet mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetUpdate {
    /// An ability score changed; `modifier` is the recomputed modifier.
    AbilityScoreChanged {
        ability: Ability,
        from: i32,
        to: i32,
        modifier: i32,
    },
    /// Level changed; `proficiency_bonus` is the recomputed bonus.
    LevelChanged {
        from: i32,
        to: i32,
        proficiency_bonus: i32,
    },
    /// A skill or saving throw proficiency flag changed.
    ProficiencyChanged {
        ability: Ability,
        skill: &'static str,
        proficient: bool,
    },
    /// A descriptive text field changed.
    TextChanged {
        field: TextField,
        from: String,
        to: String,
    },
    /// A combat number field changed.
    NumberChanged {
        field: NumberField,
        from: i32,
        to: i32,
    },
    /// Experience points changed.
    ExperienceChanged { from: u32, to: u32 },
}

impl SheetUpdate {
    /// Whether the mutation touched a derived value (modifier or proficiency bonus).
    pub fn changes_derived_values(&self) -> bool {
        matches!(
            self,
            Self::AbilityScoreChanged { .. } | Self::LevelChanged { .. }
        )
    }
}
