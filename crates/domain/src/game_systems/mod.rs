//! Game system implementations.
//!
//! Only D&D 5th Edition (`dnd5e`) is supported. Its rules are exposed both as
//! free functions and through the [`CalculationEngine`] trait.

mod dnd5e;
mod traits;

pub use dnd5e::{
    ability_modifier, checked_proficiency_bonus, format_modifier, passive_score,
    proficiency_bonus, skill_bonus, Dnd5eSystem, MAX_LEVEL, MIN_LEVEL,
};

pub use traits::{CalculationEngine, GameSystem};
