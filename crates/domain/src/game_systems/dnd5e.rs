//! D&D 5th Edition derived-value rules.
//!
//! Ability modifiers, proficiency bonus, and the display format used for
//! modifiers on the sheet. Everything here is a pure function of its inputs.

use super::traits::{CalculationEngine, GameSystem};
use crate::error::DomainError;

/// Lowest level with a defined proficiency bonus.
pub const MIN_LEVEL: i32 = 1;

/// Highest level with a defined proficiency bonus.
pub const MAX_LEVEL: i32 = 20;

/// Proficiency bonus per level band, indexed by `(level - 1) / 4`.
const PROFICIENCY_BY_TIER: [i32; 5] = [2, 3, 4, 5, 6];

/// Modifier for an ability score: `floor((score - 10) / 2)`.
///
/// Rust's `/` truncates toward zero, so the offset is floored explicitly
/// (score 9 gives -1, not 0). Widened to i64 so extreme scores cannot overflow.
pub fn ability_modifier(score: i32) -> i32 {
    ((i64::from(score) - 10).div_euclid(2)) as i32
}

/// Render a modifier for display: `+0`, `+3`, `-1`.
pub fn format_modifier(modifier: i32) -> String {
    format!("{modifier:+}")
}

/// Proficiency bonus for a level.
///
/// Levels outside 1-20 are clamped to the nearest bound, so level 0 yields
/// the level 1 bonus and level 25 the level 20 bonus.
pub fn proficiency_bonus(level: i32) -> i32 {
    let level = level.clamp(MIN_LEVEL, MAX_LEVEL);
    PROFICIENCY_BY_TIER[((level - 1) / 4) as usize]
}

/// Proficiency bonus for a level, rejecting anything outside 1-20.
pub fn checked_proficiency_bonus(level: i32) -> Result<i32, DomainError> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(DomainError::InvalidLevel(level));
    }
    Ok(proficiency_bonus(level))
}

/// Bonus for a skill roll: the ability modifier, plus proficiency when proficient.
pub fn skill_bonus(modifier: i32, proficient: bool, proficiency_bonus: i32) -> i32 {
    Dnd5eSystem.skill_bonus(modifier, proficient, proficiency_bonus)
}

/// Passive score for a skill: `10 + skill_bonus`.
pub fn passive_score(modifier: i32, proficient: bool, proficiency_bonus: i32) -> i32 {
    10 + skill_bonus(modifier, proficient, proficiency_bonus)
}

/// D&D 5th Edition game system.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dnd5eSystem;

impl Dnd5eSystem {
    /// Create a new D&D 5e system instance.
    pub fn new() -> Self {
        Self
    }
}

impl GameSystem for Dnd5eSystem {
    fn system_id(&self) -> &str {
        "dnd5e"
    }

    fn display_name(&self) -> &str {
        "D&D 5th Edition"
    }

    fn calculation_engine(&self) -> &dyn CalculationEngine {
        self
    }
}

impl CalculationEngine for Dnd5eSystem {
    fn ability_modifier(&self, score: i32) -> i32 {
        ability_modifier(score)
    }

    fn proficiency_bonus(&self, level: i32) -> i32 {
        proficiency_bonus(level)
    }
}
