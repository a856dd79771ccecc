//! Core traits for game system implementations.

/// Derived-value calculations for a rule system.
///
/// Implementations must be pure: no I/O, no interior state, same inputs
/// always yield the same outputs.
pub trait CalculationEngine: Send + Sync {
    /// Modifier granted by an ability score.
    fn ability_modifier(&self, score: i32) -> i32;

    /// Proficiency bonus for a character level.
    fn proficiency_bonus(&self, level: i32) -> i32;

    /// Bonus applied to a skill or saving throw roll.
    fn skill_bonus(&self, modifier: i32, proficient: bool, proficiency_bonus: i32) -> i32 {
        if proficient {
            modifier + proficiency_bonus
        } else {
            modifier
        }
    }
}

/// A tabletop rule system.
pub trait GameSystem: Send + Sync {
    /// Short identifier (e.g., "dnd5e").
    fn system_id(&self) -> &str;

    /// Human readable name.
    fn display_name(&self) -> &str;

    /// The calculation engine for derived values.
    fn calculation_engine(&self) -> &dyn CalculationEngine;
}
