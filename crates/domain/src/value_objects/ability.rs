//! Ability value object - the six fixed ability scores and their skills.
//!
//! Provides type safety for ability references instead of passing raw strings
//! like "Strength" around. Each ability owns a fixed, ordered skill list whose
//! first entry is always the saving throw.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Pseudo-skill representing saving-throw proficiency for an ability.
pub const SAVING_THROW: &str = "Saving Throw";

const STRENGTH_SKILLS: &[&str] = &[SAVING_THROW, "Athletics"];
const DEXTERITY_SKILLS: &[&str] = &[SAVING_THROW, "Acrobatics", "Sleight of Hand", "Stealth"];
const CONSTITUTION_SKILLS: &[&str] = &[SAVING_THROW];
const INTELLIGENCE_SKILLS: &[&str] = &[
    SAVING_THROW,
    "Arcana",
    "History",
    "Investigation",
    "Nature",
    "Religion",
];
const WISDOM_SKILLS: &[&str] = &[
    SAVING_THROW,
    "Animal Handling",
    "Insight",
    "Medicine",
    "Perception",
    "Survival",
];
const CHARISMA_SKILLS: &[&str] = &[
    SAVING_THROW,
    "Deception",
    "Intimidation",
    "Performance",
    "Persuasion",
];

/// One of the six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ability {
    /// Strength - physical power
    Strength,
    /// Dexterity - agility and reflexes
    Dexterity,
    /// Constitution - endurance and health
    Constitution,
    /// Intelligence - reasoning and memory
    Intelligence,
    /// Wisdom - perception and insight
    Wisdom,
    /// Charisma - force of personality
    Charisma,
}

impl Ability {
    /// All abilities in sheet order.
    pub const ALL: [Ability; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Returns the full name, which is also the record key (e.g., "Strength").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    /// Returns the short uppercase abbreviation (e.g., "STR").
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// The fixed, ordered skill list for this ability.
    pub fn skills(&self) -> &'static [&'static str] {
        match self {
            Self::Strength => STRENGTH_SKILLS,
            Self::Dexterity => DEXTERITY_SKILLS,
            Self::Constitution => CONSTITUTION_SKILLS,
            Self::Intelligence => INTELLIGENCE_SKILLS,
            Self::Wisdom => WISDOM_SKILLS,
            Self::Charisma => CHARISMA_SKILLS,
        }
    }

    /// Position of a skill in this ability's list (case-insensitive).
    pub fn skill_index(&self, skill: &str) -> Option<usize> {
        self.skills()
            .iter()
            .position(|s| s.eq_ignore_ascii_case(skill.trim()))
    }

    /// Canonical spelling of a skill belonging to this ability.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownSkill` when the skill is not in this
    /// ability's list (e.g., "Stealth" for Strength).
    pub fn skill(&self, skill: &str) -> Result<&'static str, DomainError> {
        self.skill_index(skill)
            .map(|i| self.skills()[i])
            .ok_or_else(|| DomainError::unknown_skill(self.as_str(), skill))
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STR" | "STRENGTH" => Ok(Self::Strength),
            "DEX" | "DEXTERITY" => Ok(Self::Dexterity),
            "CON" | "CONSTITUTION" => Ok(Self::Constitution),
            "INT" | "INTELLIGENCE" => Ok(Self::Intelligence),
            "WIS" | "WISDOM" => Ok(Self::Wisdom),
            "CHA" | "CHARISMA" => Ok(Self::Charisma),
            _ => Err(DomainError::unknown_ability(s)),
        }
    }
}

/// Anything that names an ability: the typed enum, or raw text from a form.
///
/// Lets character operations accept `Ability::Strength` and `"Strength"`
/// alike while keeping `UnknownAbility` as the single failure for bad text.
pub trait IntoAbility {
    fn into_ability(self) -> Result<Ability, DomainError>;
}

impl IntoAbility for Ability {
    fn into_ability(self) -> Result<Ability, DomainError> {
        Ok(self)
    }
}

impl IntoAbility for &str {
    fn into_ability(self) -> Result<Ability, DomainError> {
        self.parse()
    }
}

impl IntoAbility for &String {
    fn into_ability(self) -> Result<Ability, DomainError> {
        self.parse()
    }
}

impl IntoAbility for String {
    fn into_ability(self) -> Result<Ability, DomainError> {
        self.parse()
    }
}
