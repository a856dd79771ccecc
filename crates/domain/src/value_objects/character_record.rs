//! Stored form of a character sheet.
//!
//! Only primary facts are stored: scores, proficiency flags and the plain
//! fields. Modifiers and proficiency bonus are re-derived on load, so a stale
//! `modifier` left in an old record is ignored.
//!
//! Every key is optional when reading; a missing key takes the value a new
//! character starts with.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::aggregates::Character;

/// Serializable snapshot of a character sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterRecord {
    #[serde(rename = "charactername")]
    pub name: String,
    #[serde(rename = "characterclass", alias = "class")]
    pub class: String,
    pub level: i32,
    pub background: String,
    #[serde(alias = "playername")]
    pub player_name: String,
    pub race: String,
    pub alignment: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub experience_points: u32,
    pub armor_class: i32,
    pub initiative: i32,
    pub speed: i32,
    pub max_hp: i32,
    pub current_hp: i32,
    pub temp_hp: i32,
    pub passive_perception: i32,
    /// Keyed by ability name ("Strength", ...).
    pub abilities: BTreeMap<String, AbilityRecord>,
}

impl Default for CharacterRecord {
    fn default() -> Self {
        Character::new().to_record()
    }
}

/// Stored score and proficiencies for one ability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityRecord {
    pub score: i32,
    /// Keyed by skill name ("Athletics", "Saving Throw", ...).
    pub skills: BTreeMap<String, SkillRecord>,
}

impl Default for AbilityRecord {
    fn default() -> Self {
        Self {
            score: crate::aggregates::DEFAULT_ABILITY_SCORE,
            skills: BTreeMap::new(),
        }
    }
}

/// Stored proficiency flag for one skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillRecord {
    pub proficient: bool,
}

/// Accepts a number or numeric text; anything else becomes 0.
///
/// Older sheets kept experience points in a free-text box, so a record may
/// hold `"Experience Points"` or `"1200"` instead of a number.
fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(i64),
        Float(f64),
        Text(String),
    }

    Ok(match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => u32::try_from(n).unwrap_or(0),
        NumberOrText::Float(f) => f as u32,
        NumberOrText::Text(s) => s.trim().parse().unwrap_or(0),
    })
}
