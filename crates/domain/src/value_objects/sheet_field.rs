//! Identifiers for the plain (non-derived) fields of a character sheet.
//!
//! Forms address fields through these enums instead of free-form strings;
//! `FromStr` accepts the record key (`"characterclass"`) as well as the
//! short form (`"class"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Free-text descriptive fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    Name,
    Class,
    Background,
    PlayerName,
    Race,
    Alignment,
}

impl TextField {
    pub const ALL: [TextField; 6] = [
        Self::Name,
        Self::Class,
        Self::Background,
        Self::PlayerName,
        Self::Race,
        Self::Alignment,
    ];

    /// Key used for this field in a stored record.
    pub fn record_key(&self) -> &'static str {
        match self {
            Self::Name => "charactername",
            Self::Class => "characterclass",
            Self::Background => "background",
            Self::PlayerName => "player_name",
            Self::Race => "race",
            Self::Alignment => "alignment",
        }
    }

    /// Label shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Character Name",
            Self::Class => "Class",
            Self::Background => "Background",
            Self::PlayerName => "Player Name",
            Self::Race => "Race",
            Self::Alignment => "Alignment",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.record_key())
    }
}

impl FromStr for TextField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "charactername" | "name" => Ok(Self::Name),
            "characterclass" | "class" => Ok(Self::Class),
            "background" => Ok(Self::Background),
            "player_name" | "playername" => Ok(Self::PlayerName),
            "race" => Ok(Self::Race),
            "alignment" => Ok(Self::Alignment),
            _ => Err(DomainError::parse(format!("Unknown text field: {}", s))),
        }
    }
}

/// Signed integer combat fields, plus the stored passive perception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberField {
    ArmorClass,
    Initiative,
    Speed,
    MaxHp,
    CurrentHp,
    TempHp,
    PassivePerception,
}

impl NumberField {
    pub const ALL: [NumberField; 7] = [
        Self::ArmorClass,
        Self::Initiative,
        Self::Speed,
        Self::MaxHp,
        Self::CurrentHp,
        Self::TempHp,
        Self::PassivePerception,
    ];

    /// Key used for this field in a stored record.
    pub fn record_key(&self) -> &'static str {
        match self {
            Self::ArmorClass => "armor_class",
            Self::Initiative => "initiative",
            Self::Speed => "speed",
            Self::MaxHp => "max_hp",
            Self::CurrentHp => "current_hp",
            Self::TempHp => "temp_hp",
            Self::PassivePerception => "passive_perception",
        }
    }

    /// Label shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ArmorClass => "Armor Class",
            Self::Initiative => "Initiative",
            Self::Speed => "Speed",
            Self::MaxHp => "Hit Point Maximum",
            Self::CurrentHp => "Current Hit Points",
            Self::TempHp => "Temporary Hit Points",
            Self::PassivePerception => "Passive Perception",
        }
    }
}

impl fmt::Display for NumberField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.record_key())
    }
}

impl FromStr for NumberField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "armor_class" | "ac" => Ok(Self::ArmorClass),
            "initiative" => Ok(Self::Initiative),
            "speed" => Ok(Self::Speed),
            "max_hp" => Ok(Self::MaxHp),
            "current_hp" => Ok(Self::CurrentHp),
            "temp_hp" => Ok(Self::TempHp),
            "passive_perception" => Ok(Self::PassivePerception),
            _ => Err(DomainError::parse(format!("Unknown number field: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_field_round_trips_through_record_key() {
        for field in TextField::ALL {
            assert_eq!(TextField::from_str(field.record_key()), Ok(field));
        }
        assert_eq!(TextField::from_str("class"), Ok(TextField::Class));
    }

    #[test]
    fn number_field_round_trips_through_record_key() {
        for field in NumberField::ALL {
            assert_eq!(NumberField::from_str(field.record_key()), Ok(field));
        }
        assert_eq!(NumberField::from_str("AC"), Ok(NumberField::ArmorClass));
    }

    #[test]
    fn unknown_field_is_parse_error() {
        assert!(matches!(
            TextField::from_str("eye_color"),
            Err(DomainError::Parse(_))
        ));
        assert!(matches!(
            NumberField::from_str("gold"),
            Err(DomainError::Parse(_))
        ));
    }
}
