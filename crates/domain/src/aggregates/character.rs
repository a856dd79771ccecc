//! Character aggregate - one character sheet
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: derived values can only change through the setters
//!   that recompute them
//! - **Explicit recompute**: setting a score recomputes that ability's
//!   modifier before returning; setting the level recomputes the
//!   proficiency bonus
//! - **Domain events**: mutations return a `SheetUpdate`
//! - **All-or-nothing**: a rejected mutation returns an error and leaves
//!   the character untouched

use std::collections::BTreeMap;

use crate::error::DomainError;
use crate::events::SheetUpdate;
use crate::game_systems::{
    ability_modifier, checked_proficiency_bonus, format_modifier, passive_score,
    proficiency_bonus, skill_bonus, MAX_LEVEL, MIN_LEVEL,
};
use crate::value_objects::{
    Ability, AbilityRecord, CharacterName, CharacterRecord, IntoAbility, NumberField,
    SkillRecord, TextField, PLACEHOLDER_CHARACTER_NAME,
};

/// Score every ability starts with.
pub const DEFAULT_ABILITY_SCORE: i32 = 10;

/// Score, derived modifier and proficiency flags for one ability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityBlock {
    ability: Ability,
    score: i32,
    modifier: i32,
    // Parallel to `ability.skills()`
    proficiencies: Vec<bool>,
}

impl AbilityBlock {
    fn new(ability: Ability) -> Self {
        Self {
            ability,
            score: DEFAULT_ABILITY_SCORE,
            modifier: ability_modifier(DEFAULT_ABILITY_SCORE),
            proficiencies: vec![false; ability.skills().len()],
        }
    }

    /// Which ability this block describes.
    #[inline]
    pub fn ability(&self) -> Ability {
        self.ability
    }

    #[inline]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Modifier derived from the current score.
    #[inline]
    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    /// Modifier rendered for display (`+2`, `-1`).
    pub fn formatted_modifier(&self) -> String {
        format_modifier(self.modifier)
    }

    /// Skills in sheet order with their proficiency flag.
    pub fn skills(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.ability
            .skills()
            .iter()
            .copied()
            .zip(self.proficiencies.iter().copied())
    }

    /// Whether the character is proficient in one of this ability's skills.
    pub fn is_proficient(&self, skill: &str) -> Result<bool, DomainError> {
        let index = self.skill_index(skill)?;
        Ok(self.proficiencies[index])
    }

    fn skill_index(&self, skill: &str) -> Result<usize, DomainError> {
        self.ability
            .skill_index(skill)
            .ok_or_else(|| DomainError::unknown_skill(self.ability.as_str(), skill))
    }

    fn set_score(&mut self, score: i32) -> i32 {
        let previous = std::mem::replace(&mut self.score, score);
        self.modifier = ability_modifier(score);
        previous
    }
}

/// A character sheet.
///
/// # Invariants
///
/// - Exactly one `AbilityBlock` per ability, in `Ability::ALL` order
/// - Every modifier equals `ability_modifier(score)` for its block
/// - `proficiency_bonus` equals `proficiency_bonus(level)`
/// - `level` stays within 1-20
///
/// `passive_perception` is a plain stored number; see
/// [`Character::computed_passive_perception`] for the rules value.
///
/// # Example
///
/// ```
/// use charsheet_domain::aggregates::Character;
/// use charsheet_domain::value_objects::Ability;
///
/// let mut character = Character::new();
/// character.set_ability_score("Strength", 16).unwrap();
///
/// assert_eq!(character.modifier(Ability::Strength), 3);
/// assert_eq!(character.formatted_modifier(Ability::Strength), "+3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    // Identity
    name: String,

    // Descriptive
    class: String,
    background: String,
    player_name: String,
    race: String,
    alignment: String,
    experience_points: u32,

    // Level and its derived bonus
    level: i32,
    proficiency_bonus: i32,

    // Combat
    armor_class: i32,
    initiative: i32,
    speed: i32,
    max_hp: i32,
    current_hp: i32,
    temp_hp: i32,
    passive_perception: i32,

    abilities: [AbilityBlock; 6],
}

impl Default for Character {
    fn default() -> Self {
        Self::new()
    }
}

impl Character {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a blank sheet with placeholder values.
    ///
    /// The placeholder name is not accepted for saving; the user has to
    /// rename the character first.
    pub fn new() -> Self {
        Self {
            name: PLACEHOLDER_CHARACTER_NAME.to_string(),
            class: "Character Class".to_string(),
            background: "Background".to_string(),
            player_name: "Player Name".to_string(),
            race: "Race".to_string(),
            alignment: "Alignment".to_string(),
            experience_points: 0,
            level: MIN_LEVEL,
            proficiency_bonus: proficiency_bonus(MIN_LEVEL),
            armor_class: 10,
            initiative: 0,
            speed: 30,
            max_hp: 10,
            current_hp: 10,
            temp_hp: 0,
            passive_perception: 10,
            abilities: Ability::ALL.map(AbilityBlock::new),
        }
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// The name as currently typed, which may still be the placeholder.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name validated for use as a storage key.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` for an empty or placeholder name.
    pub fn storage_name(&self) -> Result<CharacterName, DomainError> {
        CharacterName::new(self.name.clone())
    }

    /// Rename the character. Any text is accepted while editing.
    pub fn set_name(&mut self, name: impl Into<String>) -> SheetUpdate {
        self.set_text(TextField::Name, name)
    }

    // =========================================================================
    // Descriptive fields
    // =========================================================================

    /// Current value of a text field.
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Class => &self.class,
            TextField::Background => &self.background,
            TextField::PlayerName => &self.player_name,
            TextField::Race => &self.race,
            TextField::Alignment => &self.alignment,
        }
    }

    /// Replace a text field.
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) -> SheetUpdate {
        let slot = self.text_mut(field);
        let previous = std::mem::replace(slot, value.into());
        SheetUpdate::TextChanged {
            field,
            from: previous,
            to: slot.clone(),
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::Class => &mut self.class,
            TextField::Background => &mut self.background,
            TextField::PlayerName => &mut self.player_name,
            TextField::Race => &mut self.race,
            TextField::Alignment => &mut self.alignment,
        }
    }

    #[inline]
    pub fn experience_points(&self) -> u32 {
        self.experience_points
    }

    pub fn set_experience_points(&mut self, xp: u32) -> SheetUpdate {
        let previous = std::mem::replace(&mut self.experience_points, xp);
        SheetUpdate::ExperienceChanged {
            from: previous,
            to: xp,
        }
    }

    // =========================================================================
    // Level
    // =========================================================================

    #[inline]
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Proficiency bonus derived from the current level.
    #[inline]
    pub fn proficiency_bonus(&self) -> i32 {
        self.proficiency_bonus
    }

    /// Set the level and recompute the proficiency bonus.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLevel` for levels outside 1-20.
    pub fn set_level(&mut self, level: i32) -> Result<SheetUpdate, DomainError> {
        let bonus = checked_proficiency_bonus(level)?;
        let previous = std::mem::replace(&mut self.level, level);
        self.proficiency_bonus = bonus;
        Ok(SheetUpdate::LevelChanged {
            from: previous,
            to: level,
            proficiency_bonus: bonus,
        })
    }

    // =========================================================================
    // Combat fields
    // =========================================================================

    /// Current value of a combat number field.
    pub fn number(&self, field: NumberField) -> i32 {
        match field {
            NumberField::ArmorClass => self.armor_class,
            NumberField::Initiative => self.initiative,
            NumberField::Speed => self.speed,
            NumberField::MaxHp => self.max_hp,
            NumberField::CurrentHp => self.current_hp,
            NumberField::TempHp => self.temp_hp,
            NumberField::PassivePerception => self.passive_perception,
        }
    }

    /// Replace a combat number field.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a negative hit point maximum.
    pub fn set_number(
        &mut self,
        field: NumberField,
        value: i32,
    ) -> Result<SheetUpdate, DomainError> {
        if field == NumberField::MaxHp && value < 0 {
            return Err(DomainError::validation(
                "Hit point maximum cannot be negative",
            ));
        }
        let slot = match field {
            NumberField::ArmorClass => &mut self.armor_class,
            NumberField::Initiative => &mut self.initiative,
            NumberField::Speed => &mut self.speed,
            NumberField::MaxHp => &mut self.max_hp,
            NumberField::CurrentHp => &mut self.current_hp,
            NumberField::TempHp => &mut self.temp_hp,
            NumberField::PassivePerception => &mut self.passive_perception,
        };
        let previous = std::mem::replace(slot, value);
        Ok(SheetUpdate::NumberChanged {
            field,
            from: previous,
            to: value,
        })
    }

    // =========================================================================
    // Abilities and skills
    // =========================================================================

    /// Score, modifier and proficiencies of one ability.
    #[inline]
    pub fn ability(&self, ability: Ability) -> &AbilityBlock {
        &self.abilities[ability as usize]
    }

    /// All ability blocks in sheet order.
    pub fn abilities(&self) -> impl Iterator<Item = &AbilityBlock> {
        self.abilities.iter()
    }

    pub fn score(&self, ability: Ability) -> i32 {
        self.ability(ability).score()
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        self.ability(ability).modifier()
    }

    pub fn formatted_modifier(&self, ability: Ability) -> String {
        self.ability(ability).formatted_modifier()
    }

    /// Set an ability score and recompute that ability's modifier.
    ///
    /// No other ability is affected.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownAbility` when `ability` is text that does
    /// not name one of the six abilities.
    pub fn set_ability_score(
        &mut self,
        ability: impl IntoAbility,
        score: i32,
    ) -> Result<SheetUpdate, DomainError> {
        let ability = ability.into_ability()?;
        let block = &mut self.abilities[ability as usize];
        let previous = block.set_score(score);
        Ok(SheetUpdate::AbilityScoreChanged {
            ability,
            from: previous,
            to: score,
            modifier: block.modifier,
        })
    }

    /// Whether the character is proficient in a skill of an ability.
    pub fn is_proficient(
        &self,
        ability: impl IntoAbility,
        skill: &str,
    ) -> Result<bool, DomainError> {
        let ability = ability.into_ability()?;
        self.ability(ability).is_proficient(skill)
    }

    /// Set the proficiency flag of a skill. Nothing is recomputed.
    ///
    /// # Errors
    ///
    /// - `DomainError::UnknownAbility` for an unrecognised ability name
    /// - `DomainError::UnknownSkill` when the skill belongs to another
    ///   ability (e.g., Stealth under Strength)
    pub fn set_skill_proficiency(
        &mut self,
        ability: impl IntoAbility,
        skill: &str,
        proficient: bool,
    ) -> Result<SheetUpdate, DomainError> {
        let ability = ability.into_ability()?;
        let block = &mut self.abilities[ability as usize];
        let index = block.skill_index(skill)?;
        block.proficiencies[index] = proficient;
        Ok(SheetUpdate::ProficiencyChanged {
            ability,
            skill: ability.skills()[index],
            proficient,
        })
    }

    /// Roll bonus for a skill: modifier plus proficiency bonus when proficient.
    pub fn skill_bonus(&self, ability: impl IntoAbility, skill: &str) -> Result<i32, DomainError> {
        let ability = ability.into_ability()?;
        let block = self.ability(ability);
        let proficient = block.is_proficient(skill)?;
        Ok(skill_bonus(block.modifier, proficient, self.proficiency_bonus))
    }

    /// Saving throw bonus for an ability.
    pub fn saving_throw_bonus(&self, ability: Ability) -> i32 {
        let block = self.ability(ability);
        // Every ability lists the saving throw first
        skill_bonus(block.modifier, block.proficiencies[0], self.proficiency_bonus)
    }

    /// Passive Perception by the rules: 10 + Wisdom modifier, plus the
    /// proficiency bonus when proficient in Perception.
    ///
    /// This is never written to the stored `passive_perception` field; callers
    /// that want it applied do so explicitly through `set_number`.
    pub fn computed_passive_perception(&self) -> i32 {
        let wisdom = self.ability(Ability::Wisdom);
        let proficient = wisdom.is_proficient("Perception").unwrap_or(false);
        passive_score(wisdom.modifier, proficient, self.proficiency_bonus)
    }

    // =========================================================================
    // Records
    // =========================================================================

    /// Snapshot of every primary field. Derived values are not included.
    pub fn to_record(&self) -> CharacterRecord {
        let abilities = self
            .abilities
            .iter()
            .map(|block| {
                let skills = block
                    .skills()
                    .map(|(skill, proficient)| (skill.to_string(), SkillRecord { proficient }))
                    .collect();
                (
                    block.ability.as_str().to_string(),
                    AbilityRecord {
                        score: block.score,
                        skills,
                    },
                )
            })
            .collect::<BTreeMap<_, _>>();

        CharacterRecord {
            name: self.name.clone(),
            class: self.class.clone(),
            level: self.level,
            background: self.background.clone(),
            player_name: self.player_name.clone(),
            race: self.race.clone(),
            alignment: self.alignment.clone(),
            experience_points: self.experience_points,
            armor_class: self.armor_class,
            initiative: self.initiative,
            speed: self.speed,
            max_hp: self.max_hp,
            current_hp: self.current_hp,
            temp_hp: self.temp_hp,
            passive_perception: self.passive_perception,
            abilities,
        }
    }

    /// Rebuild a character from a stored record.
    ///
    /// Abilities and skills the sheet does not know are skipped, a level
    /// outside 1-20 is clamped, and every derived value is recomputed from
    /// the loaded scores and level before the character is returned.
    pub fn from_record(record: CharacterRecord) -> Self {
        let mut character = Self::new();

        character.name = record.name;
        character.class = record.class;
        character.background = record.background;
        character.player_name = record.player_name;
        character.race = record.race;
        character.alignment = record.alignment;
        character.experience_points = record.experience_points;
        character.level = record.level.clamp(MIN_LEVEL, MAX_LEVEL);
        character.armor_class = record.armor_class;
        character.initiative = record.initiative;
        character.speed = record.speed;
        character.max_hp = record.max_hp.max(0);
        character.current_hp = record.current_hp;
        character.temp_hp = record.temp_hp;
        character.passive_perception = record.passive_perception;

        for (name, stored) in record.abilities {
            let Ok(ability) = name.parse::<Ability>() else {
                continue;
            };
            let block = &mut character.abilities[ability as usize];
            block.score = stored.score;
            for (skill, flag) in stored.skills {
                if let Some(index) = ability.skill_index(&skill) {
                    block.proficiencies[index] = flag.proficient;
                }
            }
        }

        character.recompute_derived();
        character
    }

    fn recompute_derived(&mut self) {
        for block in &mut self.abilities {
            block.modifier = ability_modifier(block.score);
        }
        self.proficiency_bonus = proficiency_bonus(self.level);
    }
}

impl From<CharacterRecord> for Character {
    fn from(record: CharacterRecord) -> Self {
        Self::from_record(record)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::SAVING_THROW;

    fn create_test_character() -> Character {
        let mut character = Character::new();
        character.set_name("Mialee");
        character.set_text(TextField::Class, "Wizard");
        character.set_text(TextField::Race, "Elf");
        character.set_level(5).unwrap();
        character.set_ability_score(Ability::Intelligence, 17).unwrap();
        character.set_ability_score(Ability::Wisdom, 12).unwrap();
        character.set_ability_score(Ability::Strength, 8).unwrap();
        character
            .set_skill_proficiency(Ability::Intelligence, "Arcana", true)
            .unwrap();
        character
            .set_skill_proficiency(Ability::Wisdom, "Perception", true)
            .unwrap();
        character.set_experience_points(6500);
        character
    }

    mod constructor {
        use super::*;

        #[test]
        fn new_character_has_placeholder_defaults() {
            let character = Character::new();
            assert_eq!(character.name(), "Character Name");
            assert_eq!(character.text(TextField::Class), "Character Class");
            assert_eq!(character.level(), 1);
            assert_eq!(character.proficiency_bonus(), 2);
            assert_eq!(character.experience_points(), 0);
            assert_eq!(character.number(NumberField::Speed), 30);
            assert_eq!(character.number(NumberField::MaxHp), 10);
            assert_eq!(character.number(NumberField::TempHp), 0);
        }

        #[test]
        fn new_character_has_six_default_abilities() {
            let character = Character::new();
            let abilities: Vec<_> = character.abilities().map(|b| b.ability()).collect();
            assert_eq!(abilities, Ability::ALL.to_vec());
            for block in character.abilities() {
                assert_eq!(block.score(), 10);
                assert_eq!(block.modifier(), 0);
                assert_eq!(block.formatted_modifier(), "+0");
                assert!(block.skills().all(|(_, proficient)| !proficient));
            }
        }
    }

    mod ability_scores {
        use super::*;

        #[test]
        fn setting_score_recomputes_modifier() {
            let mut character = Character::new();
            let update = character.set_ability_score("Strength", 16).unwrap();

            assert_eq!(
                update,
                SheetUpdate::AbilityScoreChanged {
                    ability: Ability::Strength,
                    from: 10,
                    to: 16,
                    modifier: 3,
                }
            );
            assert_eq!(character.formatted_modifier(Ability::Strength), "+3");
        }

        #[test]
        fn other_abilities_are_unaffected() {
            let mut character = Character::new();
            character.set_ability_score("Strength", 16).unwrap();
            character.set_ability_score("Dexterity", 7).unwrap();

            assert_eq!(character.formatted_modifier(Ability::Strength), "+3");
            assert_eq!(character.modifier(Ability::Dexterity), -2);
            assert_eq!(character.modifier(Ability::Wisdom), 0);
        }

        #[test]
        fn odd_score_below_ten_floors() {
            let mut character = Character::new();
            character.set_ability_score(Ability::Charisma, 9).unwrap();
            assert_eq!(character.modifier(Ability::Charisma), -1);
        }

        #[test]
        fn unknown_ability_is_rejected_without_change() {
            let mut character = Character::new();
            let before = character.clone();

            let err = character.set_ability_score("Luck", 18).unwrap_err();

            assert_eq!(err, DomainError::UnknownAbility("Luck".to_string()));
            assert_eq!(character, before);
        }

        #[test]
        fn scores_are_not_clamped() {
            let mut character = Character::new();
            character.set_ability_score(Ability::Strength, 35).unwrap();
            assert_eq!(character.modifier(Ability::Strength), 12);
            character.set_ability_score(Ability::Strength, -3).unwrap();
            assert_eq!(character.modifier(Ability::Strength), -7);
        }
    }

    mod level {
        use super::*;

        #[test]
        fn setting_level_recomputes_proficiency_bonus() {
            let mut character = Character::new();
            let update = character.set_level(5).unwrap();
            assert_eq!(
                update,
                SheetUpdate::LevelChanged {
                    from: 1,
                    to: 5,
                    proficiency_bonus: 3,
                }
            );
            assert_eq!(character.proficiency_bonus(), 3);

            character.set_level(4).unwrap();
            assert_eq!(character.proficiency_bonus(), 2);

            character.set_level(20).unwrap();
            assert_eq!(character.proficiency_bonus(), 6);
        }

        #[test]
        fn out_of_range_level_is_rejected_without_change() {
            let mut character = Character::new();
            character.set_level(7).unwrap();
            let before = character.clone();

            assert_eq!(character.set_level(0), Err(DomainError::InvalidLevel(0)));
            assert_eq!(character.set_level(21), Err(DomainError::InvalidLevel(21)));
            assert_eq!(character, before);
        }
    }

    mod proficiencies {
        use super::*;

        #[test]
        fn skill_of_the_ability_is_accepted() {
            let mut character = Character::new();
            let update = character
                .set_skill_proficiency("Strength", "Athletics", true)
                .unwrap();

            assert_eq!(
                update,
                SheetUpdate::ProficiencyChanged {
                    ability: Ability::Strength,
                    skill: "Athletics",
                    proficient: true,
                }
            );
            assert!(character.is_proficient("Strength", "Athletics").unwrap());
        }

        #[test]
        fn skill_of_another_ability_is_rejected_without_change() {
            let mut character = Character::new();
            let before = character.clone();

            let err = character
                .set_skill_proficiency("Strength", "Stealth", true)
                .unwrap_err();

            assert_eq!(err, DomainError::unknown_skill("Strength", "Stealth"));
            assert_eq!(character, before);
        }

        #[test]
        fn unknown_ability_is_reported_before_skill() {
            let mut character = Character::new();
            let err = character
                .set_skill_proficiency("Luck", "Athletics", true)
                .unwrap_err();
            assert!(matches!(err, DomainError::UnknownAbility(_)));
        }

        #[test]
        fn proficiency_does_not_touch_passive_perception() {
            let mut character = Character::new();
            character.set_ability_score(Ability::Wisdom, 14).unwrap();
            character
                .set_skill_proficiency(Ability::Wisdom, "Perception", true)
                .unwrap();

            assert_eq!(character.number(NumberField::PassivePerception), 10);
            assert_eq!(character.computed_passive_perception(), 14);
        }

        #[test]
        fn skill_and_saving_throw_bonuses() {
            let character = create_test_character();
            // INT 17 (+3), level 5 (+3)
            assert_eq!(character.skill_bonus(Ability::Intelligence, "Arcana"), Ok(6));
            assert_eq!(character.skill_bonus(Ability::Intelligence, "History"), Ok(3));
            assert_eq!(character.saving_throw_bonus(Ability::Intelligence), 3);

            let mut character = character;
            character
                .set_skill_proficiency(Ability::Intelligence, SAVING_THROW, true)
                .unwrap();
            assert_eq!(character.saving_throw_bonus(Ability::Intelligence), 6);
        }
    }

    mod fields {
        use super::*;

        #[test]
        fn text_fields_report_previous_value() {
            let mut character = Character::new();
            let update = character.set_text(TextField::Alignment, "Chaotic Good");
            assert_eq!(
                update,
                SheetUpdate::TextChanged {
                    field: TextField::Alignment,
                    from: "Alignment".to_string(),
                    to: "Chaotic Good".to_string(),
                }
            );
        }

        #[test]
        fn negative_max_hp_is_rejected() {
            let mut character = Character::new();
            let before = character.clone();
            assert!(matches!(
                character.set_number(NumberField::MaxHp, -1),
                Err(DomainError::Validation(_))
            ));
            assert_eq!(character, before);
        }

        #[test]
        fn current_and_temp_hp_may_be_zero() {
            let mut character = Character::new();
            character.set_number(NumberField::CurrentHp, 0).unwrap();
            character.set_number(NumberField::TempHp, 0).unwrap();
            assert_eq!(character.number(NumberField::CurrentHp), 0);
        }

        #[test]
        fn storage_name_requires_a_real_name() {
            let mut character = Character::new();
            assert!(matches!(
                character.storage_name(),
                Err(DomainError::InvalidName(_))
            ));

            character.set_name("");
            assert!(character.storage_name().is_err());

            character.set_name("Tordek");
            assert_eq!(character.storage_name().unwrap().as_str(), "Tordek");
        }
    }

    mod records {
        use super::*;

        #[test]
        fn round_trip_preserves_observable_fields() {
            let character = create_test_character();
            let loaded = Character::from_record(character.to_record());
            assert_eq!(loaded, character);
        }

        #[test]
        fn record_nests_abilities_by_name() {
            let record = create_test_character().to_record();

            assert_eq!(record.abilities.len(), 6);
            let intelligence = &record.abilities["Intelligence"];
            assert_eq!(intelligence.score, 17);
            assert!(intelligence.skills["Arcana"].proficient);
            assert!(!intelligence.skills["Nature"].proficient);
            assert_eq!(record.abilities["Constitution"].skills.len(), 1);
        }

        #[test]
        fn derived_values_are_recomputed_on_load() {
            let mut record = Character::new().to_record();
            record.level = 9;
            if let Some(strength) = record.abilities.get_mut("Strength") {
                strength.score = 18;
            }

            let loaded = Character::from_record(record);

            assert_eq!(loaded.modifier(Ability::Strength), 4);
            assert_eq!(loaded.proficiency_bonus(), 4);
        }

        #[test]
        fn stale_stored_modifier_is_ignored() {
            let json = r#"{
                "charactername": "Lidda",
                "abilities": {
                    "Dexterity": {"score": 18, "modifier": "+0", "skills": {}}
                }
            }"#;
            let record: CharacterRecord = serde_json::from_str(json).unwrap();
            let loaded = Character::from_record(record);
            assert_eq!(loaded.formatted_modifier(Ability::Dexterity), "+4");
        }

        #[test]
        fn missing_keys_fall_back_to_defaults() {
            let record: CharacterRecord =
                serde_json::from_str(r#"{"charactername": "Jozan"}"#).unwrap();
            let loaded = Character::from_record(record);

            assert_eq!(loaded.name(), "Jozan");
            assert_eq!(loaded.level(), 1);
            assert_eq!(loaded.text(TextField::Race), "Race");
            assert_eq!(loaded.number(NumberField::Speed), 30);
            assert_eq!(loaded.score(Ability::Wisdom), 10);
        }

        #[test]
        fn unknown_abilities_and_skills_are_skipped() {
            let json = r#"{
                "charactername": "Krusk",
                "abilities": {
                    "Luck": {"score": 20},
                    "Strength": {"score": 17, "skills": {
                        "Athletics": {"proficient": true},
                        "Stealth": {"proficient": true}
                    }}
                }
            }"#;
            let record: CharacterRecord = serde_json::from_str(json).unwrap();
            let loaded = Character::from_record(record);

            assert_eq!(loaded.score(Ability::Strength), 17);
            assert!(loaded.is_proficient(Ability::Strength, "Athletics").unwrap());
            assert!(!loaded.is_proficient(Ability::Dexterity, "Stealth").unwrap());
        }

        #[test]
        fn out_of_range_level_is_clamped_on_load() {
            let mut record = Character::new().to_record();
            record.level = 27;
            let loaded = Character::from_record(record);
            assert_eq!(loaded.level(), 20);
            assert_eq!(loaded.proficiency_bonus(), 6);
        }

        #[test]
        fn legacy_keys_are_accepted() {
            let json = r#"{
                "charactername": "Ember",
                "class": "Monk",
                "playername": "Sam",
                "experience_points": "Experience Points"
            }"#;
            let record: CharacterRecord = serde_json::from_str(json).unwrap();
            assert_eq!(record.class, "Monk");
            assert_eq!(record.player_name, "Sam");
            assert_eq!(record.experience_points, 0);

            let record: CharacterRecord =
                serde_json::from_str(r#"{"experience_points": "1200"}"#).unwrap();
            assert_eq!(record.experience_points, 1200);
        }

        #[test]
        fn record_serializes_with_wire_keys() {
            let value = serde_json::to_value(create_test_character().to_record()).unwrap();
            for key in [
                "charactername",
                "characterclass",
                "level",
                "background",
                "player_name",
                "race",
                "alignment",
                "experience_points",
                "armor_class",
                "initiative",
                "speed",
                "max_hp",
                "current_hp",
                "temp_hp",
                "abilities",
            ] {
                assert!(value.get(key).is_some(), "missing key {key}");
            }
            assert!(value["abilities"]["Strength"].get("modifier").is_none());
            assert_eq!(
                value["abilities"]["Wisdom"]["skills"]["Perception"]["proficient"],
                serde_json::Value::Bool(true)
            );
        }
    }
}
