//! The character sheet screen.
//!
//! Owns the open `Character`, turns raw text from input widgets into typed
//! edits, and produces a view model with every derived value already
//! formatted. Race edits are checked against the race catalog once it has
//! been loaded.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use charsheet_domain::{
    format_modifier, skill_bonus, Ability, Character, CharacterName, DomainError, NumberField,
    SheetUpdate, TextField,
};
use charsheet_engine::infrastructure::ports::ToolPreferenceMap;
use charsheet_engine::use_cases::{CharacterSheetUseCases, RaceCatalog};
use charsheet_engine::App;
use serde_json::{json, Value};

use crate::error::ScreenError;
use crate::preferences::ToolPreferences;
use crate::screens::{Screen, ScreenView, ViewSection};

/// Screen name, also the tool name its preferences are stored under.
pub const CHARACTER_SHEET_TOOL: &str = "Character Sheet";

const SHOW_SKILL_BONUSES: &str = "show_skill_bonuses";
const AUTO_PASSIVE_PERCEPTION: &str = "auto_passive_perception";

// =============================================================================
// Editable fields
// =============================================================================

/// Every input on the sheet that accepts text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetField {
    Text(TextField),
    Number(NumberField),
    Level,
    ExperiencePoints,
    AbilityScore(Ability),
    /// Checkbox next to a skill or saving throw.
    Proficiency(Ability, &'static str),
}

impl fmt::Display for SheetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(field) => write!(f, "{}", field.label()),
            Self::Number(field) => write!(f, "{}", field.label()),
            Self::Level => write!(f, "Level"),
            Self::ExperiencePoints => write!(f, "Experience Points"),
            Self::AbilityScore(ability) => write!(f, "{ability}"),
            Self::Proficiency(ability, skill) => write!(f, "{ability} {skill}"),
        }
    }
}

impl FromStr for SheetField {
    type Err = DomainError;

    /// Accepts `level`, `xp`, any text or number field key (`race`, `ac`),
    /// an ability (`str`, `Wisdom`) for its score, and `ability.skill`
    /// (`dex.stealth`, `wis.saving throw`) for a proficiency checkbox.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        let lower = key.to_lowercase();

        match lower.as_str() {
            "level" => return Ok(Self::Level),
            "xp" | "experience_points" => return Ok(Self::ExperiencePoints),
            _ => {}
        }

        if let Some((ability, skill)) = key.split_once('.') {
            let ability: Ability = ability.parse()?;
            return Ok(Self::Proficiency(ability, ability.skill(skill)?));
        }
        if let Ok(field) = lower.parse::<TextField>() {
            return Ok(Self::Text(field));
        }
        if let Ok(field) = lower.parse::<NumberField>() {
            return Ok(Self::Number(field));
        }
        if let Ok(ability) = key.parse::<Ability>() {
            return Ok(Self::AbilityScore(ability));
        }

        Err(DomainError::parse(format!("Unknown sheet field: {key}")))
    }
}

fn parse_number<T: FromStr>(field: SheetField, text: &str) -> Result<T, DomainError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| DomainError::parse(format!("{field}: '{text}' is not a whole number")))
}

fn parse_checkbox(field: SheetField, text: &str) -> Result<bool, DomainError> {
    match text.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "x" | "1" => Ok(true),
        "false" | "no" | "n" | "off" | "" | "0" => Ok(false),
        other => Err(DomainError::parse(format!(
            "{field}: '{other}' is not yes or no"
        ))),
    }
}

// =============================================================================
// View model
// =============================================================================

/// Everything the sheet displays, formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetView {
    pub name: String,
    pub details: Vec<(TextField, String)>,
    pub level: i32,
    pub experience_points: u32,
    pub proficiency_bonus: String,
    pub combat: Vec<(NumberField, i32)>,
    pub abilities: Vec<AbilityView>,
    /// Choices for the race picker; empty until the catalog is loaded.
    pub race_options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityView {
    pub ability: Ability,
    pub score: i32,
    pub modifier: String,
    pub skills: Vec<SkillView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillView {
    pub name: &'static str,
    pub proficient: bool,
    /// `None` when skill bonuses are switched off in preferences.
    pub bonus: Option<String>,
}

impl SheetView {
    pub fn ability(&self, ability: Ability) -> Option<&AbilityView> {
        self.abilities.iter().find(|a| a.ability == ability)
    }
}

impl AbilityView {
    pub fn skill(&self, name: &str) -> Option<&SkillView> {
        self.skills.iter().find(|s| s.name == name)
    }
}

// =============================================================================
// Screen
// =============================================================================

pub struct CharacterSheetScreen {
    character: Character,
    sheets: Arc<CharacterSheetUseCases>,
    races: Arc<RaceCatalog>,
    race_options: Vec<String>,
    prefs: ToolPreferences,
}

impl CharacterSheetScreen {
    pub fn new(
        sheets: Arc<CharacterSheetUseCases>,
        races: Arc<RaceCatalog>,
        prefs: ToolPreferences,
    ) -> Self {
        Self {
            character: Character::new(),
            sheets,
            races,
            race_options: Vec::new(),
            prefs,
        }
    }

    pub fn for_app(app: &App) -> Self {
        Self::new(
            app.use_cases.character_sheet.clone(),
            app.use_cases.races.clone(),
            ToolPreferences::for_app(app, CHARACTER_SHEET_TOOL, Self::default_preferences()),
        )
    }

    pub fn default_preferences() -> ToolPreferenceMap {
        let mut defaults = ToolPreferenceMap::new();
        defaults.insert(SHOW_SKILL_BONUSES.to_string(), json!(true));
        defaults.insert(AUTO_PASSIVE_PERCEPTION.to_string(), json!(false));
        defaults
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn preferences(&self) -> &ToolPreferences {
        &self.prefs
    }

    pub fn preferences_mut(&mut self) -> &mut ToolPreferences {
        &mut self.prefs
    }

    pub fn race_options(&self) -> &[String] {
        &self.race_options
    }

    /// Reload the race picker choices from the catalog.
    pub async fn refresh_races(&mut self) -> Result<(), ScreenError> {
        self.race_options = self.races.list_races().await?;
        Ok(())
    }

    /// Catalog spelling of `text`, or `Validation` when the catalog is
    /// loaded and does not list it.
    fn catalog_race(&self, text: &str) -> Result<String, DomainError> {
        if self.race_options.is_empty() {
            return Ok(text.to_string());
        }
        let wanted = text.trim();
        self.race_options
            .iter()
            .find(|race| race.eq_ignore_ascii_case(wanted))
            .cloned()
            .ok_or_else(|| DomainError::validation(format!("Race: '{wanted}' is not a known race")))
    }

    /// Apply raw text typed into `field`.
    ///
    /// The text is parsed for the field's type and forwarded to the matching
    /// character setter. On error the character is unchanged.
    pub fn apply_edit(
        &mut self,
        field: SheetField,
        text: &str,
    ) -> Result<SheetUpdate, ScreenError> {
        let update = match field {
            SheetField::Text(TextField::Race) => {
                let race = self.catalog_race(text)?;
                self.character.set_text(TextField::Race, race)
            }
            SheetField::Text(field) => self.character.set_text(field, text),
            SheetField::Number(number) => {
                let value = parse_number(field, text)?;
                self.character.set_number(number, value)?
            }
            SheetField::Level => self.character.set_level(parse_number(field, text)?)?,
            SheetField::ExperiencePoints => self
                .character
                .set_experience_points(parse_number(field, text)?),
            SheetField::AbilityScore(ability) => {
                let score = parse_number(field, text)?;
                self.character.set_ability_score(ability, score)?
            }
            SheetField::Proficiency(ability, skill) => {
                let proficient = parse_checkbox(field, text)?;
                self.character
                    .set_skill_proficiency(ability, skill, proficient)?
            }
        };

        if self.prefs.get_bool(AUTO_PASSIVE_PERCEPTION, false)
            && affects_passive_perception(&update)
        {
            let value = self.character.computed_passive_perception();
            self.character
                .set_number(NumberField::PassivePerception, value)?;
        }

        tracing::debug!(field = %field, "Applied sheet edit");
        Ok(update)
    }

    /// Parse a field key and apply `text` to it.
    pub fn edit(&mut self, field: &str, text: &str) -> Result<SheetUpdate, ScreenError> {
        let field = field.parse()?;
        self.apply_edit(field, text)
    }

    /// Discard the open character and start a blank one.
    pub fn new_character(&mut self) {
        self.character = Character::new();
    }

    pub async fn save(&self) -> Result<CharacterName, ScreenError> {
        Ok(self.sheets.save(&self.character).await?)
    }

    /// Replace the open character with a stored one. A failed load leaves
    /// the open sheet untouched.
    pub async fn load(&mut self, name: &str) -> Result<(), ScreenError> {
        self.sheets.reload_into(&mut self.character, name).await?;
        Ok(())
    }

    pub async fn saved_names(&self) -> Result<Vec<String>, ScreenError> {
        Ok(self.sheets.list_names().await?)
    }

    pub fn sheet_view(&self) -> SheetView {
        let character = &self.character;
        let show_bonuses = self.prefs.get_bool(SHOW_SKILL_BONUSES, true);

        let abilities = character
            .abilities()
            .map(|block| AbilityView {
                ability: block.ability(),
                score: block.score(),
                modifier: block.formatted_modifier(),
                skills: block
                    .skills()
                    .map(|(name, proficient)| SkillView {
                        name,
                        proficient,
                        bonus: show_bonuses.then(|| {
                            format_modifier(skill_bonus(
                                block.modifier(),
                                proficient,
                                character.proficiency_bonus(),
                            ))
                        }),
                    })
                    .collect(),
            })
            .collect();

        SheetView {
            name: character.name().to_string(),
            details: TextField::ALL
                .iter()
                .filter(|&&field| field != TextField::Name)
                .map(|&field| (field, character.text(field).to_string()))
                .collect(),
            level: character.level(),
            experience_points: character.experience_points(),
            proficiency_bonus: format_modifier(character.proficiency_bonus()),
            combat: NumberField::ALL
                .iter()
                .map(|&field| (field, character.number(field)))
                .collect(),
            abilities,
            race_options: self.race_options.clone(),
        }
    }
}

fn affects_passive_perception(update: &SheetUpdate) -> bool {
    match update {
        SheetUpdate::AbilityScoreChanged { ability, .. } => *ability == Ability::Wisdom,
        SheetUpdate::LevelChanged { .. } => true,
        SheetUpdate::ProficiencyChanged { ability, skill, .. } => {
            *ability == Ability::Wisdom && *skill == "Perception"
        }
        _ => false,
    }
}

fn describe(update: &SheetUpdate) -> String {
    match update {
        SheetUpdate::AbilityScoreChanged {
            ability,
            to,
            modifier,
            ..
        } => format!("{ability} {to} ({})", format_modifier(*modifier)),
        SheetUpdate::LevelChanged {
            to,
            proficiency_bonus,
            ..
        } => format!(
            "Level {to} (proficiency {})",
            format_modifier(*proficiency_bonus)
        ),
        SheetUpdate::ProficiencyChanged {
            ability,
            skill,
            proficient,
        } => {
            let mark = if *proficient { "proficient" } else { "not proficient" };
            format!("{ability} {skill}: {mark}")
        }
        SheetUpdate::TextChanged { field, to, .. } => format!("{}: {to}", field.label()),
        SheetUpdate::NumberChanged { field, to, .. } => format!("{}: {to}", field.label()),
        SheetUpdate::ExperienceChanged { to, .. } => format!("Experience Points: {to}"),
    }
}

/// Split `"key rest of line"` into its first word and the remainder.
fn split_argument(argument: &str) -> (&str, &str) {
    let argument = argument.trim();
    argument
        .split_once(char::is_whitespace)
        .map(|(key, rest)| (key, rest.trim()))
        .unwrap_or((argument, ""))
}

/// Split a `set` argument into field key and value. Skill names contain
/// spaces (`dex.sleight of hand yes`), so for a proficiency key the value is
/// the last word.
fn split_set_argument(argument: &str) -> (&str, &str) {
    let (key, rest) = split_argument(argument);
    if !key.contains('.') || rest.is_empty() {
        return (key, rest);
    }
    argument
        .trim()
        .rsplit_once(char::is_whitespace)
        .map(|(key, value)| (key.trim_end(), value))
        .unwrap_or((key, rest))
}

#[async_trait]
impl Screen for CharacterSheetScreen {
    fn name(&self) -> &str {
        CHARACTER_SHEET_TOOL
    }

    fn render(&self) -> ScreenView {
        let view = self.sheet_view();

        let mut details = ViewSection::new("Details");
        for (field, value) in &view.details {
            details = details.row(field.label(), value);
        }
        details = details
            .row("Level", view.level)
            .row("Experience Points", view.experience_points)
            .row("Proficiency Bonus", &view.proficiency_bonus);
        if !view.race_options.is_empty() {
            details = details.row("Race Options", view.race_options.join(", "));
        }

        let mut combat = ViewSection::new("Combat");
        for (field, value) in &view.combat {
            combat = combat.row(field.label(), value);
        }

        let mut screen = ScreenView::new(&view.name)
            .with_section(details)
            .with_section(combat);

        for ability in &view.abilities {
            let mut section = ViewSection::new(format!(
                "{} {} ({})",
                ability.ability, ability.score, ability.modifier
            ));
            for skill in &ability.skills {
                let mark = if skill.proficient { "[x]" } else { "[ ]" };
                let value = match &skill.bonus {
                    Some(bonus) => format!("{mark} {bonus}"),
                    None => mark.to_string(),
                };
                section = section.row(skill.name, value);
            }
            screen = screen.with_section(section);
        }

        screen
    }

    async fn on_activate(&mut self) -> Result<(), ScreenError> {
        self.prefs.refresh().await?;
        self.refresh_races().await?;
        Ok(())
    }

    async fn handle_command(
        &mut self,
        command: &str,
        argument: &str,
    ) -> Result<String, ScreenError> {
        match command {
            "set" => {
                let (field, text) = split_set_argument(argument);
                let update = self.edit(field, text)?;
                Ok(describe(&update))
            }
            "save" => {
                let name = self.save().await?;
                Ok(format!("Saved {name}"))
            }
            "load" => {
                let name = argument.trim();
                self.load(name).await?;
                Ok(format!("Loaded {name}"))
            }
            "new" => {
                self.new_character();
                Ok("Started a new character".to_string())
            }
            "list" => {
                let names = self.saved_names().await?;
                if names.is_empty() {
                    Ok("No saved characters".to_string())
                } else {
                    Ok(names.join("\n"))
                }
            }
            "races" => {
                self.refresh_races().await?;
                Ok(self.race_options.join("\n"))
            }
            "pref" => {
                let (key, text) = split_argument(argument);
                let value = serde_json::from_str(text).unwrap_or_else(|_| Value::from(text));
                self.prefs.set(key, value).await?;
                Ok(format!("{key} = {text}"))
            }
            other => Err(ScreenError::UnknownCommand(other.to_string())),
        }
    }
}
