//! Lists the saved characters.

use std::sync::Arc;

use async_trait::async_trait;
use charsheet_engine::use_cases::CharacterSheetUseCases;
use charsheet_engine::App;

use crate::error::ScreenError;
use crate::screens::{Screen, ScreenView, ViewSection};

pub const ROSTER_TOOL: &str = "Roster";

/// Saved character names, refreshed every time the screen is shown.
pub struct RosterScreen {
    sheets: Arc<CharacterSheetUseCases>,
    names: Vec<String>,
}

impl RosterScreen {
    pub fn new(sheets: Arc<CharacterSheetUseCases>) -> Self {
        Self {
            sheets,
            names: Vec::new(),
        }
    }

    pub fn for_app(app: &App) -> Self {
        Self::new(app.use_cases.character_sheet.clone())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub async fn refresh(&mut self) -> Result<(), ScreenError> {
        self.names = self.sheets.list_names().await?;
        Ok(())
    }
}

#[async_trait]
impl Screen for RosterScreen {
    fn name(&self) -> &str {
        ROSTER_TOOL
    }

    fn render(&self) -> ScreenView {
        let mut section = ViewSection::new(format!("{} saved", self.names.len()));
        for (i, name) in self.names.iter().enumerate() {
            section = section.row(format!("{}.", i + 1), name);
        }
        ScreenView::new(ROSTER_TOOL).with_section(section)
    }

    async fn on_activate(&mut self) -> Result<(), ScreenError> {
        self.refresh().await
    }

    async fn handle_command(
        &mut self,
        command: &str,
        _argument: &str,
    ) -> Result<String, ScreenError> {
        match command {
            "refresh" => {
                self.refresh().await?;
                Ok(format!("{} saved characters", self.names.len()))
            }
            other => Err(ScreenError::UnknownCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::create_test_app;
    use charsheet_domain::Character;

    #[tokio::test]
    async fn activation_picks_up_new_saves() {
        let (_dir, app) = create_test_app().await;
        let mut roster = RosterScreen::for_app(&app);

        roster.on_activate().await.unwrap();
        assert!(roster.names().is_empty());

        for name in ["Regdar", "Eberk"] {
            let mut character = Character::new();
            character.set_name(name);
            app.use_cases.character_sheet.save(&character).await.unwrap();
        }
        assert!(roster.names().is_empty());

        roster.on_activate().await.unwrap();
        assert_eq!(roster.names(), ["Eberk", "Regdar"]);

        let view = roster.render();
        let section = view.section("2 saved").unwrap();
        assert_eq!(section.value("1."), Some("Eberk"));
        assert_eq!(section.value("2."), Some("Regdar"));
    }
}
