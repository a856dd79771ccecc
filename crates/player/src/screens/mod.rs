//! Screens and the router that switches between them.
//!
//! A screen is anything that can render itself and react to being shown or
//! hidden. Screens never reach for global state: everything they need is
//! handed to them at construction.

mod character_sheet;
mod roster;
mod router;
mod view;

pub use character_sheet::{
    AbilityView, CharacterSheetScreen, SheetField, SheetView, SkillView, CHARACTER_SHEET_TOOL,
};
pub use roster::{RosterScreen, ROSTER_TOOL};
pub use router::ScreenRouter;
pub use view::{ScreenView, ViewRow, ViewSection};

use async_trait::async_trait;

use crate::error::ScreenError;

/// Capability shared by every screen.
#[async_trait]
pub trait Screen: Send {
    /// Unique name used to show the screen.
    fn name(&self) -> &str;

    fn render(&self) -> ScreenView;

    /// Called each time the screen becomes current.
    async fn on_activate(&mut self) -> Result<(), ScreenError> {
        Ok(())
    }

    /// Called when another screen replaces this one.
    async fn on_deactivate(&mut self) -> Result<(), ScreenError> {
        Ok(())
    }

    /// Run a text command. Returns a message for the user.
    async fn handle_command(
        &mut self,
        command: &str,
        _argument: &str,
    ) -> Result<String, ScreenError> {
        Err(ScreenError::UnknownCommand(command.to_string()))
    }
}
