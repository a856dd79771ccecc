//! Charsheet Player crate.
//!
//! Presentation for the character sheet: screens, the router that switches
//! between them, and per-screen preferences. Rendering is renderer-neutral;
//! screens produce a [`ScreenView`] that any front end can draw.

pub mod error;
pub mod preferences;
pub mod screens;

#[cfg(test)]
mod testing;

pub use error::ScreenError;
pub use preferences::ToolPreferences;
pub use screens::{
    CharacterSheetScreen, RosterScreen, Screen, ScreenRouter, ScreenView, SheetField, SheetView,
};
