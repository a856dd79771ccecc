//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod character_sheet;
pub mod preferences;

pub use character_sheet::{CharacterSheetError, CharacterSheetUseCases, RaceCatalog};
pub use preferences::{PreferencesError, PreferencesOps};
