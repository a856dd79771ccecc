//! Charsheet Engine library.
//!
//! Everything between the character sheet domain and the outside world.
//!
//! ## Structure
//!
//! - `use_cases/` - Save/load/list characters, user preferences
//! - `infrastructure/` - Port traits and their SQLite adapters
//! - `config` - Environment configuration
//! - `app` - Application composition

pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use config::AppConfig;
