//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod characters;
pub mod clock;
pub mod ports;
pub mod preferences;
pub mod races;
pub mod sqlite;
