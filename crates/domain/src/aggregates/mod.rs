//! Aggregate roots - domain objects that own their related data
//!
//! # Rustic DDD Principles
//!
//! | Java DDD Pattern | Rustic Equivalent |
//! |------------------|-------------------|
//! | Private fields + getters | Private fields + accessors, setters recompute |
//! | Aggregate root guards | Ownership (borrow checker enforces) |
//! | Factory pattern | `::new()` + `from_record()` |
//! | Domain Events | Return enums from mutations |

pub mod character;

pub use character::{AbilityBlock, Character, DEFAULT_ABILITY_SCORE};
