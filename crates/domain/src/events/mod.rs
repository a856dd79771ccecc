//! Domain events returned from aggregate mutations

mod character_events;

pub use character_events::SheetUpdate;
