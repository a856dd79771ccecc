//! Data carried across the preferences port.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Preferences of one tool or screen, keyed by preference name.
pub type ToolPreferenceMap = Map<String, Value>;

/// Everything stored for one user: preferences grouped by tool name.
///
/// Stored as a single JSON object, e.g.
/// `{"Character Sheet": {"show_bonuses": true}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserPreferences(BTreeMap<String, ToolPreferenceMap>);

impl UserPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored preferences of one tool, if any were ever written.
    pub fn tool(&self, tool: &str) -> Option<&ToolPreferenceMap> {
        self.0.get(tool)
    }

    pub fn get(&self, tool: &str, key: &str) -> Option<&Value> {
        self.0.get(tool).and_then(|prefs| prefs.get(key))
    }

    /// Set one preference, creating the tool entry on first write.
    /// Returns the previous value.
    pub fn set(&mut self, tool: &str, key: &str, value: Value) -> Option<Value> {
        self.0
            .entry(tool.to_string())
            .or_default()
            .insert(key.to_string(), value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
