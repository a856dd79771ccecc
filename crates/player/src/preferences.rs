//! Per-screen preference handle.

use std::sync::Arc;

use charsheet_engine::infrastructure::ports::ToolPreferenceMap;
use charsheet_engine::use_cases::{PreferencesError, PreferencesOps};
use charsheet_engine::App;
use serde_json::Value;

/// Preferences of one tool for one user, cached locally.
///
/// Starts out holding the defaults; [`ToolPreferences::refresh`] merges in
/// what is stored. Screens call it from `on_activate` so edits made
/// elsewhere are picked up whenever the screen is shown.
pub struct ToolPreferences {
    ops: Arc<PreferencesOps>,
    username: String,
    tool: String,
    defaults: ToolPreferenceMap,
    values: ToolPreferenceMap,
}

impl ToolPreferences {
    pub fn new(
        ops: Arc<PreferencesOps>,
        username: impl Into<String>,
        tool: impl Into<String>,
        defaults: ToolPreferenceMap,
    ) -> Self {
        Self {
            ops,
            username: username.into(),
            tool: tool.into(),
            values: defaults.clone(),
            defaults,
        }
    }

    /// Handle for `tool` owned by the configured user of `app`.
    pub fn for_app(app: &App, tool: impl Into<String>, defaults: ToolPreferenceMap) -> Self {
        Self::new(
            app.use_cases.preferences.clone(),
            app.config.username.clone(),
            tool,
            defaults,
        )
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Reload stored values over the defaults.
    pub async fn refresh(&mut self) -> Result<(), PreferencesError> {
        self.values = self
            .ops
            .get_tool_preferences(&self.username, &self.tool, self.defaults.clone())
            .await?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Boolean preference; `default` when unset or not a boolean.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Store a preference and update the local copy.
    pub async fn set(&mut self, key: &str, value: Value) -> Result<(), PreferencesError> {
        self.ops
            .set_preference(&self.username, &self.tool, key, value.clone())
            .await?;
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
