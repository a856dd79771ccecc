//! User preference use cases.
//!
//! Preferences are grouped per tool (screen) and stored per user. Reads
//! merge what is stored over caller-supplied defaults; writes create the
//! user's entry on first use.

mod error;

pub use error::PreferencesError;

use std::sync::Arc;

use serde_json::Value;

use crate::infrastructure::ports::{PreferencesRepo, ToolPreferenceMap, UserPreferences};

/// Preference operations use case.
pub struct PreferencesOps {
    repo: Arc<dyn PreferencesRepo>,
}

impl PreferencesOps {
    pub fn new(repo: Arc<dyn PreferencesRepo>) -> Self {
        Self { repo }
    }

    /// All preferences of one tool, stored values taking precedence over
    /// `defaults`.
    pub async fn get_tool_preferences(
        &self,
        username: &str,
        tool: &str,
        defaults: ToolPreferenceMap,
    ) -> Result<ToolPreferenceMap, PreferencesError> {
        let stored = self.load(username, tool).await?;

        let mut merged = defaults;
        if let Some(prefs) = stored.tool(tool) {
            merged.extend(prefs.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        tracing::debug!(
            user = %username,
            tool = %tool,
            keys = merged.len(),
            "Loaded tool preferences"
        );
        Ok(merged)
    }

    /// A single stored preference, or `None` when it was never set.
    pub async fn get_preference(
        &self,
        username: &str,
        tool: &str,
        key: &str,
    ) -> Result<Option<Value>, PreferencesError> {
        let stored = self.load(username, tool).await?;
        Ok(stored.get(tool, key).cloned())
    }

    /// Store one preference for a tool.
    pub async fn set_preference(
        &self,
        username: &str,
        tool: &str,
        key: &str,
        value: Value,
    ) -> Result<(), PreferencesError> {
        let mut stored = self.load(username, tool).await?;
        stored.set(tool, key, value);
        self.repo.save_preferences(username, &stored).await?;

        tracing::debug!(user = %username, tool = %tool, key = %key, "Saved preference");
        Ok(())
    }

    async fn load(&self, username: &str, tool: &str) -> Result<UserPreferences, PreferencesError> {
        if username.trim().is_empty() {
            return Err(PreferencesError::EmptyUsername);
        }
        if tool.trim().is_empty() {
            return Err(PreferencesError::EmptyToolName);
        }
        Ok(self
            .repo
            .load_preferences(username)
            .await?
            .unwrap_or_default())
    }
}
