//! Runtime configuration read from the environment.

use std::path::Path;

/// Database file used when `CHARSHEET_DB` is unset.
pub const DEFAULT_DB_PATH: &str = "dnd5e.db";

/// User whose preferences are read when `CHARSHEET_USER` is unset.
pub const DEFAULT_USERNAME: &str = "default";

/// Explicit configuration handed to the composition root and, from there,
/// to every screen that needs storage or preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite file holding characters and user preferences.
    pub db_path: String,
    /// Owner of the preferences read and written by screens.
    pub username: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            username: DEFAULT_USERNAME.to_string(),
        }
    }
}

impl AppConfig {
    /// Read `CHARSHEET_DB` and `CHARSHEET_USER` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Missing or blank values fall back to the
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            db_path: read_or_default(&lookup, "CHARSHEET_DB", DEFAULT_DB_PATH),
            username: read_or_default(&lookup, "CHARSHEET_USER", DEFAULT_USERNAME),
        }
    }
}

fn read_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        Some(_) => {
            tracing::warn!(
                key = %key,
                default = %default,
                "Blank configuration value, using default"
            );
            default.to_string()
        }
        None => default.to_string(),
    }
}

/// Load `.env.local` then `.env` from the workspace root, if present.
///
/// Values already set in the process environment win.
pub fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
