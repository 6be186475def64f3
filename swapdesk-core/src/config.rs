//! Configuration management
//!
//! Compatible with the desktop app settings.json format:
//! ```json
//! {
//!   "app": { "sessionDurationMs": 86400000, "quoteCountdownSecs": 300, ... }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default session lifetime: 24 hours, in milliseconds.
pub const SESSION_DURATION_MS: i64 = 24 * 60 * 60 * 1000;

/// Default exchange-quote validity window, in seconds.
pub const QUOTE_COUNTDOWN_SECS: u64 = 300;

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default = "default_session_duration_ms")]
    session_duration_ms: i64,
    #[serde(default = "default_quote_countdown_secs")]
    quote_countdown_secs: u64,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            session_duration_ms: SESSION_DURATION_MS,
            quote_countdown_secs: QUOTE_COUNTDOWN_SECS,
            other: HashMap::new(),
        }
    }
}

fn default_session_duration_ms() -> i64 {
    SESSION_DURATION_MS
}

fn default_quote_countdown_secs() -> u64 {
    QUOTE_COUNTDOWN_SECS
}

/// Swapdesk configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub session_duration_ms: i64,
    pub quote_countdown_secs: u64,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_duration_ms: SESSION_DURATION_MS,
            quote_countdown_secs: QUOTE_COUNTDOWN_SECS,
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the swapdesk directory
    ///
    /// The session duration can be overridden via the SWAPDESK_SESSION_MS
    /// environment variable (for CI/testing).
    pub fn load(swapdesk_dir: &Path) -> Result<Self> {
        let settings_path = swapdesk_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let session_duration_ms = std::env::var("SWAPDESK_SESSION_MS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(raw.app.session_duration_ms);

        Ok(Self {
            session_duration_ms,
            quote_countdown_secs: raw.app.quote_countdown_secs,
            _raw_settings: raw,
        })
    }

    /// Save config to the swapdesk directory
    /// Preserves settings the core doesn't manage
    pub fn save(&self, swapdesk_dir: &Path) -> Result<()> {
        let settings_path = swapdesk_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.session_duration_ms = self.session_duration_ms;
        settings.app.quote_countdown_secs = self.quote_countdown_secs;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_missing() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.session_duration_ms, SESSION_DURATION_MS);
        assert_eq!(config.quote_countdown_secs, QUOTE_COUNTDOWN_SECS);
    }

    #[test]
    fn test_save_preserves_unmanaged_fields() {
        let dir = tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");
        std::fs::write(
            &settings_path,
            r#"{"app": {"sessionDurationMs": 5000, "theme": "dark"}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.session_duration_ms, 5000);
        config.save(dir.path()).unwrap();

        let content = std::fs::read_to_string(&settings_path).unwrap();
        assert!(content.contains("\"theme\""));
        assert!(content.contains("5000"));
    }

    #[test]
    fn test_malformed_settings_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "oops").unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.session_duration_ms, SESSION_DURATION_MS);
    }
}
