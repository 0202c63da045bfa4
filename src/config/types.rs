//! Configuration types for fetchlist.

use crate::source::{default_user_agent, DEFAULT_SOURCE_URL};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are merged over whatever the config file provides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Where the record list is fetched from
    pub source: SourceConfig,
    /// TUI-specific configuration
    pub tui: TuiConfig,
}


// ============================================================================
// Source Configuration
// ============================================================================

/// Record source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SourceConfig {
    /// URL of the JSON document holding the record list
    pub url: String,
    /// Request timeout in seconds
    #[schemars(range(min = 1, max = 300))]
    pub timeout_secs: u64,
    /// `User-Agent` header sent with the request
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            timeout_secs: super::DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Event poll interval in milliseconds
    #[schemars(range(min = 16, max = 1000))]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            tick_rate_ms: super::DEFAULT_TICK_RATE_MS,
        }
    }
}

// ============================================================================
// TUI Preferences (persisted theme)
// ============================================================================

/// User preferences persisted between TUI sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fetchlist").join("preferences.json"))
    }

    /// Load preferences from disk, or return `None` if there are none.
    #[must_use]
    pub fn load() -> Option<Self> {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(path, json)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.source.url, DEFAULT_SOURCE_URL);
        assert_eq!(config.source.timeout_secs, 30);
        assert_eq!(config.tui.theme, "dark");
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: AppConfig = serde_yaml::from_str("source:\n  timeout_secs: 5\n").unwrap();
        assert_eq!(config.source.timeout_secs, 5);
        assert_eq!(config.source.url, DEFAULT_SOURCE_URL);
        assert_eq!(config.tui, TuiConfig::default());
    }

    #[test]
    fn test_preferences_roundtrip_json() {
        let prefs = TuiPreferences {
            theme: "light".to_string(),
        };
        let json = serde_json::to_string(&prefs).unwrap();
        let back: TuiPreferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }
}
