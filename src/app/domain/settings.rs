use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::warn;

use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

impl ThemePreference {
    /// Value written to the key-value store
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// Resolve to a concrete scheme; `System` follows the desktop.
    pub fn is_dark(&self, system_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// Key the theme preference is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default = "default_theme")]
    pub default_theme: ThemePreference,

    /// Distance from the viewport top (px) at which a section becomes active
    #[serde(default = "default_activation_threshold")]
    pub activation_threshold: i32,

    /// Scroll offset (px) past which the header turns solid
    #[serde(default = "default_header_threshold")]
    pub header_threshold: u32,

    #[serde(default = "default_type_interval_ms")]
    pub type_interval_ms: u64,

    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,

    #[serde(default = "default_delete_interval_ms")]
    pub delete_interval_ms: u64,

    #[serde(default = "default_loading_ms")]
    pub loading_ms: u64,

    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    #[serde(default = "default_scroll_poll_ms")]
    pub scroll_poll_ms: u64,
}

fn default_storage_key() -> String {
    "portfolio-theme".to_string()
}

fn default_theme() -> ThemePreference {
    ThemePreference::Dark
}

fn default_activation_threshold() -> i32 {
    100
}

fn default_header_threshold() -> u32 {
    10
}

fn default_type_interval_ms() -> u64 {
    100
}

fn default_pause_ms() -> u64 {
    2000
}

fn default_delete_interval_ms() -> u64 {
    50
}

fn default_loading_ms() -> u64 {
    1500
}

fn default_submit_delay_ms() -> u64 {
    1500
}

fn default_scroll_poll_ms() -> u64 {
    33 // ~30 Hz
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default_theme: default_theme(),
            activation_threshold: default_activation_threshold(),
            header_threshold: default_header_threshold(),
            type_interval_ms: default_type_interval_ms(),
            pause_ms: default_pause_ms(),
            delete_interval_ms: default_delete_interval_ms(),
            loading_ms: default_loading_ms(),
            submit_delay_ms: default_submit_delay_ms(),
            scroll_poll_ms: default_scroll_poll_ms(),
        }
    }
}

impl PortfolioConfig {
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn scroll_poll_interval(&self) -> Duration {
        // A zero interval would spin the event loop
        Duration::from_millis(self.scroll_poll_ms.max(1))
    }

    /// Load config from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Self>(&contents) {
                Ok(config) => match config.validate() {
                    Ok(()) => config,
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "rejecting config, using defaults");
                        Self::default()
                    }
                },
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                if let Err(e) = default.save_to(path) {
                    warn!(error = %e, "could not write default config");
                }
                default
            }
        }
    }

    /// Reject values the page cannot run with
    pub fn validate(&self) -> Result<(), AppError> {
        if self.storage_key.trim().is_empty() {
            return Err(AppError::Config("storage_key must not be empty".to_string()));
        }
        if self.type_interval_ms == 0 || self.delete_interval_ms == 0 {
            return Err(AppError::Config("typing intervals must be positive".to_string()));
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("dev-portfolio");
        path.push("config.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PortfolioConfig::default();
        assert_eq!(config.storage_key, "portfolio-theme");
        assert_eq!(config.default_theme, ThemePreference::Dark);
        assert_eq!(config.activation_threshold, 100);
        assert_eq!(config.header_threshold, 10);
        assert_eq!(config.type_interval_ms, 100);
        assert_eq!(config.pause_ms, 2000);
        assert_eq!(config.delete_interval_ms, 50);
        assert_eq!(config.submit_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"activation_threshold": 64}"#;
        let config: PortfolioConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.activation_threshold, 64);
        assert_eq!(config.storage_key, "portfolio-theme");
    }

    #[test]
    fn test_theme_preference_serialization() {
        let config = PortfolioConfig {
            default_theme: ThemePreference::System,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"system\""));
    }

    #[test]
    fn test_theme_preference_parse() {
        assert_eq!(ThemePreference::parse("light"), Some(ThemePreference::Light));
        assert_eq!(ThemePreference::parse("dark\n"), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::parse("system"), Some(ThemePreference::System));
        assert_eq!(ThemePreference::parse("Dark"), None);
        assert_eq!(ThemePreference::parse(""), None);
    }

    #[test]
    fn test_is_dark_resolution() {
        assert!(!ThemePreference::Light.is_dark(true));
        assert!(ThemePreference::Dark.is_dark(false));
        assert!(ThemePreference::System.is_dark(true));
        assert!(!ThemePreference::System.is_dark(false));
    }

    #[test]
    fn test_zero_poll_interval_is_clamped() {
        let config = PortfolioConfig {
            scroll_poll_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.scroll_poll_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_load_writes_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dev-portfolio").join("config.json");
        let config = PortfolioConfig::load_from(&path);
        assert_eq!(config, PortfolioConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_falls_back_on_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json at all").unwrap();
        assert_eq!(PortfolioConfig::load_from(&path), PortfolioConfig::default());
    }

    #[test]
    fn test_validate_rejects_unusable_values() {
        assert!(PortfolioConfig::default().validate().is_ok());

        let blank_key = PortfolioConfig {
            storage_key: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(blank_key.validate(), Err(AppError::Config(_))));

        let frozen = PortfolioConfig {
            type_interval_ms: 0,
            ..Default::default()
        };
        assert!(frozen.validate().is_err());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"storage_key": "", "pause_ms": 900}"#).unwrap();
        assert_eq!(PortfolioConfig::load_from(&path), PortfolioConfig::default());
    }
}
