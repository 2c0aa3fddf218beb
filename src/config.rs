//! Configuration handling for the TUI

use crate::state::FlowKind;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the simulated request delay
pub const SUBMIT_DELAY_ENV: &str = "AUTHFLOW_SUBMIT_DELAY_MS";

const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;
const DEFAULT_SPLASH_DURATION_MS: u64 = 1000;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Simulated request latency in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// How long the splash logo stays up before sliding away
    pub splash_duration_ms: Option<u64>,
    /// Start in dark mode
    pub dark_mode: Option<bool>,
    /// Flows whose simulated request is rejected, with the message to show
    #[serde(default)]
    pub remote_rejections: BTreeMap<FlowKind, String>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "authflow", "authflow-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                config = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
            }
        }

        config.apply_env_override(std::env::var(SUBMIT_DELAY_ENV).ok().as_deref());
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    fn apply_env_override(&mut self, delay_ms: Option<&str>) {
        let Some(raw) = delay_ms else {
            return;
        };
        match raw.trim().parse::<u64>() {
            Ok(ms) => self.submit_delay_ms = Some(ms),
            Err(_) => tracing::warn!("Ignoring invalid {SUBMIT_DELAY_ENV}={raw:?}"),
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_duration_ms.unwrap_or(DEFAULT_SPLASH_DURATION_MS))
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.submit_delay_ms.is_none());
        assert!(config.splash_duration_ms.is_none());
        assert!(config.dark_mode.is_none());
        assert!(config.remote_rejections.is_empty());
    }

    #[test]
    fn test_default_durations() {
        let config = AppConfig::default();
        assert_eq!(config.submit_delay(), Duration::from_millis(2000));
        assert_eq!(config.splash_duration(), Duration::from_millis(1000));
        assert!(!config.dark_mode());
    }

    #[test]
    fn test_serialization() {
        let mut config = AppConfig {
            submit_delay_ms: Some(500),
            splash_duration_ms: Some(0),
            dark_mode: Some(true),
            ..Default::default()
        };
        config
            .remote_rejections
            .insert(FlowKind::Recover, "No account found".to_string());

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
        assert!(json.contains("\"recover\""));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"submit_delay_ms": 10, "unknown_field": "value"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.submit_delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_deserialize_rejects_unknown_flow() {
        let json = r#"{"remote_rejections": {"checkout": "nope"}}"#;
        assert!(serde_json::from_str::<AppConfig>(json).is_err());
    }

    #[test]
    fn test_env_override_sets_delay() {
        let mut config = AppConfig::default();
        config.apply_env_override(Some(" 150 "));
        assert_eq!(config.submit_delay(), Duration::from_millis(150));
    }

    #[test]
    fn test_env_override_ignores_garbage() {
        let mut config = AppConfig {
            submit_delay_ms: Some(300),
            ..Default::default()
        };
        config.apply_env_override(Some("fast"));
        assert_eq!(config.submit_delay_ms, Some(300));
        config.apply_env_override(None);
        assert_eq!(config.submit_delay_ms, Some(300));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = AppConfig::config_path();
    }
}
