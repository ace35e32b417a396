// ABOUTME: Configuration management for poshakh
// Handles application preferences, simulated-provider tuning and setup state

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub mod setup;

pub use setup::SetupConfig;

use crate::media::ImageRef;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,

    /// Simulated recognition tuning
    #[serde(default)]
    pub recognition: RecognitionConfig,

    /// Simulated camera capture tuning
    #[serde(default)]
    pub capture: CaptureConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Color theme
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Whether to show worn badges in the streak history
    #[serde(default = "default_true")]
    pub show_worn_badges: bool,

    /// Whether to show motivation messages on streak cards
    #[serde(default = "default_true")]
    pub show_motivation: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_worn_badges: true,
            show_motivation: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionConfig {
    /// Simulated processing delay in milliseconds
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,

    /// Probability that recognition succeeds, in [0, 1]
    #[serde(default = "default_success_rate")]
    pub success_rate: f64,
}

impl RecognitionConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
            success_rate: default_success_rate(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Simulated shutter delay in milliseconds
    #[serde(default = "default_capture_delay_ms")]
    pub capture_delay_ms: u64,

    /// Canned references the simulated camera yields
    #[serde(default = "default_sample_references")]
    pub sample_references: Vec<ImageRef>,
}

impl CaptureConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.capture_delay_ms)
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            capture_delay_ms: default_capture_delay_ms(),
            sample_references: default_sample_references(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_theme() -> String {
    "warm".to_string()
}

fn default_true() -> bool {
    true
}

fn default_processing_delay_ms() -> u64 {
    1500
}

fn default_success_rate() -> f64 {
    0.7
}

fn default_capture_delay_ms() -> u64 {
    1500
}

fn default_sample_references() -> Vec<ImageRef> {
    [
        "https://images.unsplash.com/photo-1516762689617-e1cffcef479d",
        "https://images.unsplash.com/photo-1604176424772-8d0f961e9b18",
        "https://images.unsplash.com/photo-1543163521-1bf539c55dd2",
    ]
    .into_iter()
    .map(ImageRef::new)
    .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            ui_preferences: UiPreferences::default(),
            recognition: RecognitionConfig::default(),
            capture: CaptureConfig::default(),
        }
    }
}

impl AppConfig {
    /// Base poshakh directory: `$POSHAKH_HOME` when set, else `~/.poshakh`.
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("POSHAKH_HOME") {
            return Ok(PathBuf::from(dir));
        }
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".poshakh"))
    }

    /// Path to the main config file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config/config.toml"))
    }

    /// Load the config, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        Ok(config)
    }

    /// Save the config, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.recognition.processing_delay_ms, 1500);
        assert!((config.recognition.success_rate - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.capture.sample_references.len(), 3);
        assert!(config.ui_preferences.show_worn_badges);
    }

    #[test]
    fn test_partial_toml_uses_field_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [recognition]
            success_rate = 0.5
            "#,
        )
        .unwrap();
        assert!((config.recognition.success_rate - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.recognition.processing_delay_ms, 1500);
        assert_eq!(config.ui_preferences.theme, "warm");
    }

    #[test]
    fn test_roundtrip() {
        let mut config = AppConfig::default();
        config.recognition.success_rate = 0.25;
        config.ui_preferences.theme = "mono".to_string();

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert!((parsed.recognition.success_rate - 0.25).abs() < f64::EPSILON);
        assert_eq!(parsed.ui_preferences.theme, "mono");
    }
}
