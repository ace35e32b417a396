// ABOUTME: First-run setup state and wizard-chosen preferences
// Tracks onboarding completion and supports factory reset

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::AppConfig;

/// Setup record persisted when the onboarding wizard completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupConfig {
    /// Whether onboarding has been completed
    #[serde(default)]
    pub completed: bool,

    /// When onboarding was completed (ISO 8601 timestamp)
    #[serde(default)]
    pub completed_at: Option<String>,

    /// Version of onboarding that was completed
    /// Used to trigger re-onboarding on major updates
    #[serde(default = "default_version")]
    pub version: String,

    /// Account name chosen during onboarding
    #[serde(default)]
    pub account_name: String,

    /// Style tags chosen during onboarding
    #[serde(default)]
    pub selected_styles: Vec<String>,

    /// Colour tags chosen during onboarding
    #[serde(default)]
    pub selected_colors: Vec<String>,
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            completed: false,
            completed_at: None,
            version: default_version(),
            account_name: String::new(),
            selected_styles: Vec::new(),
            selected_colors: Vec::new(),
        }
    }
}

impl SetupConfig {
    /// Path to the setup record.
    pub fn config_path() -> Result<PathBuf> {
        Ok(AppConfig::base_dir()?.join("config/setup.toml"))
    }

    /// Load the setup record from disk.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read setup record from {}", path.display()))?;

        let config: SetupConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse setup record from {}", path.display()))?;

        Ok(config)
    }

    /// Save the setup record to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize setup record")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write setup record to {}", path.display()))?;

        Ok(())
    }

    /// Mark setup as completed.
    pub fn mark_completed(&mut self) {
        self.completed = true;
        self.completed_at = Some(Utc::now().to_rfc3339());
        self.version = default_version();
    }

    /// Check if onboarding needs to be run.
    /// Returns true if:
    /// - Never completed
    /// - Major version changed (e.g., 1.x -> 2.x)
    pub fn needs_setup(&self) -> bool {
        if !self.completed {
            return true;
        }

        let current_major = env!("CARGO_PKG_VERSION").split('.').next().unwrap_or("0");
        let saved_major = self.version.split('.').next().unwrap_or("0");

        current_major != saved_major
    }

    /// Reset the in-memory record to first-run state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Perform a full factory reset, removing the entire poshakh directory.
    pub fn factory_reset() -> Result<()> {
        let base_dir = AppConfig::base_dir()?;

        if base_dir.exists() {
            fs::remove_dir_all(&base_dir)
                .with_context(|| format!("Failed to remove {}", base_dir.display()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        std::env::set_var("POSHAKH_HOME", dir.path());

        let mut config = SetupConfig::default();
        config.account_name = "Ann".to_string();
        config.selected_styles = vec!["Casual".to_string(), "Formal".to_string()];
        config.mark_completed();
        config.save().unwrap();

        let loaded = SetupConfig::load().unwrap();
        assert!(loaded.completed);
        assert_eq!(loaded.account_name, "Ann");
        assert_eq!(loaded.selected_styles.len(), 2);

        std::env::remove_var("POSHAKH_HOME");
    }

    #[test]
    fn test_default_record() {
        let config = SetupConfig::default();
        assert!(!config.completed);
        assert!(config.completed_at.is_none());
        assert!(config.selected_styles.is_empty());
    }

    #[test]
    fn test_mark_completed() {
        let mut config = SetupConfig::default();
        config.mark_completed();
        assert!(config.completed);
        assert!(config.completed_at.is_some());
    }

    #[test]
    fn test_needs_setup_before_completion() {
        assert!(SetupConfig::default().needs_setup());
    }

    #[test]
    fn test_needs_setup_after_completion() {
        let mut config = SetupConfig::default();
        config.mark_completed();
        assert!(!config.needs_setup());
    }

    #[test]
    fn test_major_version_change_triggers_setup() {
        let mut config = SetupConfig::default();
        config.mark_completed();
        config.version = "999.0.0".to_string();
        assert!(config.needs_setup());
    }

    #[test]
    fn test_reset() {
        let mut config = SetupConfig::default();
        config.mark_completed();
        config.selected_styles.push("Casual".to_string());

        config.reset();

        assert!(!config.completed);
        assert!(config.selected_styles.is_empty());
    }
}
