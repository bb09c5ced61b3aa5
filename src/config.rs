//! Configuration handling for the TUI

use crate::state::{FormOptions, ValidationMode};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides the config file location
pub const CONFIG_PATH_ENV: &str = "REGISTRATION_TUI_CONFIG";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationConfig {
    /// When field errors refresh: on every change or only on submit
    pub validation_mode: Option<ValidationMode>,
    /// Start a fresh entry right after a successful submission
    pub reset_on_submit: Option<bool>,
    /// Append submissions to this JSON-lines file instead of logging them
    pub submissions_path: Option<PathBuf>,
    /// Accent colour of the UI (any ratatui colour name or #rrggbb)
    pub primary_color: Option<String>,
}

impl RegistrationConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "registration", "registration-tui")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Path of the log file the tracing subscriber writes to
    pub fn log_file_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("registration-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: RegistrationConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Controller options derived from this configuration
    pub fn form_options(&self) -> FormOptions {
        FormOptions {
            validation_mode: self.validation_mode.unwrap_or_default(),
            reset_on_submit: self.reset_on_submit.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegistrationConfig::default();
        assert!(config.validation_mode.is_none());
        assert!(config.reset_on_submit.is_none());
        assert!(config.submissions_path.is_none());
        assert!(config.primary_color.is_none());
    }

    #[test]
    fn test_default_form_options() {
        let options = RegistrationConfig::default().form_options();
        assert_eq!(options.validation_mode, ValidationMode::OnChange);
        assert!(!options.reset_on_submit);
    }

    #[test]
    fn test_serialization() {
        let config = RegistrationConfig {
            validation_mode: Some(ValidationMode::OnSubmit),
            reset_on_submit: Some(true),
            submissions_path: Some(PathBuf::from("/tmp/submissions.jsonl")),
            primary_color: Some("blue".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"validationMode\":\"onSubmit\""));
        let parsed: RegistrationConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.validation_mode, Some(ValidationMode::OnSubmit));
        assert_eq!(parsed.reset_on_submit, Some(true));
        assert_eq!(
            parsed.submissions_path,
            Some(PathBuf::from("/tmp/submissions.jsonl"))
        );
        assert_eq!(parsed.primary_color, Some("blue".to_string()));

        let options = parsed.form_options();
        assert_eq!(options.validation_mode, ValidationMode::OnSubmit);
        assert!(options.reset_on_submit);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: RegistrationConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.validation_mode.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"resetOnSubmit": true, "unknown_field": "value"}"#;
        let parsed: RegistrationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.reset_on_submit, Some(true));
    }

    #[test]
    fn test_invalid_validation_mode_is_rejected() {
        let json = r#"{"validationMode": "onBlur"}"#;
        assert!(serde_json::from_str::<RegistrationConfig>(json).is_err());
    }

    #[test]
    fn test_load_through_env_override() {
        let dir = std::env::temp_dir().join(format!(
            "registration-tui-config-{}",
            uuid::Uuid::new_v4()
        ));
        let path = dir.join("config.json");
        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, r#"{"resetOnSubmit": true, "validationMode": "onSubmit"}"#).unwrap();
        std::env::set_var(CONFIG_PATH_ENV, &path);

        let loaded = RegistrationConfig::load();

        std::env::remove_var(CONFIG_PATH_ENV);
        let _ = fs::remove_dir_all(&dir);

        let loaded = loaded.unwrap();
        assert_eq!(loaded.reset_on_submit, Some(true));
        assert_eq!(loaded.validation_mode, Some(ValidationMode::OnSubmit));
    }

    #[test]
    fn test_log_file_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = RegistrationConfig::log_file_path();
    }
}
