//! Configuration handling for the contact form

use crate::validation::FieldId;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Render password fields masked (default: true)
    pub mask_passwords: Option<bool>,
    /// Field focused on start and after each accepted submit
    pub initial_focus: Option<String>,
    /// Text shown after an accepted submit
    pub confirmation_message: Option<String>,
}

/// Default confirmation shown when a submit is accepted
pub const DEFAULT_CONFIRMATION: &str = "Form submitted successfully";

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact-form", "contact-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                tracing::debug!("loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
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

    /// Resolve the configured initial focus, falling back to the first field
    pub fn initial_focus_field(&self) -> FieldId {
        match self.initial_focus.as_deref().map(str::parse::<FieldId>) {
            Some(Ok(field)) => field,
            Some(Err(err)) => {
                tracing::warn!("ignoring initial_focus: {err}");
                FieldId::ALL[0]
            }
            None => FieldId::ALL[0],
        }
    }

    pub fn confirmation_message(&self) -> &str {
        self.confirmation_message
            .as_deref()
            .unwrap_or(DEFAULT_CONFIRMATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.mask_passwords.is_none());
        assert!(config.initial_focus.is_none());
        assert!(config.confirmation_message.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = FormConfig {
            mask_passwords: Some(false),
            initial_focus: Some("firstName".to_string()),
            confirmation_message: Some("Thanks!".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: FormConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.mask_passwords, Some(false));
        assert_eq!(parsed.initial_focus, Some("firstName".to_string()));
        assert_eq!(parsed.confirmation_message, Some("Thanks!".to_string()));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.mask_passwords.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"mask_passwords": true, "unknown_field": "value"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.mask_passwords, Some(true));
    }

    #[test]
    fn test_initial_focus_field() {
        let config = FormConfig {
            initial_focus: Some("mobile".to_string()),
            ..Default::default()
        };
        assert_eq!(config.initial_focus_field(), FieldId::Mobile);
    }

    #[test]
    fn test_unknown_initial_focus_falls_back() {
        let config = FormConfig {
            initial_focus: Some("surname".to_string()),
            ..Default::default()
        };
        assert_eq!(config.initial_focus_field(), FieldId::Gender);
        assert_eq!(FormConfig::default().initial_focus_field(), FieldId::Gender);
    }

    #[test]
    fn test_confirmation_message_default() {
        assert_eq!(
            FormConfig::default().confirmation_message(),
            DEFAULT_CONFIRMATION
        );
    }

    #[test]
    fn test_load_returns_ok() {
        // Returns the default config when no file exists
        let result = FormConfig::load();
        assert!(result.is_ok());
    }
}
