//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Title given to a new form when the config does not override it
pub const DEFAULT_FORM_TITLE: &str = "Untitled Form";

/// User configuration for the form builder
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BuilderConfig {
    /// Title given to freshly created forms
    pub default_form_title: Option<String>,
    /// Save the current form as a draft when entering the preview
    pub autosave_on_preview: Option<bool>,
}

impl BuilderConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formbuilder", "formbuilder-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: BuilderConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
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

    /// Title for new forms
    pub fn form_title(&self) -> &str {
        self.default_form_title
            .as_deref()
            .unwrap_or(DEFAULT_FORM_TITLE)
    }

    /// Whether entering the preview saves a draft first (defaults to on)
    pub fn autosave_on_preview(&self) -> bool {
        self.autosave_on_preview.unwrap_or(true)
    }
}
