//! Picker configuration types and loading

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::picker::DEFAULT_TITLE;
use crate::preset::{DEFAULT_PICKER, PresetConfig};
use crate::registry::PresetRegistry;

/// Main picker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level", skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Preset used when `--picker` is not given
    #[serde(rename = "default-picker")]
    pub default_picker: String,

    /// Title used when `--title` is not given
    #[serde(rename = "default-title")]
    pub default_title: String,

    /// Extra presets; an id matching a builtin preset replaces it
    pub presets: BTreeMap<String, PresetConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            default_picker: DEFAULT_PICKER.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
            presets: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // An explicit path must load
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .picker.yml
        let local_config = PathBuf::from(".picker.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/picker/picker.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("picker").join("picker.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Builtin presets merged with the configured ones
    pub fn registry(&self) -> PresetRegistry {
        PresetRegistry::with_overrides(self.presets.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.default_picker, "default");
        assert_eq!(config.default_title, "Select candidate");
        assert!(config.presets.is_empty());
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
log-level: debug
default-picker: rofi
default-title: Choose a library

presets:
  rofi:
    strategy: shell
    command: rofi
    args: ["-dmenu", "-p", "$title"]
    success-exit-codes: [0]
    ignore-exit-codes: [1]
  fzf:
    strategy: shell
    command: fzf
    args: ["--prompt", "$title> "]
    success-exit-codes: [0]
    ignore-exit-codes: [130]
    entry-separator: "\n"
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.default_picker, "rofi");
        assert_eq!(config.default_title, "Choose a library");

        let registry = config.registry();
        assert_eq!(registry.ids(), vec!["default", "fzf", "rofi", "zenity"]);
        assert_eq!(registry.lookup("fzf").unwrap().args, vec!["--prompt", "$title> "]);
        assert_eq!(registry.lookup("rofi").unwrap().ignore_exit_codes, vec![1]);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
default-title: Pick a package
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.default_title, "Pick a package");
        assert_eq!(config.default_picker, "default");
        assert_eq!(config.registry().len(), 3);
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picker.yml");
        fs::write(&path, "default-picker: zenity\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.default_picker, "zenity");
    }

    #[test]
    fn test_load_explicit_path_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yml");

        let err = Config::load(Some(&path)).unwrap_err();

        assert!(err.to_string().contains("Failed to load config"));
    }
}
