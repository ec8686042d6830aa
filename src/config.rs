//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rdm-deposit/rdm-deposit.toml`
//! 3. Local config: `<dir>/.rdm-deposit.toml`
//! 4. Environment variables: `RDMDEPOSIT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::DEFAULT_CATEGORY;

const APP_NAME: &str = "rdm-deposit";
const LOCAL_CONFIG_NAME: &str = ".rdm-deposit.toml";

/// Unified configuration for rdm-deposit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Category key used when none is given (default: "community")
    pub category: String,
    /// Separator between segments of a leaf path (default: ".")
    pub path_separator: String,
    /// Print leaf paths alongside values by default
    pub show_paths: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            path_separator: ".".to_string(),
            show_paths: false,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub category: Option<String>,
    pub path_separator: Option<String>,
    pub show_paths: Option<bool>,
}

/// Get the XDG config directory for rdm-deposit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(format!("{APP_NAME}.toml")))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(LOCAL_CONFIG_NAME)
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            category: overlay
                .category
                .clone()
                .unwrap_or_else(|| self.category.clone()),
            path_separator: overlay
                .path_separator
                .clone()
                .unwrap_or_else(|| self.path_separator.clone()),
            show_paths: overlay.show_paths.unwrap_or(self.show_paths),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.rdm-deposit.toml`
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/rdm-deposit/rdm-deposit.toml`
    /// 3. Local config: `<local_dir>/.rdm-deposit.toml`
    /// 4. Environment variables: `RDMDEPOSIT_*` prefix
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = local_dir {
            current = current.merge_file(&local_config_path(dir))?;
        }

        Self::apply_env_overrides(current)
    }

    /// Merge a single config file onto self, if it exists.
    pub fn merge_file(&self, path: &Path) -> Result<Self, ApplicationError> {
        if !path.exists() {
            return Ok(self.clone());
        }
        let raw = load_raw_settings(path)?;
        Ok(self.merge_with(&raw))
    }

    /// Apply RDMDEPOSIT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("RDMDEPOSIT").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("category") {
            settings.category = val;
        }
        if let Ok(val) = config.get_string("path_separator") {
            settings.path_separator = val;
        }
        if let Ok(val) = config.get_bool("show_paths") {
            settings.show_paths = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# rdm-deposit configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/rdm-deposit/rdm-deposit.toml
#   Local:  <dir>/.rdm-deposit.toml
#   Env:    RDMDEPOSIT_* environment variables

# Category key for labels when none is given ("person" or "community")
# category = "community"

# Separator between segments of a leaf path
# path_separator = "."

# Print leaf paths alongside values
# show_paths = false
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_defaults_then_category_is_community() {
        let settings = Settings::default();
        assert_eq!(settings.category, "community");
        assert_eq!(settings.path_separator, ".");
        assert!(!settings.show_paths);
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_values() {
        let raw = RawSettings {
            category: Some("person".into()),
            ..Default::default()
        };

        let merged = Settings::default().merge_with(&raw);

        assert_eq!(merged.category, "person");
        assert_eq!(merged.path_separator, ".");
    }

    #[test]
    fn given_missing_file_when_merging_file_then_returns_unchanged() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::default()
            .merge_file(&temp.path().join("absent.toml"))
            .unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn given_invalid_toml_when_merging_file_then_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        std::fs::write(&path, "category = [").unwrap();

        let err = Settings::default().merge_file(&path).unwrap_err();

        assert!(matches!(err, ApplicationError::Config { .. }));
    }

    #[test]
    fn given_settings_when_serializing_then_round_trips_through_template_keys() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("category = \"community\""));
        let template = Settings::template();
        assert!(template.contains("# category"));
        assert!(template.contains("# path_separator"));
    }
}
