//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/menutree/menutree.toml`
//! 3. Local config: explicit file passed with `--config`
//! 4. Environment variables: `MENUTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{ChildOrder, ForestOptions, OrphanPolicy, PATH_DELIMITER};

/// Unified configuration for menutree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Orphan handling (default: drop)
    pub orphan_policy: OrphanPolicy,
    /// Sibling ordering (default: input order)
    pub child_order: ChildOrder,
    /// Separator between ids in `parent_path` (default: `/`)
    pub path_delimiter: char,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            orphan_policy: OrphanPolicy::default(),
            child_order: ChildOrder::default(),
            path_delimiter: PATH_DELIMITER,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub orphan_policy: Option<OrphanPolicy>,
    pub child_order: Option<ChildOrder>,
    pub path_delimiter: Option<char>,
}

/// Get the XDG config directory for menutree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "menutree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("menutree.toml"))
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

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Options for the forest builder.
    pub fn forest_options(&self) -> ForestOptions {
        ForestOptions::new(self.orphan_policy, self.child_order)
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            orphan_policy: overlay.orphan_policy.unwrap_or(self.orphan_policy),
            child_order: overlay.child_order.unwrap_or(self.child_order),
            path_delimiter: overlay.path_delimiter.unwrap_or(self.path_delimiter),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_config` - Optional explicit config file; it must exist
    pub fn load(local_config: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|path| path.exists());
        Self::load_from(global.as_deref(), local_config)
    }

    /// Layered load with an explicit global file, bypassing XDG lookup.
    pub fn load_from(global: Option<&Path>, local_config: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global {
            let raw = load_raw_settings(global_path)?;
            current = current.merge_with(&raw);
        }

        // 3. Local config
        if let Some(local_path) = local_config {
            if !local_path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", local_path.display()),
                });
            }
            let raw = load_raw_settings(local_path)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables (explicit override)
        Self::apply_env_overrides(current)
    }

    /// Apply MENUTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("MENUTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("orphan_policy") {
            settings.orphan_policy = val.parse()?;
        }
        if let Ok(val) = config.get_string("child_order") {
            settings.child_order = val.parse()?;
        }
        if let Ok(val) = config.get_string("path_delimiter") {
            let mut chars = val.chars();
            settings.path_delimiter = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(ApplicationError::Config {
                        message: format!("path_delimiter must be a single character: {:?}", val),
                    })
                }
            };
        }

        Ok(settings)
    }
}
