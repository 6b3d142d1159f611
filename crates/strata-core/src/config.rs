//! Configuration types and parsing for strata.yml

use crate::error::{CoreError, CoreResult};
use crate::kind::MigrationKind;
use crate::version::MigrationVersion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Config file names searched in a project directory, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["strata.yml", "strata.yaml"];

/// Default directory holding migration files.
pub const DEFAULT_MIGRATIONS_DIR: &str = "migrations";

/// Project configuration from strata.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory containing migration files, relative to the project root
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,

    /// Kind used by `strata create` when none is given
    #[serde(default)]
    pub default_kind: MigrationKind,

    /// Lowest version considered when indexing existing migrations
    #[serde(default)]
    pub min_version: MigrationVersion,

    /// Highest version considered when indexing existing migrations
    #[serde(default = "default_max_version")]
    pub max_version: MigrationVersion,

    /// Template files replacing the built-in template of a kind
    #[serde(default)]
    pub templates: BTreeMap<MigrationKind, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            migrations_dir: default_migrations_dir(),
            default_kind: MigrationKind::default(),
            min_version: MigrationVersion::ZERO,
            max_version: default_max_version(),
            templates: BTreeMap::new(),
        }
    }
}

fn default_migrations_dir() -> String {
    DEFAULT_MIGRATIONS_DIR.to_string()
}

fn default_max_version() -> MigrationVersion {
    MigrationVersion::MAX
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for strata.yml or strata.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::load(&path),
            None => Err(CoreError::ConfigNotFound {
                path: dir.join(CONFIG_FILE_NAMES[0]).display().to_string(),
            }),
        }
    }

    /// Like [`Config::load_from_dir`], but falls back to defaults when the
    /// directory has no config file.
    pub fn load_from_dir_or_default(dir: &Path) -> CoreResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::load(&path),
            None => {
                log::debug!("No config file in {}; using defaults", dir.display());
                Ok(Self::default())
            }
        }
    }

    /// Path of the config file in `dir`, if one exists.
    pub fn find_in_dir(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Migrations directory resolved against the project root.
    pub fn migrations_dir_absolute(&self, root: &Path) -> PathBuf {
        resolve(root, &self.migrations_dir)
    }

    /// Template override file for `kind`, resolved against the project root.
    pub fn template_path(&self, kind: MigrationKind, root: &Path) -> Option<PathBuf> {
        self.templates.get(&kind).map(|p| resolve(root, p))
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.migrations_dir.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "migrations_dir cannot be empty".to_string(),
            });
        }

        if self.min_version > self.max_version {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "min_version ({}) is greater than max_version ({})",
                    self.min_version, self.max_version
                ),
            });
        }

        if let Some((kind, _)) = self.templates.iter().find(|(_, p)| p.trim().is_empty()) {
            return Err(CoreError::ConfigInvalid {
                message: format!("template path for kind '{kind}' cannot be empty"),
            });
        }

        Ok(())
    }
}

fn resolve(root: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
