//! Shared helpers for CLI commands

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use strata_core::Config;

use crate::cli::GlobalArgs;

/// Project directory plus its configuration.
pub(crate) struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    /// Migrations directory: `override_dir` if given, else the configured one.
    pub(crate) fn migrations_dir(&self, override_dir: Option<&str>) -> PathBuf {
        match override_dir {
            Some(dir) => self.resolve(dir),
            None => self.config.migrations_dir_absolute(&self.root),
        }
    }

    /// Resolve a command-line path against the project root.
    pub(crate) fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// Load the project config from `--config`, or from the project directory
/// (defaults when it has no strata.yml).
pub(crate) fn load_project(global: &GlobalArgs) -> Result<Project> {
    let root = PathBuf::from(&global.project_dir);
    let config = match &global.config {
        Some(path) => Config::load(Path::new(path)),
        None => Config::load_from_dir_or_default(&root),
    }
    .context("Failed to load config")?;

    Ok(Project { root, config })
}
