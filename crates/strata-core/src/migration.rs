//! Migration records and the `<version>_<name>.<ext>` filename convention.

use crate::error::{CoreError, CoreResult};
use crate::kind::MigrationKind;
use crate::version::MigrationVersion;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A migration file found on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Migration {
    /// Version parsed from the filename prefix
    pub version: MigrationVersion,

    /// Free-form part of the filename between the version and the extension
    pub name: String,

    /// Kind inferred from the file extension
    pub kind: MigrationKind,

    /// Location of the file
    pub path: PathBuf,
}

impl Migration {
    /// Build the filename for a new migration.
    pub fn file_name(version: MigrationVersion, name: &str, kind: MigrationKind) -> String {
        format!("{}_{}.{}", version, name, kind.extension())
    }

    /// Parse a migration from its path.
    ///
    /// Returns `Ok(None)` for files whose extension is not a migration kind.
    /// Files carrying a migration extension but lacking a numeric
    /// `<version>_` prefix are an error.
    pub fn from_path(path: &Path) -> CoreResult<Option<Self>> {
        let Some(kind) = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(MigrationKind::from_extension)
        else {
            return Ok(None);
        };

        let invalid = |reason: &str| CoreError::InvalidMigrationFilename {
            path: path.display().to_string(),
            reason: reason.to_string(),
        };

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| invalid("file name is not valid UTF-8"))?;

        let (prefix, name) = stem
            .split_once('_')
            .ok_or_else(|| invalid("expected '<version>_<name>'"))?;

        let version = prefix
            .parse::<MigrationVersion>()
            .map_err(|_| invalid("version prefix must be decimal digits"))?;

        Ok(Some(Self {
            version,
            name: name.to_string(),
            kind,
            path: path.to_path_buf(),
        }))
    }
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
