//! Migration kinds and their file extensions.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The flavour of a migration file.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MigrationKind {
    /// Declarative SQL script with up and down sections
    #[default]
    Sql,
    /// Go source registering up and down functions
    Go,
}

impl MigrationKind {
    /// Every supported kind.
    pub const ALL: [MigrationKind; 2] = [MigrationKind::Sql, MigrationKind::Go];

    /// Name used on the command line and in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            MigrationKind::Sql => "sql",
            MigrationKind::Go => "go",
        }
    }

    /// File extension (without the dot) of migrations of this kind.
    pub fn extension(self) -> &'static str {
        match self {
            MigrationKind::Sql => "sql",
            MigrationKind::Go => "go",
        }
    }

    /// Look up the kind owning a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.extension() == ext)
    }
}

impl fmt::Display for MigrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MigrationKind {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sql" => Ok(MigrationKind::Sql),
            "go" => Ok(MigrationKind::Go),
            _ => Err(CoreError::UnknownMigrationKind {
                kind: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "kind_test.rs"]
mod tests;
