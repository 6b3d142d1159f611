//! Directory index of existing migrations.
//!
//! The index reads a single flat directory, keeps files that follow the
//! `<version>_<name>.<ext>` convention, and orders them by version. The
//! create path only ever asks it for [`MigrationIndex::last`].

use crate::error::{CoreError, CoreResult};
use crate::migration::Migration;
use crate::version::MigrationVersion;
use std::fs;
use std::path::{Path, PathBuf};

/// Ordered collection of the migrations in one directory.
#[derive(Debug, Clone)]
pub struct MigrationIndex {
    dir: PathBuf,
    migrations: Vec<Migration>,
}

impl MigrationIndex {
    /// Collect every migration in `dir`.
    pub fn collect(dir: &Path) -> CoreResult<Self> {
        Self::collect_range(dir, MigrationVersion::ZERO, MigrationVersion::MAX)
    }

    /// Collect the migrations in `dir` whose version lies in `min..=max`.
    ///
    /// A directory that does not exist yields an empty index.
    pub fn collect_range(
        dir: &Path,
        min: MigrationVersion,
        max: MigrationVersion,
    ) -> CoreResult<Self> {
        if !dir.exists() {
            log::debug!(
                "Migrations directory {} does not exist; index is empty",
                dir.display()
            );
            return Ok(Self::from_migrations(dir, Vec::new()));
        }

        let entries = fs::read_dir(dir).map_err(|e| CoreError::IoWithPath {
            path: dir.display().to_string(),
            source: e,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CoreError::IoWithPath {
                path: dir.display().to_string(),
                source: e,
            })?;
            let path = entry.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut migrations = Vec::new();
        for path in paths {
            match Migration::from_path(&path) {
                Ok(Some(migration)) if migration.version >= min && migration.version <= max => {
                    migrations.push(migration);
                }
                Ok(Some(migration)) => {
                    log::debug!(
                        "Skipping {}: version {} outside {}..={}",
                        path.display(),
                        migration.version,
                        min,
                        max
                    );
                }
                Ok(None) => log::debug!("Ignoring non-migration file {}", path.display()),
                Err(e) => log::warn!("Ignoring {}: {}", path.display(), e),
            }
        }

        Ok(Self::from_migrations(dir, migrations))
    }

    /// Build an index from already-parsed migrations, ordering them by version.
    pub fn from_migrations(dir: &Path, mut migrations: Vec<Migration>) -> Self {
        migrations.sort_by_key(|m| m.version);
        Self {
            dir: dir.to_path_buf(),
            migrations,
        }
    }

    /// Directory this index was collected from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The highest-versioned migration, or `None` when the index is empty.
    pub fn last(&self) -> Option<&Migration> {
        self.migrations.last()
    }

    /// Number of migrations in the index.
    pub fn len(&self) -> usize {
        self.migrations.len()
    }

    /// Whether the index holds no migrations.
    pub fn is_empty(&self) -> bool {
        self.migrations.is_empty()
    }

    /// Iterate over migrations in ascending version order.
    pub fn iter(&self) -> std::slice::Iter<'_, Migration> {
        self.migrations.iter()
    }

    /// Versions in ascending order.
    pub fn versions(&self) -> Vec<MigrationVersion> {
        self.migrations.iter().map(|m| m.version).collect()
    }
}

impl<'a> IntoIterator for &'a MigrationIndex {
    type Item = &'a Migration;
    type IntoIter = std::slice::Iter<'a, Migration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod tests;
