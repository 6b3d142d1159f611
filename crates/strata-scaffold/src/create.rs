//! Create orchestrator: index, version, template, file.

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::materialize::materialize;
use std::path::{Path, PathBuf};
use strata_core::{
    next_version, Clock, Migration, MigrationIndex, MigrationKind, MigrationVersion, SystemClock,
};
use strata_template::{MigrationTemplate, TemplateRegistry};

/// What to create.
#[derive(Debug, Clone, Copy)]
pub struct CreateRequest<'a> {
    /// Directory holding the migrations
    pub dir: &'a Path,
    /// Free-form migration name placed after the version
    pub name: &'a str,
    /// Kind selecting the file extension and built-in template
    pub kind: MigrationKind,
    /// Template used instead of the registry's template for `kind`
    pub template: Option<&'a MigrationTemplate>,
}

impl<'a> CreateRequest<'a> {
    pub fn new(dir: &'a Path, name: &'a str, kind: MigrationKind) -> Self {
        Self {
            dir,
            name,
            kind,
            template: None,
        }
    }

    pub fn with_template(mut self, template: &'a MigrationTemplate) -> Self {
        self.template = Some(template);
        self
    }
}

/// A migration file written by [`Scaffolder::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedMigration {
    pub version: MigrationVersion,
    pub kind: MigrationKind,
    pub path: PathBuf,
}

/// Creates migration files from a fixed template registry and clock.
#[derive(Debug, Clone)]
pub struct Scaffolder<C = SystemClock> {
    registry: TemplateRegistry,
    clock: C,
    min_version: MigrationVersion,
    max_version: MigrationVersion,
}

impl Scaffolder<SystemClock> {
    /// Scaffolder using the wall clock.
    pub fn new(registry: TemplateRegistry) -> Self {
        Self::with_clock(registry, SystemClock)
    }
}

impl<C: Clock> Scaffolder<C> {
    /// Scaffolder reading the time from `clock`.
    pub fn with_clock(registry: TemplateRegistry, clock: C) -> Self {
        Self {
            registry,
            clock,
            min_version: MigrationVersion::ZERO,
            max_version: MigrationVersion::MAX,
        }
    }

    /// Only consider existing migrations with versions in `min..=max`.
    pub fn with_version_range(mut self, min: MigrationVersion, max: MigrationVersion) -> Self {
        self.min_version = min;
        self.max_version = max;
        self
    }

    /// Version the next migration in `dir` would receive.
    pub fn next_version_in(&self, dir: &Path) -> ScaffoldResult<MigrationVersion> {
        let index = MigrationIndex::collect_range(dir, self.min_version, self.max_version)?;
        let floor = version_floor(index.last());
        let version = next_version(&self.clock, floor);
        log::debug!(
            "{} existing migrations in {}; floor {}, assigned {}",
            index.len(),
            dir.display(),
            floor,
            version
        );
        Ok(version)
    }

    /// Create a new migration file.
    ///
    /// Stops at the first failing step; nothing is retried.
    pub fn create(&self, request: &CreateRequest<'_>) -> ScaffoldResult<CreatedMigration> {
        validate_name(request.name)?;

        let version = self.next_version_in(request.dir)?;
        let file_name = Migration::file_name(version, request.name, request.kind);
        let path = request.dir.join(file_name);

        let template = self.registry.select(request.template, request.kind)?;
        let path = materialize(&path, template, version)?;

        log::info!("Created new file: {}", path.display());
        Ok(CreatedMigration {
            version,
            kind: request.kind,
            path,
        })
    }
}

/// Lowest version a new migration may take given the newest existing one.
///
/// `0` for an empty directory, otherwise one past the newest version so the
/// result always sorts after it.
///
/// There is no version past [`MigrationVersion::MAX`]; a directory already
/// holding it gets `MAX` again and a warning is logged.
pub fn version_floor(last: Option<&Migration>) -> MigrationVersion {
    match last {
        None => MigrationVersion::ZERO,
        Some(m) if m.version == MigrationVersion::MAX => {
            log::warn!(
                "{} already has the largest possible version {}; the next migration cannot sort after it",
                m.path.display(),
                m.version
            );
            MigrationVersion::MAX
        }
        Some(m) => m.version.successor(),
    }
}

/// Create a migration in `dir` with the built-in templates and the wall
/// clock, returning the path of the new file.
pub fn create(
    dir: &Path,
    template: Option<&MigrationTemplate>,
    name: &str,
    kind: MigrationKind,
) -> ScaffoldResult<PathBuf> {
    let mut request = CreateRequest::new(dir, name, kind);
    request.template = template;
    Scaffolder::new(TemplateRegistry::builtin())
        .create(&request)
        .map(|created| created.path)
}

fn validate_name(name: &str) -> ScaffoldResult<()> {
    let invalid = |reason: &str| ScaffoldError::InvalidMigrationName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(invalid("name must not contain path separators"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
