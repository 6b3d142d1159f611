//! Immutable mapping from migration kind to template.

use crate::builtins::builtin_template;
use crate::error::{TemplateError, TemplateResult};
use crate::template::MigrationTemplate;
use std::collections::BTreeMap;
use std::path::Path;
use strata_core::{Config, MigrationKind};

/// The templates available to the create path, keyed by kind.
///
/// Built once and handed to the scaffolder; never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRegistry {
    templates: BTreeMap<MigrationKind, MigrationTemplate>,
}

impl TemplateRegistry {
    /// Registry holding the built-in template of every kind.
    pub fn builtin() -> Self {
        let templates = MigrationKind::ALL
            .into_iter()
            .map(|kind| (kind, builtin_template(kind)))
            .collect();
        Self { templates }
    }

    /// Registry with no templates at all.
    pub fn empty() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Built-in registry with the per-kind template files from `config`
    /// loaded over the defaults. Relative paths resolve against `root`.
    pub fn from_config(config: &Config, root: &Path) -> TemplateResult<Self> {
        let mut registry = Self::builtin();
        for kind in config.templates.keys() {
            if let Some(path) = config.template_path(*kind, root) {
                log::debug!("Using {} for {} migrations", path.display(), kind);
                registry = registry.with_template(*kind, MigrationTemplate::from_file(&path)?);
            }
        }
        Ok(registry)
    }

    /// Return a registry where `kind` maps to `template`.
    pub fn with_template(mut self, kind: MigrationKind, template: MigrationTemplate) -> Self {
        self.templates.insert(kind, template);
        self
    }

    /// Template registered for `kind`.
    pub fn get(&self, kind: MigrationKind) -> Option<&MigrationTemplate> {
        self.templates.get(&kind)
    }

    /// Pick the template for a new migration.
    ///
    /// An explicit override always wins. Otherwise the template registered
    /// for `kind` is used; a kind with no template is an error rather than a
    /// silent fallback to another kind.
    pub fn select<'a>(
        &'a self,
        explicit: Option<&'a MigrationTemplate>,
        kind: MigrationKind,
    ) -> TemplateResult<&'a MigrationTemplate> {
        if let Some(template) = explicit {
            return Ok(template);
        }
        self.get(kind)
            .ok_or_else(|| TemplateError::UnknownMigrationKind {
                kind: kind.to_string(),
            })
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
