//! Migration templates rendered with a single `version` parameter.

use crate::error::{TemplateError, TemplateResult};
use minijinja::{context, Environment, UndefinedBehavior};
use std::borrow::Cow;
use std::path::Path;
use strata_core::MigrationVersion;

/// A named template for the body of a new migration file.
///
/// The template sees exactly one variable, `version`. Referencing anything
/// else is a render error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationTemplate {
    name: Cow<'static, str>,
    source: Cow<'static, str>,
}

impl MigrationTemplate {
    /// Create a template from source text, checking that it compiles.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> TemplateResult<Self> {
        let template = Self {
            name: Cow::Owned(name.into()),
            source: Cow::Owned(source.into()),
        };
        template.validate()?;
        Ok(template)
    }

    /// Load a template from a file. The template is named after the file.
    pub fn from_file(path: &Path) -> TemplateResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| TemplateError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        log::debug!("Loaded template '{}' from {}", name, path.display());
        Self::new(name, source)
    }

    /// Built-in template whose source is known at compile time.
    pub(crate) const fn from_static(name: &'static str, source: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            source: Cow::Borrowed(source),
        }
    }

    /// Template name used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw template source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render the template for `version`.
    pub fn render(&self, version: MigrationVersion) -> TemplateResult<String> {
        let env = environment();
        let template = env
            .template_from_str(&self.source)
            .map_err(|e| TemplateError::render(&self.name, e))?;
        template
            .render(context! { version => version.value() })
            .map_err(|e| TemplateError::render(&self.name, e))
    }

    fn validate(&self) -> TemplateResult<()> {
        environment()
            .template_from_str(&self.source)
            .map(|_| ())
            .map_err(|e| TemplateError::render(&self.name, e))
    }
}

fn environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env
}

#[cfg(test)]
#[path = "template_test.rs"]
mod tests;
