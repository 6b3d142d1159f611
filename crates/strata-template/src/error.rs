//! Error types for strata-template

use std::path::PathBuf;
use thiserror::Error;

/// Templating errors
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Template failed to compile or render (T001)
    #[error("[T001] Failed to render template '{name}': {message}")]
    Render { name: String, message: String },

    /// Template file could not be read (T002)
    #[error("[T002] Failed to read template file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No template is registered for the requested kind (T003)
    #[error("[T003] No template registered for migration kind '{kind}'")]
    UnknownMigrationKind { kind: String },
}

/// Result type alias for TemplateError
pub type TemplateResult<T> = Result<T, TemplateError>;

impl TemplateError {
    pub(crate) fn render(name: &str, err: minijinja::Error) -> Self {
        TemplateError::Render {
            name: name.to_string(),
            message: err.to_string(),
        }
    }
}
