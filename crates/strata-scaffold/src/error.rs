//! Error types for strata-scaffold

use std::path::PathBuf;
use strata_core::CoreError;
use strata_template::TemplateError;
use thiserror::Error;

/// Errors raised while creating a migration file
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// F001: Target path is already taken
    #[error("[F001] Failed to create file: {} already exists", .path.display())]
    FileAlreadyExists { path: PathBuf },

    /// F002: Filesystem refused to create or write the file
    #[error("[F002] Failed to create file {}: {source}", .path.display())]
    FileCreateFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// F003: Template could not be rendered
    #[error("[F003] Failed to render template '{name}': {message}")]
    TemplateRenderFailed { name: String, message: String },

    /// F004: Requested kind has no template and no override was given
    #[error("[F004] Unknown migration kind '{kind}'")]
    UnknownMigrationKind { kind: String },

    /// F005: Name cannot be used in a migration filename
    #[error("[F005] Invalid migration name '{name}': {reason}")]
    InvalidMigrationName { name: String, reason: String },

    /// F006: Template override could not be loaded
    #[error("[F006] Failed to load template: {0}")]
    TemplateLoad(TemplateError),

    /// F007: Existing migrations could not be indexed
    #[error("[F007] Failed to index migrations: {0}")]
    Index(CoreError),
}

/// Result type alias for ScaffoldError
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

impl From<TemplateError> for ScaffoldError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::Render { name, message } => {
                ScaffoldError::TemplateRenderFailed { name, message }
            }
            TemplateError::UnknownMigrationKind { kind } => {
                ScaffoldError::UnknownMigrationKind { kind }
            }
            other => ScaffoldError::TemplateLoad(other),
        }
    }
}

impl From<CoreError> for ScaffoldError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownMigrationKind { kind } => ScaffoldError::UnknownMigrationKind { kind },
            other => ScaffoldError::Index(other),
        }
    }
}
