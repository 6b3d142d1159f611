//! Error types for strata-core

use thiserror::Error;

/// Core error type for Strata
#[derive(Error, Debug)]
pub enum CoreError {
    /// S001: Requested migration kind has no template
    #[error("[S001] Unknown migration kind '{kind}'. Valid kinds: sql, go")]
    UnknownMigrationKind { kind: String },

    /// S002: Version string is not a non-negative 64-bit decimal number
    #[error("[S002] Invalid migration version '{value}': expected decimal digits")]
    InvalidVersion { value: String },

    /// S003: File has a migration extension but a malformed name
    #[error("[S003] Invalid migration filename '{path}': {reason}")]
    InvalidMigrationFilename { path: String, reason: String },

    /// C001: Configuration file not found
    #[error("[C001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// C002: Invalid configuration value
    #[error("[C002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// C003: Configuration YAML parse error
    #[error("[C003] Failed to parse config: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// E001: IO error with file path context
    #[error("[E001] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
