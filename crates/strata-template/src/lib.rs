//! strata-template - Templating layer for Strata
//!
//! This crate provides the templates new migration files are rendered from:
//! minijinja-backed [`MigrationTemplate`]s taking a single `version`
//! parameter, the built-in SQL and Go templates, and the immutable
//! [`TemplateRegistry`] that maps each migration kind to its template.

pub mod builtins;
pub mod error;
pub mod registry;
pub mod template;

pub use error::{TemplateError, TemplateResult};
pub use registry::TemplateRegistry;
pub use template::MigrationTemplate;
