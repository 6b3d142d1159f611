//! strata-scaffold - Migration file scaffolding for Strata
//!
//! Assigns the next version for a migrations directory and writes a freshly
//! rendered template to `<version>_<name>.<ext>`, never replacing a file
//! that is already there.

pub mod create;
pub mod error;
pub mod materialize;

pub use create::{create, version_floor, CreateRequest, CreatedMigration, Scaffolder};
pub use error::{ScaffoldError, ScaffoldResult};
pub use materialize::materialize;
