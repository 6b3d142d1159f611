//! strata-core - Core library for Strata
//!
//! This crate provides the shared types used across all Strata components:
//! migration versions and the clock they are derived from, migration kinds,
//! the on-disk migration index, and `strata.yml` configuration parsing.

pub mod clock;
pub mod config;
pub mod error;
pub mod index;
pub mod kind;
pub mod migration;
pub mod version;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use index::MigrationIndex;
pub use kind::MigrationKind;
pub use migration::Migration;
pub use version::{next_version, timestamp_version, MigrationVersion};
