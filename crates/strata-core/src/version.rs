//! Migration version numbers and their derivation from wall-clock time.
//!
//! Versions are 64-bit integers that read as the UTC creation time of the
//! migration (`YYYYMMDDHHMMSS`). When the clock is behind the newest
//! existing migration, the caller-supplied floor is kept instead.

use crate::clock::Clock;
use crate::error::{CoreError, CoreResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// `strftime` pattern for timestamp-derived versions.
pub const VERSION_FORMAT: &str = "%Y%m%d%H%M%S";

/// Ordering identifier of a migration.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MigrationVersion(i64);

impl MigrationVersion {
    /// Floor used when a directory holds no migrations.
    pub const ZERO: Self = Self(0);

    /// Largest representable version.
    pub const MAX: Self = Self(i64::MAX);

    /// Wrap a raw version number.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Return the raw version number.
    pub const fn value(self) -> i64 {
        self.0
    }

    /// The smallest version strictly greater than this one.
    ///
    /// Saturates at [`MigrationVersion::MAX`].
    pub const fn successor(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for MigrationVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MigrationVersion {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidVersion {
                value: s.to_string(),
            });
        }
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidVersion {
                value: s.to_string(),
            })
    }
}

/// Format `instant` as `YYYYMMDDHHMMSS` and read it back as a version.
///
/// Returns `None` when the formatted timestamp is not a plain decimal
/// number (years outside `0..=9999`).
pub fn timestamp_version(instant: DateTime<Utc>) -> Option<MigrationVersion> {
    instant
        .format(VERSION_FORMAT)
        .to_string()
        .parse::<MigrationVersion>()
        .ok()
}

/// Compute the version for a new migration.
///
/// `floor` is `0` for an empty directory, or the newest existing version
/// plus one. The clock-derived candidate is used unless it is unparseable or
/// lower than `floor`, in which case `floor` itself is returned.
pub fn next_version<C: Clock + ?Sized>(clock: &C, floor: MigrationVersion) -> MigrationVersion {
    match timestamp_version(clock.now()) {
        Some(candidate) if candidate >= floor => candidate,
        _ => floor,
    }
}

#[cfg(test)]
#[path = "version_test.rs"]
mod tests;
