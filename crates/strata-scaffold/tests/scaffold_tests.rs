//! End-to-end scaffolding tests against real directories.

use chrono::{DateTime, TimeZone, Utc};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Barrier};
use std::thread;
use strata_core::{FixedClock, MigrationIndex, MigrationKind, MigrationVersion};
use strata_scaffold::{CreateRequest, ScaffoldError, Scaffolder};
use strata_template::TemplateRegistry;
use tempfile::TempDir;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

fn scaffolder(instant: DateTime<Utc>) -> Scaffolder<FixedClock> {
    Scaffolder::with_clock(TemplateRegistry::builtin(), FixedClock::new(instant))
}

fn create(dir: &Path, instant: DateTime<Utc>, name: &str, kind: MigrationKind) -> MigrationVersion {
    scaffolder(instant)
        .create(&CreateRequest::new(dir, name, kind))
        .unwrap()
        .version
}

/// Empty directory at 2024-03-01T10:00:00Z yields `20240301100000_add_users.sql`.
#[test]
fn test_bootstrap_scenario() {
    let temp = TempDir::new().unwrap();

    let created = scaffolder(at(2024, 3, 1, 10, 0, 0))
        .create(&CreateRequest::new(temp.path(), "add_users", MigrationKind::Sql))
        .unwrap();

    let expected = temp.path().join("20240301100000_add_users.sql");
    assert_eq!(created.path, expected);

    let content = fs::read_to_string(&expected).unwrap();
    let markers: Vec<&str> = content
        .lines()
        .filter(|line| line.starts_with("-- +strata"))
        .collect();
    assert_eq!(markers, vec!["-- +strata Up", "-- +strata Down"]);
}

/// Existing `20240301100000` with the clock one second behind yields last + 1.
#[test]
fn test_clock_skew_scenario() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("20240301100000_add_users.sql"), "").unwrap();

    let version = create(
        temp.path(),
        at(2024, 3, 1, 9, 59, 59),
        "backfill",
        MigrationKind::Go,
    );

    assert_eq!(version, MigrationVersion::new(20240301100001));
    assert!(temp.path().join("20240301100001_backfill.go").exists());
}

#[test]
fn test_versions_strictly_increase_across_creations() {
    let temp = TempDir::new().unwrap();
    let instants = [
        at(2024, 3, 1, 10, 0, 0),
        at(2024, 3, 1, 10, 0, 0),
        at(2024, 3, 1, 10, 0, 0),
        at(2024, 3, 1, 10, 0, 2),
        at(2024, 3, 2, 8, 30, 0),
    ];

    let mut assigned = Vec::new();
    for (i, instant) in instants.into_iter().enumerate() {
        let kind = if i % 2 == 0 { MigrationKind::Sql } else { MigrationKind::Go };
        assigned.push(create(temp.path(), instant, &format!("step_{i}"), kind));
    }

    assert!(assigned.windows(2).all(|w| w[0] < w[1]), "{assigned:?}");
    assert_eq!(MigrationIndex::collect(temp.path()).unwrap().versions(), assigned);
}

#[test]
fn test_existing_file_is_never_overwritten() {
    let temp = TempDir::new().unwrap();
    let taken = temp.path().join("20240301100000_add_users.sql");
    fs::write(&taken, "-- hand written\n").unwrap();

    // The index floor moves past the taken version, so a second attempt at
    // the same instant gets a fresh file instead of the taken one.
    let created = scaffolder(at(2024, 3, 1, 10, 0, 0))
        .create(&CreateRequest::new(temp.path(), "add_users", MigrationKind::Sql))
        .unwrap();

    assert_ne!(created.path, taken);
    assert_eq!(fs::read_to_string(&taken).unwrap(), "-- hand written\n");
}

#[test]
fn test_concurrent_creators_never_share_a_file() {
    let temp = TempDir::new().unwrap();
    let dir = Arc::new(temp.path().to_path_buf());
    let barrier = Arc::new(Barrier::new(4));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let dir = Arc::clone(&dir);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                scaffolder(at(2024, 3, 1, 10, 0, 0))
                    .create(&CreateRequest::new(&dir, "add_users", MigrationKind::Sql))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let mut written = Vec::new();
    for result in results {
        match result {
            Ok(created) => written.push(created.path),
            Err(ScaffoldError::FileAlreadyExists { .. }) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert!(!written.is_empty());
    let count = written.len();
    written.sort();
    written.dedup();
    assert_eq!(written.len(), count, "two creators reported the same file");
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), count);
}
