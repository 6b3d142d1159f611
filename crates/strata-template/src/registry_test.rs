use super::*;
use crate::builtins::{GO_TEMPLATE, SQL_TEMPLATE};
use std::collections::BTreeMap;
use strata_core::MigrationVersion;
use tempfile::TempDir;

#[test]
fn test_builtin_covers_every_kind() {
    let registry = TemplateRegistry::builtin();
    for kind in MigrationKind::ALL {
        assert!(registry.get(kind).is_some(), "no template for {kind}");
    }
}

#[test]
fn test_select_by_kind() {
    let registry = TemplateRegistry::builtin();
    assert_eq!(
        registry.select(None, MigrationKind::Sql).unwrap(),
        &SQL_TEMPLATE
    );
    assert_eq!(
        registry.select(None, MigrationKind::Go).unwrap(),
        &GO_TEMPLATE
    );
}

#[test]
fn test_override_beats_sql_builtin() {
    let registry = TemplateRegistry::builtin();
    let custom = MigrationTemplate::new("custom", "-- custom {{ version }}\n").unwrap();

    let selected = registry.select(Some(&custom), MigrationKind::Sql).unwrap();
    assert_eq!(selected.name(), "custom");
    assert_eq!(
        selected.render(MigrationVersion::new(3)).unwrap(),
        "-- custom 3\n"
    );
}

#[test]
fn test_missing_kind_is_an_error() {
    let registry = TemplateRegistry::empty();
    let err = registry.select(None, MigrationKind::Go).unwrap_err();
    assert!(matches!(err, TemplateError::UnknownMigrationKind { ref kind } if kind == "go"));
}

#[test]
fn test_override_works_on_empty_registry() {
    let registry = TemplateRegistry::empty();
    let custom = MigrationTemplate::new("custom", "x").unwrap();
    assert!(registry.select(Some(&custom), MigrationKind::Go).is_ok());
}

#[test]
fn test_with_template_replaces_one_kind() {
    let custom = MigrationTemplate::new("custom", "x").unwrap();
    let registry = TemplateRegistry::builtin().with_template(MigrationKind::Sql, custom.clone());
    assert_eq!(registry.get(MigrationKind::Sql), Some(&custom));
    assert_eq!(registry.get(MigrationKind::Go), Some(&GO_TEMPLATE));
}

#[test]
fn test_from_config_loads_template_files() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("templates")).unwrap();
    std::fs::write(
        temp.path().join("templates/up_down.sql"),
        "-- house style {{ version }}\n",
    )
    .unwrap();

    let config = Config {
        templates: BTreeMap::from([(MigrationKind::Sql, "templates/up_down.sql".to_string())]),
        ..Config::default()
    };

    let registry = TemplateRegistry::from_config(&config, temp.path()).unwrap();
    let sql = registry.get(MigrationKind::Sql).unwrap();
    assert_eq!(sql.name(), "up_down.sql");
    assert_eq!(registry.get(MigrationKind::Go), Some(&GO_TEMPLATE));
}

#[test]
fn test_from_config_missing_file() {
    let temp = TempDir::new().unwrap();
    let config = Config {
        templates: BTreeMap::from([(MigrationKind::Go, "missing.go.j2".to_string())]),
        ..Config::default()
    };
    assert!(matches!(
        TemplateRegistry::from_config(&config, temp.path()),
        Err(TemplateError::Read { .. })
    ));
}
