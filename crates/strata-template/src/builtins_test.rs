use super::*;
use strata_core::MigrationVersion;

#[test]
fn test_builtins_compile() {
    for kind in MigrationKind::ALL {
        let template = builtin_template(kind);
        MigrationTemplate::new(template.name(), template.source()).unwrap();
    }
}

#[test]
fn test_sql_template_has_two_sections() {
    let rendered = SQL_TEMPLATE
        .render(MigrationVersion::new(20240301100000))
        .unwrap();

    assert_eq!(rendered.matches(SQL_UP_MARKER).count(), 1);
    assert_eq!(rendered.matches(SQL_DOWN_MARKER).count(), 1);
    assert!(rendered.find(SQL_UP_MARKER) < rendered.find(SQL_DOWN_MARKER));
    // Only comments and blank lines
    assert!(rendered
        .lines()
        .all(|line| line.is_empty() || line.starts_with("--")));
}

#[test]
fn test_go_template_names_functions_after_version() {
    let rendered = GO_TEMPLATE
        .render(MigrationVersion::new(20240301100001))
        .unwrap();

    assert!(rendered.starts_with("package migration\n"));
    assert!(rendered.contains("\tstrata \"github.com/strata-migrate/strata-go\"\n"));
    assert!(rendered.contains("strata.AddMigration(Up20240301100001, Down20240301100001)"));
    assert!(rendered.contains("func Up20240301100001(tx *sql.Tx) error {"));
    assert!(rendered.contains("func Down20240301100001(tx *sql.Tx) error {"));
    assert!(!rendered.contains("{{"));
}

#[test]
fn test_builtin_template_by_kind() {
    assert_eq!(builtin_template(MigrationKind::Sql), SQL_TEMPLATE);
    assert_eq!(builtin_template(MigrationKind::Go), GO_TEMPLATE);
}
