//! Built-in migration templates
//!
//! The SQL template only carries the up/down section markers. The Go
//! template emits `Up<version>` and `Down<version>` functions and registers
//! them with the migration runtime from `init()`.

use crate::template::MigrationTemplate;
use strata_core::MigrationKind;

/// Marker opening the apply section of a SQL migration.
pub const SQL_UP_MARKER: &str = "-- +strata Up";

/// Marker opening the roll back section of a SQL migration.
pub const SQL_DOWN_MARKER: &str = "-- +strata Down";

const SQL_MIGRATION: &str = "-- +strata Up
-- SQL in this section is executed when the migration is applied.

-- +strata Down
-- SQL in this section is executed when the migration is rolled back.
";

const GO_MIGRATION: &str = r#"package migration

import (
	"database/sql"

	strata "github.com/strata-migrate/strata-go"
)

func init() {
	strata.AddMigration(Up{{ version }}, Down{{ version }})
}

func Up{{ version }}(tx *sql.Tx) error {
	// This code is executed when the migration is applied.
	return nil
}

func Down{{ version }}(tx *sql.Tx) error {
	// This code is executed when the migration is rolled back.
	return nil
}
"#;

/// Declarative SQL script template.
pub const SQL_TEMPLATE: MigrationTemplate =
    MigrationTemplate::from_static("strata.sql-migration", SQL_MIGRATION);

/// Procedural Go code template.
pub const GO_TEMPLATE: MigrationTemplate =
    MigrationTemplate::from_static("strata.go-migration", GO_MIGRATION);

/// Built-in template for `kind`.
pub fn builtin_template(kind: MigrationKind) -> MigrationTemplate {
    match kind {
        MigrationKind::Sql => SQL_TEMPLATE,
        MigrationKind::Go => GO_TEMPLATE,
    }
}

#[cfg(test)]
#[path = "builtins_test.rs"]
mod tests;
