//! Init command implementation - writes strata.yml and the migrations directory

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use strata_core::config::CONFIG_FILE_NAMES;
use strata_core::{Config, MigrationKind};

use crate::cli::{GlobalArgs, InitArgs};

/// Execute the init command
pub(crate) fn execute(args: &InitArgs, global: &GlobalArgs) -> Result<()> {
    let project_dir = Path::new(&global.project_dir);

    if let Some(existing) = Config::find_in_dir(project_dir) {
        anyhow::bail!(
            "{} already exists. Remove it first to re-initialize.",
            existing.display()
        );
    }

    if args.migrations_dir.trim().is_empty() {
        anyhow::bail!("Migrations directory cannot be empty");
    }

    let default_kind: MigrationKind = args.default_kind.parse()?;

    let migrations_dir = project_dir.join(&args.migrations_dir);
    fs::create_dir_all(&migrations_dir).with_context(|| {
        format!(
            "Failed to create directory: {}",
            migrations_dir.display()
        )
    })?;

    // Escape YAML special characters in interpolated values
    let safe_dir = args.migrations_dir.replace('\\', "\\\\").replace('"', "\\\"");
    let config_content = format!(
        r#"migrations_dir: "{dir}"
default_kind: {kind}

# Only migrations inside this range are considered when assigning versions.
# min_version: 0
# max_version: 9223372036854775807

# Template files replacing the built-in templates. Each template receives
# a single variable, `version`.
# templates:
#   sql: "templates/migration.sql.j2"
#   go: "templates/migration.go.j2"
"#,
        dir = safe_dir,
        kind = default_kind,
    );

    let config_path = project_dir.join(CONFIG_FILE_NAMES[0]);
    fs::write(&config_path, config_content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    log::info!("Initialized project in {}", project_dir.display());
    println!("  Created {}", config_path.display());
    println!("  Created {}/", migrations_dir.display());
    println!();
    println!("Next steps:");
    println!("  strata create add_users sql    # Create a SQL migration");

    Ok(())
}
