//! List command implementation

use anyhow::{Context, Result};
use strata_core::{Migration, MigrationIndex};

use crate::cli::{GlobalArgs, LsArgs, LsOutput};
use crate::commands::common::load_project;

/// Execute the ls command
pub(crate) fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let project = load_project(global)?;
    let dir = project.migrations_dir(args.dir.as_deref());

    let index = MigrationIndex::collect_range(
        &dir,
        project.config.min_version,
        project.config.max_version,
    )
    .with_context(|| format!("Failed to read migrations in {}", dir.display()))?;

    let migrations: Vec<&Migration> = index.iter().collect();
    match args.output {
        LsOutput::Table => print_table(&migrations),
        LsOutput::Json => print_json(&migrations)?,
    }

    Ok(())
}

fn print_table(migrations: &[&Migration]) {
    if migrations.is_empty() {
        println!("No migrations found.");
        return;
    }

    let version_width = migrations
        .iter()
        .map(|m| m.version.to_string().len())
        .max()
        .unwrap_or(7)
        .max(7);
    let kind_width = 4;
    let name_width = migrations
        .iter()
        .map(|m| m.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    println!(
        "{:<version_width$}  {:<kind_width$}  {:<name_width$}  PATH",
        "VERSION", "KIND", "NAME",
    );
    println!(
        "{:-<version_width$}  {:-<kind_width$}  {:-<name_width$}  {}",
        "",
        "",
        "",
        "-".repeat(40),
    );

    for m in migrations {
        println!(
            "{:<version_width$}  {:<kind_width$}  {:<name_width$}  {}",
            m.version.to_string(),
            m.kind.as_str(),
            m.name,
            m.path.display(),
        );
    }

    println!();
    println!("{} migration(s)", migrations.len());
}

fn print_json(migrations: &[&Migration]) -> Result<()> {
    let json = serde_json::to_string_pretty(migrations).context("Failed to serialize migrations")?;
    println!("{}", json);
    Ok(())
}
