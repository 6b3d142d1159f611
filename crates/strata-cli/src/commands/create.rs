//! Create command implementation

use anyhow::{Context, Result};
use strata_core::MigrationKind;
use strata_scaffold::{CreateRequest, Scaffolder};
use strata_template::{MigrationTemplate, TemplateRegistry};

use crate::cli::{CreateArgs, GlobalArgs};
use crate::commands::common::load_project;

/// Execute the create command
pub(crate) fn execute(args: &CreateArgs, global: &GlobalArgs) -> Result<()> {
    let project = load_project(global)?;

    let kind: MigrationKind = match &args.kind {
        Some(kind) => kind.parse()?,
        None => project.config.default_kind,
    };

    let registry = TemplateRegistry::from_config(&project.config, &project.root)
        .context("Failed to load configured templates")?;

    let template = args
        .template
        .as_deref()
        .map(|path| MigrationTemplate::from_file(&project.resolve(path)))
        .transpose()
        .context("Failed to load template override")?;

    let dir = project.migrations_dir(args.dir.as_deref());
    let mut request = CreateRequest::new(&dir, &args.name, kind);
    if let Some(template) = &template {
        request = request.with_template(template);
    }

    let scaffolder = Scaffolder::new(registry)
        .with_version_range(project.config.min_version, project.config.max_version);
    let created = scaffolder
        .create(&request)
        .with_context(|| format!("Failed to create migration '{}'", args.name))?;

    println!("Created new file: {}", created.path.display());
    if global.verbose {
        println!("  version: {}", created.version);
        println!("  kind:    {}", created.kind);
    }

    Ok(())
}
