//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Strata - scaffolds timestamp-versioned database migrations
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write strata.yml and create the migrations directory
    Init(InitArgs),

    /// Create a new migration file
    Create(CreateArgs),

    /// List migrations in the migrations directory
    Ls(LsArgs),
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory for migration files, relative to the project directory
    #[arg(short, long, default_value = "migrations")]
    pub migrations_dir: String,

    /// Kind used by `create` when none is given (sql or go)
    #[arg(short = 'k', long, default_value = "sql")]
    pub default_kind: String,
}

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Migration name, used in the filename after the version
    pub name: String,

    /// Migration kind: sql or go (default: default_kind from strata.yml)
    pub kind: Option<String>,

    /// Template file rendered instead of the kind's template (relative to the
    /// project directory)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Override the migrations directory (relative to the project directory)
    #[arg(short, long)]
    pub dir: Option<String>,
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: LsOutput,

    /// Override the migrations directory (relative to the project directory)
    #[arg(short, long)]
    pub dir: Option<String>,
}

/// List output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LsOutput {
    /// Table format
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
