use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_parse_create_with_kind() {
    let cli = Cli::try_parse_from(["strata", "create", "add_users", "go"]).unwrap();
    match cli.command {
        Commands::Create(args) => {
            assert_eq!(args.name, "add_users");
            assert_eq!(args.kind.as_deref(), Some("go"));
            assert!(args.template.is_none());
        }
        other => panic!("expected create, got {other:?}"),
    }
}

#[test]
fn test_parse_create_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "strata",
        "create",
        "add_users",
        "--template",
        "custom.j2",
        "-p",
        "proj",
        "-v",
    ])
    .unwrap();
    assert!(cli.global.verbose);
    assert_eq!(cli.global.project_dir, "proj");
    match cli.command {
        Commands::Create(args) => {
            assert_eq!(args.kind, None);
            assert_eq!(args.template.as_deref(), Some("custom.j2"));
        }
        other => panic!("expected create, got {other:?}"),
    }
}

#[test]
fn test_parse_ls_json() {
    let cli = Cli::try_parse_from(["strata", "ls", "--output", "json"]).unwrap();
    match cli.command {
        Commands::Ls(args) => assert_eq!(args.output, LsOutput::Json),
        other => panic!("expected ls, got {other:?}"),
    }
}

#[test]
fn test_create_requires_name() {
    assert!(Cli::try_parse_from(["strata", "create"]).is_err());
}
