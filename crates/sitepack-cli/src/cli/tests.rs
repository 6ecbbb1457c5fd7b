#![cfg(test)]

use super::*;
use clap::Parser;

#[test]
fn plan_with_mode_and_output() {
    let cli = Cli::try_parse_from([
        "sitepack",
        "plan",
        "--mode",
        "production",
        "--out",
        "plan.json",
        "--dry-run",
    ])
    .unwrap();

    match cli.command {
        Command::Plan(args) => {
            assert_eq!(args.mode.mode.as_deref(), Some("production"));
            assert!(!args.mode.strict_mode);
            assert_eq!(args.out, Some(PathBuf::from("plan.json")));
            assert!(args.dry_run);
        }
        other => panic!("expected plan, got {other:?}"),
    }
}

#[test]
fn mode_is_optional() {
    let cli = Cli::try_parse_from(["sitepack", "check"]).unwrap();
    match cli.command {
        Command::Check(args) => assert!(args.mode.mode.is_none()),
        other => panic!("expected check, got {other:?}"),
    }
}

#[test]
fn global_flags_after_subcommand() {
    let cli =
        Cli::try_parse_from(["sitepack", "serve", "--port", "9000", "--cwd", "site", "-v"]).unwrap();
    assert!(cli.verbose);
    assert_eq!(cli.cwd, Some(PathBuf::from("site")));
    match cli.command {
        Command::Serve(args) => assert_eq!(args.port, Some(9000)),
        other => panic!("expected serve, got {other:?}"),
    }
}

#[test]
fn verbose_conflicts_with_quiet() {
    assert!(Cli::try_parse_from(["sitepack", "-v", "-q", "check"]).is_err());
}

#[test]
fn postprocess_overrides() {
    let cli = Cli::try_parse_from([
        "sitepack",
        "postprocess",
        "--public-path",
        "/cdn/",
        "--app-root",
        "root",
        "--strict-mode",
    ])
    .unwrap();

    match cli.command {
        Command::Postprocess(args) => {
            assert_eq!(args.public_path.as_deref(), Some("/cdn/"));
            assert_eq!(args.app_root.as_deref(), Some("root"));
            assert!(args.mode.strict_mode);
        }
        other => panic!("expected postprocess, got {other:?}"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
