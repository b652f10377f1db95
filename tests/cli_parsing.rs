use clap::Parser;
use heft::cli::commands::estimate::EstimateArgs;
use heft::cli::{Cli, Commands};
use heft::MassUnit;
use std::path::PathBuf;

fn parse_estimate(args: &[&str]) -> (bool, Option<PathBuf>, EstimateArgs) {
    let mut argv = vec!["heft"];
    argv.extend_from_slice(args);
    let Cli {
        command,
        json,
        config,
    } = Cli::try_parse_from(argv).unwrap();
    match command {
        Commands::Estimate(args) => (json, config, args),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_estimate_minimal() {
    let (json, config, args) = parse_estimate(&["estimate", "design.yaml"]);
    assert!(!json);
    assert!(config.is_none());
    assert_eq!(args.design, PathBuf::from("design.yaml"));
    assert!(args.unit.is_none());
    assert!(args.tolerance.is_none());
    assert!(!args.parallel);
    assert!(!args.history);
}

#[test]
fn test_parse_estimate_with_overrides() {
    let (_, _, args) = parse_estimate(&[
        "estimate",
        "design.json",
        "--unit",
        "lb",
        "--tolerance",
        "1e-8",
        "--relaxation",
        "0.5",
        "--max-iterations",
        "200",
        "--parallel",
        "--timeout-ms",
        "1500",
        "--history",
    ]);
    assert_eq!(args.unit, Some(MassUnit::Pound));
    assert_eq!(args.tolerance, Some(1e-8));
    assert_eq!(args.relaxation, Some(0.5));
    assert_eq!(args.max_iterations, Some(200));
    assert!(args.parallel);
    assert_eq!(args.timeout_ms, Some(1500));
    assert!(args.history);
}

#[test]
fn test_global_flags_after_subcommand() {
    let (json, config, _) = parse_estimate(&[
        "estimate",
        "design.yaml",
        "--json",
        "--config",
        "engine.yaml",
    ]);
    assert!(json);
    assert_eq!(config, Some(PathBuf::from("engine.yaml")));
}

#[test]
fn test_parse_check_default_tolerance() {
    let cli = Cli::try_parse_from(["heft", "check", "record.json"]).unwrap();
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.record, PathBuf::from("record.json"));
            assert_eq!(args.tolerance, 1e-6);
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_unknown_unit_rejected() {
    assert!(Cli::try_parse_from(["heft", "estimate", "design.yaml", "--unit", "stone"]).is_err());
}

#[test]
fn test_missing_design_rejected() {
    assert!(Cli::try_parse_from(["heft", "estimate"]).is_err());
}

#[test]
fn test_cli_structure_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
