//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Params extraction: correct fields are extracted from ArgMatches
//! 2. Defaults and conflicts declared on the shared args
//! 3. The global `-v` flag is visible from subcommands

use std::path::PathBuf;

use clap::error::ErrorKind;
use pathql_lib::{Marking, OutputFormat};

use super::*;
use crate::cli::commands::{
    ast_command, check_command, dot_command, gen_two_cycles_command, info_command, run_command,
};

#[test]
fn run_defaults() {
    let m = run_command()
        .try_get_matches_from(["run", "query.pql"])
        .unwrap();
    let params = RunParams::from_matches(&m);

    assert_eq!(params.program_path, Some(PathBuf::from("query.pql")));
    assert_eq!(params.program_text, None);
    assert!(params.graph_dirs.is_empty());
    assert_eq!(params.format, OutputFormat::Text);
    assert_eq!(params.marking, Marking::AllVertices);
    assert_eq!(params.max_states, None);
    assert!(matches!(params.color, ColorChoice::Auto));
}

#[test]
fn run_all_flags() {
    let m = run_command()
        .try_get_matches_from([
            "run",
            "-e",
            "print 1;",
            "-g",
            "data",
            "--graph-dir",
            "more",
            "--format",
            "json",
            "--marking",
            "empty",
            "--max-states",
            "1000",
            "--color",
            "never",
        ])
        .unwrap();
    let params = RunParams::from_matches(&m);

    assert_eq!(params.program_path, None);
    assert_eq!(params.program_text.as_deref(), Some("print 1;"));
    assert_eq!(
        params.graph_dirs,
        vec![PathBuf::from("data"), PathBuf::from("more")]
    );
    assert_eq!(params.format, OutputFormat::Json);
    assert_eq!(params.marking, Marking::Empty);
    assert_eq!(params.max_states, Some(1000));
    assert!(matches!(params.color, ColorChoice::Never));
}

#[test]
fn run_rejects_path_with_eval() {
    let err = run_command()
        .try_get_matches_from(["run", "query.pql", "-e", "print 1;"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn run_rejects_unknown_format() {
    let err = run_command()
        .try_get_matches_from(["run", "query.pql", "--format", "yaml"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn run_rejects_non_numeric_max_states() {
    let err = run_command()
        .try_get_matches_from(["run", "query.pql", "--max-states", "lots"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn check_params() {
    let m = check_command()
        .try_get_matches_from(["check", "query.pql", "--strict", "--color", "always"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.program_path, Some(PathBuf::from("query.pql")));
    assert!(params.strict);
    assert!(matches!(params.color, ColorChoice::Always));
}

#[test]
fn ast_params() {
    let m = ast_command()
        .try_get_matches_from(["ast", "-e", "print 1;", "--raw", "--trivia", "--spans"])
        .unwrap();
    let params = AstParams::from_matches(&m);

    assert_eq!(params.program_text.as_deref(), Some("print 1;"));
    assert!(params.raw);
    assert!(params.trivia);
    assert!(params.spans);
}

#[test]
fn ast_trivia_requires_raw() {
    let err = ast_command()
        .try_get_matches_from(["ast", "query.pql", "--trivia"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn info_params() {
    let m = info_command()
        .try_get_matches_from(["info", "wine", "-g", "data", "--json"])
        .unwrap();
    let params = InfoParams::from_matches(&m);

    assert_eq!(params.graph, "wine");
    assert_eq!(params.graph_dirs, vec![PathBuf::from("data")]);
    assert!(params.json);
    assert!(!params.dump);
}

#[test]
fn info_requires_graph() {
    let err = info_command().try_get_matches_from(["info"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn info_dump_conflicts_with_json() {
    let err = info_command()
        .try_get_matches_from(["info", "wine.txt", "--json", "--dump"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn dot_params() {
    let m = dot_command()
        .try_get_matches_from(["dot", "wine.txt", "--marking", "empty", "-o", "wine.dot"])
        .unwrap();
    let params = DotParams::from_matches(&m);

    assert_eq!(params.graph, "wine.txt");
    assert_eq!(params.marking, Marking::Empty);
    assert_eq!(params.output, Some(PathBuf::from("wine.dot")));
}

#[test]
fn two_cycles_default_labels() {
    let m = gen_two_cycles_command()
        .try_get_matches_from(["two-cycles", "3", "2"])
        .unwrap();
    let params = TwoCyclesParams::from_matches(&m);

    assert_eq!(params.first, 3);
    assert_eq!(params.second, 2);
    assert_eq!(params.labels, ("a".to_string(), "b".to_string()));
    assert_eq!(params.output, None);
}

#[test]
fn two_cycles_custom_labels() {
    let m = gen_two_cycles_command()
        .try_get_matches_from(["two-cycles", "1", "1", "--labels", "x", "y", "-o", "c.txt"])
        .unwrap();
    let params = TwoCyclesParams::from_matches(&m);

    assert_eq!(params.labels, ("x".to_string(), "y".to_string()));
    assert_eq!(params.output, Some(PathBuf::from("c.txt")));
}

#[test]
fn two_cycles_rejects_zero_length() {
    let err = gen_two_cycles_command()
        .try_get_matches_from(["two-cycles", "0", "2"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn two_cycles_requires_both_labels() {
    let err = gen_two_cycles_command()
        .try_get_matches_from(["two-cycles", "1", "1", "--labels", "x"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WrongNumberOfValues);
}

#[test]
fn verbose_is_global() {
    let m = build_cli()
        .try_get_matches_from(["pathql", "run", "query.pql", "-vv"])
        .unwrap();

    assert_eq!(parse_verbosity(&m), 2);
    let (_, sub) = m.subcommand().unwrap();
    assert_eq!(parse_verbosity(sub), 2);
}

#[test]
fn gen_requires_subcommand() {
    let err = build_cli()
        .try_get_matches_from(["pathql", "gen"])
        .unwrap_err();
    assert_eq!(
        err.kind(),
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
}

#[test]
fn cli_is_well_formed() {
    build_cli().debug_assert();
}
