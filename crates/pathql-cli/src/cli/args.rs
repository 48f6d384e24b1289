//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! so the same flag reads the same everywhere it appears.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Program file (positional, "-" for stdin).
pub fn program_path_arg() -> Arg {
    Arg::new("program_path")
        .value_name("PROGRAM")
        .value_parser(value_parser!(PathBuf))
        .help("Program file (use \"-\" for stdin)")
}

/// Inline program text (-e/--eval).
pub fn program_text_arg() -> Arg {
    Arg::new("program_text")
        .short('e')
        .long("eval")
        .value_name("TEXT")
        .conflicts_with("program_path")
        .help("Inline program text")
}

/// Graph file or name (positional, required).
pub fn graph_arg() -> Arg {
    Arg::new("graph")
        .value_name("GRAPH")
        .required(true)
        .help("Graph file, or a name looked up in the graph directories")
}

/// Graph search directory (--graph-dir, repeatable).
pub fn graph_dir_arg() -> Arg {
    Arg::new("graph_dir")
        .long("graph-dir")
        .short('g')
        .value_name("DIR")
        .action(ArgAction::Append)
        .value_parser(value_parser!(PathBuf))
        .help("Directory searched by load(\"name\") (repeatable)")
}

/// Output format for printed values (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format for printed values")
}

/// Start/final marking of loaded graphs (--marking).
pub fn marking_arg() -> Arg {
    Arg::new("marking")
        .long("marking")
        .value_name("MARKING")
        .default_value("all")
        .value_parser(["all", "empty"])
        .help("Initial start/final states of loaded graphs")
}

/// State budget for products (--max-states).
pub fn max_states_arg() -> Arg {
    Arg::new("max_states")
        .long("max-states")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Maximum number of states a single product may allocate")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log to stderr (-v for debug, -vv for trace; RUST_LOG overrides)")
}

/// Show the concrete syntax tree (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("Show the concrete syntax tree, including punctuation")
}

/// Include trivia tokens (--trivia).
pub fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .action(ArgAction::SetTrue)
        .requires("raw")
        .help("Include whitespace and comments (with --raw)")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print as JSON")
}

/// Full listing of states and edges (--dump).
pub fn dump_arg() -> Arg {
    Arg::new("dump")
        .long("dump")
        .action(ArgAction::SetTrue)
        .conflicts_with("json")
        .help("List every state and edge")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Cycle length (positional).
pub fn cycle_length_arg(id: &'static str, value_name: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .value_name(value_name)
        .required(true)
        .value_parser(value_parser!(u64).range(1..))
        .help(help)
}

/// Edge labels of the two cycles (--labels A B).
pub fn labels_arg() -> Arg {
    Arg::new("labels")
        .long("labels")
        .value_names(["A", "B"])
        .num_args(2)
        .default_values(["a", "b"])
        .help("Labels of the first and second cycle")
}
