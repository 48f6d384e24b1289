//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("pathql")
        .about("Regular path queries over edge-labeled graphs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(run_command())
        .subcommand(check_command())
        .subcommand(ast_command())
        .subcommand(info_command())
        .subcommand(dot_command())
        .subcommand(gen_command())
}

/// Execute a program, printing every `print` result to stdout.
pub fn run_command() -> Command {
    Command::new("run")
        .about("Run a program")
        .override_usage(
            "\
  pathql run <PROGRAM>
  pathql run -e <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  pathql run query.pql                      # graphs resolved next to the program
  pathql run query.pql -g data/             # extra graph directory
  pathql run -e 'print two_cycles(2, 1, "a", "b");'
  pathql run query.pql --format json | jq   # one JSON object per line

ENVIRONMENT:
  PATHQL_GRAPH_PATH   extra graph directories (path-list syntax)
  RUST_LOG            log filter (overrides -v)"#,
        )
        .arg(program_path_arg())
        .arg(program_text_arg())
        .arg(graph_dir_arg())
        .arg(format_arg())
        .arg(marking_arg())
        .arg(max_states_arg())
        .arg(color_arg())
}

/// Validate a program without running it.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a program")
        .override_usage(
            "\
  pathql check <PROGRAM>
  pathql check -e <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  pathql check query.pql             # silent when valid
  pathql check query.pql --strict    # fail on warnings too"#,
        )
        .arg(program_path_arg())
        .arg(program_text_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// Show the syntax tree of a program.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the syntax tree of a program")
        .override_usage(
            "\
  pathql ast <PROGRAM>
  pathql ast -e <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  pathql ast query.pql                    # AST
  pathql ast query.pql --raw              # CST
  pathql ast query.pql --raw --trivia     # CST with whitespace and comments
  pathql ast -e 'print "a"*;' --spans"#,
        )
        .arg(program_path_arg())
        .arg(program_text_arg())
        .arg(raw_arg())
        .arg(trivia_arg())
        .arg(spans_arg())
        .arg(color_arg())
}

/// Summarize a graph file.
pub fn info_command() -> Command {
    Command::new("info")
        .about("Show vertex, edge and label counts of a graph")
        .after_help(
            r#"EXAMPLES:
  pathql info wine.txt          # summary
  pathql info wine -g data/     # by name
  pathql info wine.txt --json
  pathql info wine.txt --dump   # every state and edge"#,
        )
        .arg(graph_arg())
        .arg(graph_dir_arg())
        .arg(json_arg())
        .arg(dump_arg())
}

/// Export a graph as Graphviz DOT.
pub fn dot_command() -> Command {
    Command::new("dot")
        .about("Export a graph as Graphviz DOT")
        .after_help(
            r#"EXAMPLES:
  pathql dot wine.txt | dot -Tsvg > wine.svg
  pathql dot wine.txt --marking empty -o wine.dot"#,
        )
        .arg(graph_arg())
        .arg(graph_dir_arg())
        .arg(marking_arg())
        .arg(output_file_arg())
}

/// Synthetic graph generators.
pub fn gen_command() -> Command {
    Command::new("gen")
        .about("Generate synthetic graphs in edge-list format")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(gen_two_cycles_command())
}

pub fn gen_two_cycles_command() -> Command {
    Command::new("two-cycles")
        .about("Two labeled cycles sharing vertex 0")
        .after_help(
            r#"EXAMPLES:
  pathql gen two-cycles 3 2                     # labels a and b
  pathql gen two-cycles 100 50 --labels x y -o cycles.txt"#,
        )
        .arg(cycle_length_arg("first", "N", "Length of the first cycle"))
        .arg(cycle_length_arg("second", "M", "Length of the second cycle"))
        .arg(labels_arg())
        .arg(output_file_arg())
}
