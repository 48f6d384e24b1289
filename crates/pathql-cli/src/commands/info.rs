//! Summarize a graph file.

use std::fmt::Write as _;
use std::path::PathBuf;

use pathql_core::GraphInfo;

use super::graph_loader::load_graph_or_exit;
use super::output::write_output_or_exit;

pub struct InfoArgs {
    pub graph: String,
    pub graph_dirs: Vec<PathBuf>,
    pub json: bool,
    pub dump: bool,
}

pub fn run(args: InfoArgs) {
    let graph = load_graph_or_exit(&args.graph, &args.graph_dirs);
    tracing::debug!(
        states = graph.num_states(),
        transitions = graph.num_transitions(),
        "loaded graph"
    );

    let text = if args.dump {
        graph.dump()
    } else if args.json {
        match serde_json::to_string_pretty(&graph.info()) {
            Ok(json) => json + "\n",
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        format_info(&graph.info())
    };

    write_output_or_exit(None, &text);
}

pub(crate) fn format_info(info: &GraphInfo) -> String {
    let mut out = String::new();
    writeln!(out, "vertices: {}", info.vertices).expect("String write never fails");
    writeln!(out, "edges:    {}", info.edges).expect("String write never fails");
    let labels: Vec<&str> = info.labels.iter().map(String::as_str).collect();
    writeln!(out, "labels:   {} ({})", labels.len(), labels.join(", "))
        .expect("String write never fails");
    out
}
