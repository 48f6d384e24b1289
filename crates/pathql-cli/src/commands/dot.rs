use std::path::PathBuf;

use pathql_lib::Marking;

use super::graph_loader::load_graph_or_exit;
use super::output::write_output_or_exit;

pub struct DotArgs {
    pub graph: String,
    pub graph_dirs: Vec<PathBuf>,
    pub marking: Marking,
    pub output: Option<PathBuf>,
}

pub fn run(args: DotArgs) {
    let graph = args
        .marking
        .apply(load_graph_or_exit(&args.graph, &args.graph_dirs));

    write_output_or_exit(args.output.as_deref(), &graph.to_dot());
}
