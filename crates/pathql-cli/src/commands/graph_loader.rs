use std::path::{Path, PathBuf};

use pathql_core::Automaton;
use pathql_lib::{FsGraphLoader, GraphLoader, Settings};

/// Search order: `--graph-dir` flags, `PATHQL_GRAPH_PATH`, then `base_dir`.
pub fn loader_for(settings: &Settings, base_dir: &Path) -> FsGraphLoader {
    let dirs = settings
        .graph_dirs
        .iter()
        .cloned()
        .chain(std::iter::once(base_dir.to_path_buf()));
    FsGraphLoader::new(dirs)
}

/// Load one graph for `info`/`dot`, exiting with status 1 on failure.
pub fn load_graph_or_exit(name: &str, graph_dirs: &[PathBuf]) -> Automaton {
    let settings = graph_dirs
        .iter()
        .fold(Settings::new(), |s, dir| s.graph_dir(dir))
        .with_env();
    let loader = loader_for(&settings, Path::new("."));

    match loader.load(name) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("error: cannot load graph `{}`: {}", name, e);
            std::process::exit(1);
        }
    }
}
