//! Run configuration.

use std::path::PathBuf;

use pathql_core::{Automaton, Limits};

/// Environment variable holding extra graph search directories, in the
/// platform's path-list syntax.
pub const GRAPH_PATH_ENV: &str = "PATHQL_GRAPH_PATH";

/// Initial start/final sets for graphs produced by `load` and generators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Marking {
    /// Every vertex is both start and final.
    #[default]
    AllVertices,
    /// No vertex is start or final.
    Empty,
}

impl Marking {
    pub fn apply(self, mut graph: Automaton) -> Automaton {
        match self {
            Marking::AllVertices => graph.mark_all_states(),
            Marking::Empty => graph.clear_marks(),
        }
        graph
    }
}

#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub marking: Marking,
    pub limits: Limits,
    pub graph_dirs: Vec<PathBuf>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marking(mut self, marking: Marking) -> Self {
        self.marking = marking;
        self
    }

    pub fn max_states(mut self, max_states: usize) -> Self {
        self.limits.max_states = max_states;
        self
    }

    pub fn graph_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.graph_dirs.push(dir.into());
        self
    }

    /// Append the directories listed in [`GRAPH_PATH_ENV`], if set.
    pub fn with_env(mut self) -> Self {
        if let Some(paths) = std::env::var_os(GRAPH_PATH_ENV) {
            self.graph_dirs
                .extend(std::env::split_paths(&paths).filter(|p| !p.as_os_str().is_empty()));
        }
        self
    }
}
