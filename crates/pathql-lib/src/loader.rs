//! Graph loading and the edge-list file format.
//!
//! ```text
//! # comment
//! 0 1 knows        labeled edge
//! 1, 2, likes      commas work as separators too
//! 2 3              unlabeled edge: epsilon transition
//! 7                isolated vertex
//! ```
//!
//! Loaded automata have empty start and final sets; the caller applies its
//! [`Marking`](crate::settings::Marking).

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use pathql_core::{Automaton, StateId};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no graph named `{name}` (searched {searched} locations)")]
    NotFound { name: String, searched: usize },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}:{line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("state {state} has no edge-list representation")]
    NonAtomicState { state: StateId },
}

/// Resolves graph names used by `load("...")`.
pub trait GraphLoader {
    fn load(&self, name: &str) -> Result<Automaton, LoadError>;
}

/// Loads edge-list files from disk.
///
/// A name that is an existing path is read directly. Otherwise each search
/// directory is tried in order with the name as is and with the `.txt`,
/// `.csv` and `.edges` extensions.
#[derive(Debug, Clone, Default)]
pub struct FsGraphLoader {
    search_dirs: Vec<PathBuf>,
}

const EXTENSIONS: [&str; 3] = ["txt", "csv", "edges"];

impl FsGraphLoader {
    pub fn new(search_dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            search_dirs: search_dirs.into_iter().collect(),
        }
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let mut out = Vec::new();
        for dir in &self.search_dirs {
            out.push(dir.join(name));
            for ext in EXTENSIONS {
                out.push(dir.join(format!("{name}.{ext}")));
            }
        }
        out
    }

    pub fn resolve(&self, name: &str) -> Result<PathBuf, LoadError> {
        let direct = Path::new(name);
        if direct.is_file() {
            return Ok(direct.to_path_buf());
        }
        let candidates = self.candidates(name);
        let searched = candidates.len();
        candidates
            .into_iter()
            .find(|p| p.is_file())
            .ok_or_else(|| LoadError::NotFound {
                name: name.to_string(),
                searched,
            })
    }
}

impl GraphLoader for FsGraphLoader {
    fn load(&self, name: &str) -> Result<Automaton, LoadError> {
        let path = self.resolve(name)?;
        read_edge_list_file(&path)
    }
}

/// In-memory graphs keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    graphs: IndexMap<String, Automaton>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graph(mut self, name: impl Into<String>, graph: Automaton) -> Self {
        self.insert(name, graph);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, graph: Automaton) {
        self.graphs.insert(name.into(), graph);
    }
}

impl GraphLoader for MemoryLoader {
    fn load(&self, name: &str) -> Result<Automaton, LoadError> {
        self.graphs
            .get(name)
            .cloned()
            .ok_or_else(|| LoadError::NotFound {
                name: name.to_string(),
                searched: self.graphs.len(),
            })
    }
}

pub fn read_edge_list_file(path: &Path) -> Result<Automaton, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = read_edge_list(&text, path)?;
    tracing::debug!(
        path = %path.display(),
        vertices = graph.num_states(),
        edges = graph.num_transitions(),
        "loaded graph"
    );
    Ok(graph)
}

/// Parse edge-list text. `path` is only used in error messages.
pub fn read_edge_list(text: &str, path: &Path) -> Result<Automaton, LoadError> {
    let mut graph = Automaton::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default();
        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();

        let parse_error = |message: String| LoadError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            message,
        };
        let vertex = |field: &str| {
            field
                .parse::<i64>()
                .ok()
                .and_then(|n| u64::try_from(n).ok())
                .map(StateId::Atomic)
                .ok_or_else(|| {
                    parse_error(format!("`{field}` is not a non-negative integer vertex id"))
                })
        };

        match fields.as_slice() {
            [] => {}
            [v] => {
                graph.add_state(vertex(v)?);
            }
            [from, to] => graph.add_epsilon(vertex(from)?, vertex(to)?),
            [from, to, label] => graph.add_transition(vertex(from)?, *label, vertex(to)?),
            _ => {
                return Err(parse_error(format!(
                    "expected `source target [label]`, found {} fields",
                    fields.len()
                )));
            }
        }
    }

    Ok(graph)
}

/// Inverse of [`read_edge_list`] for graphs with atomic states.
///
/// States without any edge are written as single-id lines.
pub fn write_edge_list(graph: &Automaton) -> Result<String, LoadError> {
    let atomic = |state: &StateId| {
        state.as_atomic().ok_or_else(|| LoadError::NonAtomicState {
            state: state.clone(),
        })
    };

    let mut out = String::new();
    let mut connected = std::collections::BTreeSet::new();

    for (from, label, to) in graph.transitions() {
        writeln!(out, "{} {} {label}", atomic(from)?, atomic(to)?).expect("String write never fails");
        connected.extend([from, to]);
    }
    for (from, to) in graph.epsilon_transitions() {
        writeln!(out, "{} {}", atomic(from)?, atomic(to)?).expect("String write never fails");
        connected.extend([from, to]);
    }
    for state in graph.states() {
        if !connected.contains(state) {
            writeln!(out, "{}", atomic(state)?).expect("String write never fails");
        }
    }

    Ok(out)
}
