//! Human-readable and Graphviz renderings of automata.

use std::collections::BTreeSet;
use std::fmt::Write;

use serde::Serialize;

use crate::{Automaton, StateId};

/// Summary counts for a graph (`pathql info`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphInfo {
    pub vertices: usize,
    /// Labeled and unlabeled edges together.
    pub edges: usize,
    pub labels: BTreeSet<String>,
}

impl Automaton {
    pub fn info(&self) -> GraphInfo {
        GraphInfo {
            vertices: self.num_states(),
            edges: self.num_transitions() + self.num_epsilons(),
            labels: self.labels(),
        }
    }

    /// Compact text listing used by tests and `pathql info --dump`.
    ///
    /// ```text
    /// states: {0, 1}
    /// start: {0}
    /// final: {1}
    /// 0 -a-> 1
    /// 1 -ε-> 0
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format_dump(&mut out).expect("String write never fails");
        out
    }

    /// Graphviz DOT. Start states are bold, final states double circles,
    /// epsilon transitions dashed.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        self.format_dot(&mut out).expect("String write never fails");
        out
    }

    fn format_dump(&self, w: &mut String) -> std::fmt::Result {
        writeln!(w, "states: {}", fmt_states(self.states()))?;
        writeln!(w, "start: {}", fmt_states(self.start_states()))?;
        writeln!(w, "final: {}", fmt_states(self.final_states()))?;
        for (from, label, to) in self.transitions() {
            writeln!(w, "{from} -{label}-> {to}")?;
        }
        for (from, to) in self.epsilon_transitions() {
            writeln!(w, "{from} -ε-> {to}")?;
        }
        Ok(())
    }

    fn format_dot(&self, w: &mut String) -> std::fmt::Result {
        writeln!(w, "digraph {{")?;
        for state in self.states() {
            let mut attrs = Vec::new();
            if self.start_states().contains(state) {
                attrs.push("style=bold");
            }
            if self.final_states().contains(state) {
                attrs.push("shape=doublecircle");
            }
            if attrs.is_empty() {
                writeln!(w, "    {};", dot_id(state))?;
            } else {
                writeln!(w, "    {} [{}];", dot_id(state), attrs.join(", "))?;
            }
        }
        for (from, label, to) in self.transitions() {
            writeln!(
                w,
                "    {} -> {} [label=\"{}\"];",
                dot_id(from),
                dot_id(to),
                escape_dot(label)
            )?;
        }
        for (from, to) in self.epsilon_transitions() {
            writeln!(w, "    {} -> {} [style=dashed];", dot_id(from), dot_id(to))?;
        }
        writeln!(w, "}}")
    }
}

/// `{a, b, c}` in set order.
pub fn fmt_states<'a>(states: impl IntoIterator<Item = &'a StateId>) -> String {
    let items: Vec<String> = states.into_iter().map(ToString::to_string).collect();
    format!("{{{}}}", items.join(", "))
}

fn dot_id(state: &StateId) -> String {
    format!("\"{state}\"")
}

fn escape_dot(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
