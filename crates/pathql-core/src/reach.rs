//! Epsilon closures and start→final reachability.
//!
//! Reachability does not care which label a transition carries, so epsilon
//! and labeled moves are merged into one successor list per state. The
//! "closure, step, closure" alternation then collapses to plain graph
//! reachability, including the zero-length path.

use std::collections::BTreeSet;

use fixedbitset::FixedBitSet;
use indexmap::IndexSet;
use rayon::prelude::*;
use tracing::trace;

use crate::{Automaton, StateId};

/// Smallest superset of `states` closed under epsilon transitions.
pub fn epsilon_closure(automaton: &Automaton, states: &BTreeSet<StateId>) -> BTreeSet<StateId> {
    let mut closure = BTreeSet::new();
    let mut stack: Vec<&StateId> = states.iter().collect();

    while let Some(state) = stack.pop() {
        if !closure.insert(state.clone()) {
            continue;
        }
        if let Some(targets) = automaton.epsilon_successors(state) {
            stack.extend(targets.iter().filter(|t| !closure.contains(*t)));
        }
    }

    closure
}

/// States reached from `states` by one transition on `label`, epsilon-closed.
pub fn step(automaton: &Automaton, states: &BTreeSet<StateId>, label: &str) -> BTreeSet<StateId> {
    let mut reached = BTreeSet::new();
    for state in states {
        if let Some(targets) = automaton.successors(state, label) {
            reached.extend(targets.iter().cloned());
        }
    }
    epsilon_closure(automaton, &reached)
}

/// Whether some start state reaches a final state by a path spelling `word`.
pub fn accepts_word(automaton: &Automaton, word: &[&str]) -> bool {
    let mut current = epsilon_closure(automaton, automaton.start_states());
    for label in word {
        if current.is_empty() {
            return false;
        }
        current = step(automaton, &current, label);
    }
    current
        .iter()
        .any(|state| automaton.final_states().contains(state))
}

/// Every `(start, final)` pair connected by a path.
///
/// Each start is an independent traversal, costing O(states + transitions).
/// Traversals run in parallel; results are merged into an ordered set, so the
/// answer does not depend on scheduling.
pub fn reachable_pairs(automaton: &Automaton) -> BTreeSet<(StateId, StateId)> {
    let graph = Adjacency::new(automaton);
    let finals = graph.mask(automaton.final_states());
    let starts: Vec<usize> = automaton
        .start_states()
        .iter()
        .map(|s| graph.index_of(s))
        .collect();

    let per_start: Vec<(usize, Vec<usize>)> = starts
        .par_iter()
        .map(|&start| {
            let visited = graph.visit(&[start]);
            (start, visited.intersection(&finals).collect())
        })
        .collect();

    let mut pairs = BTreeSet::new();
    for (start, reached) in per_start {
        for accept in reached {
            pairs.insert((graph.state(start).clone(), graph.state(accept).clone()));
        }
    }
    trace!(
        starts = starts.len(),
        pairs = pairs.len(),
        "computed reachable pairs"
    );
    pairs
}

/// Final states reachable from any start state, in one multi-source traversal.
pub fn reachable_finals(automaton: &Automaton) -> BTreeSet<StateId> {
    let graph = Adjacency::new(automaton);
    let finals = graph.mask(automaton.final_states());
    let sources: Vec<usize> = automaton
        .start_states()
        .iter()
        .map(|s| graph.index_of(s))
        .collect();

    graph
        .visit(&sources)
        .intersection(&finals)
        .map(|i| graph.state(i).clone())
        .collect()
}

/// Whether the automaton accepts at least one path.
pub fn accepts(automaton: &Automaton) -> bool {
    let graph = Adjacency::new(automaton);
    let finals = graph.mask(automaton.final_states());
    let sources: Vec<usize> = automaton
        .start_states()
        .iter()
        .map(|s| graph.index_of(s))
        .collect();

    graph.visit(&sources).intersection(&finals).next().is_some()
}

/// Dense, label-free view of an automaton's transition structure.
struct Adjacency<'a> {
    index: IndexSet<&'a StateId>,
    successors: Vec<Vec<usize>>,
}

impl<'a> Adjacency<'a> {
    fn new(automaton: &'a Automaton) -> Self {
        let index: IndexSet<&StateId> = automaton.states().iter().collect();
        let mut successors = vec![Vec::new(); index.len()];

        let position = |state: &StateId| {
            index
                .get_index_of(state)
                .expect("transition endpoints are states of the automaton")
        };
        for (from, _, to) in automaton.transitions() {
            successors[position(from)].push(position(to));
        }
        for (from, to) in automaton.epsilon_transitions() {
            successors[position(from)].push(position(to));
        }
        for targets in &mut successors {
            targets.sort_unstable();
            targets.dedup();
        }

        Self { index, successors }
    }

    fn index_of(&self, state: &StateId) -> usize {
        self.index
            .get_index_of(state)
            .expect("start and final states are states of the automaton")
    }

    fn state(&self, index: usize) -> &'a StateId {
        self.index[index]
    }

    fn mask(&self, states: &BTreeSet<StateId>) -> FixedBitSet {
        let mut bits = FixedBitSet::with_capacity(self.index.len());
        for state in states {
            bits.insert(self.index_of(state));
        }
        bits
    }

    /// Depth-first traversal from `sources`; the sources themselves are visited.
    fn visit(&self, sources: &[usize]) -> FixedBitSet {
        let mut visited = FixedBitSet::with_capacity(self.index.len());
        let mut stack: Vec<usize> = sources.to_vec();

        while let Some(node) = stack.pop() {
            if visited.put(node) {
                continue;
            }
            stack.extend(
                self.successors[node]
                    .iter()
                    .copied()
                    .filter(|&next| !visited.contains(next)),
            );
        }

        visited
    }
}
