//! The automaton shared by graphs and compiled path patterns.
//!
//! A loaded graph is an automaton whose states are its vertices and whose
//! labeled transitions are its edges. A compiled pattern is an automaton too,
//! so every language operator works on one representation.
//!
//! All collections are ordered (`BTreeSet`/`BTreeMap`): iteration order is
//! part of the observable output of the language.

use std::collections::{BTreeMap, BTreeSet};

use crate::{AutomatonError, Label, StateId};

/// Nondeterministic finite automaton with explicit epsilon transitions.
///
/// Invariants:
/// - `start ⊆ states` and `finals ⊆ states`
/// - every state mentioned by `epsilon` or `delta` is in `states`
///
/// Mutators keep these invariants by inserting referenced states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Automaton {
    states: BTreeSet<StateId>,
    epsilon: BTreeMap<StateId, BTreeSet<StateId>>,
    delta: BTreeMap<StateId, BTreeMap<Label, BTreeSet<StateId>>>,
    start: BTreeSet<StateId>,
    finals: BTreeSet<StateId>,
}

impl Automaton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state, returning `false` if it was already present.
    pub fn add_state(&mut self, state: StateId) -> bool {
        self.states.insert(state)
    }

    /// Add a labeled transition, inserting both endpoints.
    pub fn add_transition(&mut self, from: StateId, label: impl Into<Label>, to: StateId) {
        self.states.insert(from.clone());
        self.states.insert(to.clone());
        self.delta
            .entry(from)
            .or_default()
            .entry(label.into())
            .or_default()
            .insert(to);
    }

    /// Add an epsilon transition, inserting both endpoints.
    pub fn add_epsilon(&mut self, from: StateId, to: StateId) {
        self.states.insert(from.clone());
        self.states.insert(to.clone());
        self.epsilon.entry(from).or_default().insert(to);
    }

    pub fn add_start(&mut self, state: StateId) {
        self.states.insert(state.clone());
        self.start.insert(state);
    }

    pub fn add_final(&mut self, state: StateId) {
        self.states.insert(state.clone());
        self.finals.insert(state);
    }

    /// Make every state both a start and a final state.
    pub fn mark_all_states(&mut self) {
        self.start = self.states.clone();
        self.finals = self.states.clone();
    }

    /// Clear the start and final sets.
    pub fn clear_marks(&mut self) {
        self.start.clear();
        self.finals.clear();
    }

    pub fn states(&self) -> &BTreeSet<StateId> {
        &self.states
    }

    pub fn start_states(&self) -> &BTreeSet<StateId> {
        &self.start
    }

    pub fn final_states(&self) -> &BTreeSet<StateId> {
        &self.finals
    }

    pub fn contains_state(&self, state: &StateId) -> bool {
        self.states.contains(state)
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Number of labeled transitions (epsilon moves excluded).
    pub fn num_transitions(&self) -> usize {
        self.delta
            .values()
            .flat_map(|by_label| by_label.values())
            .map(BTreeSet::len)
            .sum()
    }

    pub fn num_epsilons(&self) -> usize {
        self.epsilon.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Targets of the labeled transitions leaving `state` on `label`.
    pub fn successors(&self, state: &StateId, label: &str) -> Option<&BTreeSet<StateId>> {
        self.delta.get(state).and_then(|by_label| by_label.get(label))
    }

    /// Targets of the epsilon transitions leaving `state`.
    pub fn epsilon_successors(&self, state: &StateId) -> Option<&BTreeSet<StateId>> {
        self.epsilon.get(state)
    }

    /// Outgoing labeled transitions of `state`, grouped by label.
    pub fn outgoing(&self, state: &StateId) -> Option<&BTreeMap<Label, BTreeSet<StateId>>> {
        self.delta.get(state)
    }

    /// All labeled transitions as `(source, label, target)`, in order.
    pub fn transitions(&self) -> impl Iterator<Item = (&StateId, &str, &StateId)> + '_ {
        self.delta.iter().flat_map(|(from, by_label)| {
            by_label.iter().flat_map(move |(label, targets)| {
                targets.iter().map(move |to| (from, label.as_str(), to))
            })
        })
    }

    /// All epsilon transitions as `(source, target)`, in order.
    pub fn epsilon_transitions(&self) -> impl Iterator<Item = (&StateId, &StateId)> + '_ {
        self.epsilon
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |to| (from, to)))
    }

    /// Labels used by labeled transitions. Start/final sets do not matter.
    pub fn labels(&self) -> BTreeSet<Label> {
        self.delta
            .values()
            .flat_map(|by_label| by_label.keys())
            .cloned()
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Start/final set updates
    //
    // These return a new automaton: values bound in a program never change.
    // ─────────────────────────────────────────────────────────────────────

    /// Copy of `self` whose start set is exactly `states`.
    pub fn with_start_states(&self, states: &BTreeSet<StateId>) -> Result<Self, AutomatonError> {
        self.ensure_subset(states)?;
        let mut out = self.clone();
        out.start = states.clone();
        Ok(out)
    }

    /// Copy of `self` whose final set is exactly `states`.
    pub fn with_final_states(&self, states: &BTreeSet<StateId>) -> Result<Self, AutomatonError> {
        self.ensure_subset(states)?;
        let mut out = self.clone();
        out.finals = states.clone();
        Ok(out)
    }

    /// Copy of `self` with `states` added to the start set.
    pub fn with_added_start_states(
        &self,
        states: &BTreeSet<StateId>,
    ) -> Result<Self, AutomatonError> {
        self.ensure_subset(states)?;
        let mut out = self.clone();
        out.start.extend(states.iter().cloned());
        Ok(out)
    }

    /// Copy of `self` with `states` added to the final set.
    pub fn with_added_final_states(
        &self,
        states: &BTreeSet<StateId>,
    ) -> Result<Self, AutomatonError> {
        self.ensure_subset(states)?;
        let mut out = self.clone();
        out.finals.extend(states.iter().cloned());
        Ok(out)
    }

    fn ensure_subset(&self, states: &BTreeSet<StateId>) -> Result<(), AutomatonError> {
        match states.iter().find(|s| !self.states.contains(*s)) {
            Some(state) => Err(AutomatonError::UnknownState {
                state: state.clone(),
            }),
            None => Ok(()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Structural helpers for the composition rules
    // ─────────────────────────────────────────────────────────────────────

    /// Copy of `self` with states renumbered to `offset..offset + n` in
    /// ascending state order.
    pub(crate) fn renumbered(&self, offset: u64) -> Self {
        let mapping: BTreeMap<&StateId, StateId> = self
            .states
            .iter()
            .zip(offset..)
            .map(|(state, id)| (state, StateId::Atomic(id)))
            .collect();
        let rename = |state: &StateId| mapping[state].clone();

        let mut out = Self::new();
        out.states = mapping.values().cloned().collect();
        for (from, label, to) in self.transitions() {
            out.add_transition(rename(from), label, rename(to));
        }
        for (from, to) in self.epsilon_transitions() {
            out.add_epsilon(rename(from), rename(to));
        }
        out.start = self.start.iter().map(rename).collect();
        out.finals = self.finals.iter().map(rename).collect();
        out
    }

    /// Move every state, transition and mark of `other` into `self`.
    pub(crate) fn absorb(&mut self, other: Automaton) {
        self.states.extend(other.states);
        for (from, targets) in other.epsilon {
            self.epsilon.entry(from).or_default().extend(targets);
        }
        for (from, by_label) in other.delta {
            let entry = self.delta.entry(from).or_default();
            for (label, targets) in by_label {
                entry.entry(label).or_default().extend(targets);
            }
        }
        self.start.extend(other.start);
        self.finals.extend(other.finals);
    }

    /// Replace the start and final sets without validation.
    pub(crate) fn set_marks(&mut self, start: BTreeSet<StateId>, finals: BTreeSet<StateId>) {
        self.start = start;
        self.finals = finals;
    }
}
