//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::Automaton;

impl Automaton {
    /// Panics if a marked state or a transition endpoint is not a state.
    ///
    /// Mutators uphold this; the check guards the composition rules in
    /// debug builds.
    pub(crate) fn assert_well_formed(&self) {
        for state in self.start_states().iter().chain(self.final_states()) {
            assert!(
                self.contains_state(state),
                "Automaton: marked state {state} missing from state set"
            );
        }
        for (from, label, to) in self.transitions() {
            assert!(
                self.contains_state(from) && self.contains_state(to),
                "Automaton: transition {from} -{label}-> {to} leaves the state set"
            );
        }
        for (from, to) in self.epsilon_transitions() {
            assert!(
                self.contains_state(from) && self.contains_state(to),
                "Automaton: epsilon {from} -> {to} leaves the state set"
            );
        }
    }
}
