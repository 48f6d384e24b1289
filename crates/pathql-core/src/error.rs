//! Errors raised by automaton operations.

use crate::StateId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AutomatonError {
    /// A state set names a state the automaton does not have.
    #[error("state {state} is not a state of the automaton")]
    UnknownState { state: StateId },

    /// A construction would exceed the configured state budget.
    #[error("automaton would have {requested} states, exceeding the limit of {limit}")]
    StateLimitExceeded { requested: u128, limit: usize },

    /// Cycle generators need at least one vertex per cycle.
    #[error("cycle length must be at least 1")]
    EmptyCycle,
}

/// Budgets an embedding host can impose on automaton constructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of states a single product may allocate (default: 10,000,000).
    pub max_states: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_states: 10_000_000,
        }
    }
}

impl Limits {
    pub(crate) fn check(&self, requested: u128) -> Result<(), AutomatonError> {
        if requested > self.max_states as u128 {
            return Err(AutomatonError::StateLimitExceeded {
                requested,
                limit: self.max_states,
            });
        }
        Ok(())
    }
}
