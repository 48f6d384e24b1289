//! State identifiers and transition labels.

use std::fmt;

use serde::Serialize;

/// Transition label. Epsilon moves are kept in a separate relation and never
/// appear as a label.
pub type Label = String;

/// Identifier of an automaton state.
///
/// Vertices of a loaded graph are `Atomic`. The product construction pairs the
/// states of its operands, so chained intersections produce nested pairs.
/// Pairs stay structural: `Map`/`Filter` destructure them at runtime.
///
/// Ordering is total (all atomic ids before all pairs, pairs compared
/// component-wise), which gives every state set a deterministic order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum StateId {
    Atomic(u64),
    Pair(Box<StateId>, Box<StateId>),
}

impl StateId {
    pub fn pair(left: StateId, right: StateId) -> Self {
        StateId::Pair(Box::new(left), Box::new(right))
    }

    pub fn as_atomic(&self) -> Option<u64> {
        match self {
            StateId::Atomic(id) => Some(*id),
            StateId::Pair(..) => None,
        }
    }

    pub fn as_pair(&self) -> Option<(&StateId, &StateId)> {
        match self {
            StateId::Atomic(_) => None,
            StateId::Pair(left, right) => Some((left, right)),
        }
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self, StateId::Atomic(_))
    }

    /// Nesting depth: 0 for atomic ids, 1 for a pair of atomic ids, and so on.
    pub fn depth(&self) -> usize {
        match self {
            StateId::Atomic(_) => 0,
            StateId::Pair(left, right) => 1 + left.depth().max(right.depth()),
        }
    }
}

impl From<u64> for StateId {
    fn from(id: u64) -> Self {
        StateId::Atomic(id)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateId::Atomic(id) => write!(f, "{id}"),
            StateId::Pair(left, right) => write!(f, "({left}, {right})"),
        }
    }
}
