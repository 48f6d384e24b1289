//! Synthetic graph generators.

use crate::{Automaton, AutomatonError, StateId};

/// Two labeled cycles sharing vertex `0`.
///
/// The first cycle is `0 → 1 → … → first → 0`, every edge labeled
/// `labels.0`. The second is `0 → first+1 → … → first+second → 0`, labeled
/// `labels.1`. Start and final sets are left empty; callers apply their
/// marking policy.
pub fn two_cycles(first: u64, second: u64, labels: (&str, &str)) -> Result<Automaton, AutomatonError> {
    if first == 0 || second == 0 {
        return Err(AutomatonError::EmptyCycle);
    }

    let v = StateId::Atomic;
    let mut out = Automaton::new();

    for i in 0..first {
        out.add_transition(v(i), labels.0, v(i + 1));
    }
    out.add_transition(v(first), labels.0, v(0));

    out.add_transition(v(0), labels.1, v(first + 1));
    for i in first + 1..first + second {
        out.add_transition(v(i), labels.1, v(i + 1));
    }
    out.add_transition(v(first + second), labels.1, v(0));

    Ok(out)
}
