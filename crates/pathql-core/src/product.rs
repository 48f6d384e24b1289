//! Synchronized product of two automata.
//!
//! The product accepts exactly the label sequences accepted by both operands.
//! Intersecting a graph with a compiled pattern is how a graph is queried.

use tracing::debug;

use crate::{Automaton, AutomatonError, Limits, StateId};

/// Build the product of `a` and `b`.
///
/// - states: `a.states × b.states`, as `StateId::Pair`
/// - labeled moves: both sides move on the same label
/// - epsilon moves: one side moves, the other stays put
/// - start/final: pairs of start/final states
///
/// Fails before allocating when the state count exceeds `limits`.
pub fn product(a: &Automaton, b: &Automaton, limits: &Limits) -> Result<Automaton, AutomatonError> {
    limits.check(a.num_states() as u128 * b.num_states() as u128)?;

    let mut out = Automaton::new();
    for s1 in a.states() {
        for s2 in b.states() {
            out.add_state(StateId::pair(s1.clone(), s2.clone()));
        }
    }

    for s1 in a.states() {
        let Some(left) = a.outgoing(s1) else {
            continue;
        };
        for s2 in b.states() {
            let Some(right) = b.outgoing(s2) else {
                continue;
            };
            let from = StateId::pair(s1.clone(), s2.clone());
            for (label, targets1) in left {
                let Some(targets2) = right.get(label) else {
                    continue;
                };
                for t1 in targets1 {
                    for t2 in targets2 {
                        out.add_transition(
                            from.clone(),
                            label.clone(),
                            StateId::pair(t1.clone(), t2.clone()),
                        );
                    }
                }
            }
        }
    }

    for (s1, t1) in a.epsilon_transitions() {
        for s2 in b.states() {
            out.add_epsilon(
                StateId::pair(s1.clone(), s2.clone()),
                StateId::pair(t1.clone(), s2.clone()),
            );
        }
    }
    for (s2, t2) in b.epsilon_transitions() {
        for s1 in a.states() {
            out.add_epsilon(
                StateId::pair(s1.clone(), s2.clone()),
                StateId::pair(s1.clone(), t2.clone()),
            );
        }
    }

    for s1 in a.start_states() {
        for s2 in b.start_states() {
            out.add_start(StateId::pair(s1.clone(), s2.clone()));
        }
    }
    for f1 in a.final_states() {
        for f2 in b.final_states() {
            out.add_final(StateId::pair(f1.clone(), f2.clone()));
        }
    }

    #[cfg(debug_assertions)]
    out.assert_well_formed();

    debug!(
        states = out.num_states(),
        transitions = out.num_transitions(),
        epsilons = out.num_epsilons(),
        "built product automaton"
    );
    Ok(out)
}
