//! Composition rules for building automata from smaller ones.
//!
//! These four rules are the only way patterns are compiled. They keep epsilon
//! transitions explicit instead of eliminating them, so concatenation and
//! closure stay linear in the size of their operands.
//!
//! ```text
//! single_symbol("a"):   s0 ─a→ s1
//! union(a, b):          a' ∪ b'                (disjoint copies)
//! concat(a, b):         a' ─ε→ b'              (every final of a' to every start of b')
//! star(a):              a  ─ε→ a, starts final (every final back to every start)
//! ```

use crate::{Automaton, Label, StateId};

/// Two states, one transition on `label` from the start to the final state.
pub fn single_symbol(label: impl Into<Label>) -> Automaton {
    let start = StateId::Atomic(0);
    let accept = StateId::Atomic(1);

    let mut out = Automaton::new();
    out.add_transition(start.clone(), label, accept.clone());
    out.add_start(start);
    out.add_final(accept);
    out
}

/// Accepts every path accepted by `a` or by `b`.
///
/// The operands may share state ids (two graphs both have a vertex `0`), so
/// both are renumbered into disjoint ranges first.
pub fn union(a: &Automaton, b: &Automaton) -> Automaton {
    let mut out = a.renumbered(0);
    out.absorb(b.renumbered(a.num_states() as u64));
    #[cfg(debug_assertions)]
    out.assert_well_formed();
    out
}

/// Accepts a path of `a` followed by a path of `b`.
pub fn concat(a: &Automaton, b: &Automaton) -> Automaton {
    let left = a.renumbered(0);
    let right = b.renumbered(a.num_states() as u64);

    let start = left.start_states().clone();
    let finals = right.final_states().clone();
    let bridges: Vec<(StateId, StateId)> = left
        .final_states()
        .iter()
        .flat_map(|f| right.start_states().iter().map(move |s| (f.clone(), s.clone())))
        .collect();

    let mut out = left;
    out.absorb(right);
    for (from, to) in bridges {
        out.add_epsilon(from, to);
    }
    out.set_marks(start, finals);
    #[cfg(debug_assertions)]
    out.assert_well_formed();
    out
}

/// Kleene closure: zero or more repetitions of a path of `a`.
///
/// Every start state becomes final, so the empty path is accepted from each
/// start to itself.
pub fn star(a: &Automaton) -> Automaton {
    let mut out = a.clone();
    for f in a.final_states() {
        for s in a.start_states() {
            out.add_epsilon(f.clone(), s.clone());
        }
    }
    for s in a.start_states() {
        out.add_final(s.clone());
    }
    out
}
