use std::collections::BTreeSet;

use crate::reach::{accepts, accepts_word, epsilon_closure, reachable_finals, reachable_pairs, step};
use crate::{Automaton, StateId};

fn v(id: u64) -> StateId {
    StateId::Atomic(id)
}

fn set(ids: &[u64]) -> BTreeSet<StateId> {
    ids.iter().copied().map(v).collect()
}

fn pairs(items: &[(u64, u64)]) -> BTreeSet<(StateId, StateId)> {
    items.iter().map(|&(s, f)| (v(s), v(f))).collect()
}

/// 0 -a-> 1 -b-> 2, every vertex marked.
fn path() -> Automaton {
    let mut g = Automaton::new();
    g.add_transition(v(0), "a", v(1));
    g.add_transition(v(1), "b", v(2));
    g.mark_all_states();
    g
}

#[test]
fn closure_follows_epsilon_chains() {
    let mut a = Automaton::new();
    a.add_epsilon(v(0), v(1));
    a.add_epsilon(v(1), v(2));
    a.add_transition(v(2), "x", v(3));

    assert_eq!(epsilon_closure(&a, &set(&[0])), set(&[0, 1, 2]));
    assert_eq!(epsilon_closure(&a, &set(&[3])), set(&[3]));
}

#[test]
fn closure_terminates_on_epsilon_cycles() {
    let mut a = Automaton::new();
    a.add_epsilon(v(0), v(1));
    a.add_epsilon(v(1), v(0));

    assert_eq!(epsilon_closure(&a, &set(&[1])), set(&[0, 1]));
}

#[test]
fn step_closes_after_moving() {
    let mut a = Automaton::new();
    a.add_transition(v(0), "x", v(1));
    a.add_epsilon(v(1), v(2));

    assert_eq!(step(&a, &set(&[0]), "x"), set(&[1, 2]));
    assert!(step(&a, &set(&[0]), "y").is_empty());
}

#[test]
fn pairs_include_empty_path() {
    let g = path();

    assert_eq!(
        reachable_pairs(&g),
        pairs(&[(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 2)])
    );
}

#[test]
fn pairs_respect_marks() {
    let mut g = path();
    g.clear_marks();
    g.add_start(v(0));
    g.add_final(v(2));

    assert_eq!(reachable_pairs(&g), pairs(&[(0, 2)]));
    assert_eq!(reachable_finals(&g), set(&[2]));
}

#[test]
fn pairs_cross_epsilon_edges() {
    let mut g = Automaton::new();
    g.add_epsilon(v(0), v(1));
    g.add_transition(v(1), "a", v(2));
    g.add_start(v(0));
    g.add_final(v(2));

    assert_eq!(reachable_pairs(&g), pairs(&[(0, 2)]));
}

#[test]
fn pairs_on_cycle_reach_everything() {
    let mut g = Automaton::new();
    g.add_transition(v(0), "a", v(1));
    g.add_transition(v(1), "a", v(2));
    g.add_transition(v(2), "a", v(0));
    g.mark_all_states();

    assert_eq!(reachable_pairs(&g).len(), 9);
}

#[test]
fn unmarked_automaton_accepts_nothing() {
    let mut g = path();
    g.clear_marks();

    assert!(!accepts(&g));
    assert!(reachable_pairs(&g).is_empty());
    assert!(reachable_finals(&g).is_empty());
}

#[test]
fn empty_automaton_accepts_nothing() {
    let g = Automaton::new();

    assert!(!accepts(&g));
    assert!(!accepts_word(&g, &[]));
}

#[test]
fn accepts_word_follows_labels() {
    let mut g = path();
    g.clear_marks();
    g.add_start(v(0));
    g.add_final(v(2));

    assert!(accepts_word(&g, &["a", "b"]));
    assert!(!accepts_word(&g, &["a"]));
    assert!(!accepts_word(&g, &["b", "a"]));
    assert!(accepts(&g));
}
