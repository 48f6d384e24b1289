use crate::compose::{concat, single_symbol, star, union};
use crate::reach::{accepts_word, reachable_pairs};
use crate::{Automaton, StateId};

/// All words over `alphabet` of length `0..=max_len`.
fn words<'a>(alphabet: &[&'a str], max_len: usize) -> Vec<Vec<&'a str>> {
    let mut all = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for word in &frontier {
            for &symbol in alphabet {
                let mut longer: Vec<&str> = word.clone();
                longer.push(symbol);
                next.push(longer);
            }
        }
        all.extend(next.iter().cloned());
        frontier = next;
    }
    all
}

fn same_language(x: &Automaton, y: &Automaton, alphabet: &[&str], max_len: usize) {
    for word in words(alphabet, max_len) {
        assert_eq!(
            accepts_word(x, &word),
            accepts_word(y, &word),
            "disagree on {word:?}"
        );
    }
}

#[test]
fn single_symbol_shape() {
    let a = single_symbol("a");

    insta::assert_snapshot!(a.dump(), @r"
    states: {0, 1}
    start: {0}
    final: {1}
    0 -a-> 1
    ");
}

#[test]
fn union_renames_apart() {
    let u = union(&single_symbol("a"), &single_symbol("b"));

    insta::assert_snapshot!(u.dump(), @r"
    states: {0, 1, 2, 3}
    start: {0, 2}
    final: {1, 3}
    0 -a-> 1
    2 -b-> 3
    ");
}

#[test]
fn union_of_overlapping_graphs_keeps_both() {
    let mut g = Automaton::new();
    g.add_transition(StateId::Atomic(0), "x", StateId::Atomic(1));
    g.mark_all_states();

    let u = union(&g, &g);

    assert_eq!(u.num_states(), 4);
    assert_eq!(u.num_transitions(), 2);
}

#[test]
fn concat_bridges_finals_to_starts() {
    let c = concat(&single_symbol("a"), &single_symbol("b"));

    insta::assert_snapshot!(c.dump(), @r"
    states: {0, 1, 2, 3}
    start: {0}
    final: {3}
    0 -a-> 1
    2 -b-> 3
    1 -ε-> 2
    ");
}

#[test]
fn star_loops_back_and_accepts_empty() {
    let s = star(&single_symbol("a"));

    insta::assert_snapshot!(s.dump(), @r"
    states: {0, 1}
    start: {0}
    final: {0, 1}
    0 -a-> 1
    1 -ε-> 0
    ");
}

#[test]
fn union_accepts_either_operand() {
    let ab = concat(&single_symbol("a"), &single_symbol("b"));
    let c = single_symbol("c");
    let u = union(&ab, &c);

    for word in words(&["a", "b", "c"], 3) {
        assert_eq!(
            accepts_word(&u, &word),
            accepts_word(&ab, &word) || accepts_word(&c, &word),
            "disagree on {word:?}"
        );
    }
}

#[test]
fn concat_spells_left_then_right() {
    let c = concat(&single_symbol("a"), &star(&single_symbol("b")));

    assert!(accepts_word(&c, &["a"]));
    assert!(accepts_word(&c, &["a", "b", "b"]));
    assert!(!accepts_word(&c, &["b"]));
    assert!(!accepts_word(&c, &["a", "a"]));
}

#[test]
fn star_is_idempotent() {
    let ab = union(&single_symbol("a"), &concat(&single_symbol("a"), &single_symbol("b")));

    same_language(&star(&ab), &star(&star(&ab)), &["a", "b"], 4);
}

#[test]
fn star_reaches_every_start_from_itself() {
    let g = union(&single_symbol("a"), &single_symbol("b"));
    let s = star(&g);

    let pairs = reachable_pairs(&s);

    for start in s.start_states() {
        assert!(pairs.contains(&(start.clone(), start.clone())));
    }
}

#[test]
fn composition_leaves_operands_unchanged() {
    let a = single_symbol("a");
    let before = a.clone();

    let _ = union(&a, &a);
    let _ = concat(&a, &a);
    let _ = star(&a);

    assert_eq!(a, before);
}
