use pathql_core::{StateId, compose};

use crate::settings::{Marking, Settings};

#[test]
fn defaults() {
    let settings = Settings::new();

    assert_eq!(settings.marking, Marking::AllVertices);
    assert_eq!(settings.limits.max_states, 10_000_000);
    assert!(settings.graph_dirs.is_empty());
}

#[test]
fn builder() {
    let settings = Settings::new()
        .marking(Marking::Empty)
        .max_states(64)
        .graph_dir("graphs")
        .graph_dir("more");

    assert_eq!(settings.marking, Marking::Empty);
    assert_eq!(settings.limits.max_states, 64);
    assert_eq!(settings.graph_dirs.len(), 2);
}

#[test]
fn marking_policies() {
    let graph = compose::single_symbol("a");

    let all = Marking::AllVertices.apply(graph.clone());
    assert_eq!(all.start_states(), all.states());
    assert_eq!(all.final_states(), all.states());

    let none = Marking::Empty.apply(graph);
    assert!(none.start_states().is_empty());
    assert!(none.final_states().is_empty());
    assert!(none.states().contains(&StateId::Atomic(1)));
}
