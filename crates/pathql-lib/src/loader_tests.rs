use std::path::Path;

use indoc::indoc;
use pathql_core::{StateId, compose};

use crate::loader::{
    FsGraphLoader, GraphLoader, LoadError, MemoryLoader, read_edge_list, write_edge_list,
};

fn parse(text: &str) -> Result<pathql_core::Automaton, LoadError> {
    read_edge_list(text, Path::new("test.txt"))
}

#[test]
fn edge_list_forms() {
    let graph = parse(indoc! {"
        # people
        0 1 knows
        1, 2, likes   # commas
        2 3
        7
    "})
    .unwrap();

    insta::assert_snapshot!(graph.dump(), @r"
    states: {0, 1, 2, 3, 7}
    start: {}
    final: {}
    0 -knows-> 1
    1 -likes-> 2
    2 -ε-> 3
    ");
}

#[test]
fn negative_vertex_is_rejected() {
    let err = parse("0 1 a\n-1 2 b\n").unwrap_err();
    insta::assert_snapshot!(err, @"test.txt:2: `-1` is not a non-negative integer vertex id");
}

#[test]
fn too_many_fields() {
    let err = parse("0 1 a b\n").unwrap_err();
    insta::assert_snapshot!(err, @"test.txt:1: expected `source target [label]`, found 4 fields");
}

#[test]
fn write_then_read_keeps_graph() {
    let text = "0 1 a\n1 2 b\n2 0\n5\n";
    let graph = parse(text).unwrap();

    assert_eq!(write_edge_list(&graph).unwrap(), text);
}

#[test]
fn composite_states_cannot_be_written() {
    let pattern = compose::single_symbol("a");
    let product =
        pathql_core::product::product(&pattern, &pattern, &Default::default()).unwrap();

    let err = write_edge_list(&product).unwrap_err();
    assert!(matches!(err, LoadError::NonAtomicState { state } if !state.is_atomic()));
}

#[test]
fn fs_loader_tries_extensions() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("wine.csv"), "0,1,type\n").unwrap();

    let loader = FsGraphLoader::new([dir.path().to_path_buf()]);
    let graph = loader.load("wine").unwrap();

    assert_eq!(graph.num_transitions(), 1);
    assert!(graph.states().contains(&StateId::Atomic(1)));
    assert_eq!(loader.resolve("wine").unwrap(), dir.path().join("wine.csv"));
}

#[test]
fn fs_loader_prefers_earlier_directories() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    std::fs::write(first.path().join("g.txt"), "0 1 a\n").unwrap();
    std::fs::write(second.path().join("g.txt"), "0 1 b\n").unwrap();

    let loader = FsGraphLoader::new([first.path().to_path_buf(), second.path().to_path_buf()]);
    let graph = loader.load("g").unwrap();

    assert_eq!(graph.labels().into_iter().collect::<Vec<_>>(), ["a"]);
}

#[test]
fn fs_loader_reads_direct_paths() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.edges");
    std::fs::write(&path, "3 4 x\n").unwrap();

    let loader = FsGraphLoader::default();
    let graph = loader.load(path.to_str().unwrap()).unwrap();
    assert_eq!(graph.num_states(), 2);
}

#[test]
fn fs_loader_reports_search() {
    let dir = tempfile::tempdir().unwrap();
    let loader = FsGraphLoader::new([dir.path().to_path_buf()]);

    let err = loader.load("missing").unwrap_err();
    insta::assert_snapshot!(err, @"no graph named `missing` (searched 4 locations)");
}

#[test]
fn fs_loader_reports_line_of_bad_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.txt"), "0 1 a\nx y\n").unwrap();

    let loader = FsGraphLoader::new([dir.path().to_path_buf()]);
    let err = loader.load("bad").unwrap_err();
    assert!(matches!(err, LoadError::Parse { line: 2, .. }));
}

#[test]
fn memory_loader() {
    let mut loader = MemoryLoader::new();
    loader.insert("a", compose::single_symbol("a"));

    assert_eq!(loader.load("a").unwrap().num_transitions(), 1);
    assert!(matches!(
        loader.load("b"),
        Err(LoadError::NotFound { searched: 1, .. })
    ));
}
