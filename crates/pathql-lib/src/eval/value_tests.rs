use std::collections::BTreeSet;

use pathql_core::{StateId, compose};

use super::{Edge, Element, ElementKind, Value, ValueKind};

fn v(id: u64) -> StateId {
    StateId::Atomic(id)
}

#[test]
fn vertex_elements_cross_as_ints_and_tuples() {
    let atomic = Element::Vertex(v(3));
    assert_eq!(atomic.to_value(), Some(Value::Int(3)));

    let pair = Element::Vertex(StateId::pair(v(1), StateId::pair(v(2), v(3))));
    let value = pair.to_value().unwrap();
    assert_eq!(
        value,
        Value::Tuple(vec![
            Value::Int(1),
            Value::Tuple(vec![Value::Int(2), Value::Int(3)]),
        ])
    );
    assert_eq!(Element::from_value(&value), Some(pair));
}

#[test]
fn edge_element_is_a_triple() {
    let edge = Element::Edge(Edge::new(v(0), "knows", v(1)));
    let value = edge.to_value().unwrap();

    assert_eq!(
        value,
        Value::Tuple(vec![
            Value::Int(0),
            Value::String("knows".into()),
            Value::Int(1)
        ])
    );
    assert_eq!(Element::from_value(&value), Some(edge));
}

#[test]
fn huge_vertex_id_has_no_value() {
    assert_eq!(Element::Vertex(v(u64::MAX)).to_value(), None);
}

#[test]
fn values_that_are_not_elements() {
    assert_eq!(Element::from_value(&Value::Int(-1)), None);
    assert_eq!(Element::from_value(&Value::String(String::new())), None);
    assert_eq!(Element::from_value(&Value::Bool(true)), None);
    assert_eq!(
        Element::from_value(&Value::Tuple(vec![Value::Int(1)])),
        None
    );
    assert_eq!(
        Element::from_value(&Value::Tuple(vec![
            Value::Int(1),
            Value::String(String::new()),
            Value::Int(2)
        ])),
        None
    );
    assert_eq!(
        Element::from_value(&Value::Labels(BTreeSet::new())),
        None
    );
}

#[test]
fn from_elements_skips_other_kinds() {
    let set = Value::from_elements(
        ElementKind::Label,
        [
            Element::Label("b".into()),
            Element::Vertex(v(1)),
            Element::Label("a".into()),
        ],
    );

    assert_eq!(
        set,
        Value::Labels(BTreeSet::from(["a".to_string(), "b".to_string()]))
    );
    assert_eq!(set.kind(), ValueKind::Labels);
    assert_eq!(set.element_kind(), Some(ElementKind::Label));
    assert!(set.contains(&Element::Label("a".into())));
    assert!(!set.contains(&Element::Vertex(v(1))));
}

#[test]
fn elements_are_sorted() {
    let set = Value::Vertices(BTreeSet::from([
        StateId::pair(v(0), v(1)),
        v(5),
        v(2),
    ]));

    let elements = set.elements().unwrap();
    assert_eq!(
        elements,
        vec![
            Element::Vertex(v(2)),
            Element::Vertex(v(5)),
            Element::Vertex(StateId::pair(v(0), v(1))),
        ]
    );
    assert!(Value::Int(1).elements().is_none());
}

#[test]
fn empty_set_per_kind() {
    assert_eq!(ElementKind::Vertex.empty_set().kind(), ValueKind::Vertices);
    assert_eq!(ElementKind::Label.empty_set().kind(), ValueKind::Labels);
    assert_eq!(ElementKind::Edge.empty_set().kind(), ValueKind::Edges);
    assert_eq!(ElementKind::Edge.set_kind(), ValueKind::Edges);
}

#[test]
fn kind_names() {
    let kinds = [
        ValueKind::String,
        ValueKind::Int,
        ValueKind::Bool,
        ValueKind::Graph,
        ValueKind::Labels,
        ValueKind::Vertices,
        ValueKind::Edges,
        ValueKind::Tuple,
    ];
    let names: Vec<String> = kinds.iter().map(|k| k.to_string()).collect();
    insta::assert_snapshot!(names.join(" "), @"string int bool graph labels vertices edges tuple");
}

#[test]
fn json_form() {
    let values = [
        Value::Int(7),
        Value::String("a".into()),
        Value::Vertices(BTreeSet::from([v(1), StateId::pair(v(0), v(2))])),
        Value::Edges(BTreeSet::from([Edge::new(v(0), "x", v(1))])),
    ];
    let json: Vec<String> = values
        .iter()
        .map(|v| serde_json::to_string(v).unwrap())
        .collect();

    insta::assert_snapshot!(json.join("\n"), @r#"
    {"kind":"int","value":7}
    {"kind":"string","value":"a"}
    {"kind":"vertices","value":[1,[0,2]]}
    {"kind":"edges","value":[{"from":0,"label":"x","to":1}]}
    "#);
}

#[test]
fn graph_json_form() {
    let graph = compose::single_symbol("a");
    let json = serde_json::to_string(&Value::Graph(graph)).unwrap();

    insta::assert_snapshot!(json, @r#"{"kind":"graph","value":{"states":[0,1],"transitions":[[0,"a",1]],"epsilons":[],"start":[0],"final":[1]}}"#);
}
