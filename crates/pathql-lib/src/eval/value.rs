//! Runtime values.
//!
//! Collection values are ordered sets, so printing and iteration are
//! deterministic. Set elements cross into lambda bodies as plain values
//! (see [`Element::to_value`]) and come back through [`Element::from_value`].

use std::collections::BTreeSet;
use std::fmt;

use pathql_core::{Automaton, Label, StateId};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    pub from: StateId,
    pub label: Label,
    pub to: StateId,
}

impl Edge {
    pub fn new(from: StateId, label: impl Into<Label>, to: StateId) -> Self {
        Self {
            from,
            label: label.into(),
            to,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Value {
    String(String),
    Int(i64),
    Bool(bool),
    Graph(#[serde(serialize_with = "serialize_graph")] Automaton),
    Labels(BTreeSet<Label>),
    Vertices(BTreeSet<StateId>),
    Edges(BTreeSet<Edge>),
    /// A destructured composite vertex or edge bound inside a lambda body.
    Tuple(Vec<Value>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Int,
    Bool,
    Graph,
    Labels,
    Vertices,
    Edges,
    Tuple,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::Bool => "bool",
            ValueKind::Graph => "graph",
            ValueKind::Labels => "labels",
            ValueKind::Vertices => "vertices",
            ValueKind::Edges => "edges",
            ValueKind::Tuple => "tuple",
        })
    }
}

/// One member of a `Labels`, `Vertices` or `Edges` set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Element {
    Vertex(StateId),
    Label(Label),
    Edge(Edge),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Vertex,
    Label,
    Edge,
}

impl ElementKind {
    pub fn set_kind(self) -> ValueKind {
        match self {
            ElementKind::Vertex => ValueKind::Vertices,
            ElementKind::Label => ValueKind::Labels,
            ElementKind::Edge => ValueKind::Edges,
        }
    }

    pub fn empty_set(self) -> Value {
        match self {
            ElementKind::Vertex => Value::Vertices(BTreeSet::new()),
            ElementKind::Label => Value::Labels(BTreeSet::new()),
            ElementKind::Edge => Value::Edges(BTreeSet::new()),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementKind::Vertex => "vertex",
            ElementKind::Label => "label",
            ElementKind::Edge => "edge",
        })
    }
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Vertex(_) => ElementKind::Vertex,
            Element::Label(_) => ElementKind::Label,
            Element::Edge(_) => ElementKind::Edge,
        }
    }

    /// The value a lambda parameter sees for this element.
    ///
    /// Returns `None` for an atomic vertex id beyond `i64::MAX`.
    pub fn to_value(&self) -> Option<Value> {
        match self {
            Element::Vertex(state) => vertex_to_value(state),
            Element::Label(label) => Some(Value::String(label.clone())),
            Element::Edge(edge) => Some(Value::Tuple(vec![
                vertex_to_value(&edge.from)?,
                Value::String(edge.label.clone()),
                vertex_to_value(&edge.to)?,
            ])),
        }
    }

    /// Inverse of [`Element::to_value`].
    ///
    /// - `Int(n)` with `n ≥ 0` is an atomic vertex
    /// - a pair of vertices is a composite vertex
    /// - `(vertex, "label", vertex)` is an edge
    /// - a non-empty string is a label
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Element::Label(s.clone())),
            Value::Tuple(items) => match items.as_slice() {
                [from, Value::String(label), to] if !label.is_empty() => Some(Element::Edge(
                    Edge::new(vertex_from_value(from)?, label.clone(), vertex_from_value(to)?),
                )),
                _ => vertex_from_value(value).map(Element::Vertex),
            },
            _ => vertex_from_value(value).map(Element::Vertex),
        }
    }
}

fn vertex_to_value(state: &StateId) -> Option<Value> {
    match state {
        StateId::Atomic(id) => i64::try_from(*id).ok().map(Value::Int),
        StateId::Pair(left, right) => Some(Value::Tuple(vec![
            vertex_to_value(left)?,
            vertex_to_value(right)?,
        ])),
    }
}

fn vertex_from_value(value: &Value) -> Option<StateId> {
    match value {
        Value::Int(n) => u64::try_from(*n).ok().map(StateId::Atomic),
        Value::Tuple(items) => match items.as_slice() {
            [left, right] => Some(StateId::pair(
                vertex_from_value(left)?,
                vertex_from_value(right)?,
            )),
            _ => None,
        },
        _ => None,
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Int(_) => ValueKind::Int,
            Value::Bool(_) => ValueKind::Bool,
            Value::Graph(_) => ValueKind::Graph,
            Value::Labels(_) => ValueKind::Labels,
            Value::Vertices(_) => ValueKind::Vertices,
            Value::Edges(_) => ValueKind::Edges,
            Value::Tuple(_) => ValueKind::Tuple,
        }
    }

    /// Element kind of a set value, `None` for scalars and graphs.
    pub fn element_kind(&self) -> Option<ElementKind> {
        match self {
            Value::Labels(_) => Some(ElementKind::Label),
            Value::Vertices(_) => Some(ElementKind::Vertex),
            Value::Edges(_) => Some(ElementKind::Edge),
            _ => None,
        }
    }

    pub fn is_set(&self) -> bool {
        self.element_kind().is_some()
    }

    /// Members of a set value in ascending order.
    pub fn elements(&self) -> Option<Vec<Element>> {
        match self {
            Value::Labels(set) => Some(set.iter().cloned().map(Element::Label).collect()),
            Value::Vertices(set) => Some(set.iter().cloned().map(Element::Vertex).collect()),
            Value::Edges(set) => Some(set.iter().cloned().map(Element::Edge).collect()),
            _ => None,
        }
    }

    pub fn contains(&self, element: &Element) -> bool {
        match (self, element) {
            (Value::Labels(set), Element::Label(l)) => set.contains(l),
            (Value::Vertices(set), Element::Vertex(v)) => set.contains(v),
            (Value::Edges(set), Element::Edge(e)) => set.contains(e),
            _ => false,
        }
    }

    /// Build a set of `kind` from elements of that kind.
    ///
    /// Elements of another kind are skipped; callers check kinds first.
    pub fn from_elements(kind: ElementKind, elements: impl IntoIterator<Item = Element>) -> Value {
        let elements = elements.into_iter();
        match kind {
            ElementKind::Vertex => Value::Vertices(
                elements
                    .filter_map(|e| match e {
                        Element::Vertex(v) => Some(v),
                        _ => None,
                    })
                    .collect(),
            ),
            ElementKind::Label => Value::Labels(
                elements
                    .filter_map(|e| match e {
                        Element::Label(l) => Some(l),
                        _ => None,
                    })
                    .collect(),
            ),
            ElementKind::Edge => Value::Edges(
                elements
                    .filter_map(|e| match e {
                        Element::Edge(e) => Some(e),
                        _ => None,
                    })
                    .collect(),
            ),
        }
    }
}

#[derive(Serialize)]
struct GraphRepr<'a> {
    states: &'a BTreeSet<StateId>,
    transitions: Vec<(&'a StateId, &'a str, &'a StateId)>,
    epsilons: Vec<(&'a StateId, &'a StateId)>,
    start: &'a BTreeSet<StateId>,
    #[serde(rename = "final")]
    finals: &'a BTreeSet<StateId>,
}

fn serialize_graph<S: Serializer>(graph: &Automaton, serializer: S) -> Result<S::Ok, S::Error> {
    GraphRepr {
        states: graph.states(),
        transitions: graph.transitions().collect(),
        epsilons: graph.epsilon_transitions().collect(),
        start: graph.start_states(),
        finals: graph.final_states(),
    }
    .serialize(serializer)
}
