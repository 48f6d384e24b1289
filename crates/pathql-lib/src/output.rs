//! Printing values produced by `print`.
//!
//! Text format:
//!
//! ```text
//! "knows"                     string
//! 3                           int / atomic vertex
//! (0, 3)                      composite vertex
//! (0, "knows", 1)             edge
//! {1, 2, 3}                   set, ascending
//! graph(states: 4, transitions: 3, start: {0}, final: {3})
//! ```
//!
//! JSON output is the serde form of [`Value`], one document per line.

use std::fmt;
use std::io;

use pathql_core::{Automaton, StateId};

use crate::eval::{Edge, EvalError, Value, ValueSink};

/// ANSI palette for text output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.blue.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Builder for the text rendering of one value.
pub struct ValuePrinter<'v> {
    value: &'v Value,
    colors: Colors,
}

impl<'v> ValuePrinter<'v> {
    pub fn new(value: &'v Value) -> Self {
        Self {
            value,
            colors: Colors::OFF,
        }
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl fmt::Write) -> fmt::Result {
        self.value_to(self.value, w)
    }

    fn value_to(&self, value: &Value, w: &mut impl fmt::Write) -> fmt::Result {
        let c = &self.colors;
        match value {
            Value::String(s) => self.string_to(s, w),
            Value::Int(n) => write!(w, "{}{n}{}", c.blue, c.reset),
            Value::Bool(b) => write!(w, "{}{b}{}", c.blue, c.reset),
            Value::Graph(g) => self.graph_to(g, w),
            Value::Labels(set) => self.set_to(set, w, |s, w| self.string_to(s, w)),
            Value::Vertices(set) => self.set_to(set, w, |v, w| self.vertex_to(v, w)),
            Value::Edges(set) => self.set_to(set, w, |e, w| self.edge_to(e, w)),
            Value::Tuple(items) => {
                write!(w, "{}({}", c.dim, c.reset)?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(w, "{}, {}", c.dim, c.reset)?;
                    }
                    self.value_to(item, w)?;
                }
                write!(w, "{}){}", c.dim, c.reset)
            }
        }
    }

    fn string_to(&self, s: &str, w: &mut impl fmt::Write) -> fmt::Result {
        write!(w, "{}\"{}\"{}", self.colors.green, escape(s), self.colors.reset)
    }

    fn vertex_to(&self, state: &StateId, w: &mut impl fmt::Write) -> fmt::Result {
        let c = &self.colors;
        match state {
            StateId::Atomic(id) => write!(w, "{}{id}{}", c.blue, c.reset),
            StateId::Pair(left, right) => {
                write!(w, "{}({}", c.dim, c.reset)?;
                self.vertex_to(left, w)?;
                write!(w, "{}, {}", c.dim, c.reset)?;
                self.vertex_to(right, w)?;
                write!(w, "{}){}", c.dim, c.reset)
            }
        }
    }

    fn edge_to(&self, edge: &Edge, w: &mut impl fmt::Write) -> fmt::Result {
        let c = &self.colors;
        write!(w, "{}({}", c.dim, c.reset)?;
        self.vertex_to(&edge.from, w)?;
        write!(w, "{}, {}", c.dim, c.reset)?;
        self.string_to(&edge.label, w)?;
        write!(w, "{}, {}", c.dim, c.reset)?;
        self.vertex_to(&edge.to, w)?;
        write!(w, "{}){}", c.dim, c.reset)
    }

    fn set_to<'a, T: 'a, W: fmt::Write>(
        &self,
        items: impl IntoIterator<Item = &'a T>,
        w: &mut W,
        mut item_to: impl FnMut(&T, &mut W) -> fmt::Result,
    ) -> fmt::Result {
        let c = &self.colors;
        write!(w, "{}{{{}", c.dim, c.reset)?;
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                write!(w, "{}, {}", c.dim, c.reset)?;
            }
            item_to(item, w)?;
        }
        write!(w, "{}}}{}", c.dim, c.reset)
    }

    fn graph_to(&self, graph: &Automaton, w: &mut impl fmt::Write) -> fmt::Result {
        let c = &self.colors;
        write!(
            w,
            "{}graph{}(states: {}, transitions: {}, start: ",
            c.dim,
            c.reset,
            graph.num_states(),
            graph.num_transitions()
        )?;
        self.set_to(graph.start_states(), w, |v, w| self.vertex_to(v, w))?;
        w.write_str(", final: ")?;
        self.set_to(graph.final_states(), w, |v, w| self.vertex_to(v, w))?;
        w.write_char(')')
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ValuePrinter::new(self).format(f)
    }
}

/// Writes printed values to `out`, one per line.
pub struct Printer<W: io::Write> {
    out: W,
    format: OutputFormat,
    colors: Colors,
}

impl<W: io::Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            format: OutputFormat::Text,
            colors: Colors::OFF,
        }
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> ValueSink for Printer<W> {
    fn emit(&mut self, value: &Value) -> Result<(), EvalError> {
        match self.format {
            OutputFormat::Text => {
                let text = ValuePrinter::new(value).colors(self.colors).render();
                writeln!(self.out, "{text}")?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, value).map_err(io::Error::from)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}
