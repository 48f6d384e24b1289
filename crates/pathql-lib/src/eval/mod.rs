//! Program evaluation.
//!
//! Statements run in source order against one [`Env`]. Automaton-valued
//! operators delegate to `pathql_core`; set-valued operands of `|` and `&`
//! use plain set algebra.

mod builtins;
mod env;
mod error;
mod interpreter;
mod pattern;
mod value;

#[cfg(test)]
mod value_tests;

pub use builtins::Builtin;
pub use env::Env;
pub use error::EvalError;
pub use interpreter::{Interpreter, ValueSink};
pub use value::{Edge, Element, ElementKind, Value, ValueKind};
