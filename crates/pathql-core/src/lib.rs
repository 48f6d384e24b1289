#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Evaluation core for regular path queries.
//!
//! Graphs and path patterns share one representation, [`Automaton`]. The
//! language operators map onto a handful of algorithms:
//!
//! - [`compose`]: `single_symbol`, `union`, `concat`, `star`
//! - [`product`]: synchronized product (intersection)
//! - [`reach`]: epsilon closures and start→final reachability
//!
//! ```
//! use pathql_core::{Limits, compose, product, reach};
//!
//! let pattern = compose::star(&compose::single_symbol("a"));
//! let word = compose::concat(&compose::single_symbol("a"), &compose::single_symbol("a"));
//! let both = product::product(&pattern, &word, &Limits::default()).unwrap();
//! assert!(reach::accepts_word(&both, &["a", "a"]));
//! ```

mod automaton;
pub mod compose;
mod dump;
mod error;
pub mod generate;
mod invariants;
pub mod product;
pub mod reach;
mod state;

#[cfg(test)]
mod compose_tests;
#[cfg(test)]
mod reach_tests;

pub use automaton::Automaton;
pub use dump::{GraphInfo, fmt_states};
pub use error::{AutomatonError, Limits};
pub use state::{Label, StateId};
