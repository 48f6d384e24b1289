//! pathql: a regular path query language over graphs.
//!
//! # Example
//!
//! ```
//! use pathql_lib::{MemoryLoader, Program, Settings, Value};
//!
//! let source = r#"
//!     let q = ("a" | "b")* . "c";
//!     print q & two_cycles(2, 1, "a", "c");
//! "#;
//!
//! let program = Program::try_from(source).expect("out of fuel");
//! assert!(program.is_valid(), "{}", program.diagnostics().render(source));
//!
//! let mut out: Vec<Value> = Vec::new();
//! program
//!     .run(&Settings::new(), &MemoryLoader::new(), &mut out)
//!     .expect("program runs");
//! assert_eq!(out.len(), 1);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod eval;
pub mod loader;
pub mod output;
pub mod parser;
pub mod program;
pub mod settings;
pub mod validate;

#[cfg(test)]
mod loader_tests;
#[cfg(test)]
mod settings_tests;

pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use eval::{EvalError, Value, ValueSink};
pub use loader::{FsGraphLoader, GraphLoader, LoadError, MemoryLoader};
pub use output::{Colors, OutputFormat, Printer};
pub use program::{Program, ProgramBuilder};
pub use settings::{Marking, Settings};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("program has {} errors", .0.error_count())]
    Syntax(Diagnostics),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

pub type Result<T> = std::result::Result<T, Error>;
