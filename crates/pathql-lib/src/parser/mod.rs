//! Parser infrastructure for the pathql language.
//!
//! # Architecture
//!
//! The parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached as leading trivia
//! - Checkpoint-based wrapping: binary operators and `*` retroactively wrap their left operand
//! - Explicit recovery sets: statement and expression sets decide when to bail vs consume
//!
//! # Recovery Strategy
//!
//! The parser always produces a tree:
//!
//! 1. Unknown tokens get wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing expected tokens emit a diagnostic but don't consume (parent may handle)
//! 3. A broken statement is skipped up to the next `;`, `let` or `print`
//! 4. On recursion limit, remaining input goes into single Error node
//!
//! Fuel exhaustion (exec_fuel, recursion_fuel) returns an actual error immediately.

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod lexer_tests;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{
    ArgList, BinaryExpr, BinaryOp, BoolLit, CallExpr, Expr, IntLit, Lambda, LetStmt, NamePat,
    NameRef, NotExpr, ParenExpr, Pattern, PrintStmt, RangeExpr, Root, SetExpr, StarExpr, Stmt,
    StrLit, TupleExpr, TuplePat, WildcardPat,
};

pub use core::{ParseResult, Parser};

use crate::Error;
use lexer::lex;

/// Parse with default limits. Returns `Err` only on fuel exhaustion.
pub fn parse(source: &str) -> Result<ParseResult, Error> {
    Parser::new(source, lex(source)).parse()
}
