//! Grammar productions for the pathql language.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//!
//! ```text
//! program  = (stmt ";")* stmt? EOF
//! stmt     = "let" IDENT "=" expr | "print" expr
//! expr     = "fun" pattern ":" expr | or
//! or       = and ("or" and)*
//! and      = not ("and" not)*
//! not      = "not" not | member
//! member   = union ("in" union)?
//! union    = inter ("|" inter)*
//! inter    = concat ("&" concat)*
//! concat   = postfix ("." postfix)*
//! postfix  = primary "*"*
//! ```

use rowan::TextRange;

use super::core::Parser;
use super::cst::SyntaxKind;
use super::cst::token_sets::{EXPR_FIRST, EXPR_RECOVERY, STMT_FIRST, STMT_RECOVERY};
use crate::diagnostics::DiagnosticKind;

impl Parser<'_> {
    pub fn parse_root(&mut self) {
        self.start_node(SyntaxKind::Root);

        while !self.should_stop() {
            if self.currently_is_one_of(STMT_FIRST) {
                self.parse_stmt();
            } else {
                let found = self.current().describe();
                self.error_msg(DiagnosticKind::ExpectedStatement, format!("found {found}"));
                self.skip_to_statement_end();
                continue;
            }

            if self.eat_token(SyntaxKind::Semicolon) || self.should_stop() {
                continue;
            }
            self.error_msg(DiagnosticKind::ExpectedToken, "`;` after statement");
            self.skip_to_statement_end();
        }

        self.eat_trivia();
        self.finish_node();
    }

    /// Wrap tokens up to the next statement boundary in an `Error` node and
    /// consume a terminating `;` if there is one.
    fn skip_to_statement_end(&mut self) {
        if !self.currently_is_one_of(STMT_RECOVERY) && !self.should_stop() {
            self.start_node(SyntaxKind::Error);
            while !self.currently_is_one_of(STMT_RECOVERY) && !self.should_stop() {
                self.bump();
            }
            self.finish_node();
        }
        self.eat_token(SyntaxKind::Semicolon);
    }

    fn parse_stmt(&mut self) {
        match self.current() {
            SyntaxKind::KwLet => self.parse_let(),
            SyntaxKind::KwPrint => self.parse_print(),
            kind => unreachable!("parse_stmt: caller checked STMT_FIRST, found {kind:?}"),
        }
    }

    /// `let name = expr`
    fn parse_let(&mut self) {
        self.start_node(SyntaxKind::LetStmt);
        self.assert_current(SyntaxKind::KwLet);
        self.bump();

        if !self.eat_token(SyntaxKind::Id) {
            self.error_msg(DiagnosticKind::ExpectedName, "after `let`");
        }
        self.expect(SyntaxKind::Equals, "`=`");
        self.parse_expr_or_error("after `=`");

        self.finish_node();
    }

    /// `print expr`
    fn parse_print(&mut self) {
        self.start_node(SyntaxKind::PrintStmt);
        self.assert_current(SyntaxKind::KwPrint);
        self.bump();
        self.parse_expr_or_error("after `print`");
        self.finish_node();
    }

    /// Parse an expression, or emit an error if current token can't start one.
    /// Returns `true` if an expression was parsed.
    fn parse_expr_or_error(&mut self, context: &str) -> bool {
        if self.currently_is_one_of(EXPR_FIRST) {
            self.parse_expr();
            return true;
        }
        if self.at_eof() || self.currently_is_one_of(EXPR_RECOVERY) {
            self.error_msg(DiagnosticKind::ExpectedExpression, context);
        } else {
            self.error_and_bump_msg(DiagnosticKind::ExpectedExpression, context);
        }
        false
    }

    fn parse_expr(&mut self) {
        if !self.enter_recursion() {
            self.start_node(SyntaxKind::Error);
            while !self.should_stop() {
                self.bump();
            }
            self.finish_node();
            return;
        }

        if self.currently_is(SyntaxKind::KwFun) {
            self.parse_lambda();
        } else {
            self.parse_or();
        }

        self.exit_recursion();
    }

    /// `fun pattern : expr`
    fn parse_lambda(&mut self) {
        self.start_node(SyntaxKind::Lambda);
        self.assert_current(SyntaxKind::KwFun);
        self.bump();
        self.parse_pattern();
        self.expect(SyntaxKind::Colon, "`:` after lambda parameter");
        self.parse_expr_or_error("as lambda body");
        self.finish_node();
    }

    /// Left-associative chain of `operand (op operand)*`.
    fn parse_binary(&mut self, op: SyntaxKind, operand: fn(&mut Self)) {
        let checkpoint = self.checkpoint();
        operand(self);
        while self.currently_is(op) {
            self.start_node_at(checkpoint, SyntaxKind::BinaryExpr);
            self.bump();
            operand(self);
            self.finish_node();
        }
    }

    fn parse_or(&mut self) {
        self.parse_binary(SyntaxKind::KwOr, Self::parse_and);
    }

    fn parse_and(&mut self) {
        self.parse_binary(SyntaxKind::KwAnd, Self::parse_not);
    }

    fn parse_not(&mut self) {
        if !self.currently_is(SyntaxKind::KwNot) {
            self.parse_member();
            return;
        }
        if !self.enter_recursion() {
            return;
        }
        self.start_node(SyntaxKind::NotExpr);
        self.bump();
        self.parse_not();
        self.finish_node();
        self.exit_recursion();
    }

    /// `in` does not chain: `a in b in c` is an error.
    fn parse_member(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_union();
        if self.currently_is(SyntaxKind::KwIn) {
            self.start_node_at(checkpoint, SyntaxKind::BinaryExpr);
            self.bump();
            self.parse_union();
            self.finish_node();
        }
    }

    fn parse_union(&mut self) {
        self.parse_binary(SyntaxKind::Pipe, Self::parse_inter);
    }

    fn parse_inter(&mut self) {
        self.parse_binary(SyntaxKind::Ampersand, Self::parse_concat);
    }

    fn parse_concat(&mut self) {
        self.parse_binary(SyntaxKind::Dot, Self::parse_postfix);
    }

    fn parse_postfix(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_primary();
        while self.currently_is(SyntaxKind::Star) {
            self.start_node_at(checkpoint, SyntaxKind::StarExpr);
            self.bump();
            self.finish_node();
        }
    }

    fn parse_primary(&mut self) {
        if self.at_eof() {
            self.error_msg(DiagnosticKind::ExpectedExpression, "found end of input");
            return;
        }

        match self.current() {
            SyntaxKind::Int => self.parse_leaf(SyntaxKind::IntLit),
            SyntaxKind::Str => self.parse_leaf(SyntaxKind::StrLit),
            SyntaxKind::KwTrue | SyntaxKind::KwFalse => self.parse_leaf(SyntaxKind::BoolLit),
            SyntaxKind::Id if self.next_is(SyntaxKind::ParenOpen) => self.parse_call(),
            SyntaxKind::Id => self.parse_leaf(SyntaxKind::NameRef),
            SyntaxKind::ParenOpen => self.parse_paren_or_tuple(),
            SyntaxKind::BraceOpen => self.parse_set(),
            SyntaxKind::KwFun => self.parse_lambda(),
            SyntaxKind::KwNot => {
                self.error_and_bump_msg(
                    DiagnosticKind::UnexpectedToken,
                    "wrap `not ...` in parentheses here",
                );
            }
            kind if EXPR_RECOVERY.contains(kind) => {
                self.error_msg(
                    DiagnosticKind::ExpectedExpression,
                    format!("found {}", kind.describe()),
                );
            }
            kind => {
                self.error_and_bump_msg(
                    DiagnosticKind::ExpectedExpression,
                    format!("found {}", kind.describe()),
                );
            }
        }
    }

    /// Single-token node: literals and name references.
    fn parse_leaf(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.finish_node();
    }

    /// `name(args)`
    fn parse_call(&mut self) {
        self.start_node(SyntaxKind::CallExpr);
        self.assert_current(SyntaxKind::Id);
        self.bump();

        self.start_node(SyntaxKind::ArgList);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        if !self.currently_is(SyntaxKind::ParenClose) {
            self.parse_expr_or_error("as argument");
        }
        self.parse_list_tail(SyntaxKind::ParenClose);
        self.close_delimiter(SyntaxKind::ParenClose);
        self.finish_node();

        self.finish_node();
    }

    /// `(expr)` or `(expr, expr, ...)`
    fn parse_paren_or_tuple(&mut self) {
        let checkpoint = self.checkpoint();
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        self.parse_expr_or_error("after `(`");
        let commas = self.parse_list_tail(SyntaxKind::ParenClose);
        self.close_delimiter(SyntaxKind::ParenClose);

        let kind = if commas > 0 {
            SyntaxKind::TupleExpr
        } else {
            SyntaxKind::ParenExpr
        };
        self.start_node_at(checkpoint, kind);
        self.finish_node();
    }

    /// `{lo..hi}` or `{expr, ...}`
    fn parse_set(&mut self) {
        self.start_node(SyntaxKind::SetExpr);
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();

        if self.currently_is(SyntaxKind::Int) && self.next_is(SyntaxKind::DotDot) {
            self.start_node(SyntaxKind::RangeExpr);
            self.parse_leaf(SyntaxKind::IntLit);
            self.bump();
            if self.currently_is(SyntaxKind::Int) {
                self.parse_leaf(SyntaxKind::IntLit);
            } else {
                self.error_msg(DiagnosticKind::ExpectedToken, "integer after `..`");
            }
            self.finish_node();
        } else if !self.currently_is(SyntaxKind::BraceClose) {
            self.parse_expr_or_error("as set element");
            self.parse_list_tail(SyntaxKind::BraceClose);
        }

        self.close_delimiter(SyntaxKind::BraceClose);
        self.finish_node();
    }

    /// `("," expr)*` up to `close`. Stray tokens are reported and skipped.
    /// Returns the number of commas consumed.
    fn parse_list_tail(&mut self, close: SyntaxKind) -> usize {
        let mut commas = 0;
        loop {
            if self.eat_token(SyntaxKind::Comma) {
                commas += 1;
                self.parse_expr_or_error("after `,`");
                continue;
            }
            if self.currently_is(close)
                || self.should_stop()
                || self.currently_is_one_of(STMT_RECOVERY)
            {
                return commas;
            }
            let expected = format!("expected `,` or {}", close.describe());
            self.error_and_bump_msg(DiagnosticKind::UnexpectedToken, expected);
        }
    }

    /// `name` | `_` | `(pattern, pattern, ...)`
    fn parse_pattern(&mut self) {
        if self.at_eof() {
            self.error(DiagnosticKind::ExpectedPattern);
            return;
        }

        match self.current() {
            SyntaxKind::Id => self.parse_leaf(SyntaxKind::NamePat),
            SyntaxKind::Underscore => self.parse_leaf(SyntaxKind::WildcardPat),
            SyntaxKind::ParenOpen => self.parse_tuple_pattern(),
            SyntaxKind::Colon => self.error(DiagnosticKind::ExpectedPattern),
            kind if EXPR_RECOVERY.contains(kind) => self.error(DiagnosticKind::ExpectedPattern),
            _ => self.error_and_bump(DiagnosticKind::ExpectedPattern),
        }
    }

    fn parse_tuple_pattern(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        let open = self.current_span();
        self.start_node(SyntaxKind::TuplePat);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        self.parse_pattern();
        let mut elements = 1;
        while self.eat_token(SyntaxKind::Comma) {
            self.parse_pattern();
            elements += 1;
        }
        self.close_delimiter(SyntaxKind::ParenClose);
        self.finish_node();
        self.exit_recursion();

        if elements == 1 {
            let end = self.last_non_trivia_end().unwrap_or(open.end());
            self.diagnostics
                .report(
                    DiagnosticKind::SingleElementTuplePattern,
                    TextRange::new(open.start(), end),
                )
                .emit();
        }
    }
}
