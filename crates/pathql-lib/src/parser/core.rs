//! Token cursor and tree builder shared by the grammar rules.

use std::cell::Cell;

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::ast::Root;
use super::cst::{SyntaxKind, SyntaxNode, TokenSet};
use super::lexer::{Token, token_text};
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Lookaheads allowed between two consumed tokens before the parser is
/// considered stuck.
const STALL_LIMIT: u32 = 256;

#[derive(Debug)]
pub struct ParseResult {
    pub root: Root,
    pub diagnostics: Diagnostics,
    pub exec_fuel_consumed: u32,
}

#[derive(Debug, Clone, Copy)]
struct OpenDelimiter {
    kind: SyntaxKind,
    span: TextRange,
}

/// Bound on the number of tokens a single parse may consume.
#[derive(Debug, Clone, Copy)]
struct ExecFuel {
    limit: u32,
    left: u32,
}

/// Trivia between `emitted` and `pos` is attached to whatever the builder
/// opens or consumes next.
pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    emitted: usize,
    builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    depth: u32,
    max_depth: Option<u32>,
    last_reported_at: Option<TextSize>,
    open_delimiters: Vec<OpenDelimiter>,
    pub(super) stall_guard: Cell<u32>,
    exec_fuel: Option<ExecFuel>,
    fatal: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            emitted: 0,
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            max_depth: None,
            last_reported_at: None,
            open_delimiters: Vec::new(),
            stall_guard: Cell::new(STALL_LIMIT),
            exec_fuel: None,
            fatal: None,
        }
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit.map(|limit| ExecFuel { limit, left: limit });
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.max_depth = limit;
        self
    }

    pub fn parse(mut self) -> Result<ParseResult, Error> {
        self.parse_root();
        self.flush_trivia();
        if let Some(err) = self.fatal {
            return Err(err);
        }

        let exec_fuel_consumed = self.exec_fuel.map_or(0, |fuel| fuel.limit - fuel.left);
        let green: GreenNode = self.builder.finish();
        let root = Root::cast(SyntaxNode::new_root(green)).expect("parser always produces Root");
        Ok(ParseResult {
            root,
            diagnostics: self.diagnostics,
            exec_fuel_consumed,
        })
    }

    fn fail(&mut self, err: Error) {
        self.fatal.get_or_insert(err);
    }

    fn skip_trivia(&mut self) {
        while self.tokens.get(self.pos).is_some_and(|t| t.kind.is_trivia()) {
            self.pos += 1;
        }
    }

    fn flush_trivia(&mut self) {
        for token in &self.tokens[self.emitted..self.pos] {
            self.builder.token(token.kind.into(), token_text(self.source, token));
        }
        self.emitted = self.pos;
    }

    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia();
        self.ensure_progress();
        self.tokens.get(self.pos).map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia();
        match self.tokens.get(self.pos) {
            Some(token) => token.span,
            None => TextRange::empty(self.end_of_source()),
        }
    }

    fn end_of_source(&self) -> TextSize {
        TextSize::of(self.source)
    }

    pub(super) fn at_eof(&mut self) -> bool {
        self.skip_trivia();
        self.pos >= self.tokens.len()
    }

    pub(super) fn should_stop(&mut self) -> bool {
        self.at_eof() || self.fatal.is_some()
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        !self.at_eof() && self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        !self.at_eof() && set.contains(self.current())
    }

    /// Kind of the significant token after the current one.
    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        self.skip_trivia();
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(1)
            .is_some_and(|t| t.kind == kind)
    }

    pub(super) fn eat_trivia(&mut self) {
        self.skip_trivia();
        self.flush_trivia();
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.flush_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        assert!(!self.at_eof(), "bump called at EOF");
        self.stall_guard.set(STALL_LIMIT);
        if let Some(fuel) = self.exec_fuel.as_mut() {
            if fuel.left == 0 {
                self.fatal.get_or_insert(Error::ExecFuelExhausted);
            } else {
                fuel.left -= 1;
            }
        }

        self.flush_trivia();
        let token = self.tokens[self.pos];
        self.builder.token(token.kind.into(), token_text(self.source, &token));
        self.pos += 1;
        self.emitted = self.pos;
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        let matched = self.currently_is(kind);
        if matched {
            self.bump();
        }
        matched
    }

    /// Reports `what` as missing without consuming anything.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        self.eat_token(kind) || {
            self.error_msg(DiagnosticKind::ExpectedToken, what);
            false
        }
    }

    /// One diagnostic per source position; later ones at the same spot are
    /// cascades of the first.
    fn claim_position(&mut self, pos: TextSize) -> bool {
        let fresh = self.last_reported_at != Some(pos);
        self.last_reported_at = Some(pos);
        fresh
    }

    fn report_here(&mut self, kind: DiagnosticKind, message: Option<String>) {
        let range = self.current_span();
        if !self.claim_position(range.start()) {
            return;
        }
        // Inside an open delimiter, later errors up to EOF are likely fallout.
        let suppression = match self.open_delimiters.last() {
            Some(open) => TextRange::new(open.span.start(), self.end_of_source()),
            None => range,
        };
        let report = self
            .diagnostics
            .report(kind, range)
            .suppression_range(suppression);
        match message {
            Some(message) => report.message(message).emit(),
            None => report.emit(),
        }
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        self.report_here(kind, None);
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.report_here(kind, Some(message.into()));
    }

    fn bump_into_error_node(&mut self) {
        if self.at_eof() {
            return;
        }
        self.start_node(SyntaxKind::Error);
        self.bump();
        self.finish_node();
    }

    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind) {
        self.error(kind);
        self.bump_into_error_node();
    }

    pub(super) fn error_and_bump_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.error_msg(kind, message);
        self.bump_into_error_node();
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.max_depth.is_some_and(|max| self.depth >= max) {
            self.fail(Error::RecursionLimitExceeded);
            return false;
        }
        self.depth += 1;
        self.stall_guard.set(STALL_LIMIT);
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.stall_guard.set(STALL_LIMIT);
    }

    pub(super) fn push_delimiter(&mut self, kind: SyntaxKind) {
        let span = self.current_span();
        self.open_delimiters.push(OpenDelimiter { kind, span });
    }

    pub(super) fn last_non_trivia_end(&self) -> Option<TextSize> {
        self.tokens[..self.pos]
            .iter()
            .rfind(|t| !t.kind.is_trivia())
            .map(|t| t.span.end())
    }

    /// Consumes `close`, or reports the innermost open delimiter as unclosed
    /// with a pointer back at where it was opened.
    pub(super) fn close_delimiter(&mut self, close: SyntaxKind) {
        let open = self.open_delimiters.pop();
        if self.eat_token(close) {
            return;
        }
        let Some(open) = open else {
            return;
        };
        let here = self.current_span();
        if !self.claim_position(here.start()) {
            return;
        }
        let kind = if open.kind == SyntaxKind::BraceOpen {
            DiagnosticKind::UnclosedBrace
        } else {
            DiagnosticKind::UnclosedParen
        };
        self.diagnostics
            .report(kind, TextRange::new(open.span.start(), here.end()))
            .related_to("opened here", open.span)
            .emit();
    }
}
