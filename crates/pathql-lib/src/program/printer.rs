//! Tree dumps of a program, used by `pathql ast` and the tests.

use std::fmt::Write;

use rowan::{NodeOrToken, TextRange};

use super::Program;
use crate::parser::{Expr, Pattern, Root, Stmt, SyntaxNode};

pub struct ProgramPrinter<'p, 'src> {
    program: &'p Program<'src>,
    raw: bool,
    trivia: bool,
    spans: bool,
}

impl<'p, 'src> ProgramPrinter<'p, 'src> {
    pub fn new(program: &'p Program<'src>) -> Self {
        Self {
            program,
            raw: false,
            trivia: false,
            spans: false,
        }
    }

    /// Print the concrete syntax tree instead of the AST.
    pub fn raw(mut self, value: bool) -> Self {
        self.raw = value;
        self
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.raw {
            self.format_cst(&self.program.syntax(), 0, w)
        } else {
            self.format_root(self.program.root(), w)
        }
    }

    fn span_str(&self, range: TextRange) -> String {
        if self.spans {
            format!(" [{}..{}]", u32::from(range.start()), u32::from(range.end()))
        } else {
            String::new()
        }
    }

    fn format_cst(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        writeln!(w, "{}{:?}{}", prefix, node.kind(), self.span_str(node.text_range()))?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_cst(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if self.trivia || !t.kind().is_trivia() {
                        writeln!(
                            w,
                            "{}  {:?}{} {:?}",
                            prefix,
                            t.kind(),
                            self.span_str(t.text_range()),
                            t.text()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    fn format_root(&self, root: &Root, w: &mut impl Write) -> std::fmt::Result {
        writeln!(w, "Root{}", self.span_str(root.text_range()))?;
        for stmt in root.stmts() {
            self.format_stmt(&stmt, w)?;
        }
        Ok(())
    }

    fn format_stmt(&self, stmt: &Stmt, w: &mut impl Write) -> std::fmt::Result {
        let span = self.span_str(stmt.as_cst().text_range());
        let value = match stmt {
            Stmt::Let(s) => {
                let name = s.name().map(|t| t.text().to_string());
                writeln!(w, "  Let{span} {}", name.as_deref().unwrap_or("?"))?;
                s.value()
            }
            Stmt::Print(s) => {
                writeln!(w, "  Print{span}")?;
                s.value()
            }
        };
        match value {
            Some(expr) => self.format_expr(&expr, 2, w),
            None => writeln!(w, "    ?"),
        }
    }

    fn format_expr(&self, expr: &Expr, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(expr.text_range());

        let children: Vec<Expr> = match expr {
            Expr::Lambda(lambda) => {
                let param = lambda
                    .param()
                    .map_or_else(|| "?".to_string(), |p| pattern_text(&p));
                writeln!(w, "{prefix}Lambda{span} {param}")?;
                lambda.body().into_iter().collect()
            }
            Expr::Binary(binary) => {
                let op = binary.op().map_or("?", |op| op.symbol());
                writeln!(w, "{prefix}Binary{span} {op}")?;
                [binary.lhs(), binary.rhs()].into_iter().flatten().collect()
            }
            Expr::Not(not) => {
                writeln!(w, "{prefix}Not{span}")?;
                not.operand().into_iter().collect()
            }
            Expr::Star(star) => {
                writeln!(w, "{prefix}Star{span}")?;
                star.operand().into_iter().collect()
            }
            Expr::Int(lit) => {
                let text = lit.token().map(|t| t.text().to_string()).unwrap_or_default();
                return writeln!(w, "{prefix}Int{span} {text}");
            }
            Expr::Str(lit) => {
                let value = lit.value().unwrap_or_default();
                return writeln!(w, "{prefix}Str{span} {value:?}");
            }
            Expr::Bool(lit) => return writeln!(w, "{prefix}Bool{span} {}", lit.value()),
            Expr::Name(name) => {
                let name = name.name().map(|t| t.text().to_string());
                return writeln!(w, "{prefix}Name{span} {}", name.as_deref().unwrap_or("?"));
            }
            Expr::Call(call) => {
                let name = call.name().map(|t| t.text().to_string());
                writeln!(w, "{prefix}Call{span} {}", name.as_deref().unwrap_or("?"))?;
                call.args()
            }
            Expr::Paren(paren) => {
                writeln!(w, "{prefix}Paren{span}")?;
                paren.inner().into_iter().collect()
            }
            Expr::Tuple(tuple) => {
                writeln!(w, "{prefix}Tuple{span}")?;
                tuple.elements().collect()
            }
            Expr::Set(set) => {
                if let Some(range) = set.range() {
                    let bound = |lit: Option<crate::parser::IntLit>| {
                        lit.and_then(|l| l.token())
                            .map_or_else(|| "?".to_string(), |t| t.text().to_string())
                    };
                    return writeln!(
                        w,
                        "{prefix}Range{span} {}..{}",
                        bound(range.lo()),
                        bound(range.hi())
                    );
                }
                writeln!(w, "{prefix}Set{span}")?;
                set.elements().collect()
            }
        };

        for child in &children {
            self.format_expr(child, indent + 1, w)?;
        }
        Ok(())
    }
}

/// Source-like rendering of a pattern: `u`, `_`, `(u, (v, _))`.
fn pattern_text(pattern: &Pattern) -> String {
    match pattern {
        Pattern::Name(p) => p
            .name()
            .map_or_else(|| "?".to_string(), |t| t.text().to_string()),
        Pattern::Wildcard(_) => "_".to_string(),
        Pattern::Tuple(p) => {
            let items: Vec<String> = p.elements().map(|e| pattern_text(&e)).collect();
            format!("({})", items.join(", "))
        }
    }
}
