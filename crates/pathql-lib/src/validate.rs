//! Semantic validation for the typed AST.
//!
//! Checks constraints that are easier to express after parsing:
//! - calls name a known builtin with the right number of arguments
//! - `fun` only appears as the first argument of `map`/`filter`
//! - a pattern binds each name at most once
//! - integer literals fit in 64 bits
//! - ranges are not empty (warning)

use indexmap::IndexMap;
use rowan::TextRange;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::eval::Builtin;
use crate::parser::{CallExpr, Expr, IntLit, Pattern, Root, SetExpr, Stmt};

pub fn validate(root: &Root) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    let mut validator = Validator {
        diagnostics: &mut diagnostics,
    };

    for stmt in root.stmts() {
        let value = match &stmt {
            Stmt::Let(s) => s.value(),
            Stmt::Print(s) => s.value(),
        };
        if let Some(expr) = value {
            validator.expr(&expr, false);
        }
    }

    diagnostics
}

struct Validator<'d> {
    diagnostics: &'d mut Diagnostics,
}

impl Validator<'_> {
    fn expr(&mut self, expr: &Expr, lambda_allowed: bool) {
        match expr {
            Expr::Lambda(lambda) => {
                if !lambda_allowed {
                    let range = lambda
                        .as_cst()
                        .first_token()
                        .map_or(lambda.text_range(), |t| t.text_range());
                    self.diagnostics
                        .report(DiagnosticKind::MisplacedLambda, range)
                        .emit();
                }
                if let Some(param) = lambda.param() {
                    self.pattern(&param);
                }
                if let Some(body) = lambda.body() {
                    self.expr(&body, false);
                }
            }
            Expr::Binary(binary) => {
                for side in [binary.lhs(), binary.rhs()].into_iter().flatten() {
                    self.expr(&side, false);
                }
            }
            Expr::Not(not) => {
                if let Some(operand) = not.operand() {
                    self.expr(&operand, false);
                }
            }
            Expr::Star(star) => {
                if let Some(operand) = star.operand() {
                    self.expr(&operand, false);
                }
            }
            Expr::Int(lit) => {
                self.int(lit);
            }
            Expr::Str(_) | Expr::Bool(_) | Expr::Name(_) => {}
            Expr::Call(call) => self.call(call),
            Expr::Paren(paren) => {
                if let Some(inner) = paren.inner() {
                    self.expr(&inner, lambda_allowed);
                }
            }
            Expr::Tuple(tuple) => {
                for element in tuple.elements() {
                    self.expr(&element, false);
                }
            }
            Expr::Set(set) => self.set(set),
        }
    }

    fn call(&mut self, call: &CallExpr) {
        let args = call.args();
        let builtin = call.name().and_then(|name| {
            let builtin = Builtin::from_name(name.text());
            if builtin.is_none() {
                self.diagnostics
                    .report(DiagnosticKind::UnknownFunction, name.text_range())
                    .message(name.text())
                    .emit();
            }
            builtin
        });

        if let Some(builtin) = builtin
            && args.len() != builtin.arity()
        {
            let range = call.arg_list().map_or(call.text_range(), |l| l.text_range());
            let plural = if builtin.arity() == 1 { "" } else { "s" };
            self.diagnostics
                .report(DiagnosticKind::WrongArity, range)
                .message(format!(
                    "`{builtin}` takes {} argument{plural}, got {}",
                    builtin.arity(),
                    args.len()
                ))
                .emit();
        }

        let takes_lambda = builtin.is_some_and(Builtin::takes_lambda);
        for (i, arg) in args.iter().enumerate() {
            self.expr(arg, takes_lambda && i == 0);
        }
    }

    fn set(&mut self, set: &SetExpr) {
        if let Some(range) = set.range() {
            let lo = range.lo().and_then(|lit| self.int(&lit));
            let hi = range.hi().and_then(|lit| self.int(&lit));
            if let (Some(lo), Some(hi)) = (lo, hi)
                && lo > hi
            {
                self.diagnostics
                    .report(DiagnosticKind::EmptyRange, range.text_range())
                    .emit();
            }
            return;
        }
        for element in set.elements() {
            self.expr(&element, false);
        }
    }

    fn int(&mut self, lit: &IntLit) -> Option<i64> {
        let value = lit.value();
        if value.is_none()
            && let Some(token) = lit.token()
        {
            self.diagnostics
                .report(DiagnosticKind::IntOutOfRange, token.text_range())
                .message(token.text())
                .emit();
        }
        value
    }

    fn pattern(&mut self, pattern: &Pattern) {
        let mut seen: IndexMap<String, TextRange> = IndexMap::new();
        collect_bindings(pattern, &mut |name, range| {
            if let Some(first) = seen.get(name) {
                self.diagnostics
                    .report(DiagnosticKind::DuplicateBinding, range)
                    .message(name)
                    .related_to("first bound here", *first)
                    .emit();
            } else {
                seen.insert(name.to_string(), range);
            }
        });
    }
}

fn collect_bindings(pattern: &Pattern, visit: &mut impl FnMut(&str, TextRange)) {
    match pattern {
        Pattern::Name(p) => {
            if let Some(name) = p.name() {
                visit(name.text(), name.text_range());
            }
        }
        Pattern::Wildcard(_) => {}
        Pattern::Tuple(p) => {
            for element in p.elements() {
                collect_bindings(&element, visit);
            }
        }
    }
}
