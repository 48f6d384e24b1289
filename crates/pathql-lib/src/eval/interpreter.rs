//! Tree-walking evaluator.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use pathql_core::{Automaton, AutomatonError, StateId, compose, generate, product, reach};
use rowan::TextRange;
use tracing::{debug, trace};

use super::pattern;
use super::{Builtin, Edge, Element, ElementKind, Env, EvalError, Value};
use crate::loader::GraphLoader;
use crate::parser::{
    BinaryExpr, BinaryOp, CallExpr, Expr, IntLit, Lambda, Pattern, Root, SetExpr, Stmt,
};
use crate::settings::Settings;

/// Receives the values of `print` statements.
pub trait ValueSink {
    fn emit(&mut self, value: &Value) -> Result<()>;
}

impl ValueSink for Vec<Value> {
    fn emit(&mut self, value: &Value) -> Result<()> {
        self.push(value.clone());
        Ok(())
    }
}

type Result<T> = std::result::Result<T, EvalError>;

pub struct Interpreter<'a> {
    settings: &'a Settings,
    loader: &'a dyn GraphLoader,
    env: Env,
}

impl<'a> Interpreter<'a> {
    pub fn new(settings: &'a Settings, loader: &'a dyn GraphLoader) -> Self {
        Self {
            settings,
            loader,
            env: Env::new(),
        }
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn into_env(self) -> Env {
        self.env
    }

    /// Execute statements in source order. The first error aborts the run.
    pub fn run(&mut self, root: &Root, sink: &mut dyn ValueSink) -> Result<()> {
        for stmt in root.stmts() {
            self.exec(&stmt, sink)?;
        }
        Ok(())
    }

    pub fn exec(&mut self, stmt: &Stmt, sink: &mut dyn ValueSink) -> Result<()> {
        match stmt {
            Stmt::Let(s) => {
                let (Some(name), Some(expr)) = (s.name(), s.value()) else {
                    return Err(incomplete(stmt.as_cst().text_range()));
                };
                let value = self.eval(&expr)?;
                debug!(name = name.text(), kind = %value.kind(), "let");
                self.env.set_global(name.text(), value);
            }
            Stmt::Print(s) => {
                let Some(expr) = s.value() else {
                    return Err(incomplete(stmt.as_cst().text_range()));
                };
                let value = self.eval(&expr)?;
                debug!(kind = %value.kind(), "print");
                sink.emit(&value)?;
            }
        }
        Ok(())
    }

    pub fn eval(&mut self, expr: &Expr) -> Result<Value> {
        let range = expr.text_range();
        match expr {
            Expr::Int(lit) => int_value(lit).map(Value::Int),
            Expr::Str(lit) => lit.value().map(Value::String).ok_or_else(|| incomplete(range)),
            Expr::Bool(lit) => Ok(Value::Bool(lit.value())),
            Expr::Name(name) => {
                let name = name.name().ok_or_else(|| incomplete(range))?;
                self.env
                    .get(name.text())
                    .cloned()
                    .ok_or_else(|| EvalError::Name {
                        name: name.text().to_string(),
                        range,
                    })
            }
            Expr::Paren(paren) => {
                let inner = paren.inner().ok_or_else(|| incomplete(range))?;
                self.eval(&inner)
            }
            Expr::Tuple(tuple) => {
                let items = tuple
                    .elements()
                    .map(|e| self.eval(&e))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Value::Tuple(items))
            }
            Expr::Set(set) => self.eval_set(set),
            Expr::Not(not) => {
                let operand = not.operand().ok_or_else(|| incomplete(range))?;
                let value = self.eval_bool(&operand, "not")?;
                Ok(Value::Bool(!value))
            }
            Expr::Star(star) => {
                let operand = star.operand().ok_or_else(|| incomplete(range))?;
                let value = self.eval(&operand)?;
                let automaton = to_automaton(value, "*", operand.text_range())?;
                Ok(Value::Graph(compose::star(&automaton)))
            }
            Expr::Binary(binary) => self.eval_binary(binary),
            Expr::Call(call) => self.eval_call(call),
            Expr::Lambda(_) => Err(EvalError::value_error(
                "fun",
                "a lambda is only allowed as the first argument of `map` or `filter`",
                range,
            )),
        }
    }

    fn eval_bool(&mut self, expr: &Expr, operation: &str) -> Result<bool> {
        match self.eval(expr)? {
            Value::Bool(b) => Ok(b),
            other => Err(EvalError::type_error(
                operation,
                "bool",
                other.kind(),
                expr.text_range(),
            )),
        }
    }

    fn eval_binary(&mut self, binary: &BinaryExpr) -> Result<Value> {
        let range = binary.text_range();
        let (Some(op), Some(lhs), Some(rhs)) = (binary.op(), binary.lhs(), binary.rhs()) else {
            return Err(incomplete(range));
        };
        let operation = op.symbol();

        match op {
            BinaryOp::Or => {
                let value = self.eval_bool(&lhs, operation)? || self.eval_bool(&rhs, operation)?;
                Ok(Value::Bool(value))
            }
            BinaryOp::And => {
                let value = self.eval_bool(&lhs, operation)? && self.eval_bool(&rhs, operation)?;
                Ok(Value::Bool(value))
            }
            BinaryOp::In => {
                let needle = self.eval(&lhs)?;
                let haystack = self.eval(&rhs)?;
                contains(
                    &haystack,
                    &needle,
                    is_empty_set_literal(&rhs),
                    lhs.text_range(),
                    rhs.text_range(),
                )
            }
            BinaryOp::Union | BinaryOp::Intersect | BinaryOp::Concat => {
                let left = self.eval(&lhs)?;
                let right = self.eval(&rhs)?;
                if op != BinaryOp::Concat
                    && let Some(value) = combine_sets(op, &left, &right)
                {
                    return Ok(value);
                }

                let a = to_automaton(left, operation, lhs.text_range())?;
                let b = to_automaton(right, operation, rhs.text_range())?;
                let out = match op {
                    BinaryOp::Union => compose::union(&a, &b),
                    BinaryOp::Concat => compose::concat(&a, &b),
                    _ => product::product(&a, &b, &self.settings.limits)
                        .map_err(|e| automaton_error(operation, e, range))?,
                };
                trace!(operation, states = out.num_states(), "composed automaton");
                Ok(Value::Graph(out))
            }
        }
    }

    fn eval_set(&mut self, set: &SetExpr) -> Result<Value> {
        let range = set.text_range();
        if let Some(bounds) = set.range() {
            let (Some(lo), Some(hi)) = (bounds.lo(), bounds.hi()) else {
                return Err(incomplete(range));
            };
            let (lo, hi) = (int_value(&lo)?, int_value(&hi)?);
            return self.range_set(lo, hi, range);
        }

        let mut kind: Option<ElementKind> = None;
        let mut elements = Vec::new();
        for expr in set.elements() {
            let value = self.eval(&expr)?;
            let element = to_element(&value, "{...}", expr.text_range())?;
            match kind {
                None => kind = Some(element.kind()),
                Some(k) if k != element.kind() => {
                    return Err(EvalError::type_error(
                        "{...}",
                        format!("every element to be a {k}"),
                        element.kind(),
                        expr.text_range(),
                    ));
                }
                Some(_) => {}
            }
            elements.push(element);
        }

        Ok(Value::from_elements(
            kind.unwrap_or(ElementKind::Vertex),
            elements,
        ))
    }

    fn range_set(&self, lo: i64, hi: i64, range: TextRange) -> Result<Value> {
        if lo > hi {
            return Ok(Value::Vertices(BTreeSet::new()));
        }
        let lo = u64::try_from(lo).map_err(|_| {
            EvalError::value_error("{..}", "vertex ids must be non-negative", range)
        })?;
        let hi = hi as u64;

        let requested = u128::from(hi - lo) + 1;
        let limit = self.settings.limits.max_states;
        if requested > limit as u128 {
            return Err(automaton_error(
                "{..}",
                AutomatonError::StateLimitExceeded { requested, limit },
                range,
            ));
        }
        Ok(Value::Vertices((lo..=hi).map(StateId::Atomic).collect()))
    }

    fn eval_call(&mut self, call: &CallExpr) -> Result<Value> {
        let range = call.text_range();
        let name = call.name().ok_or_else(|| incomplete(range))?;
        let Some(builtin) = Builtin::from_name(name.text()) else {
            return Err(EvalError::Name {
                name: name.text().to_string(),
                range: name.text_range(),
            });
        };
        let args = call.args();
        if args.len() != builtin.arity() {
            return Err(EvalError::value_error(
                builtin.name(),
                format!("expected {} arguments, got {}", builtin.arity(), args.len()),
                range,
            ));
        }

        if builtin.takes_lambda() {
            return self.eval_map_or_filter(builtin, &args);
        }

        let values = args
            .iter()
            .map(|a| self.eval(a))
            .collect::<Result<Vec<_>>>()?;
        let arg = |i: usize| Arg {
            value: &values[i],
            range: args[i].text_range(),
            operation: builtin.name(),
        };

        match builtin {
            Builtin::Load => {
                let name = arg(0).string()?;
                let graph = self.loader.load(name).map_err(|source| EvalError::Load {
                    name: name.to_string(),
                    source,
                    range,
                })?;
                debug!(
                    name,
                    vertices = graph.num_states(),
                    edges = graph.num_transitions(),
                    "load"
                );
                Ok(Value::Graph(self.settings.marking.apply(graph)))
            }
            Builtin::Smb => {
                let label = arg(0).label()?;
                Ok(Value::Graph(compose::single_symbol(label)))
            }
            Builtin::SetStart | Builtin::SetFinal | Builtin::AddStart | Builtin::AddFinal => {
                let graph = arg(0).graph()?;
                let states = arg(1).vertices()?;
                let updated = match builtin {
                    Builtin::SetStart => graph.with_start_states(states),
                    Builtin::SetFinal => graph.with_final_states(states),
                    Builtin::AddStart => graph.with_added_start_states(states),
                    _ => graph.with_added_final_states(states),
                };
                updated
                    .map(Value::Graph)
                    .map_err(|e| automaton_error(builtin.name(), e, args[1].text_range()))
            }
            Builtin::GetStart => Ok(Value::Vertices(arg(0).graph()?.start_states().clone())),
            Builtin::GetFinal => Ok(Value::Vertices(arg(0).graph()?.final_states().clone())),
            Builtin::GetVertices => Ok(Value::Vertices(arg(0).graph()?.states().clone())),
            Builtin::GetLabels => Ok(Value::Labels(arg(0).graph()?.labels())),
            Builtin::GetEdges => {
                let graph = arg(0).graph()?;
                Ok(Value::Edges(
                    graph
                        .transitions()
                        .map(|(from, label, to)| Edge::new(from.clone(), label, to.clone()))
                        .collect(),
                ))
            }
            Builtin::GetReachable => {
                let pairs = reach::reachable_pairs(arg(0).graph()?);
                Ok(Value::Vertices(
                    pairs.into_iter().map(|(s, f)| StateId::pair(s, f)).collect(),
                ))
            }
            Builtin::GetReachableVertices => {
                Ok(Value::Vertices(reach::reachable_finals(arg(0).graph()?)))
            }
            Builtin::TwoCycles => {
                let first = arg(0).count()?;
                let second = arg(1).count()?;
                let labels = (arg(2).label()?, arg(3).label()?);
                let graph = generate::two_cycles(first, second, labels)
                    .map_err(|e| automaton_error(builtin.name(), e, range))?;
                Ok(Value::Graph(self.settings.marking.apply(graph)))
            }
            Builtin::Map | Builtin::Filter => unreachable!("handled above"),
        }
    }

    fn eval_map_or_filter(&mut self, builtin: Builtin, args: &[Expr]) -> Result<Value> {
        let operation = builtin.name();
        let lambda = lambda_arg(&args[0]).ok_or_else(|| {
            EvalError::type_error(operation, "a lambda", "an expression", args[0].text_range())
        })?;
        let (Some(param), Some(body)) = (lambda.param(), lambda.body()) else {
            return Err(incomplete(lambda.text_range()));
        };

        let input = self.eval(&args[1])?;
        let (Some(input_kind), Some(elements)) = (input.element_kind(), input.elements()) else {
            return Err(EvalError::type_error(
                operation,
                "a set",
                input.kind(),
                args[1].text_range(),
            ));
        };

        if builtin == Builtin::Filter {
            let mut kept = Vec::new();
            for element in elements {
                match self.apply_lambda(&param, &body, &element, operation)? {
                    Value::Bool(true) => kept.push(element),
                    Value::Bool(false) => {}
                    other => {
                        return Err(EvalError::type_error(
                            operation,
                            "bool",
                            other.kind(),
                            body.text_range(),
                        ));
                    }
                }
            }
            return Ok(Value::from_elements(input_kind, kept));
        }

        let mut kind: Option<ElementKind> = None;
        let mut mapped = Vec::new();
        for element in elements {
            let result = self.apply_lambda(&param, &body, &element, operation)?;
            let converted = to_element(&result, operation, body.text_range())?;
            match kind {
                None => kind = Some(converted.kind()),
                Some(k) if k != converted.kind() => {
                    return Err(EvalError::type_error(
                        operation,
                        format!("every result to be a {k}"),
                        converted.kind(),
                        body.text_range(),
                    ));
                }
                Some(_) => {}
            }
            mapped.push(converted);
        }
        Ok(Value::from_elements(kind.unwrap_or(input_kind), mapped))
    }

    fn apply_lambda(
        &mut self,
        param: &Pattern,
        body: &Expr,
        element: &Element,
        operation: &str,
    ) -> Result<Value> {
        let value = element.to_value().ok_or_else(|| {
            EvalError::value_error(
                operation,
                "vertex id does not fit in a 64-bit integer",
                param.text_range(),
            )
        })?;
        let mut bindings = IndexMap::new();
        pattern::bind(param, value, &mut bindings)?;

        self.env.push_scope(bindings);
        let result = self.eval(body);
        self.env.pop_scope();
        result
    }
}

/// An evaluated call argument with what is needed to report on it.
struct Arg<'v> {
    value: &'v Value,
    range: TextRange,
    operation: &'static str,
}

impl<'v> Arg<'v> {
    fn mismatch(&self, expected: &str) -> EvalError {
        EvalError::type_error(self.operation, expected, self.value.kind(), self.range)
    }

    fn string(&self) -> Result<&'v str> {
        match self.value {
            Value::String(s) => Ok(s.as_str()),
            _ => Err(self.mismatch("string")),
        }
    }

    fn label(&self) -> Result<&'v str> {
        let s = self.string()?;
        if s.is_empty() {
            return Err(EvalError::value_error(
                self.operation,
                "labels must not be empty",
                self.range,
            ));
        }
        Ok(s)
    }

    fn graph(&self) -> Result<&'v Automaton> {
        match self.value {
            Value::Graph(g) => Ok(g),
            _ => Err(self.mismatch("graph")),
        }
    }

    fn vertices(&self) -> Result<&'v BTreeSet<StateId>> {
        match self.value {
            Value::Vertices(v) => Ok(v),
            _ => Err(self.mismatch("vertices")),
        }
    }

    fn count(&self) -> Result<u64> {
        match self.value {
            Value::Int(n) => u64::try_from(*n).map_err(|_| {
                EvalError::value_error(self.operation, "count must be non-negative", self.range)
            }),
            _ => Err(self.mismatch("int")),
        }
    }
}

fn incomplete(range: TextRange) -> EvalError {
    EvalError::Incomplete { range }
}

fn int_value(lit: &IntLit) -> Result<i64> {
    lit.value().ok_or_else(|| {
        EvalError::value_error("int", "literal does not fit in 64 bits", lit.text_range())
    })
}

fn automaton_error(operation: &str, error: AutomatonError, range: TextRange) -> EvalError {
    match error {
        AutomatonError::StateLimitExceeded { .. } => EvalError::ResourceExhausted {
            operation: operation.to_string(),
            source: error,
            range,
        },
        other => EvalError::value_error(operation, other.to_string(), range),
    }
}

/// `Graph` as is, a label as a one-edge pattern, anything else is rejected.
fn to_automaton(value: Value, operation: &str, range: TextRange) -> Result<Automaton> {
    match value {
        Value::Graph(g) => Ok(g),
        Value::String(s) if s.is_empty() => Err(EvalError::value_error(
            operation,
            "labels must not be empty",
            range,
        )),
        Value::String(s) => Ok(compose::single_symbol(s)),
        other => Err(EvalError::type_error(
            operation,
            "a graph or a label",
            other.kind(),
            range,
        )),
    }
}

fn to_element(value: &Value, operation: &str, range: TextRange) -> Result<Element> {
    Element::from_value(value).ok_or_else(|| {
        EvalError::type_error(operation, "a vertex, label or edge", value.kind(), range)
    })
}

fn combine_sets(op: BinaryOp, lhs: &Value, rhs: &Value) -> Option<Value> {
    fn apply<T: Ord + Clone>(op: BinaryOp, a: &BTreeSet<T>, b: &BTreeSet<T>) -> BTreeSet<T> {
        match op {
            BinaryOp::Intersect => a.intersection(b).cloned().collect(),
            _ => a.union(b).cloned().collect(),
        }
    }

    Some(match (lhs, rhs) {
        (Value::Labels(a), Value::Labels(b)) => Value::Labels(apply(op, a, b)),
        (Value::Vertices(a), Value::Vertices(b)) => Value::Vertices(apply(op, a, b)),
        (Value::Edges(a), Value::Edges(b)) => Value::Edges(apply(op, a, b)),
        _ => return None,
    })
}

/// `x in s`. The needle must be an element of the set's kind, except that
/// `untyped` marks a `{}` literal, which has no kind and holds nothing.
fn contains(
    haystack: &Value,
    needle: &Value,
    untyped: bool,
    needle_range: TextRange,
    haystack_range: TextRange,
) -> Result<Value> {
    let Some(kind) = haystack.element_kind() else {
        return Err(EvalError::type_error(
            "in",
            "a set",
            haystack.kind(),
            haystack_range,
        ));
    };
    match Element::from_value(needle) {
        Some(_) if untyped => Ok(Value::Bool(false)),
        Some(element) if element.kind() == kind => Ok(Value::Bool(haystack.contains(&element))),
        _ => Err(EvalError::type_error(
            "in",
            format!("a {kind}"),
            needle.kind(),
            needle_range,
        )),
    }
}

fn is_empty_set_literal(expr: &Expr) -> bool {
    match expr {
        Expr::Set(set) => set.range().is_none() && set.elements().next().is_none(),
        Expr::Paren(paren) => paren.inner().is_some_and(|inner| is_empty_set_literal(&inner)),
        _ => false,
    }
}

/// The lambda of a `map`/`filter` call, looking through parentheses.
fn lambda_arg(expr: &Expr) -> Option<Lambda> {
    match expr {
        Expr::Lambda(lambda) => Some(lambda.clone()),
        Expr::Paren(paren) => lambda_arg(&paren.inner()?),
        _ => None,
    }
}
