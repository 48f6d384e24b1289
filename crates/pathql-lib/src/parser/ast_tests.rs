use super::ast::{BinaryOp, Expr, Pattern, Stmt};
use super::parse;

fn first_value(source: &str) -> Expr {
    let result = parse(source).unwrap();
    match result.root.stmts().next() {
        Some(Stmt::Let(stmt)) => stmt.value().unwrap(),
        Some(Stmt::Print(stmt)) => stmt.value().unwrap(),
        None => panic!("no statement in {source:?}"),
    }
}

#[test]
fn let_statement_accessors() {
    let result = parse("let g = load(\"wine\");").unwrap();
    let Some(Stmt::Let(stmt)) = result.root.stmts().next() else {
        panic!("expected let");
    };

    assert_eq!(stmt.name().unwrap().text(), "g");
    let Some(Expr::Call(call)) = stmt.value() else {
        panic!("expected call");
    };
    assert_eq!(call.name().unwrap().text(), "load");

    let args = call.args();
    assert_eq!(args.len(), 1);
    let Expr::Str(lit) = &args[0] else {
        panic!("expected string");
    };
    assert_eq!(lit.value().as_deref(), Some("wine"));
}

#[test]
fn binary_operands() {
    let Expr::Binary(binary) = first_value("print a & b;") else {
        panic!("expected binary");
    };

    assert_eq!(binary.op(), Some(BinaryOp::Intersect));
    assert_eq!(binary.op_token().unwrap().text(), "&");
    assert!(matches!(binary.lhs(), Some(Expr::Name(n)) if n.name().unwrap().text() == "a"));
    assert!(matches!(binary.rhs(), Some(Expr::Name(n)) if n.name().unwrap().text() == "b"));
}

#[test]
fn keyword_operators() {
    for (source, op) in [
        ("print a or b;", BinaryOp::Or),
        ("print a and b;", BinaryOp::And),
        ("print a in b;", BinaryOp::In),
        ("print a . b;", BinaryOp::Concat),
        ("print a | b;", BinaryOp::Union),
    ] {
        let Expr::Binary(binary) = first_value(source) else {
            panic!("expected binary in {source:?}");
        };
        assert_eq!(binary.op(), Some(op), "{source}");
        assert_eq!(op.symbol(), binary.op_token().unwrap().text());
    }
}

#[test]
fn star_wraps_primary() {
    let Expr::Star(star) = first_value("print \"a\"*;") else {
        panic!("expected star");
    };
    assert!(matches!(star.operand(), Some(Expr::Str(_))));
}

#[test]
fn literals() {
    let Expr::Int(int) = first_value("print 42;") else {
        panic!("expected int");
    };
    assert_eq!(int.value(), Some(42));

    let Expr::Bool(b) = first_value("print false;") else {
        panic!("expected bool");
    };
    assert!(!b.value());

    let Expr::Str(s) = first_value(r#"print "x\"y";"#) else {
        panic!("expected string");
    };
    assert_eq!(s.value().as_deref(), Some("x\"y"));
}

#[test]
fn oversized_int_has_no_value() {
    let Expr::Int(int) = first_value("print 99999999999999999999;") else {
        panic!("expected int");
    };
    assert_eq!(int.value(), None);
    assert_eq!(int.token().unwrap().text(), "99999999999999999999");
}

#[test]
fn range_set() {
    let Expr::Set(set) = first_value("print {3..7};") else {
        panic!("expected set");
    };
    let range = set.range().unwrap();
    assert_eq!(range.lo().unwrap().value(), Some(3));
    assert_eq!(range.hi().unwrap().value(), Some(7));
    assert_eq!(set.elements().count(), 0);
}

#[test]
fn enumerated_set() {
    let Expr::Set(set) = first_value("print {1, (2, \"a\", 3)};") else {
        panic!("expected set");
    };
    assert!(set.range().is_none());

    let elements: Vec<_> = set.elements().collect();
    assert_eq!(elements.len(), 2);
    let Expr::Tuple(tuple) = &elements[1] else {
        panic!("expected tuple");
    };
    assert_eq!(tuple.elements().count(), 3);
}

#[test]
fn parenthesized_expression_is_not_a_tuple() {
    let Expr::Paren(paren) = first_value("print (a);") else {
        panic!("expected paren");
    };
    assert!(matches!(paren.inner(), Some(Expr::Name(_))));
}

#[test]
fn lambda_pattern() {
    let Expr::Call(call) = first_value("print map(fun ((u, _), v): v, s);") else {
        panic!("expected call");
    };
    let args = call.args();
    let Expr::Lambda(lambda) = &args[0] else {
        panic!("expected lambda");
    };

    let Some(Pattern::Tuple(outer)) = lambda.param() else {
        panic!("expected tuple pattern");
    };
    let parts: Vec<_> = outer.elements().collect();
    assert_eq!(parts.len(), 2);

    let Pattern::Tuple(inner) = &parts[0] else {
        panic!("expected nested tuple pattern");
    };
    let inner: Vec<_> = inner.elements().collect();
    assert!(matches!(&inner[0], Pattern::Name(n) if n.name().unwrap().text() == "u"));
    assert!(matches!(&inner[1], Pattern::Wildcard(_)));
    assert!(matches!(&parts[1], Pattern::Name(n) if n.name().unwrap().text() == "v"));

    assert!(matches!(lambda.body(), Some(Expr::Name(_))));
}

#[test]
fn expression_range_excludes_surrounding_trivia() {
    let source = "print   a | b  ;";
    let expr = first_value(source);
    let range = expr.text_range();
    assert_eq!(&source[range], "a | b");
}
