use rowan::TextRange;

use super::*;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, range(8, 8))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    assert_eq!(
        diagnostics.iter().next().unwrap().message(),
        "expected an expression"
    );
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnknownFunction, range(6, 9))
        .message("foo")
        .emit();

    assert_eq!(
        diagnostics.iter().next().unwrap().message(),
        "`foo` is not a known function"
    );
}

#[test]
fn runtime_kinds_keep_detail_verbatim() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::NameError, range(6, 7))
        .message("name `x` is not defined")
        .emit();

    assert_eq!(
        diagnostics.iter().next().unwrap().message(),
        "name `x` is not defined"
    );
}

#[test]
fn warnings_are_not_errors() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::EmptyRange, range(0, 4)).emit();

    assert!(!diagnostics.has_errors());
    assert!(diagnostics.has_warnings());
    assert_eq!(diagnostics.warning_count(), 1);
    assert_eq!(diagnostics.error_count(), 0);
}

#[test]
fn render_plain_without_source() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, range(8, 8))
        .emit();
    diagnostics
        .report(DiagnosticKind::MisplacedLambda, range(0, 3))
        .emit();

    insta::assert_snapshot!(diagnostics.printer().render(), @"
    error at 8..8: expected an expression
    error at 0..3: `fun` is only allowed as the first argument of `map` or `filter` (hint: e.g., `map(fun x: x, s)`)
    ");
}

#[test]
fn render_with_source() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, range(8, 8))
        .emit();

    insta::assert_snapshot!(diagnostics.render("let x = ;"), @r"
    error: expected an expression
      |
    1 | let x = ;
      |         ^
    ");
}

#[test]
fn render_with_hint() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::EmptyRange, range(6, 12)).emit();

    insta::assert_snapshot!(diagnostics.render("print {5..1}"), @r"
    warning: range is empty
      |
    1 | print {5..1}
      |       ^^^^^^
      |
      = help: write the smaller bound first, e.g., `{1..10}`
    ");
}

#[test]
fn render_with_path_shows_location() {
    let source = "let x = 1;\nprint y";
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::NameError, range(17, 18))
        .message("name `y` is not defined")
        .emit();

    let rendered = diagnostics.printer().source(source).path("main.pq").render();

    assert!(rendered.contains("main.pq:2:7"), "{rendered}");
    assert!(rendered.contains("name `y` is not defined"));
}

#[test]
fn filtered_drops_contained_lower_priority() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(0, 10))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(4, 5))
        .emit();

    let filtered = diagnostics.filtered();

    assert_eq!(filtered.len(), 1);
    assert_eq!(
        filtered.iter().next().unwrap().kind(),
        DiagnosticKind::UnclosedParen
    );
}

#[test]
fn filtered_root_cause_beats_structural_at_same_start() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(3, 9))
        .emit();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, range(3, 4))
        .emit();

    let filtered = diagnostics.filtered();

    assert_eq!(filtered.len(), 1);
    assert_eq!(
        filtered.iter().next().unwrap().kind(),
        DiagnosticKind::ExpectedExpression
    );
}

#[test]
fn builder_with_related() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(6, 11))
        .message("expected `)`")
        .related_to("opened here", range(6, 7))
        .emit();

    let msg = diagnostics.iter().next().unwrap();
    assert_eq!(msg.message(), "missing closing `)`; expected `)`");
    insta::assert_snapshot!(msg.to_string(), @"error at 6..11: missing closing `)`; expected `)` (related: opened here at 6..7)");
}
