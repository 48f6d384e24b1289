use indoc::indoc;

use crate::eval::Value;
use crate::loader::MemoryLoader;
use crate::settings::Settings;
use crate::{Error, Program, ProgramBuilder};

#[test]
fn parse_without_analysis_skips_validation() {
    let program = ProgramBuilder::new("print nope(1);").parse().unwrap();
    assert!(program.is_valid());

    let program = program.analyze();
    assert!(!program.is_valid());
    assert_eq!(program.diagnostics().error_count(), 1);
}

#[test]
fn warnings_keep_program_valid() {
    let program = Program::try_from("print {2..1};").unwrap();

    assert!(program.is_valid());
    assert!(program.diagnostics().has_warnings());

    let mut out: Vec<Value> = Vec::new();
    program
        .run(&Settings::new(), &MemoryLoader::new(), &mut out)
        .unwrap();
    assert_eq!(out.len(), 1);
}

#[test]
fn source_is_kept() {
    let source = "print 1;";
    let program = Program::expect_valid(source);

    assert_eq!(program.source(), source);
    assert_eq!(program.syntax().text().to_string(), source);
}

#[test]
fn one_error_per_position() {
    let program = Program::try_from("print (1, ;").unwrap();

    assert!(program.diagnostics_raw().len() >= program.diagnostics().len());
    insta::assert_snapshot!(program.dump_diagnostics_plain(), @"error at 10..11: expected an expression: after `,`");
}

#[test]
fn syntax_error_blocks_run() {
    let program = Program::try_from("let = 1;").unwrap();
    let mut out: Vec<Value> = Vec::new();

    let Err(Error::Syntax(diagnostics)) =
        program.run(&Settings::new(), &MemoryLoader::new(), &mut out)
    else {
        panic!("expected a syntax error");
    };
    assert_eq!(diagnostics.error_count(), 1);
    insta::assert_snapshot!(Error::Syntax(diagnostics), @"program has 1 errors");
}

#[test]
fn recursion_fuel_can_be_lifted() {
    let input = format!("print {}1{};", "(".repeat(300), ")".repeat(300));

    let limited = ProgramBuilder::new(&input).parse();
    assert!(matches!(limited, Err(Error::RecursionLimitExceeded)));

    let unlimited = ProgramBuilder::new(&input)
        .with_recursion_fuel(None)
        .parse()
        .unwrap();
    assert!(unlimited.is_valid());
}

#[test]
fn program_runs_against_loader() {
    let source = indoc! {r#"
    let g = two_cycles(1, 1, "x", "y");
    print get_edges(g);
    print get_reachable_vertices(set_start(g, {0}) & "x" . "x");
    "#};
    let program = Program::expect_valid(source);

    let mut out: Vec<Value> = Vec::new();
    let env = program
        .run(&Settings::new(), &MemoryLoader::new(), &mut out)
        .unwrap();

    let lines: Vec<String> = out.iter().map(ToString::to_string).collect();
    insta::assert_snapshot!(lines.join("\n"), @r#"
    {(0, "x", 1), (0, "y", 2), (1, "x", 0), (2, "y", 0)}
    {(0, 3)}
    "#);
    assert!(matches!(env.get("g"), Some(Value::Graph(_))));
}
