use crate::Program;

#[test]
fn printer_with_spans() {
    let input = "let x = a | 1;";
    let program = Program::expect_valid(input);

    let res = program.printer().with_spans(true).dump();

    insta::assert_snapshot!(res, @r"
    Root [0..14]
      Let [0..13] x
        Binary [8..13] |
          Name [8..9] a
          Int [12..13] 1
    ");
}

#[test]
fn printer_cst_with_spans() {
    let input = "print {};";
    let program = Program::expect_valid(input);

    let res = program.printer().raw(true).with_spans(true).dump();

    insta::assert_snapshot!(res, @r#"
    Root [0..9]
      PrintStmt [0..8]
        KwPrint [0..5] "print"
        SetExpr [6..8]
          BraceOpen [6..7] "{"
          BraceClose [7..8] "}"
      Semicolon [8..9] ";"
    "#);
}

#[test]
fn printer_cst_with_trivia() {
    let input = "let g = load(\"w\");\n// done\n";
    let program = Program::expect_valid(input);

    let res = program.printer().raw(true).with_trivia(true).dump();

    insta::assert_snapshot!(res, @r#"
    Root
      LetStmt
        KwLet "let"
        Whitespace " "
        Id "g"
        Whitespace " "
        Equals "="
        Whitespace " "
        CallExpr
          Id "load"
          ArgList
            ParenOpen "("
            StrLit
              Str "\"w\""
            ParenClose ")"
      Semicolon ";"
      Newline "\n"
      LineComment "// done"
      Newline "\n"
    "#);
}

#[test]
fn printer_marks_missing_parts() {
    let program = Program::try_from("print ;").unwrap();
    assert!(!program.is_valid());

    insta::assert_snapshot!(program.dump_ast(), @r"
    Root
      Print
        ?
    ");
}

#[test]
fn printer_patterns() {
    let input = "print map(fun ((a, _), b): b, s);";

    insta::assert_snapshot!(Program::expect_valid_ast(input), @r"
    Root
      Print
        Call map
          Lambda ((a, _), b)
            Name b
          Name s
    ");
}

#[test]
fn printer_strings_are_unescaped_then_quoted() {
    insta::assert_snapshot!(Program::expect_valid_ast(r#"print "a\tb" . smb("c");"#), @r#"
    Root
      Print
        Binary .
          Str "a\tb"
          Call smb
            Str "c"
    "#);
}
