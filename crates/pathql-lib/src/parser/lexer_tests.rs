use super::cst::SyntaxKind;
use super::lexer::{lex, token_text, unescape_string};

fn snapshot(input: &str) -> String {
    lex(input)
        .iter()
        .filter(|t| !t.kind.is_trivia())
        .map(|t| format!("{:?} {:?}", t.kind, token_text(input, t)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn let_statement() {
    insta::assert_snapshot!(snapshot(r#"let g = load("wine");"#), @r#"
    KwLet "let"
    Id "g"
    Equals "="
    Id "load"
    ParenOpen "("
    Str "\"wine\""
    ParenClose ")"
    Semicolon ";"
    "#);
}

#[test]
fn keywords_need_word_boundary() {
    insta::assert_snapshot!(snapshot("letter in inx print_it fun_1 not"), @r#"
    Id "letter"
    KwIn "in"
    Id "inx"
    Id "print_it"
    Id "fun_1"
    KwNot "not"
    "#);
}

#[test]
fn range_dots_before_concat_dot() {
    insta::assert_snapshot!(snapshot("{1..10} . a*"), @r#"
    BraceOpen "{"
    Int "1"
    DotDot ".."
    Int "10"
    BraceClose "}"
    Dot "."
    Id "a"
    Star "*"
    "#);
}

#[test]
fn lambda_tokens() {
    insta::assert_snapshot!(snapshot("fun (u, _): u"), @r#"
    KwFun "fun"
    ParenOpen "("
    Id "u"
    Comma ","
    Underscore "_"
    ParenClose ")"
    Colon ":"
    Id "u"
    "#);
}

#[test]
fn string_with_escapes() {
    insta::assert_snapshot!(snapshot(r#""a\"b" "c""#), @r#"
    Str "\"a\\\"b\""
    Str "\"c\""
    "#);
}

#[test]
fn garbage_is_coalesced() {
    insta::assert_snapshot!(snapshot("x @@@ y"), @r#"
    Id "x"
    Garbage "@@@"
    Id "y"
    "#);
}

#[test]
fn trivia_is_kept() {
    let input = "print 1 // done\n";
    let kinds: Vec<SyntaxKind> = lex(input).iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::KwPrint,
            SyntaxKind::Whitespace,
            SyntaxKind::Int,
            SyntaxKind::Whitespace,
            SyntaxKind::LineComment,
            SyntaxKind::Newline,
        ]
    );
}

#[test]
fn spans_cover_input() {
    let input = "let x = {1, 2};\n";
    let tokens = lex(input);
    let text: String = tokens.iter().map(|t| token_text(input, t)).collect();
    assert_eq!(text, input);
}

#[test]
fn unescape() {
    assert_eq!(unescape_string(r#""plain""#), "plain");
    assert_eq!(unescape_string(r#""a\"b""#), "a\"b");
    assert_eq!(unescape_string(r#""back\\slash""#), "back\\slash");
    assert_eq!(unescape_string(r#""tab\there\n""#), "tab\there\n");
    assert_eq!(unescape_string(r#""\q""#), "q");
}
