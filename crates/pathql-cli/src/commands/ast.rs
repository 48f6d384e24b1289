//! Show the syntax tree of a program.

use std::path::PathBuf;

use pathql_lib::ProgramBuilder;

use super::program_loader::load_program_or_exit;

pub struct AstArgs {
    pub program_path: Option<PathBuf>,
    pub program_text: Option<String>,
    pub raw: bool,
    pub trivia: bool,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let source = load_program_or_exit(args.program_path.as_deref(), args.program_text.as_deref());

    let program = match ProgramBuilder::new(&source.text).parse() {
        Ok(parsed) => parsed.analyze(),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    // The tree is printed even when invalid; recovery leaves it complete.
    let diagnostics = program.diagnostics();
    if diagnostics.has_errors() || diagnostics.has_warnings() {
        eprint!(
            "{}",
            diagnostics
                .printer()
                .source(&source.text)
                .path(&source.name)
                .colored(args.color)
                .render()
        );
    }

    let output = program
        .printer()
        .raw(args.raw)
        .with_trivia(args.trivia)
        .with_spans(args.spans)
        .dump();
    print!("{}", output);
}
