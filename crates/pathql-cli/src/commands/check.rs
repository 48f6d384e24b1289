use std::path::PathBuf;

use pathql_lib::ProgramBuilder;

use super::program_loader::load_program_or_exit;

pub struct CheckArgs {
    pub program_path: Option<PathBuf>,
    pub program_text: Option<String>,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source = load_program_or_exit(args.program_path.as_deref(), args.program_text.as_deref());

    if source.text.trim().is_empty() {
        eprintln!("error: program cannot be empty");
        std::process::exit(1);
    }

    let program = match ProgramBuilder::new(&source.text).parse() {
        Ok(parsed) => parsed.analyze(),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let diagnostics = program.diagnostics();
    let is_valid = if args.strict {
        !diagnostics.has_errors() && !diagnostics.has_warnings()
    } else {
        program.is_valid()
    };

    if !is_valid {
        eprint!(
            "{}",
            diagnostics
                .printer()
                .source(&source.text)
                .path(&source.name)
                .colored(args.color)
                .render()
        );
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
