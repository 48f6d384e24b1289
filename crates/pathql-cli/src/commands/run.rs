//! Execute a program against graphs on disk.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use pathql_lib::{Colors, Error, Marking, OutputFormat, Printer, ProgramBuilder, Settings};

use super::graph_loader::loader_for;
use super::program_loader::{ProgramSource, load_program_or_exit};

pub struct RunArgs {
    pub program_path: Option<PathBuf>,
    pub program_text: Option<String>,
    pub graph_dirs: Vec<PathBuf>,
    pub format: OutputFormat,
    pub marking: Marking,
    pub max_states: Option<usize>,
    pub color: bool,
}

pub fn run(args: RunArgs) {
    let source = load_program_or_exit(args.program_path.as_deref(), args.program_text.as_deref());

    let program = match ProgramBuilder::new(&source.text).parse() {
        Ok(parsed) => parsed.analyze(),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

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
    if !program.is_valid() {
        std::process::exit(1);
    }

    let settings = build_settings(&args);
    let loader = loader_for(&settings, &source.base_dir());
    tracing::debug!(dirs = ?loader.search_dirs(), "graph search path");

    // Colors only make sense for text on a terminal.
    let colors = Colors::new(args.color && args.format == OutputFormat::Text);
    let stdout = BufWriter::new(io::stdout().lock());
    let mut printer = Printer::new(stdout).format(args.format).colors(colors);

    let result = program.run(&settings, &loader, &mut printer);

    // Values printed before a failure still belong on stdout, ahead of the error.
    let flushed = printer.into_inner().flush();

    if let Err(e) = result {
        report_run_error(&e, &source, args.color);
    }

    if let Err(e) = flushed {
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("error: cannot write output: {}", e);
        }
        std::process::exit(1);
    }
}

fn build_settings(args: &RunArgs) -> Settings {
    let mut settings = Settings::new().marking(args.marking);
    if let Some(max_states) = args.max_states {
        settings = settings.max_states(max_states);
    }
    args.graph_dirs
        .iter()
        .fold(settings, |s, dir| s.graph_dir(dir))
        .with_env()
}

fn report_run_error(error: &Error, source: &ProgramSource, color: bool) -> ! {
    match error {
        Error::Eval(eval) => match eval.to_diagnostics() {
            Some(diagnostics) => eprint!(
                "{}",
                diagnostics
                    .printer()
                    .source(&source.text)
                    .path(&source.name)
                    .colored(color)
                    .render()
            ),
            None => eprintln!("error: {}", eval),
        },
        other => eprintln!("error: {}", other),
    }
    std::process::exit(1);
}
