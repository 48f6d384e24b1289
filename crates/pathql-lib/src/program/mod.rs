//! Parsed and validated programs.
//!
//! ```text
//! ProgramBuilder::new(src).parse()?   →  Program (syntax diagnostics)
//!     .analyze()                       →  Program (+ validation diagnostics)
//!     .run(settings, loader, sink)     →  values printed, or the first runtime error
//! ```

mod dump;
mod printer;

#[cfg(test)]
mod printer_tests;
#[cfg(test)]
mod program_tests;

pub use printer::ProgramPrinter;

use crate::diagnostics::Diagnostics;
use crate::eval::{Env, Interpreter, ValueSink};
use crate::loader::GraphLoader;
use crate::parser::{Parser, Root, SyntaxNode, lexer::lex};
use crate::settings::Settings;
use crate::{Error, Result};

/// Maximum expression nesting depth accepted by default.
pub const DEFAULT_RECURSION_FUEL: u32 = 256;

pub struct ProgramBuilder<'src> {
    source: &'src str,
    exec_fuel: Option<u32>,
    recursion_fuel: Option<u32>,
}

impl<'src> ProgramBuilder<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            exec_fuel: None,
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }

    /// Cap the number of tokens the parser may consume.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    /// Parse only. Fails on fuel exhaustion; syntax errors are diagnostics.
    pub fn parse(self) -> Result<Program<'src>> {
        let result = Parser::new(self.source, lex(self.source))
            .with_exec_fuel(self.exec_fuel)
            .with_recursion_fuel(self.recursion_fuel)
            .parse()?;

        Ok(Program {
            source: self.source,
            root: result.root,
            diagnostics: result.diagnostics,
            exec_fuel_consumed: result.exec_fuel_consumed,
        })
    }
}

#[derive(Debug)]
pub struct Program<'src> {
    source: &'src str,
    root: Root,
    diagnostics: Diagnostics,
    exec_fuel_consumed: u32,
}

impl<'src> Program<'src> {
    /// Run static validation, appending its diagnostics.
    pub fn analyze(mut self) -> Self {
        let found = crate::validate::validate(&self.root);
        self.diagnostics.extend(found);
        self
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn syntax(&self) -> SyntaxNode {
        self.root.as_cst().clone()
    }

    pub fn exec_fuel_consumed(&self) -> u32 {
        self.exec_fuel_consumed
    }

    /// No errors. Warnings are allowed.
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// Diagnostics with cascading errors suppressed.
    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics.filtered()
    }

    pub fn diagnostics_raw(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn printer(&self) -> ProgramPrinter<'_, 'src> {
        ProgramPrinter::new(self)
    }

    /// Execute the program, sending every printed value to `sink`.
    ///
    /// Refuses to run a program with errors. Returns the final environment.
    pub fn run(
        &self,
        settings: &Settings,
        loader: &dyn GraphLoader,
        sink: &mut dyn ValueSink,
    ) -> Result<Env> {
        if !self.is_valid() {
            return Err(Error::Syntax(self.diagnostics()));
        }
        let mut interpreter = Interpreter::new(settings, loader);
        interpreter.run(&self.root, sink)?;
        Ok(interpreter.into_env())
    }
}

impl<'src> TryFrom<&'src str> for Program<'src> {
    type Error = Error;

    /// Parse and validate with default limits.
    fn try_from(source: &'src str) -> Result<Self> {
        Ok(ProgramBuilder::new(source).parse()?.analyze())
    }
}
