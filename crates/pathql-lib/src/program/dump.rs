//! Test-only dump methods for program inspection.

#[cfg(test)]
mod test_helpers {
    use crate::Program;

    impl<'src> Program<'src> {
        pub fn dump_cst(&self) -> String {
            self.printer().raw(true).dump()
        }

        pub fn dump_cst_full(&self) -> String {
            self.printer().raw(true).with_trivia(true).dump()
        }

        pub fn dump_ast(&self) -> String {
            self.printer().dump()
        }

        pub fn dump_diagnostics(&self) -> String {
            self.diagnostics().render(self.source)
        }

        /// One line per diagnostic with byte ranges, no source excerpt.
        pub fn dump_diagnostics_plain(&self) -> String {
            self.diagnostics().printer().render()
        }

        pub fn dump_diagnostics_raw(&self) -> String {
            self.diagnostics_raw().printer().render()
        }

        #[track_caller]
        pub fn expect_valid(src: &'src str) -> Self {
            let program = Program::try_from(src).expect("fuel exhausted");
            if !program.is_valid() {
                panic!(
                    "Expected valid program, got error:\n{}",
                    program.dump_diagnostics()
                );
            }
            program
        }

        #[track_caller]
        pub fn expect_valid_ast(src: &'src str) -> String {
            Self::expect_valid(src).dump_ast()
        }

        #[track_caller]
        pub fn expect_valid_cst(src: &'src str) -> String {
            Self::expect_valid(src).dump_cst()
        }

        #[track_caller]
        pub fn expect_invalid(src: &'src str) -> String {
            let program = Program::try_from(src).expect("fuel exhausted");
            if program.is_valid() {
                panic!("Expected invalid program, got valid:\n{}", program.dump_cst());
            }
            program.dump_diagnostics_plain()
        }

        #[track_caller]
        pub fn expect_invalid_rendered(src: &'src str) -> String {
            let program = Program::try_from(src).expect("fuel exhausted");
            if program.is_valid() {
                panic!("Expected invalid program, got valid:\n{}", program.dump_cst());
            }
            program.dump_diagnostics()
        }
    }
}
