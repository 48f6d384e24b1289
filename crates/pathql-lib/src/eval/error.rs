//! Runtime errors.

use pathql_core::AutomatonError;
use rowan::TextRange;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::loader::LoadError;

/// The first runtime error aborts the run.
///
/// Every variant except `Output` carries the range of the expression that
/// failed, so it renders like a syntax error.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("name `{name}` is not defined")]
    Name { name: String, range: TextRange },

    #[error("cannot load graph `{name}`: {source}")]
    Load {
        name: String,
        source: LoadError,
        range: TextRange,
    },

    #[error("`{operation}` expects {expected}, found {found}")]
    Type {
        operation: String,
        expected: String,
        found: String,
        range: TextRange,
    },

    #[error("`{operation}`: {message}")]
    Value {
        operation: String,
        message: String,
        range: TextRange,
    },

    #[error("pattern `{pattern}` does not match {value}")]
    PatternMismatch {
        pattern: String,
        value: String,
        range: TextRange,
    },

    #[error("`{operation}`: {source}")]
    ResourceExhausted {
        operation: String,
        source: AutomatonError,
        range: TextRange,
    },

    /// The tree has a hole left by parser recovery.
    #[error("incomplete expression")]
    Incomplete { range: TextRange },

    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

impl EvalError {
    pub fn type_error(
        operation: impl Into<String>,
        expected: impl Into<String>,
        found: impl ToString,
        range: TextRange,
    ) -> Self {
        EvalError::Type {
            operation: operation.into(),
            expected: expected.into(),
            found: found.to_string(),
            range,
        }
    }

    pub fn value_error(
        operation: impl Into<String>,
        message: impl Into<String>,
        range: TextRange,
    ) -> Self {
        EvalError::Value {
            operation: operation.into(),
            message: message.into(),
            range,
        }
    }

    pub fn range(&self) -> Option<TextRange> {
        match self {
            EvalError::Name { range, .. }
            | EvalError::Load { range, .. }
            | EvalError::Type { range, .. }
            | EvalError::Value { range, .. }
            | EvalError::PatternMismatch { range, .. }
            | EvalError::ResourceExhausted { range, .. }
            | EvalError::Incomplete { range } => Some(*range),
            EvalError::Output(_) => None,
        }
    }

    pub fn diagnostic_kind(&self) -> Option<DiagnosticKind> {
        Some(match self {
            EvalError::Name { .. } => DiagnosticKind::NameError,
            EvalError::Load { .. } => DiagnosticKind::LoadError,
            EvalError::Type { .. } => DiagnosticKind::TypeError,
            EvalError::Value { .. } | EvalError::Incomplete { .. } => DiagnosticKind::ValueError,
            EvalError::PatternMismatch { .. } => DiagnosticKind::PatternMismatch,
            EvalError::ResourceExhausted { .. } => DiagnosticKind::ResourceExhausted,
            EvalError::Output(_) => return None,
        })
    }

    /// Diagnostic form of this error, for rendering against the program
    /// source. `None` for output failures, which have no location.
    pub fn to_diagnostics(&self) -> Option<Diagnostics> {
        let kind = self.diagnostic_kind()?;
        let range = self.range()?;
        let mut diagnostics = Diagnostics::new();
        diagnostics
            .report(kind, range)
            .message(self.to_string())
            .emit();
        Some(diagnostics)
    }
}
