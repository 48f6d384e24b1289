use rowan::TextRange;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// When two diagnostics have overlapping spans, the higher-priority one
/// suppresses the lower-priority one. This prevents cascading error noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // These cause cascading errors throughout the rest of the file
    UnclosedParen,
    UnclosedBrace,

    // User omitted something required - root cause errors
    ExpectedExpression,
    ExpectedName,
    ExpectedPattern,
    ExpectedToken,

    // User wrote something that doesn't belong
    UnexpectedToken,
    ExpectedStatement,
    SingleElementTuplePattern,

    // Valid syntax, invalid program
    UnknownFunction,
    WrongArity,
    MisplacedLambda,
    DuplicateBinding,
    IntOutOfRange,
    EmptyRange,

    // Runtime failures, reported against the failing expression
    NameError,
    LoadError,
    TypeError,
    ValueError,
    PatternMismatch,
    ResourceExhausted,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::EmptyRange => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Whether this kind suppresses `other` when spans overlap.
    ///
    /// Uses enum discriminant ordering: lower position = higher priority.
    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    /// Unclosed delimiters cause cascading errors but should be suppressed by
    /// root-cause errors at the same position.
    pub fn is_structural_error(&self) -> bool {
        matches!(self, Self::UnclosedParen | Self::UnclosedBrace)
    }

    pub fn is_root_cause_error(&self) -> bool {
        matches!(
            self,
            Self::ExpectedExpression
                | Self::ExpectedName
                | Self::ExpectedPattern
                | Self::ExpectedToken
        )
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::MisplacedLambda => Some("e.g., `map(fun x: x, s)`"),
            Self::SingleElementTuplePattern => {
                Some("tuple patterns need at least two elements, e.g., `(u, v)`")
            }
            Self::EmptyRange => Some("write the smaller bound first, e.g., `{1..10}`"),
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedParen => "missing closing `)`",
            Self::UnclosedBrace => "missing closing `}`",

            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedName => "expected a name",
            Self::ExpectedPattern => "expected a pattern",
            Self::ExpectedToken => "expected token",

            Self::UnexpectedToken => "unexpected token",
            Self::ExpectedStatement => "expected `let` or `print`",
            Self::SingleElementTuplePattern => "tuple pattern has a single element",

            Self::UnknownFunction => "unknown function",
            Self::WrongArity => "wrong number of arguments",
            Self::MisplacedLambda => "`fun` is only allowed as the first argument of `map` or `filter`",
            Self::DuplicateBinding => "name bound twice in one pattern",
            Self::IntOutOfRange => "integer literal out of range",
            Self::EmptyRange => "range is empty",

            Self::NameError => "name error",
            Self::LoadError => "load error",
            Self::TypeError => "type error",
            Self::ValueError => "value error",
            Self::PatternMismatch => "pattern mismatch",
            Self::ResourceExhausted => "resource exhausted",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnclosedParen | Self::UnclosedBrace => {
                format!("{}; {{}}", self.fallback_message())
            }

            Self::ExpectedToken => "expected {}".to_string(),
            Self::UnknownFunction => "`{}` is not a known function".to_string(),
            Self::DuplicateBinding => "`{}` is bound twice in this pattern".to_string(),
            Self::IntOutOfRange => "integer literal `{}` does not fit in 64 bits".to_string(),

            // Runtime errors carry their full text
            Self::NameError
            | Self::LoadError
            | Self::TypeError
            | Self::ValueError
            | Self::PatternMismatch
            | Self::ResourceExhausted => "{}".to_string(),

            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    /// The range used for suppression logic. Defaults to `range` but can be
    /// set to an enclosing construct for better cascading error suppression.
    pub(crate) suppression_range: TextRange,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            suppression_range: range,
            message: message.into(),
            related: Vec::new(),
            hints: kind.default_hint().map(str::to_string).into_iter().collect(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
