//! Syntax kinds for the pathql language.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `PathLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token(":")]
    Colon,

    #[token("=")]
    Equals,

    #[token("|")]
    Pipe,

    #[token("&")]
    Ampersand,

    /// `..` in range sets. Defined before `Dot` for correct precedence.
    #[token("..")]
    DotDot,

    /// Concatenation.
    #[token(".")]
    Dot,

    #[token("*")]
    Star,

    #[token("_")]
    Underscore,

    #[token("let")]
    KwLet,

    #[token("print")]
    KwPrint,

    #[token("fun")]
    KwFun,

    #[token("in")]
    KwIn,

    #[token("not")]
    KwNot,

    #[token("and")]
    KwAnd,

    #[token("or")]
    KwOr,

    #[token("true")]
    KwTrue,

    #[token("false")]
    KwFalse,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r#""(?:[^"\\\n]|\\.)*""#)]
    Str,

    /// Defined after keywords so they take precedence.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Id,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    Root,
    LetStmt,
    PrintStmt,
    Lambda,
    BinaryExpr,
    NotExpr,
    StarExpr,
    IntLit,
    StrLit,
    BoolLit,
    NameRef,
    CallExpr,
    ArgList,
    ParenExpr,
    TupleExpr,
    SetExpr,
    RangeExpr,
    NamePat,
    WildcardPat,
    TuplePat,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    /// Human-readable token name for diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            ParenOpen => "`(`",
            ParenClose => "`)`",
            BraceOpen => "`{`",
            BraceClose => "`}`",
            Comma => "`,`",
            Semicolon => "`;`",
            Colon => "`:`",
            Equals => "`=`",
            Pipe => "`|`",
            Ampersand => "`&`",
            DotDot => "`..`",
            Dot => "`.`",
            Star => "`*`",
            Underscore => "`_`",
            KwLet => "`let`",
            KwPrint => "`print`",
            KwFun => "`fun`",
            KwIn => "`in`",
            KwNot => "`not`",
            KwAnd => "`and`",
            KwOr => "`or`",
            KwTrue => "`true`",
            KwFalse => "`false`",
            Int => "integer",
            Str => "string",
            Id => "identifier",
            Garbage => "unrecognized input",
            _ => "end of input",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathLang {}

impl Language for PathLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<PathLang>;
pub type SyntaxToken = rowan::SyntaxToken<PathLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// FIRST set of an expression.
    pub const EXPR_FIRST: TokenSet = TokenSet::new(&[
        ParenOpen, BraceOpen, Int, Str, Id, KwTrue, KwFalse, KwNot, KwFun,
    ]);

    pub const STMT_FIRST: TokenSet = TokenSet::new(&[KwLet, KwPrint]);

    pub const PATTERN_FIRST: TokenSet = TokenSet::new(&[Id, Underscore, ParenOpen]);

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, Newline, LineComment]);

    /// Statement-level synchronization points.
    pub const STMT_RECOVERY: TokenSet = TokenSet::new(&[Semicolon, KwLet, KwPrint]);

    /// Tokens that close an enclosing construct; an expression error never
    /// consumes these.
    pub const EXPR_RECOVERY: TokenSet =
        TokenSet::new(&[Semicolon, Comma, ParenClose, BraceClose, KwLet, KwPrint]);
}
