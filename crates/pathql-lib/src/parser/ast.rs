//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Accessors return `Option` because the tree may contain recovery errors.

use rowan::TextRange;

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};
use super::lexer::unescape_string;

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }

            pub fn text_range(&self) -> TextRange {
                self.0.text_range()
            }
        }
    };
}

ast_node!(Root, Root);
ast_node!(LetStmt, LetStmt);
ast_node!(PrintStmt, PrintStmt);
ast_node!(Lambda, Lambda);
ast_node!(BinaryExpr, BinaryExpr);
ast_node!(NotExpr, NotExpr);
ast_node!(StarExpr, StarExpr);
ast_node!(IntLit, IntLit);
ast_node!(StrLit, StrLit);
ast_node!(BoolLit, BoolLit);
ast_node!(NameRef, NameRef);
ast_node!(CallExpr, CallExpr);
ast_node!(ArgList, ArgList);
ast_node!(ParenExpr, ParenExpr);
ast_node!(TupleExpr, TupleExpr);
ast_node!(SetExpr, SetExpr);
ast_node!(RangeExpr, RangeExpr);
ast_node!(NamePat, NamePat);
ast_node!(WildcardPat, WildcardPat);
ast_node!(TuplePat, TuplePat);

fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stmt {
    Let(LetStmt),
    Print(PrintStmt),
}

impl Stmt {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::LetStmt => LetStmt::cast(node).map(Stmt::Let),
            SyntaxKind::PrintStmt => PrintStmt::cast(node).map(Stmt::Print),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Stmt::Let(n) => n.as_cst(),
            Stmt::Print(n) => n.as_cst(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Lambda(Lambda),
    Binary(BinaryExpr),
    Not(NotExpr),
    Star(StarExpr),
    Int(IntLit),
    Str(StrLit),
    Bool(BoolLit),
    Name(NameRef),
    Call(CallExpr),
    Paren(ParenExpr),
    Tuple(TupleExpr),
    Set(SetExpr),
}

impl Expr {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Lambda => Lambda::cast(node).map(Expr::Lambda),
            SyntaxKind::BinaryExpr => BinaryExpr::cast(node).map(Expr::Binary),
            SyntaxKind::NotExpr => NotExpr::cast(node).map(Expr::Not),
            SyntaxKind::StarExpr => StarExpr::cast(node).map(Expr::Star),
            SyntaxKind::IntLit => IntLit::cast(node).map(Expr::Int),
            SyntaxKind::StrLit => StrLit::cast(node).map(Expr::Str),
            SyntaxKind::BoolLit => BoolLit::cast(node).map(Expr::Bool),
            SyntaxKind::NameRef => NameRef::cast(node).map(Expr::Name),
            SyntaxKind::CallExpr => CallExpr::cast(node).map(Expr::Call),
            SyntaxKind::ParenExpr => ParenExpr::cast(node).map(Expr::Paren),
            SyntaxKind::TupleExpr => TupleExpr::cast(node).map(Expr::Tuple),
            SyntaxKind::SetExpr => SetExpr::cast(node).map(Expr::Set),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Expr::Lambda(n) => n.as_cst(),
            Expr::Binary(n) => n.as_cst(),
            Expr::Not(n) => n.as_cst(),
            Expr::Star(n) => n.as_cst(),
            Expr::Int(n) => n.as_cst(),
            Expr::Str(n) => n.as_cst(),
            Expr::Bool(n) => n.as_cst(),
            Expr::Name(n) => n.as_cst(),
            Expr::Call(n) => n.as_cst(),
            Expr::Paren(n) => n.as_cst(),
            Expr::Tuple(n) => n.as_cst(),
            Expr::Set(n) => n.as_cst(),
        }
    }

    /// Range without leading trivia.
    pub fn text_range(&self) -> TextRange {
        self.as_cst().text_range()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    Name(NamePat),
    Wildcard(WildcardPat),
    Tuple(TuplePat),
}

impl Pattern {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::NamePat => NamePat::cast(node).map(Pattern::Name),
            SyntaxKind::WildcardPat => WildcardPat::cast(node).map(Pattern::Wildcard),
            SyntaxKind::TuplePat => TuplePat::cast(node).map(Pattern::Tuple),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Pattern::Name(n) => n.as_cst(),
            Pattern::Wildcard(n) => n.as_cst(),
            Pattern::Tuple(n) => n.as_cst(),
        }
    }

    pub fn text_range(&self) -> TextRange {
        self.as_cst().text_range()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Or,
    And,
    In,
    Union,
    Intersect,
    Concat,
}

impl BinaryOp {
    fn from_token(kind: SyntaxKind) -> Option<Self> {
        Some(match kind {
            SyntaxKind::KwOr => BinaryOp::Or,
            SyntaxKind::KwAnd => BinaryOp::And,
            SyntaxKind::KwIn => BinaryOp::In,
            SyntaxKind::Pipe => BinaryOp::Union,
            SyntaxKind::Ampersand => BinaryOp::Intersect,
            SyntaxKind::Dot => BinaryOp::Concat,
            _ => return None,
        })
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Or => "or",
            BinaryOp::And => "and",
            BinaryOp::In => "in",
            BinaryOp::Union => "|",
            BinaryOp::Intersect => "&",
            BinaryOp::Concat => ".",
        }
    }
}

impl Root {
    pub fn stmts(&self) -> impl Iterator<Item = Stmt> + '_ {
        self.0.children().filter_map(Stmt::cast)
    }
}

impl LetStmt {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }

    pub fn value(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl PrintStmt {
    pub fn value(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl Lambda {
    pub fn param(&self) -> Option<Pattern> {
        self.0.children().find_map(Pattern::cast)
    }

    pub fn body(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl BinaryExpr {
    pub fn op(&self) -> Option<BinaryOp> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find_map(|t| BinaryOp::from_token(t.kind()))
    }

    pub fn op_token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| BinaryOp::from_token(t.kind()).is_some())
    }

    pub fn lhs(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn rhs(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }
}

impl NotExpr {
    pub fn operand(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl StarExpr {
    pub fn operand(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl IntLit {
    pub fn token(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Int)
    }

    /// `None` when the literal does not fit in an `i64`.
    pub fn value(&self) -> Option<i64> {
        self.token()?.text().parse().ok()
    }
}

impl StrLit {
    pub fn value(&self) -> Option<String> {
        token(&self.0, SyntaxKind::Str).map(|t| unescape_string(t.text()))
    }
}

impl BoolLit {
    pub fn value(&self) -> bool {
        token(&self.0, SyntaxKind::KwTrue).is_some()
    }
}

impl NameRef {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }
}

impl CallExpr {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }

    pub fn arg_list(&self) -> Option<ArgList> {
        self.0.children().find_map(ArgList::cast)
    }

    pub fn args(&self) -> Vec<Expr> {
        self.arg_list()
            .map(|list| list.exprs().collect())
            .unwrap_or_default()
    }
}

impl ArgList {
    pub fn exprs(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl ParenExpr {
    pub fn inner(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl TupleExpr {
    pub fn elements(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl SetExpr {
    pub fn range(&self) -> Option<RangeExpr> {
        self.0.children().find_map(RangeExpr::cast)
    }

    pub fn elements(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl RangeExpr {
    pub fn lo(&self) -> Option<IntLit> {
        self.0.children().find_map(IntLit::cast)
    }

    pub fn hi(&self) -> Option<IntLit> {
        self.0.children().filter_map(IntLit::cast).nth(1)
    }
}

impl NamePat {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }
}

impl TuplePat {
    pub fn elements(&self) -> impl Iterator<Item = Pattern> + '_ {
        self.0.children().filter_map(Pattern::cast)
    }
}
