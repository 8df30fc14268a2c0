use crate::node::Expr;
use crate::tokenizer::Token;
use std::ops::Range;

/// An element of the sequence that the classifier and the reducers work on: either an operand
/// that has already been turned into an [`Expr`], or a token that has not been consumed yet.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind<'source> {
    /// A classified operand.
    Expr(Expr),

    /// A token that is not (yet) part of any expression: an operator symbol, or an operand that
    /// is neither a number nor a name.
    Raw(Token<'source>),
}

/// An [`ItemKind`] along with the region of the source it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<'source> {
    /// The region of the (whitespace-stripped) source that this item covers.
    pub span: Range<usize>,

    /// The kind of item.
    pub kind: ItemKind<'source>,
}

impl<'source> Item<'source> {
    /// Creates an item holding a classified operand.
    pub fn expr(expr: impl Into<Expr>, span: Range<usize>) -> Self {
        Self { span, kind: ItemKind::Expr(expr.into()) }
    }

    /// Returns true if this item is a raw token with exactly the given text.
    pub fn is_raw(&self, lexeme: &str) -> bool {
        matches!(&self.kind, ItemKind::Raw(token) if token.lexeme == lexeme)
    }

    /// Returns the raw token of this item, if it has not been classified.
    pub fn as_raw(&self) -> Option<&Token<'source>> {
        match &self.kind {
            ItemKind::Raw(token) => Some(token),
            ItemKind::Expr(_) => None,
        }
    }

    /// Returns the expression of this item, if it has been classified.
    pub fn as_expr(&self) -> Option<&Expr> {
        match &self.kind {
            ItemKind::Expr(expr) => Some(expr),
            ItemKind::Raw(_) => None,
        }
    }

    /// Consumes the item, returning its expression if it has been classified.
    pub fn into_expr(self) -> Result<Expr, Self> {
        match self.kind {
            ItemKind::Expr(expr) => Ok(expr),
            kind => Err(Self { span: self.span, kind }),
        }
    }
}

impl<'source> From<Token<'source>> for Item<'source> {
    fn from(token: Token<'source>) -> Self {
        Self { span: token.span.clone(), kind: ItemKind::Raw(token) }
    }
}
