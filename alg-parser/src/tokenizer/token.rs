use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Text between operators, such as `3` or `x`. Operands are classified further by the
    /// [literal classifier](crate::literal).
    Operand,

    /// One of the symbols in the [`OperatorTable`](crate::op::OperatorTable).
    Operator,
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'source> {
    /// The region of the (whitespace-stripped) source that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme of this token.
    pub lexeme: &'source str,
}

impl<'source> Token<'source> {
    /// Creates an operand token covering the given region of the source.
    pub fn operand(source: &'source str, span: Range<usize>) -> Self {
        Self { lexeme: &source[span.clone()], span, kind: TokenKind::Operand }
    }

    /// Creates an operator token covering the given region of the source.
    pub fn operator(source: &'source str, span: Range<usize>) -> Self {
        Self { lexeme: &source[span.clone()], span, kind: TokenKind::Operator }
    }

    /// Returns true if the token is an operator symbol.
    pub fn is_operator(&self) -> bool {
        self.kind == TokenKind::Operator
    }
}
