//! Splits expression text into operand and operator tokens.
//!
//! There is no fixed grammar here: the tokens are found by partitioning the text on every symbol
//! of an [`OperatorTable`], longest symbols first, so the set of operators is entirely decided by
//! the caller.

pub mod source;
pub mod token;

use crate::op::OperatorTable;
pub use source::Stripped;
pub use token::{Token, TokenKind};
use tracing::trace;

/// Splits the given (whitespace-stripped) source into an ordered sequence of operand and operator
/// tokens.
///
/// Separators are applied in descending length order, so `>=` is found before `>` and `=`. For
/// each separator, every operand fragment that contains it and is strictly longer than it is split
/// into the text before the separator, the separator, and the text after it; the text after it is
/// split again until the separator no longer occurs. Empty fragments are dropped, and a fragment
/// produced as a separator is never split again by a shorter separator.
///
/// The returned tokens partition the source: concatenating their lexemes gives back `source`.
pub fn break_apart<'source>(table: &OperatorTable, source: &'source str) -> Vec<Token<'source>> {
    if source.is_empty() {
        return Vec::new();
    }

    let mut tokens = vec![Token::operand(source, 0..source.len())];
    for operator in table.by_length() {
        let separator = operator.symbol.as_str();
        tokens = tokens
            .into_iter()
            .flat_map(|token| split_on(source, token, separator))
            .collect();
    }

    tokens
}

/// Splits a single token on every occurrence of the given separator.
fn split_on<'source>(
    source: &'source str,
    token: Token<'source>,
    separator: &str,
) -> Vec<Token<'source>> {
    if token.is_operator() || token.lexeme.len() <= separator.len() || !token.lexeme.contains(separator) {
        return vec![token];
    }

    let mut parts = Vec::new();
    let mut rest = token.span.clone();
    while let Some(found) = source[rest.clone()].find(separator) {
        let at = rest.start + found;
        if at > rest.start {
            parts.push(Token::operand(source, rest.start..at));
        }
        parts.push(Token::operator(source, at..at + separator.len()));
        rest = at + separator.len()..rest.end;
    }

    if !rest.is_empty() {
        parts.push(Token::operand(source, rest));
    }

    trace!(lexeme = token.lexeme, separator, parts = parts.len(), "split fragment");
    parts
}
