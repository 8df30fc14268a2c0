//! Classification of operand tokens into numbers and names.
//!
//! Numbers are classified before names, so a token made only of digits is always a number even
//! though it is also alphanumeric. Tokens that are neither (such as `x-1` or `3.4.5`) are left
//! untouched; they are reported later if nothing consumes them.

use crate::item::{Item, ItemKind};
use crate::node::Expr;
use crate::tokenizer::Token;
use logos::Logos;

/// The numeric literals recognized by the classifier.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
enum Number {
    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[0-9]+\.[0-9]+")]
    Float,
}

/// The kinds of literal a whole operand token can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralKind {
    /// Decimal digits, such as `42`.
    Int,

    /// Decimal digits with a fractional part, such as `3.25`.
    Float,

    /// Letters and digits in any script, such as `x2` or `π`.
    Name,
}

impl LiteralKind {
    /// Returns true if the literal is a number.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }
}

/// Returns the kind of numeric literal the given text is, if a single number spans all of it.
fn number_kind(text: &str) -> Option<LiteralKind> {
    let mut lexer = Number::lexer(text);
    let number = lexer.next()?.ok()?;
    if lexer.span() != (0..text.len()) {
        return None;
    }

    match number {
        Number::Int => Some(LiteralKind::Int),
        Number::Float => Some(LiteralKind::Float),
    }
}

/// Returns the kind of literal the given text is, if a single literal spans all of it.
///
/// Numbers take precedence over names, so `12` is a number while `12ab` is a name. Names may use
/// letters and digits of any script ([`char::is_alphanumeric`]).
pub fn literal_kind(text: &str) -> Option<LiteralKind> {
    if let Some(kind) = number_kind(text) {
        return Some(kind);
    }

    if !text.is_empty() && text.chars().all(char::is_alphanumeric) {
        return Some(LiteralKind::Name);
    }
    None
}

/// Returns the operand token of the given item, if it is an unclassified operand.
fn raw_operand<'a, 'source>(item: &'a Item<'source>) -> Option<&'a Token<'source>> {
    item.as_raw().filter(|token| !token.is_operator())
}

/// Replaces every raw operand that is a number with an [`Expr::Number`].
pub fn classify_numbers(items: &mut [Item<'_>]) {
    for item in items.iter_mut() {
        let Some(token) = raw_operand(item) else {
            continue;
        };

        if !literal_kind(token.lexeme).is_some_and(LiteralKind::is_numeric) {
            continue;
        }

        if let Ok(value) = token.lexeme.parse::<f64>() {
            item.kind = ItemKind::Expr(Expr::Number(value));
        }
    }
}

/// Replaces every raw operand made only of letters and digits with an [`Expr::Symbol`].
pub fn classify_symbols(items: &mut [Item<'_>]) {
    for item in items.iter_mut() {
        let Some(token) = raw_operand(item) else {
            continue;
        };

        if literal_kind(token.lexeme).is_some() {
            item.kind = ItemKind::Expr(Expr::Symbol(token.lexeme.to_string()));
        }
    }
}

/// Classifies the given tokens, numbers first, then names. Operator tokens and operands that are
/// neither are kept as raw tokens.
pub fn classify(tokens: Vec<Token<'_>>) -> Vec<Item<'_>> {
    let mut items = tokens.into_iter().map(Item::from).collect::<Vec<_>>();
    classify_numbers(&mut items);
    classify_symbols(&mut items);
    items
}
