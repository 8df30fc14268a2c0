//! Identification of flat algebraic expressions.
//!
//! This crate turns a line of text such as `2 * x + 1 >= y` into a small expression tree that can
//! be compared with other trees and partially evaluated. There is no grammar: the text is split on
//! the symbols of an [`OperatorTable`], the pieces are classified into numbers and names, and the
//! operators are then folded away one family at a time.
//!
//! ```
//! use alg_parser::{identify, node::{Expr, Node, Operation}, op::{Family, OperatorTable}};
//!
//! let identified = identify("x + 2 * 3", OperatorTable::standard()).unwrap();
//! assert_eq!(identified.parts, ["x", "+", "2", "*", "3"]);
//! assert_eq!(identified.symbols, ["x"]);
//!
//! let expected = Operation::flattened(
//!     Family::Sum,
//!     Expr::from("x"),
//!     Operation::flattened(Family::Product, Expr::from(2.0), Expr::from(3.0)).into(),
//! );
//! assert_eq!(identified.node, Node::Expr(expected.into()));
//! ```
//!
//! Errors are [`Error`]s whose spans point into the text that was passed to [`identify`],
//! whitespace included, so they can be rendered against it directly.

pub mod error;
pub mod item;
pub mod literal;
pub mod node;
pub mod op;
pub mod reduce;
pub mod tokenizer;

use error::{
    kind::{EmptyExpression, ImpossibleEquation, MultipleRelations, UnrecognizedInput},
    Error,
};
use item::Item;
use node::Node;
use op::{OpKind, OperatorTable};
use reduce::relation::{build_relation, Built};
use tokenizer::{break_apart, Stripped};
use std::ops::Range;
use tracing::debug;

/// The result of a successful identification.
#[derive(Debug, Clone, PartialEq)]
pub struct Identified {
    /// The identified expression or relation.
    pub node: Node,

    /// The text of every token the input was split into, in order.
    pub parts: Vec<String>,

    /// The distinct symbol names in the expression, in the order they first appear.
    pub symbols: Vec<String>,
}

/// Identifies the expression in the given input, using the operators in the given table.
///
/// Whitespace anywhere in the input is ignored. Products are reduced before sums; at most one
/// relation may remain after that.
pub fn identify(input: &str, table: &OperatorTable) -> Result<Identified, Error> {
    let stripped = Stripped::new(input);
    let tokens = break_apart(table, stripped.text());
    if tokens.is_empty() {
        return Err(Error::new(vec![0..input.len()], EmptyExpression));
    }

    let parts = tokens.iter().map(|token| token.lexeme.to_string()).collect::<Vec<_>>();
    debug!(parts = ?parts, "identified parts");

    let items = literal::classify(tokens);
    let node = reduce::reduce_operations(items, table)
        .and_then(|items| assemble(items, table))
        .map_err(|err| err.map_spans(|span| stripped.original_span(span)))?;
    debug!(%node, "identified node");

    let symbols = node.symbols().into_iter().map(str::to_string).collect::<Vec<_>>();
    debug!(symbols = ?symbols, "identified symbols");

    Ok(Identified { node, parts, symbols })
}

/// Builds the root node from the items left after reducing every operation.
///
/// A sequence of exactly an item, a relation symbol, and an item is handed to the relation
/// builder, which rejects sides that are not operands. Otherwise, any raw token that is still
/// present was not consumed by anything: tokens that are not operators at all are reported as
/// [`UnrecognizedInput`], and leftover operation symbols (as in `a + + b`) as
/// [`ImpossibleEquation`]. What remains must be a single expression.
fn assemble(items: Vec<Item<'_>>, table: &OperatorTable) -> Result<Node, Error> {
    let mut relations = Vec::new();
    let mut leftover = None;
    let mut unrecognized = None;
    for item in &items {
        let Some(token) = item.as_raw() else {
            continue;
        };

        match table.get(token.lexeme).map(|op| op.kind) {
            Some(OpKind::Relation(kind)) => relations.push((item.span.clone(), token.lexeme, kind)),
            Some(OpKind::Family(_)) => {
                leftover.get_or_insert((item.span.clone(), token.lexeme));
            },
            None => {
                unrecognized.get_or_insert((item.span.clone(), token.lexeme));
            },
        }
    }

    if let [(_, symbol, kind)] = relations.as_slice() {
        if items.len() == 3 && items[1].is_raw(symbol) {
            return match build_relation(items, *kind, symbol)? {
                Built::Relation(relation) => Ok(Node::Relation(relation)),
                Built::Unchanged(items) => Err(impossible(items[1].span.clone(), symbol)),
            };
        }
    }

    if let Some((span, token)) = unrecognized {
        return Err(Error::new(vec![span], UnrecognizedInput { token: token.to_string() }));
    }
    if let Some((span, symbol)) = leftover {
        return Err(impossible(span, symbol));
    }

    match relations.as_slice() {
        [] => {
            // with no raw tokens left, operands can only have been separated by operations, which
            // have all been folded
            let span = items.first().map_or(0..0, |item| item.span.clone());
            match <[Item<'_>; 1]>::try_from(items) {
                Ok([item]) => item.into_expr().map(Node::Expr).map_err(|item| impossible(item.span, "")),
                Err(_) => Err(impossible(span, "")),
            }
        },
        [(span, symbol, _)] => Err(impossible(span.clone(), symbol)),
        _ => Err(Error::new(
            relations.iter().map(|(span, _, _)| span.clone()).collect(),
            MultipleRelations {
                symbols: relations.iter().map(|(_, symbol, _)| symbol.to_string()).collect(),
            },
        )),
    }
}

/// Creates an [`ImpossibleEquation`] error pointing at the given operator.
fn impossible(span: Range<usize>, symbol: &str) -> Error {
    Error::new(vec![span], ImpossibleEquation { symbol: symbol.to_string() })
}
