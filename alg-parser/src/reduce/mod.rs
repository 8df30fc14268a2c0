//! Folds a flat sequence of classified items into expression trees.
//!
//! Reduction is driven by operator symbols rather than by a grammar. Each operator family is
//! reduced in its own left-to-right pass over the sequence, tightest binding first, so by the time
//! the sum pass runs, every product has already been folded into a single item:
//!
//! ```text
//! 3 + 4 * 5      (five items)
//! 3 + (4 * 5)    (after the product pass: three items)
//! (3 + (4 * 5))  (after the sum pass: one item)
//! ```
//!
//! What is left after every family has been reduced is handed to the
//! [relation builder](relation::build_relation).

pub mod relation;

use crate::error::{kind::ImpossibleEquation, Error};
use crate::item::{Item, ItemKind};
use crate::node::Operation;
use crate::op::{Family, OpKind, OperatorTable};
use tracing::debug;

/// Creates an [`ImpossibleEquation`] error pointing at the given operator item.
fn impossible(operator: &Item<'_>, symbol: &str) -> Error {
    Error::new(vec![operator.span.clone()], ImpossibleEquation { symbol: symbol.to_string() })
}

/// Reduces every occurrence of the given family's symbol in the sequence.
///
/// The sequence is scanned left to right. When the symbol is found, it is combined with the item
/// directly to its left (which may be an operation produced earlier in this pass) and the item
/// directly to its right into a single [`Operation`], flattening operands of the same family.
/// Chains such as `a + b + c` therefore become a single operation with three parts.
///
/// If either neighbor is missing, an [`ImpossibleEquation`] error is returned. If a neighbor is
/// present but is not an operand (an unconsumed token, as in `a + + b`), the three items are left
/// as they are and scanning continues with the right neighbor.
///
/// The reduced sequence is returned; a sequence with a single item means the input was fully
/// reduced.
pub fn reduce_family<'source>(
    items: Vec<Item<'source>>,
    family: Family,
    symbol: &str,
) -> Result<Vec<Item<'source>>, Error> {
    let mut output: Vec<Item<'source>> = Vec::with_capacity(items.len());
    let mut input = items.into_iter();

    // an item set aside when backing out, scanned again before the rest of the input
    let mut rescan = None;

    while let Some(item) = rescan.take().or_else(|| input.next()) {
        if !item.is_raw(symbol) {
            output.push(item);
            continue;
        }

        let Some(lhs) = output.pop() else {
            return Err(impossible(&item, symbol));
        };
        let Some(rhs) = input.next() else {
            return Err(impossible(&item, symbol));
        };

        match (lhs.kind, rhs.kind) {
            (ItemKind::Expr(lhs_expr), ItemKind::Expr(rhs_expr)) => {
                let op = Operation::flattened(family, lhs_expr, rhs_expr);
                debug!(%family, %op, "folded operation");
                output.push(Item::expr(op, lhs.span.start..rhs.span.end));
            },
            (lhs_kind, rhs_kind) => {
                output.push(Item { span: lhs.span, kind: lhs_kind });
                output.push(item);
                rescan = Some(Item { span: rhs.span, kind: rhs_kind });
            },
        }
    }

    Ok(output)
}

/// Reduces every operator family in the table, in [binding order](Family::BINDING_ORDER).
///
/// A family with several symbols is reduced one symbol at a time, in the order the symbols were
/// added to the table.
pub fn reduce_operations<'source>(
    mut items: Vec<Item<'source>>,
    table: &OperatorTable,
) -> Result<Vec<Item<'source>>, Error> {
    for family in Family::BINDING_ORDER {
        for symbol in table.symbols(OpKind::Family(family)) {
            items = reduce_family(items, family, symbol)?;
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use crate::literal::classify;
    use crate::node::Expr;
    use crate::tokenizer::break_apart;
    use pretty_assertions::assert_eq;
    use super::*;

    fn sum(parts: Vec<Expr>) -> Expr {
        Operation::new(Family::Sum, parts).unwrap().into()
    }

    fn product(parts: Vec<Expr>) -> Expr {
        Operation::new(Family::Product, parts).unwrap().into()
    }

    /// Tokenizes and classifies the given whitespace-free source.
    fn items(source: &str) -> Vec<Item<'_>> {
        classify(break_apart(OperatorTable::standard(), source))
    }

    /// Reduces all operations in the source, expecting a single expression to remain.
    fn reduce_one(source: &str) -> Expr {
        let mut reduced = reduce_operations(items(source), OperatorTable::standard()).unwrap();
        assert_eq!(reduced.len(), 1, "expected one item, got {:?}", reduced);
        reduced.remove(0).into_expr().unwrap()
    }

    #[test]
    fn product_binds_tighter() {
        assert_eq!(
            reduce_one("3+4*5"),
            sum(vec![3.0.into(), product(vec![4.0.into(), 5.0.into()])]),
        );
        assert_eq!(
            reduce_one("3*4+5"),
            sum(vec![product(vec![3.0.into(), 4.0.into()]), 5.0.into()]),
        );
    }

    #[test]
    fn chains_are_flattened() {
        let expr = reduce_one("1+2+3");
        assert_eq!(expr, sum(vec![1.0.into(), 2.0.into(), 3.0.into()]));
        assert_eq!(expr.as_operation().map(Operation::len), Some(3));
    }

    #[test]
    fn product_of_symbols() {
        assert_eq!(
            reduce_one("x*90*y"),
            product(vec!["x".into(), 90.0.into(), "y".into()]),
        );
    }

    #[test]
    fn mixed_families() {
        assert_eq!(
            reduce_one("4+r+6*x"),
            sum(vec![4.0.into(), "r".into(), product(vec![6.0.into(), "x".into()])]),
        );
        assert_eq!(
            reduce_one("a*b+c*d+e"),
            sum(vec![
                product(vec!["a".into(), "b".into()]),
                product(vec!["c".into(), "d".into()]),
                "e".into(),
            ]),
        );
    }

    #[test]
    fn folded_span_covers_operands() {
        let reduced = reduce_family(items("ab+cd"), Family::Sum, "+").unwrap();
        assert_eq!(reduced.len(), 1);
        assert_eq!(reduced[0].span, 0..5);
    }

    #[test]
    fn other_symbols_are_untouched() {
        let reduced = reduce_family(items("x=1+2"), Family::Product, "*").unwrap();
        assert_eq!(reduced, items("x=1+2"));
    }

    #[test]
    fn relation_operands_are_reduced() {
        let reduced = reduce_operations(items("x=1+2"), OperatorTable::standard()).unwrap();
        assert_eq!(reduced.len(), 3);
        assert!(reduced[1].is_raw("="));
        assert_eq!(reduced[2].as_expr(), Some(&sum(vec![1.0.into(), 2.0.into()])));
        assert_eq!(reduced[2].span, 2..5);
    }

    #[test]
    fn missing_left_operand() {
        let err = reduce_family(items("+4"), Family::Sum, "+").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ImpossibleEquation>(),
            Some(&ImpossibleEquation { symbol: "+".to_string() }),
        );
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn missing_right_operand() {
        let err = reduce_family(items("x*"), Family::Product, "*").unwrap_err();
        assert!(err.is::<ImpossibleEquation>());
        assert_eq!(err.spans, vec![1..2]);
    }

    #[test]
    fn adjacent_operators_back_out() {
        let reduced = reduce_family(items("a++b"), Family::Sum, "+").unwrap();
        assert_eq!(reduced, items("a++b"));
    }

    #[test]
    fn reduction_continues_after_back_out() {
        let reduced = reduce_family(items("a++b+c"), Family::Sum, "+").unwrap();
        assert_eq!(reduced.len(), 4);
        assert_eq!(reduced[3].as_expr(), Some(&sum(vec!["b".into(), "c".into()])));
    }

    #[test]
    fn unclassified_operand_backs_out() {
        let reduced = reduce_family(items("x_1+2"), Family::Sum, "+").unwrap();
        assert_eq!(reduced, items("x_1+2"));
    }

    #[test]
    fn family_with_several_symbols() {
        let table = OperatorTable::new()
            .with("+", "addition", OpKind::Family(Family::Sum))
            .with("plus", "addition", OpKind::Family(Family::Sum));
        let items = classify(break_apart(&table, "a+bplusc"));
        let mut reduced = reduce_operations(items, &table).unwrap();
        assert_eq!(reduced.len(), 1, "expected one item, got {:?}", reduced);
        assert_eq!(
            reduced.remove(0).into_expr().unwrap(),
            sum(vec!["a".into(), "b".into(), "c".into()]),
        );
    }

    #[test]
    fn long_chains_do_not_recurse() {
        let source = vec!["1"; 5000].join("+");
        let expr = reduce_one(&source);
        assert_eq!(expr.as_operation().map(Operation::len), Some(5000));
    }
}
