use crate::error::{kind::ImpossibleEquation, Error};
use crate::item::{Item, ItemKind};
use crate::node::Relation;
use crate::op::RelationKind;
use tracing::debug;

/// The outcome of [`build_relation`].
#[derive(Debug, Clone, PartialEq)]
pub enum Built<'source> {
    /// The sequence was an operand, the relation symbol, and an operand.
    Relation(Relation),

    /// The sequence did not have that shape. It is returned as it was given.
    Unchanged(Vec<Item<'source>>),
}

/// Builds a relation of the given kind from a fully reduced sequence.
///
/// The sequence must be exactly three items long, with the relation's symbol in the middle.
/// Sequences of any other shape are not an error; they are handed back in [`Built::Unchanged`].
/// If the shape matches but either side is not an operand, [`ImpossibleEquation`] is returned,
/// pointing at the symbol.
pub fn build_relation<'source>(
    items: Vec<Item<'source>>,
    kind: RelationKind,
    symbol: &str,
) -> Result<Built<'source>, Error> {
    let [left, middle, right] = match <[Item<'_>; 3]>::try_from(items) {
        Ok(items) if items[1].is_raw(symbol) => items,
        Ok(items) => return Ok(Built::Unchanged(items.into())),
        Err(items) => return Ok(Built::Unchanged(items)),
    };

    match (left.kind, right.kind) {
        (ItemKind::Expr(left), ItemKind::Expr(right)) => {
            let relation = Relation::new(kind, left, right);
            debug!(%kind, %relation, "built relation");
            Ok(Built::Relation(relation))
        },
        _ => Err(Error::new(
            vec![middle.span],
            ImpossibleEquation { symbol: symbol.to_string() },
        )),
    }
}
