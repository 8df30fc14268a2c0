use crate::op::RelationKind;
use std::fmt;
use super::Expr;

/// A relation between two expressions, such as `x = 5` or `2 * y >= x`.
#[derive(Debug, Clone)]
pub struct Relation {
    /// The kind of relation.
    pub kind: RelationKind,

    /// The left-hand side of the relation.
    pub left: Expr,

    /// The right-hand side of the relation.
    pub right: Expr,
}

impl Relation {
    /// Creates a new relation.
    pub fn new(kind: RelationKind, left: Expr, right: Expr) -> Self {
        Self { kind, left, right }
    }

    /// Returns the same statement with its sides swapped, e.g. `x > 5` becomes `5 < x`.
    pub fn mirrored(self) -> Self {
        Self {
            kind: self.kind.mirror(),
            left: self.right,
            right: self.left,
        }
    }
}

/// Two relations are equal if they have the same kind and equal sides, or if one is the mirror of
/// the other: `x > 5` is equal to `5 < x`.
impl PartialEq for Relation {
    fn eq(&self, other: &Self) -> bool {
        (self.kind == other.kind && self.left == other.left && self.right == other.right)
            || (self.kind.mirror() == other.kind && self.left == other.right && self.right == other.left)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.kind.symbol(), self.right)
    }
}
