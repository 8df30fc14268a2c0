//! The value types produced by identification.
//!
//! An identified expression is a small tree. Its leaves are numbers ([`Expr::Number`]) and named
//! symbols ([`Expr::Symbol`]); its inner nodes are n-ary [`Operation`]s (sums and products) that
//! own their parts. At the root, a [`Relation`] may tie two expressions together, such as
//! `x + 1 = 5`.
//!
//! # Flattening
//!
//! Sums and products are associative, so they are stored **flattened**: `a + b + c` is a single
//! [`Operation`] with three parts, never a sum nested inside another sum. Flattening happens when
//! the operation is built from its two operands (see [`Operation::flattened`]).
//!
//! # Strict equality
//!
//! The [`PartialEq`] implementations define a structural equality that is slightly looser than
//! comparing the trees field by field:
//!
//! - Numbers are equal by value; symbols are equal by name.
//! - Two operations are equal if they are of the same family and contain the same parts the same
//!   number of times, **in any order**. `a + b` equals `b + a`.
//! - The order independence applies to the direct parts of an operation only. Nested operations
//!   are compared as whole values, so `(a + b) + c` (as a nested tree) is not equal to
//!   `a + (b + c)`.
//! - Two relations are equal if they are of the same kind with equal sides, or if one is the
//!   mirror of the other with its sides swapped. `x > 5` equals `5 < x`.
//!
//! No simplification is involved: `2 * 3` is not equal to `6`.

mod operation;
mod relation;

pub use operation::Operation;
pub use relation::Relation;

use crate::error::{kind::NotAnOperation, Error};
use std::{cmp::Ordering, fmt};

/// An operand: a number, a named symbol, or an operation over other operands.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A number, such as `2` or `3.5`. Integers and decimals share one floating-point domain.
    Number(f64),

    /// A named symbol, such as `x` or `speed`. The name is never empty.
    Symbol(String),

    /// A sum or product of at least two parts.
    Operation(Operation),
}

impl Expr {
    /// If the expression is a [`Expr::Number`], returns the contained value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// If the expression is a [`Expr::Symbol`], returns the contained name.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// If the expression is an [`Expr::Operation`], returns a reference to it.
    pub fn as_operation(&self) -> Option<&Operation> {
        match self {
            Self::Operation(op) => Some(op),
            _ => None,
        }
    }

    /// Returns true if the expression is a number or a symbol.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Self::Operation(_))
    }

    /// Folds the numeric parts at the given indices of this operation into a single number.
    ///
    /// If the operation has more than two parts, it is modified in place: the part at `lhs`
    /// becomes the combined number and the part at `rhs` is removed. If it has exactly two parts,
    /// the whole expression is replaced by the combined number.
    ///
    /// Nothing is modified if an error is returned. See [`Operation::fold`] for the possible
    /// errors; calling this on a leaf returns [`NotAnOperation`].
    pub fn evaluate(&mut self, lhs: usize, rhs: usize) -> Result<(), Error> {
        let Self::Operation(op) = self else {
            return Err(Error::unspanned(NotAnOperation));
        };

        if let Some(value) = op.fold(lhs, rhs)? {
            *self = Self::Number(value);
        }
        Ok(())
    }

    /// Calls the given function on every symbol name in this expression, left to right.
    pub fn for_each_symbol<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        match self {
            Self::Number(_) => (),
            Self::Symbol(name) => f(name),
            Self::Operation(op) => op.parts().iter().for_each(|part| part.for_each_symbol(f)),
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(lhs), Self::Number(rhs)) => lhs == rhs,
            (Self::Symbol(lhs), Self::Symbol(rhs)) => lhs == rhs,
            (Self::Operation(lhs), Self::Operation(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

/// Numbers are ordered by value. Symbols and operations have no ordering, not even with
/// themselves.
impl PartialOrd for Expr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Number(lhs), Self::Number(rhs)) => lhs.partial_cmp(rhs),
            _ => None,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Symbol(name) => write!(f, "{}", name),
            Self::Operation(op) => write!(f, "{}", op),
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Self::Symbol(name.to_string())
    }
}

impl From<Operation> for Expr {
    fn from(op: Operation) -> Self {
        Self::Operation(op)
    }
}

/// The root of an identified expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A bare expression, such as `x + 1`.
    Expr(Expr),

    /// A relation between two expressions, such as `x + 1 = 5`.
    Relation(Relation),
}

impl Node {
    /// Returns the distinct symbol names in this node, in the order they first appear.
    pub fn symbols<'a>(&'a self) -> Vec<&'a str> {
        let mut symbols = Vec::new();
        let mut push = |name: &'a str| {
            if !symbols.contains(&name) {
                symbols.push(name);
            }
        };

        match self {
            Self::Expr(expr) => expr.for_each_symbol(&mut push),
            Self::Relation(relation) => {
                relation.left.for_each_symbol(&mut push);
                relation.right.for_each_symbol(&mut push);
            },
        }

        symbols
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expr(expr) => write!(f, "{}", expr),
            Self::Relation(relation) => write!(f, "{}", relation),
        }
    }
}

impl From<Expr> for Node {
    fn from(expr: Expr) -> Self {
        Self::Expr(expr)
    }
}

impl From<Relation> for Node {
    fn from(relation: Relation) -> Self {
        Self::Relation(relation)
    }
}

#[cfg(test)]
mod tests {
    use crate::op::{Family, RelationKind};
    use pretty_assertions::assert_eq;
    use super::*;

    fn sum(parts: Vec<Expr>) -> Expr {
        Operation::new(Family::Sum, parts).unwrap().into()
    }

    fn product(parts: Vec<Expr>) -> Expr {
        Operation::new(Family::Product, parts).unwrap().into()
    }

    #[test]
    fn numbers_compare_by_value() {
        assert_eq!(Expr::Number(3.4), Expr::Number(3.4));
        assert_eq!(Expr::Number(2.0), Expr::from(2.0));
        assert_ne!(Expr::Number(-3.0), Expr::Number(3.5));
        assert!(Expr::Number(5.0) > Expr::Number(4.0));
        assert!(Expr::Number(2.0) <= Expr::Number(2.0));
        assert!(Expr::Number(23.0) >= Expr::Number(5.6));
    }

    #[test]
    fn symbols_compare_by_name() {
        assert_eq!(Expr::from("sd"), Expr::from("sd"));
        assert_ne!(Expr::from("er"), Expr::from("speed"));
        assert_ne!(Expr::from("x"), Expr::Number(1.0));
        assert_eq!(Expr::from("x").partial_cmp(&Expr::from("x")), None);
        assert_eq!(Expr::from("x").partial_cmp(&Expr::Number(1.0)), None);
    }

    #[test]
    fn display() {
        assert_eq!(Expr::Number(5.0).to_string(), "5");
        assert_eq!(Expr::Number(12.78).to_string(), "12.78");
        assert_eq!(Expr::from("c").to_string(), "c");
        assert_eq!(sum(vec![5.0.into(), "x".into()]).to_string(), "(5 + x)");
        assert_eq!(
            product(vec!["x".into(), 90.0.into(), "y".into()]).to_string(),
            "(x * 90 * y)",
        );
    }

    #[test]
    fn evaluate_collapses_two_parts() {
        let mut expr = sum(vec![5.0.into(), 4.0.into()]);
        expr.evaluate(0, 1).unwrap();
        assert_eq!(expr, Expr::Number(9.0));

        let mut expr = product(vec![5.0.into(), 4.0.into()]);
        expr.evaluate(1, 0).unwrap();
        assert_eq!(expr, Expr::Number(20.0));
    }

    #[test]
    fn evaluate_in_place() {
        let mut expr = sum(vec![5.0.into(), "x".into(), 4.0.into()]);
        expr.evaluate(0, 2).unwrap();
        assert_eq!(expr, sum(vec![9.0.into(), "x".into()]));

        let mut expr = product(vec![5.0.into(), "x".into(), 4.0.into()]);
        expr.evaluate(2, 0).unwrap();
        let Expr::Operation(op) = &expr else {
            panic!("expected an operation, got {:?}", expr);
        };
        assert_eq!(op.parts(), &[Expr::from("x"), Expr::Number(20.0)]);
    }

    #[test]
    fn leaves() {
        assert_eq!(Expr::from("x").as_symbol(), Some("x"));
        assert_eq!(Expr::Number(1.0).as_symbol(), None);
        assert!(Expr::from("x").is_leaf());
        assert!(Expr::Number(1.0).is_leaf());

        let expr = product(vec![2.0.into(), "x".into()]);
        assert_eq!(expr.as_symbol(), None);
        assert!(!expr.is_leaf());
    }

    #[test]
    fn evaluate_leaf() {
        let mut expr = Expr::Number(1.0);
        let err = expr.evaluate(0, 1).unwrap_err();
        assert!(err.is::<NotAnOperation>());
        assert_eq!(expr, Expr::Number(1.0));
    }

    #[test]
    fn distinct_symbols_in_order() {
        let node = Node::Relation(Relation::new(
            RelationKind::Less,
            product(vec!["x".into(), sum(vec![34.0.into(), "y".into(), "x".into()])]),
            sum(vec!["z".into(), "y".into()]),
        ));
        assert_eq!(node.symbols(), ["x", "y", "z"]);
    }
}
