use crate::error::{
    kind::{NonNumericPart, PartIndexOutOfRange, SamePartIndex, Side, TooFewParts},
    Error,
};
use crate::op::Family;
use std::fmt;
use super::Expr;

/// A sum or product of two or more parts.
///
/// The parts are kept in the order they were written. An operation always has at least two
/// parts; operations are built with [`Operation::new`] or [`Operation::flattened`], which uphold
/// this.
#[derive(Debug, Clone)]
pub struct Operation {
    /// The operator family of this operation.
    family: Family,

    /// The parts of this operation.
    parts: Vec<Expr>,
}

impl Operation {
    /// Creates an operation of the given family from the given parts. Returns [`TooFewParts`] if
    /// there are fewer than two parts.
    pub fn new(family: Family, parts: Vec<Expr>) -> Result<Self, Error> {
        if parts.len() < 2 {
            return Err(Error::unspanned(TooFewParts { found: parts.len() }));
        }
        Ok(Self { family, parts })
    }

    /// Creates an operation that applies the given family to two operands, **flattening** them:
    /// an operand that is itself an operation of the same family contributes its parts
    /// individually instead of being nested. Each side is flattened independently.
    ///
    /// ```
    /// use alg_parser::{node::{Expr, Operation}, op::Family};
    ///
    /// let ab = Operation::flattened(Family::Sum, Expr::from("a"), Expr::from("b"));
    /// let abc = Operation::flattened(Family::Sum, ab.into(), Expr::from("c"));
    /// assert_eq!(abc.parts().len(), 3);
    /// ```
    pub fn flattened(family: Family, lhs: Expr, rhs: Expr) -> Self {
        let mut parts = Vec::new();
        for operand in [lhs, rhs] {
            match operand {
                Expr::Operation(op) if op.family == family => parts.extend(op.parts),
                operand => parts.push(operand),
            }
        }
        Self { family, parts }
    }

    /// Returns the operator family of this operation.
    pub fn family(&self) -> Family {
        self.family
    }

    /// Returns the parts of this operation.
    pub fn parts(&self) -> &[Expr] {
        &self.parts
    }

    /// Consumes the operation, returning its parts.
    pub fn into_parts(self) -> Vec<Expr> {
        self.parts
    }

    /// Returns the number of parts in this operation. This is always at least two.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Counts the parts that are equal to the given expression.
    fn count(&self, expr: &Expr) -> usize {
        self.parts.iter().filter(|part| *part == expr).count()
    }

    /// Combines the numbers at the given part indices with this operation's family.
    ///
    /// If the operation has exactly two parts, nothing is modified and the combined value is
    /// returned; the caller is expected to replace the operation with it. Otherwise, the part at
    /// `lhs` becomes the combined number, the part at `rhs` is removed (shifting later parts down
    /// by one), and [`None`] is returned.
    ///
    /// Returns an error without modifying anything if the indices are equal, out of range, or do
    /// not refer to numbers (the left side is checked first).
    pub(crate) fn fold(&mut self, lhs: usize, rhs: usize) -> Result<Option<f64>, Error> {
        let len = self.parts.len();
        if let Some(index) = [lhs, rhs].into_iter().find(|&index| index >= len) {
            return Err(Error::unspanned(PartIndexOutOfRange { index, len }));
        }
        if lhs == rhs {
            return Err(Error::unspanned(SamePartIndex { index: lhs }));
        }

        let lhs_value = self.parts[lhs]
            .as_number()
            .ok_or_else(|| Error::unspanned(NonNumericPart { side: Side::Left }))?;
        let rhs_value = self.parts[rhs]
            .as_number()
            .ok_or_else(|| Error::unspanned(NonNumericPart { side: Side::Right }))?;
        let value = self.family.combine(lhs_value, rhs_value);

        if len == 2 {
            return Ok(Some(value));
        }

        self.parts[lhs] = Expr::Number(value);
        self.parts.remove(rhs);
        Ok(None)
    }
}

/// Two operations are equal if they are of the same family and every part occurs the same number
/// of times in both, regardless of order. Parts are compared with their own equality, so nested
/// operations are compared as whole values.
impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family
            && self.parts.len() == other.parts.len()
            && self.parts.iter().all(|part| self.count(part) == other.count(part))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = format!(" {} ", self.family.symbol());
        let mut iter = self.parts.iter();
        write!(f, "(")?;
        if let Some(part) = iter.next() {
            write!(f, "{}", part)?;
            for part in iter {
                write!(f, "{}{}", separator, part)?;
            }
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use crate::error::kind::{NonNumericPart, PartIndexOutOfRange, SamePartIndex, Side, TooFewParts};
    use pretty_assertions::assert_eq;
    use super::*;

    fn op(family: Family, parts: Vec<Expr>) -> Operation {
        Operation::new(family, parts).unwrap()
    }

    #[test]
    fn too_few_parts() {
        let err = Operation::new(Family::Sum, vec![Expr::Number(1.0)]).unwrap_err();
        assert_eq!(err.downcast_ref::<TooFewParts>(), Some(&TooFewParts { found: 1 }));

        let err = Operation::new(Family::Product, vec![]).unwrap_err();
        assert_eq!(err.downcast_ref::<TooFewParts>(), Some(&TooFewParts { found: 0 }));
    }

    #[test]
    fn parts_keep_order() {
        let sum = op(Family::Sum, vec![5.0.into(), "x".into()]);
        assert_eq!(sum.parts(), &[Expr::Number(5.0), Expr::from("x")]);
        assert_eq!(sum.len(), 2);
        assert_eq!(sum.family(), Family::Sum);
        assert_eq!(sum.into_parts(), vec![Expr::Number(5.0), Expr::from("x")]);
    }

    #[test]
    fn nested_equality() {
        let a = op(Family::Sum, vec![
            4.0.into(),
            "r".into(),
            op(Family::Product, vec![6.0.into(), "x".into()]).into(),
        ]);
        let b = op(Family::Sum, vec![
            4.0.into(),
            "r".into(),
            op(Family::Product, vec![6.0.into(), "x".into()]).into(),
        ]);
        assert_eq!(a, b);
    }

    #[test]
    fn commutative_at_one_level() {
        let a = op(Family::Sum, vec!["a".into(), "b".into()]);
        let b = op(Family::Sum, vec!["b".into(), "a".into()]);
        assert_eq!(a, b);

        let x = op(Family::Sum, vec!["x".into(), "y".into(), "z".into()]);
        let y = op(Family::Sum, vec!["y".into(), "z".into(), "x".into()]);
        assert_eq!(x, y);
    }

    #[test]
    fn nesting_is_not_flattened_by_equality() {
        let ab = op(Family::Sum, vec!["a".into(), "b".into()]);
        let bc = op(Family::Sum, vec!["b".into(), "c".into()]);
        let left = op(Family::Sum, vec![ab.into(), "c".into()]);
        let right = op(Family::Sum, vec!["a".into(), bc.into()]);
        assert_ne!(left, right);
    }

    #[test]
    fn multiset_counts() {
        let a = op(Family::Sum, vec!["a".into(), "a".into(), "b".into()]);
        let b = op(Family::Sum, vec!["a".into(), "b".into(), "b".into()]);
        assert_ne!(a, b);
    }

    #[test]
    fn family_matters() {
        let sum = op(Family::Sum, vec!["a".into(), "b".into()]);
        let product = op(Family::Product, vec!["a".into(), "b".into()]);
        assert_ne!(sum, product);
    }

    #[test]
    fn flattens_each_side() {
        let ab = op(Family::Sum, vec!["a".into(), "b".into()]);
        let cd = op(Family::Sum, vec!["c".into(), "d".into()]);
        let all = Operation::flattened(Family::Sum, ab.into(), cd.into());
        assert_eq!(all.parts(), &[
            Expr::from("a"),
            Expr::from("b"),
            Expr::from("c"),
            Expr::from("d"),
        ]);
    }

    #[test]
    fn does_not_flatten_other_family() {
        let product = op(Family::Product, vec![4.0.into(), 5.0.into()]);
        let sum = Operation::flattened(Family::Sum, 3.0.into(), product.clone().into());
        assert_eq!(sum.parts(), &[Expr::Number(3.0), Expr::Operation(product)]);
    }

    #[test]
    fn fold_errors_leave_operation_untouched() {
        let original = op(Family::Sum, vec![5.0.into(), "x".into(), 4.0.into()]);

        let mut sum = original.clone();
        let err = sum.fold(1, 2).unwrap_err();
        assert_eq!(err.downcast_ref::<NonNumericPart>(), Some(&NonNumericPart { side: Side::Left }));

        let err = sum.fold(0, 1).unwrap_err();
        assert_eq!(err.downcast_ref::<NonNumericPart>(), Some(&NonNumericPart { side: Side::Right }));

        let err = sum.fold(2, 2).unwrap_err();
        assert_eq!(err.downcast_ref::<SamePartIndex>(), Some(&SamePartIndex { index: 2 }));

        let err = sum.fold(0, 3).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PartIndexOutOfRange>(),
            Some(&PartIndexOutOfRange { index: 3, len: 3 }),
        );

        assert_eq!(sum.parts(), original.parts());
    }

    #[test]
    fn fold_shifts_later_parts() {
        let mut product = op(Family::Product, vec![2.0.into(), "x".into(), 3.0.into(), "y".into()]);
        assert_eq!(product.fold(0, 2).unwrap(), None);
        assert_eq!(product.parts(), &[Expr::Number(6.0), Expr::from("x"), Expr::from("y")]);
    }

    #[test]
    fn fold_decimals() {
        use assert_float_eq::assert_float_relative_eq;

        let mut sum = op(Family::Sum, vec![0.1.into(), 0.2.into()]);
        let value = sum.fold(0, 1).unwrap().unwrap();
        assert_float_relative_eq!(value, 0.3);
    }
}
