use ariadne::Fmt;
use alg_attrs::ErrorKind;
use alg_error::{ErrorKind, EXPR};
use std::fmt;

/// The side of a binary operation an operand is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// There was nothing to identify after whitespace was removed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty expression",
    labels = [format!("add an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyExpression;

/// A recognized operator is missing a valid operand on one or both of its sides.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "impossible equation",
    labels = [format!("`{}` needs an operand on both sides", symbol)],
    help = format!("operators must be written between two {}", "operands".fg(EXPR)),
)]
pub struct ImpossibleEquation {
    /// The operator that could not be applied.
    pub symbol: String,
}

/// A token is neither a number, a name, nor a recognized operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unrecognized input: `{}`", token),
    labels = ["I could not understand this"],
    help = format!(
        "numbers and names may only contain letters, digits and a decimal point; type {} for the supported operations",
        "ops".fg(EXPR),
    ),
)]
pub struct UnrecognizedInput {
    /// The text of the unrecognized token.
    pub token: String,
}

/// More than one relation operator was left after reducing all operations.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "an equation can only contain one relation",
    labels = symbols.iter().map(|symbol| format!("`{}` relation", symbol)).collect::<Vec<_>>(),
    help = "split the chain into separate equations",
)]
pub struct MultipleRelations {
    /// The relation symbols that were found, in order.
    pub symbols: Vec<String>,
}

/// An operation was constructed with fewer than two parts.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("operations must have at least two parts, not {}", found),
    labels = ["this operation"],
)]
pub struct TooFewParts {
    /// The number of parts that were given.
    pub found: usize,
}

/// A part selected for constant folding is not a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the part at the {} hand side index must be a number to evaluate", side),
    labels = ["this part"],
)]
pub struct NonNumericPart {
    /// Which of the two selected parts is invalid.
    pub side: Side,
}

/// The same part was selected twice for constant folding.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot fold the part at index {} with itself", index),
    labels = ["this part"],
    help = "select two different parts",
)]
pub struct SamePartIndex {
    /// The index that was selected twice.
    pub index: usize,
}

/// A part index selected for constant folding does not exist.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("part index {} is out of range for an operation with {} parts", index, len),
    labels = ["this operation"],
)]
pub struct PartIndexOutOfRange {
    /// The index that was selected.
    pub index: usize,

    /// The number of parts in the operation.
    pub len: usize,
}

/// Constant folding was requested on something that is not an operation.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "only operations can be evaluated",
    labels = ["this is a leaf"],
)]
pub struct NotAnOperation;
