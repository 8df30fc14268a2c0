//! Operator families, relation kinds, and the table of recognized operator symbols.

use once_cell::sync::Lazy;
use std::fmt;

/// An associative operator family, represented by an n-ary [`Operation`] node.
///
/// [`Operation`]: crate::node::Operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Sum,
    Product,
}

impl Family {
    /// The order in which families are reduced, tightest binding first.
    pub const BINDING_ORDER: [Family; 2] = [Family::Product, Family::Sum];

    /// Combines two numbers with the operation of this family.
    pub fn combine(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Sum => lhs + rhs,
            Self::Product => lhs * rhs,
        }
    }

    /// Returns the symbol used to display operations of this family.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Sum => "+",
            Self::Product => "*",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sum => write!(f, "Sum"),
            Self::Product => write!(f, "Product"),
        }
    }
}

/// The kind of binary relation between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    Equal,
    NotEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
}

impl RelationKind {
    /// Returns the relation that holds when the two sides are swapped.
    ///
    /// `a > b` is the same statement as `b < a`, and `a = b` the same as `b = a`.
    pub fn mirror(self) -> Self {
        match self {
            Self::Equal => Self::Equal,
            Self::NotEqual => Self::NotEqual,
            Self::Greater => Self::Less,
            Self::Less => Self::Greater,
            Self::GreaterEqual => Self::LessEqual,
            Self::LessEqual => Self::GreaterEqual,
        }
    }

    /// Returns the symbol used to display relations of this kind.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "Equal"),
            Self::NotEqual => write!(f, "NotEqual"),
            Self::Greater => write!(f, "Greater"),
            Self::Less => write!(f, "Less"),
            Self::GreaterEqual => write!(f, "GreaterEqual"),
            Self::LessEqual => write!(f, "LessEqual"),
        }
    }
}

/// What a recognized operator symbol builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// An associative operation, such as `+`.
    Family(Family),

    /// A relation between two operands, such as `=`.
    Relation(RelationKind),
}

/// A recognized operator symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    /// The text of the operator, such as `>=`.
    pub symbol: String,

    /// A human-readable description of the operator, such as `greater than or equal to`.
    pub label: String,

    /// What the operator builds.
    pub kind: OpKind,
}

/// The table of operator symbols recognized by the tokenizer.
///
/// Entries keep the order in which they were added, which is the order they are listed to the
/// user. The tokenizer itself tries them longest-first (see [`OperatorTable::by_length`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorTable {
    operators: Vec<Operator>,
}

static STANDARD: Lazy<OperatorTable> = Lazy::new(|| {
    OperatorTable::new()
        .with("+", "addition", OpKind::Family(Family::Sum))
        .with("*", "multiplication", OpKind::Family(Family::Product))
        .with("=", "equal to", OpKind::Relation(RelationKind::Equal))
        .with(">", "greater than", OpKind::Relation(RelationKind::Greater))
        .with("<", "lesser than", OpKind::Relation(RelationKind::Less))
        .with(">=", "greater than or equal to", OpKind::Relation(RelationKind::GreaterEqual))
        .with("<=", "lesser than or equal to", OpKind::Relation(RelationKind::LessEqual))
        .with("!=", "not equal to", OpKind::Relation(RelationKind::NotEqual))
});

impl OperatorTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self { operators: Vec::new() }
    }

    /// Returns the shared standard table: `+`, `*`, `=`, `>`, `<`, `>=`, `<=` and `!=`.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Adds an operator to the table, replacing any operator with the same symbol. Empty symbols
    /// are ignored, as they would match everywhere.
    pub fn with(mut self, symbol: impl Into<String>, label: impl Into<String>, kind: OpKind) -> Self {
        self.insert(Operator { symbol: symbol.into(), label: label.into(), kind });
        self
    }

    /// Adds an operator to the table, replacing any operator with the same symbol. Empty symbols
    /// are ignored.
    pub fn insert(&mut self, operator: Operator) {
        if operator.symbol.is_empty() {
            return;
        }

        match self.operators.iter_mut().find(|op| op.symbol == operator.symbol) {
            Some(existing) => *existing = operator,
            None => self.operators.push(operator),
        }
    }

    /// Returns the operator with the given symbol.
    pub fn get(&self, symbol: &str) -> Option<&Operator> {
        self.operators.iter().find(|op| op.symbol == symbol)
    }

    /// Returns true if the given text is a recognized operator symbol.
    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    /// Returns an iterator over the operators, in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Operator> {
        self.operators.iter()
    }

    /// Returns the operators sorted by descending symbol length, so that multi-character symbols
    /// are tried before any symbol that is one of their prefixes. Operators of the same length
    /// keep the order they were added in.
    pub fn by_length(&self) -> Vec<&Operator> {
        let mut operators = self.operators.iter().collect::<Vec<_>>();
        operators.sort_by(|a, b| b.symbol.len().cmp(&a.symbol.len()));
        operators
    }

    /// Returns the symbols registered for the given kind of operator, in the order they were
    /// added.
    pub fn symbols(&self, kind: OpKind) -> impl Iterator<Item = &str> {
        self.operators
            .iter()
            .filter(move |op| op.kind == kind)
            .map(|op| op.symbol.as_str())
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::standard().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_symbols_first() {
        let table = OperatorTable::standard();
        let symbols = table.by_length()
            .into_iter()
            .map(|op| op.symbol.as_str())
            .collect::<Vec<_>>();
        assert_eq!(symbols, [">=", "<=", "!=", "+", "*", "=", ">", "<"]);
    }

    #[test]
    fn mirrors() {
        assert_eq!(RelationKind::Greater.mirror(), RelationKind::Less);
        assert_eq!(RelationKind::LessEqual.mirror(), RelationKind::GreaterEqual);
        assert_eq!(RelationKind::Equal.mirror(), RelationKind::Equal);
        assert_eq!(RelationKind::NotEqual.mirror(), RelationKind::NotEqual);
    }

    #[test]
    fn insert_replaces_existing_symbol() {
        let table = OperatorTable::new()
            .with("+", "addition", OpKind::Family(Family::Sum))
            .with("+", "plus", OpKind::Family(Family::Sum))
            .with("", "nothing", OpKind::Family(Family::Product));
        assert_eq!(table.iter().count(), 1);
        assert_eq!(table.get("+").map(|op| op.label.as_str()), Some("plus"));
    }

    #[test]
    fn lookup_by_kind() {
        let table = OperatorTable::standard()
            .clone()
            .with("plus", "addition", OpKind::Family(Family::Sum));
        let sums = table.symbols(OpKind::Family(Family::Sum)).collect::<Vec<_>>();
        assert_eq!(sums, ["+", "plus"]);

        let not_equal = table.symbols(OpKind::Relation(RelationKind::NotEqual)).collect::<Vec<_>>();
        assert_eq!(not_equal, ["!="]);

        assert_eq!(OperatorTable::new().symbols(OpKind::Family(Family::Sum)).count(), 0);
    }

    #[test]
    fn contains_only_symbols() {
        let table = OperatorTable::standard();
        assert!(table.contains(">="));
        assert!(table.contains("!="));
        assert!(!table.contains("-"));
        assert!(!table.contains("addition"));
    }
}
