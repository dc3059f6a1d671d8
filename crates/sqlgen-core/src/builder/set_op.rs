//! Set operations between statements.

use super::format::indentation;
use super::fragment::fragments;
use super::{Fragment, StatementNode};

/// The operator placed between operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SetOperator {
    /// `UNION`
    Union,
    /// `INTERSECT`
    Intersect,
    /// `NATURAL JOIN`
    NaturalJoin,
}

impl SetOperator {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::NaturalJoin => "NATURAL JOIN",
        }
    }
}

/// N operands joined by one operator, each keyword set off by blank lines.
///
/// # Example
///
/// ```rust
/// use sqlgen_core::builder::{SetOperation, StatementNode};
///
/// let sql = SetOperation::union(["SELECT 1", "SELECT 2"]).to_sql(0);
/// assert_eq!(sql, "SELECT 1\n\nUNION\n\nSELECT 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetOperation {
    operator: SetOperator,
    operands: Vec<Fragment>,
}

impl SetOperation {
    /// Creates a set operation over `operands`.
    #[must_use]
    pub fn new<I, F>(operator: SetOperator, operands: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        Self {
            operator,
            operands: fragments(operands),
        }
    }

    /// UNION of `operands`.
    #[must_use]
    pub fn union<I, F>(operands: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        Self::new(SetOperator::Union, operands)
    }

    /// INTERSECT of `operands`.
    #[must_use]
    pub fn intersect<I, F>(operands: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        Self::new(SetOperator::Intersect, operands)
    }

    /// NATURAL JOIN of `operands`.
    #[must_use]
    pub fn natural_join<I, F>(operands: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        Self::new(SetOperator::NaturalJoin, operands)
    }

    /// Appends another operand.
    #[must_use]
    pub fn operand(mut self, operand: impl Into<Fragment>) -> Self {
        self.operands.push(operand.into());
        self
    }

    /// Returns the operator.
    #[must_use]
    pub const fn operator(&self) -> SetOperator {
        self.operator
    }
}

impl StatementNode for SetOperation {
    fn to_sql(&self, indent: usize) -> String {
        let separator = format!("\n\n{}\n\n", self.operator.keyword());
        let operands: Vec<_> = self.operands.iter().map(Fragment::to_sql).collect();
        format!("{}{}", indentation(indent), operands.join(separator.as_str()))
    }
}
