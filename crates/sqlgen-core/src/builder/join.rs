//! INNER JOIN composition.

use super::format::indentation;
use super::fragment::fragments;
use super::{Fragment, StatementNode};

/// One `INNER JOIN <right> ON <conditions>` step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JoinClause {
    right: Fragment,
    #[cfg_attr(feature = "serde", serde(default))]
    on: Vec<Fragment>,
}

/// A left operand followed by one or more inner joins.
///
/// Operands may be table names or nested statements. Conditions are joined
/// with single spaces after `ON`.
///
/// # Example
///
/// ```rust
/// use sqlgen_core::builder::{InnerJoin, StatementNode};
///
/// let sql = InnerJoin::new("A", "B", ["A.id = B.id"]).to_sql(0);
/// assert_eq!(sql, "A\n\nINNER JOIN\nB\nON A.id = B.id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InnerJoin {
    left: Fragment,
    joins: Vec<JoinClause>,
}

impl InnerJoin {
    /// Joins `left` with `right` on `on`.
    #[must_use]
    pub fn new<I, F>(left: impl Into<Fragment>, right: impl Into<Fragment>, on: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        Self {
            left: left.into(),
            joins: vec![],
        }
        .join(right, on)
    }

    /// Chains another inner join onto the result so far.
    #[must_use]
    pub fn join<I, F>(mut self, right: impl Into<Fragment>, on: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.joins.push(JoinClause {
            right: right.into(),
            on: fragments(on),
        });
        self
    }
}

impl StatementNode for InnerJoin {
    fn to_sql(&self, indent: usize) -> String {
        let mut out = indentation(indent);
        out.push_str(&self.left.to_sql());
        out.push('\n');

        for (i, join) in self.joins.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str("\nINNER JOIN\n");
            out.push_str(&join.right.to_sql());
            out.push_str("\nON");
            for condition in &join.on {
                out.push(' ');
                out.push_str(&condition.to_sql());
            }
        }

        out
    }
}
