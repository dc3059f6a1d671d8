//! EXISTS predicate.

use super::format::indentation;
use super::{Fragment, StatementNode};

/// `EXISTS (<query>)`, usable as a WHERE predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exists {
    query: Fragment,
}

impl Exists {
    /// Wraps `query` in an EXISTS predicate.
    #[must_use]
    pub fn new(query: impl Into<Fragment>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl StatementNode for Exists {
    fn to_sql(&self, indent: usize) -> String {
        format!("{}EXISTS ({})", indentation(indent), self.query.to_sql())
    }
}
