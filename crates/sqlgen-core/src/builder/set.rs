//! Variable assignment.

use super::format::indentation;
use super::{Fragment, StatementNode};

/// `SET <variable> := <value>;`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Set {
    variable: String,
    value: Fragment,
}

impl Set {
    /// Assigns `value` to `variable`.
    #[must_use]
    pub fn new(variable: impl Into<String>, value: impl Into<Fragment>) -> Self {
        Self {
            variable: variable.into(),
            value: value.into(),
        }
    }
}

impl StatementNode for Set {
    fn to_sql(&self, indent: usize) -> String {
        format!(
            "{}SET {} := {};\n",
            indentation(indent),
            self.variable,
            self.value.to_sql()
        )
    }
}
