//! Values that are either raw SQL text or a nested statement.

use std::borrow::Cow;

use super::{Statement, StatementNode};

/// A piece of SQL accepted anywhere a builder takes "text or a statement".
///
/// Nested statements are rendered at indentation 0 and without validation;
/// the enclosing statement validates the combined text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Fragment {
    /// Raw SQL text, used verbatim.
    Text(String),
    /// A nested statement.
    Node(Box<Statement>),
}

impl Fragment {
    /// Returns the SQL text of this fragment.
    #[must_use]
    pub fn to_sql(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_str()),
            Self::Node(node) => Cow::Owned(node.to_sql(0)),
        }
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Self::Text(String::from(text))
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Fragment {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<i64> for Fragment {
    fn from(n: i64) -> Self {
        Self::Text(n.to_string())
    }
}

impl From<f64> for Fragment {
    fn from(f: f64) -> Self {
        Self::Text(f.to_string())
    }
}

impl From<Statement> for Fragment {
    fn from(statement: Statement) -> Self {
        Self::Node(Box::new(statement))
    }
}

/// Collects anything convertible into fragments.
pub(crate) fn fragments<I, F>(items: I) -> Vec<Fragment>
where
    I: IntoIterator<Item = F>,
    F: Into<Fragment>,
{
    items.into_iter().map(Into::into).collect()
}
