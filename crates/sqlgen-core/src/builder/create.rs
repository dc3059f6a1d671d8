//! CREATE TABLE statement builder.

use super::format::{indentation, populate};
use super::{Fragment, StatementNode};

/// Expressions longer than this start on their own line.
const EXPRESSION_WRAP_WIDTH: usize = 40;

/// A CREATE [TEMPORARY] TABLE statement.
///
/// Column definitions are free-form `name TYPE ...` strings. A trailing
/// expression (usually `AS SELECT ...` or a nested statement) may follow
/// the table options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Create {
    table: String,
    #[cfg_attr(feature = "serde", serde(default))]
    temporary: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    columns: Vec<Fragment>,
    #[cfg_attr(feature = "serde", serde(default))]
    options: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    expression: Option<Fragment>,
}

impl Create {
    /// Creates a CREATE TABLE for `table`.
    #[must_use]
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            temporary: false,
            columns: vec![],
            options: None,
            expression: None,
        }
    }

    /// Makes the table TEMPORARY.
    #[must_use]
    pub fn temporary(mut self) -> Self {
        self.temporary = true;
        self
    }

    /// Appends one column definition.
    #[must_use]
    pub fn column(mut self, definition: impl Into<Fragment>) -> Self {
        self.columns.push(definition.into());
        self
    }

    /// Appends several column definitions.
    #[must_use]
    pub fn columns<I, F>(mut self, definitions: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.columns.extend(definitions.into_iter().map(Into::into));
        self
    }

    /// Sets table options such as `ENGINE=MEMORY`.
    #[must_use]
    pub fn options(mut self, options: impl Into<String>) -> Self {
        self.options = Some(options.into());
        self
    }

    /// Sets the trailing expression.
    #[must_use]
    pub fn expression(mut self, expression: impl Into<Fragment>) -> Self {
        self.expression = Some(expression.into());
        self
    }
}

impl StatementNode for Create {
    fn to_sql(&self, indent: usize) -> String {
        let mut out = indentation(indent);
        out.push_str("CREATE ");
        if self.temporary {
            out.push_str("TEMPORARY ");
        }
        out.push_str("TABLE ");
        out.push_str(&self.table);

        if !self.columns.is_empty() {
            out.push_str(&format!(" ({})", populate(&self.columns)));
        }
        if let Some(options) = &self.options {
            out.push(' ');
            out.push_str(options);
        }
        if let Some(expression) = &self.expression {
            let text = expression.to_sql();
            if text.chars().count() > EXPRESSION_WRAP_WIDTH {
                out.push('\n');
            }
            out.push(' ');
            out.push_str(&text);
        }

        out.push_str(";\n");
        out
    }
}
