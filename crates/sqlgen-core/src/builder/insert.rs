//! INSERT statement builder.

use super::format::{indentation, populate};
use super::fragment::fragments;
use super::{Fragment, StatementNode};

/// An INSERT statement.
///
/// Rows come either from [`values`](Self::values) (callable repeatedly for
/// multi-row inserts) or from a nested [`query`](Self::query).
///
/// # Example
///
/// ```rust
/// use sqlgen_core::builder::{Insert, StatementNode};
///
/// let sql = Insert::table("users")
///     .columns(["id", "name"])
///     .values(["1", "'alice'"])
///     .to_sql(0);
///
/// assert_eq!(sql, "INSERT INTO users (id, name) VALUES (1, 'alice');\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insert {
    table: String,
    #[cfg_attr(feature = "serde", serde(default))]
    columns: Vec<Fragment>,
    #[cfg_attr(feature = "serde", serde(default))]
    query: Option<Fragment>,
    #[cfg_attr(feature = "serde", serde(default))]
    values: Vec<Vec<Fragment>>,
}

impl Insert {
    /// Creates an INSERT into `table`.
    #[must_use]
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: vec![],
            query: None,
            values: vec![],
        }
    }

    /// Sets the target column list.
    #[must_use]
    pub fn columns<I, F>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.columns = fragments(columns);
        self
    }

    /// Inserts the rows produced by `query` (typically a SELECT).
    #[must_use]
    pub fn query(mut self, query: impl Into<Fragment>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Adds one row of values.
    #[must_use]
    pub fn values<I, F>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.values.push(fragments(row));
        self
    }
}

impl StatementNode for Insert {
    fn to_sql(&self, indent: usize) -> String {
        let mut out = format!("{}INSERT INTO {}", indentation(indent), self.table);

        if !self.columns.is_empty() {
            out.push_str(&format!(" ({})", populate(&self.columns)));
        }
        if let Some(query) = &self.query {
            out.push(' ');
            out.push_str(&query.to_sql());
        }
        if !self.values.is_empty() {
            let rows: Vec<String> = self
                .values
                .iter()
                .map(|row| format!("({})", populate(row)))
                .collect();
            out.push_str(" VALUES ");
            out.push_str(&rows.join(", "));
        }

        out.push_str(";\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Select;

    #[test]
    fn test_insert_values() {
        let sql = Insert::table("users").values(["1", "'bob'"]).to_sql(0);
        assert_eq!(sql, "INSERT INTO users VALUES (1, 'bob');\n");
    }

    #[test]
    fn test_insert_multiple_rows() {
        let sql = Insert::table("users")
            .columns(["id"])
            .values([1_i64])
            .values([2_i64])
            .to_sql(0);
        assert_eq!(sql, "INSERT INTO users (id) VALUES (1), (2);\n");
    }

    #[test]
    fn test_insert_from_query() {
        let source = Select::new().select(["id", "name"]).from(["staging_users"]);
        let sql = Insert::table("users")
            .columns(["id", "name"])
            .query(source)
            .to_sql(0);
        assert_eq!(
            sql,
            "INSERT INTO users (id, name) SELECT id, name\nFROM staging_users\n;\n"
        );
    }

    #[test]
    fn test_insert_indent() {
        assert_eq!(Insert::table("t").to_sql(1), "\tINSERT INTO t;\n");
    }

    #[test]
    fn test_unbalanced_value_is_reported() {
        let diagnostics = Insert::table("users").values(["'bob"]).validate();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].column, 26);
    }
}
