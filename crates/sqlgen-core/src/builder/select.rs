//! SELECT (and DELETE) statement builder.

use super::format::{indentation, populate};
use super::fragment::fragments;
use super::{Fragment, StatementNode};

/// A SELECT statement with optional grouping, ordering and alias.
///
/// Each clause renders on its own line in a fixed order, whatever order the
/// builder methods were called in. Setting [`delete`](Self::delete) adds a
/// `DELETE` line on top, so `DELETE` + `FROM` + `WHERE` gives a DELETE
/// statement.
///
/// # Example
///
/// ```rust
/// use sqlgen_core::builder::{Select, StatementNode};
///
/// let sql = Select::new()
///     .select(["id", "name"])
///     .from(["users"])
///     .where_clause(["active = 1"])
///     .to_sql(0);
///
/// assert_eq!(sql, "SELECT id, name\nFROM users\nWHERE active = 1\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Select {
    delete: bool,
    distinct: bool,
    columns: Option<Vec<Fragment>>,
    from: Option<Vec<Fragment>>,
    #[cfg_attr(feature = "serde", serde(rename = "where"))]
    where_clause: Option<Vec<Fragment>>,
    group_by: Option<Vec<Fragment>>,
    order_by: Option<Vec<Fragment>>,
    alias: Option<String>,
}

impl Select {
    /// Creates an empty SELECT builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder that will be wrapped and aliased.
    #[must_use]
    pub fn aliased(alias: impl Into<String>) -> Self {
        Self::new().alias(alias)
    }

    /// Adds a `DELETE` line before the other clauses.
    #[must_use]
    pub fn delete(mut self) -> Self {
        self.delete = true;
        self
    }

    /// Sets the selected columns.
    #[must_use]
    pub fn select<I, F>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.columns = Some(fragments(columns));
        self
    }

    /// Selects DISTINCT rows.
    #[must_use]
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Sets the FROM sources. Nested statements are rendered in place.
    #[must_use]
    pub fn from<I, F>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.from = Some(fragments(sources));
        self
    }

    /// Sets the WHERE predicates, one per line.
    #[must_use]
    pub fn where_clause<I, F>(mut self, predicates: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.where_clause = Some(fragments(predicates));
        self
    }

    /// Sets the GROUP BY expressions.
    #[must_use]
    pub fn group_by<I, F>(mut self, exprs: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.group_by = Some(fragments(exprs));
        self
    }

    /// Sets the ORDER BY expressions.
    #[must_use]
    pub fn order_by<I, F>(mut self, exprs: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.order_by = Some(fragments(exprs));
        self
    }

    /// Wraps the statement in parentheses followed by `alias`.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

fn push_line(out: &mut String, ws: &str, text: &str) {
    out.push_str(ws);
    out.push_str(text);
    out.push('\n');
}

impl StatementNode for Select {
    fn to_sql(&self, indent: usize) -> String {
        let ws = indentation(indent);
        let mut out = String::new();

        if self.delete {
            push_line(&mut out, &ws, "DELETE");
        }
        if let Some(columns) = &self.columns {
            let keyword = if self.distinct {
                "SELECT DISTINCT"
            } else {
                "SELECT"
            };
            push_line(&mut out, &ws, &format!("{keyword} {}", populate(columns)));
        }
        if let Some(from) = &self.from {
            push_line(&mut out, &ws, &format!("FROM {}", populate(from)));
        }
        if let Some(predicates) = &self.where_clause {
            let predicates: Vec<_> = predicates.iter().map(Fragment::to_sql).collect();
            push_line(&mut out, &ws, &format!("WHERE {}", predicates.join("\n")));
        }
        if let Some(group_by) = &self.group_by {
            push_line(&mut out, &ws, &format!("GROUP BY {}", populate(group_by)));
        }
        if let Some(order_by) = &self.order_by {
            push_line(&mut out, &ws, &format!("ORDER BY {}", populate(order_by)));
        }

        match &self.alias {
            Some(alias) => format!("(\n{out}\n) {alias}"),
            None => out,
        }
    }
}
