//! The statement node contract and the closed set of statement kinds.

use super::{Create, DropTable, Exists, Fragment, InnerJoin, Insert, Select, Set, SetOperation};
use crate::error::Result;
use crate::render::{report, RenderOptions};
use crate::syntax::{self, Diagnostic};

/// Behaviour shared by every statement builder.
///
/// Implementors only provide [`to_sql`](Self::to_sql); rendering with
/// validation, strict checking and termination are derived from it.
pub trait StatementNode {
    /// Renders the statement, prefixed with `indent` indentation units.
    ///
    /// Fields that were never set are simply left out.
    fn to_sql(&self, indent: usize) -> String;

    /// Renders the statement and, when `options.validate` is set, reports
    /// delimiter diagnostics to the configured sink.
    ///
    /// The text is returned whatever the diagnostics say.
    fn render(&self, indent: usize, options: &RenderOptions) -> String {
        self.render_with_diagnostics(indent, options).0
    }

    /// Like [`render`](Self::render), also returning the diagnostics that
    /// were reported. The list is empty when validation is disabled.
    fn render_with_diagnostics(
        &self,
        indent: usize,
        options: &RenderOptions,
    ) -> (String, Vec<Diagnostic>) {
        let sql = self.to_sql(indent);
        let diagnostics = report(&sql, options);
        (sql, diagnostics)
    }

    /// Checks the statement rendered at indentation 0.
    fn validate(&self) -> Vec<Diagnostic> {
        syntax::validate(&self.to_sql(0))
    }

    /// Renders at indentation 0, failing on any diagnostic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unbalanced`](crate::Error::Unbalanced) when the text
    /// has unbalanced delimiters.
    fn checked_sql(&self) -> Result<String> {
        let sql = self.to_sql(0);
        syntax::check(&sql)?;
        Ok(sql)
    }

    /// Renders at indentation 0 followed by `delimiter` and a newline.
    fn terminate(&self, delimiter: &str) -> String {
        format!("{}{delimiter}\n", self.to_sql(0))
    }
}

/// Any statement the builder can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Statement {
    /// SELECT, or DELETE with the same clause layout.
    Select(Select),
    /// INSERT INTO.
    Insert(Insert),
    /// CREATE TABLE.
    Create(Create),
    /// Chain of INNER JOINs.
    InnerJoin(InnerJoin),
    /// Variable assignment.
    Set(Set),
    /// UNION, INTERSECT or NATURAL JOIN between operands.
    SetOperation(SetOperation),
    /// EXISTS predicate.
    Exists(Exists),
    /// DROP TABLE.
    Drop(DropTable),
}

impl StatementNode for Statement {
    fn to_sql(&self, indent: usize) -> String {
        match self {
            Self::Select(s) => s.to_sql(indent),
            Self::Insert(s) => s.to_sql(indent),
            Self::Create(s) => s.to_sql(indent),
            Self::InnerJoin(s) => s.to_sql(indent),
            Self::Set(s) => s.to_sql(indent),
            Self::SetOperation(s) => s.to_sql(indent),
            Self::Exists(s) => s.to_sql(indent),
            Self::Drop(s) => s.to_sql(indent),
        }
    }
}

macro_rules! statement_conversions {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Statement {
                fn from(node: $ty) -> Self {
                    Self::$variant(node)
                }
            }

            impl From<$ty> for Fragment {
                fn from(node: $ty) -> Self {
                    Self::Node(Box::new(Statement::$variant(node)))
                }
            }
        )*
    };
}

statement_conversions! {
    Select(Select),
    Insert(Insert),
    Create(Create),
    InnerJoin(InnerJoin),
    Set(Set),
    SetOperation(SetOperation),
    Exists(Exists),
    Drop(DropTable),
}
