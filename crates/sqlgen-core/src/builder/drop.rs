//! DROP TABLE statement.

use super::format::indentation;
use super::StatementNode;

/// `DROP TABLE <table>;`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropTable {
    table: String,
}

impl DropTable {
    /// Drops `table`.
    #[must_use]
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

impl StatementNode for DropTable {
    fn to_sql(&self, indent: usize) -> String {
        format!("{}DROP TABLE {};\n", indentation(indent), self.table)
    }
}
