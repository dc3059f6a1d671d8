//! SQL statement builders.
//!
//! Every builder is an owned value whose methods take `self` and return it,
//! so statements are assembled by chaining. Builders implement
//! [`StatementNode`], which renders them to text and checks that text for
//! unbalanced delimiters. Any argument documented as a [`Fragment`] accepts
//! either raw text or another statement, so statements nest freely.
//!
//! Rendering never fails. Missing clauses are left out of the text, and
//! diagnostics are advisory.
//!
//! # Example
//!
//! ```rust
//! use sqlgen_core::builder::{InnerJoin, Select, SetOperation, StatementNode};
//!
//! let admins = Select::new().select(["id"]).from(["admins"]);
//! let owners = Select::new().select(["id"]).from(["owners"]);
//! let privileged = SetOperation::union([admins, owners]);
//!
//! assert!(privileged.validate().is_empty());
//!
//! let joined = InnerJoin::new("A", "B", ["A.id = B.id"]);
//! assert!(joined.terminate(";").ends_with("ON A.id = B.id;\n"));
//! ```

mod create;
mod drop;
mod exists;
pub mod format;
mod fragment;
mod insert;
mod join;
mod select;
mod set;
mod set_op;
mod statement;

pub use create::Create;
pub use drop::DropTable;
pub use exists::Exists;
pub use fragment::Fragment;
pub use insert::Insert;
pub use join::{InnerJoin, JoinClause};
pub use select::Select;
pub use set::Set;
pub use set_op::{SetOperation, SetOperator};
pub use statement::{Statement, StatementNode};
