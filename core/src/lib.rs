//! Clause composition and validation engine for `sqlclause`.
//!
//! Statements are assembled clause by clause. Every transition validates the
//! table graph it introduces, so a statement that exists is a statement that
//! renders to well-formed SQL.
//!
//! ```
//! use sqlclause_core::{Statement, Table, ToSQL, dynamic_left_join, eq};
//!
//! let users = Table::new("users");
//! let orders = Table::new("orders");
//!
//! let mut stmt = Statement::dynamic().dynamic_from(users.clone())?;
//! stmt.from_clause_mut()
//!     .expect("FROM was just attached")
//!     .add(dynamic_left_join(orders.clone()).on(eq(orders.col("user_id"), users.col("id"))))?;
//!
//! assert_eq!(
//!     stmt.to_sql(),
//!     " FROM users LEFT JOIN orders ON orders.user_id = users.id"
//! );
//! # Ok::<(), sqlclause_core::ClauseError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod prelude;
mod trace;

pub mod clause;
pub mod dialect;
pub mod error;
pub mod expr;
pub mod from;
pub mod graph;
pub mod join;
pub mod sql;
pub mod statement;
pub mod table;

pub use clause::Clause;
pub use dialect::Dialect;
pub use error::{Capability, ClauseError, Result, TableNames};
pub use expr::{BinaryOp, Column, Expr, Value, and, eq, gt, gte, lt, lte, neq, or};
pub use from::{FromClause, FromData, NoFrom};
pub use graph::{TableSet, name_set, provided_tables, required_tables, table_count};
pub use join::*;
pub use sql::{Context, ToSQL, Token, write_list};
pub use statement::{FromPolicy, Statement, from};
pub use table::{IntoTableRef, Node, Table, TableId, TableLike, TableRef};
