//! # sqlclause
//!
//! A SQL query builder that validates how clauses are composed before any
//! text is produced.
//!
//! Tables and joins report which tables they *provide* and which they
//! *require*. Attaching a FROM clause checks that nothing is left
//! unresolved and that no table name is used twice; a composition that
//! fails never becomes a statement.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlclause::prelude::*;
//!
//! # fn main() -> sqlclause::Result<()> {
//! let users = Table::new("users");
//! let orders = Table::new("orders");
//!
//! let stmt = from(
//!     inner_join(users.clone(), orders.clone()).on(eq(users.col("id"), orders.col("user_id"))),
//! )?;
//! assert_eq!(
//!     stmt.to_sql(),
//!     " FROM users INNER JOIN orders ON users.id = orders.user_id"
//! );
//!
//! // The same table twice is rejected.
//! assert!(from(cross_join(users.clone(), users)).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Dynamic clauses
//!
//! A statement created with [`Statement::dynamic`] accepts `dynamic_from`,
//! whose clause can be extended with dynamic joins after creation:
//!
//! ```rust
//! use sqlclause::prelude::*;
//!
//! # fn main() -> sqlclause::Result<()> {
//! let users = Table::new("users");
//! let posts = Table::new("posts");
//!
//! let mut stmt = Statement::dynamic().dynamic_from(users.clone())?;
//! if let Some(clause) = stmt.from_clause_mut() {
//!     clause.add(dynamic_left_join(posts.clone()).on(eq(posts.col("author_id"), users.col("id"))))?;
//! }
//! assert_eq!(
//!     stmt.sql_with(Dialect::PostgreSQL),
//!     r#" FROM "users" LEFT JOIN "posts" ON "posts"."author_id" = "users"."id""#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature   | Default | Purpose                               |
//! |-----------|---------|---------------------------------------|
//! | `std`     | ✅      | Standard library support              |
//! | `alloc`   |         | `no_std` builds with an allocator     |
//! | `tracing` |         | Emit composition events via `tracing` |

#![cfg_attr(not(feature = "std"), no_std)]

pub use sqlclause_core::*;

/// Everything needed to build and render statements.
pub mod prelude {
    pub use sqlclause_core::join::*;
    pub use sqlclause_core::{
        Clause, ClauseError, Column, Dialect, Expr, FromClause, Node, Statement, Table, TableLike,
        ToSQL, and, eq, from, gt, gte, lt, lte, neq, or,
    };
}
