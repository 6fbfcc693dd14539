use crate::prelude::*;
use compact_str::CompactString;
use core::fmt;
use thiserror::Error;

/// What an entry point expected its argument to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// A table, an aliased table or a completed join.
    Table,
    /// A completed dynamic join.
    DynamicJoin,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Table => f.write_str("a table or join"),
            Capability::DynamicJoin => f.write_str("a dynamic join"),
        }
    }
}

/// Sorted list of table names carried by validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableNames(pub Vec<CompactString>);

impl TableNames {
    /// Builds a sorted, de-duplicated list.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        let mut names: Vec<CompactString> = names.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();
        Self(names)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }
}

impl fmt::Display for TableNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

/// A rejected clause composition.
///
/// Every variant is raised when a clause is created or extended. Rendering
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClauseError {
    /// The argument lacks the capability the entry point needs
    #[error("invalid argument in {clause}(): expected {expected}, found `{found}`")]
    InvalidArgumentCapability {
        clause: &'static str,
        expected: Capability,
        found: String,
    },

    /// Tables are referenced by a join condition but never provided
    #[error("tables referenced but not provided in {clause}(): {tables}")]
    UnresolvedTableDependency {
        clause: &'static str,
        tables: TableNames,
    },

    /// The same table is listed more than once
    #[error("duplicate table in {clause}(): {tables}")]
    DuplicateTableReference {
        clause: &'static str,
        tables: TableNames,
    },

    /// Distinct tables share a display name
    #[error("duplicate table name in {clause}(): {names}")]
    DuplicateTableName {
        clause: &'static str,
        names: TableNames,
    },

    /// A dynamic entry point was used on a static statement
    #[error("{clause}() must not be called on a static statement")]
    DynamicNotAllowed { clause: &'static str },

    /// `add()` was called on a clause created through the static entry point
    #[error("{clause}::add() must not be called on a static {clause} clause")]
    StaticClauseNotAppendable { clause: &'static str },

    /// The clause was already attached to this statement
    #[error("{clause} clause is already present in this statement")]
    ClauseAlreadyPresent { clause: &'static str },
}

/// Result type for clause composition
pub type Result<T> = core::result::Result<T, ClauseError>;
