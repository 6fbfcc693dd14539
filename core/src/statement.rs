//! Minimal statement aggregator hosting the FROM clause.

use crate::error::{ClauseError, Result};
use crate::trace::trace_rejected;
use crate::{Clause, Context, FromClause, NoFrom, Node, ToSQL};

/// FROM slot of a statement: absent until an entry point attaches it.
#[derive(Debug, Clone)]
pub enum FromPolicy {
    NoFrom(NoFrom),
    From(FromClause),
}

impl Default for FromPolicy {
    fn default() -> Self {
        FromPolicy::NoFrom(NoFrom::new())
    }
}

impl ToSQL for FromPolicy {
    fn write_sql(&self, ctx: &mut Context) {
        match self {
            FromPolicy::NoFrom(_) => {}
            FromPolicy::From(clause) => clause.data().write_sql(ctx),
        }
    }
}

/// A statement under construction.
///
/// Attaching a clause returns a new statement; the receiver is left as it
/// was. Only a dynamic-capable statement accepts the `dynamic_*` entry
/// points.
#[derive(Debug, Clone, Default)]
pub struct Statement {
    dynamic: bool,
    from: FromPolicy,
}

impl Statement {
    /// A static statement.
    pub fn new() -> Self {
        Self::default()
    }

    /// A statement whose clauses may be created with the `dynamic_*` entry
    /// points and extended afterwards.
    pub fn dynamic() -> Self {
        Self {
            dynamic: true,
            from: FromPolicy::default(),
        }
    }

    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    pub fn from(&self, table: impl Node) -> Result<Self> {
        let clause = self.no_from()?.from(table)?;
        Ok(self.with_from(clause))
    }

    pub fn dynamic_from(&self, table: impl Node) -> Result<Self> {
        let clause = self.no_from()?.dynamic_from(self.dynamic, table)?;
        Ok(self.with_from(clause))
    }

    #[inline]
    pub fn from_policy(&self) -> &FromPolicy {
        &self.from
    }

    pub fn from_clause(&self) -> Option<&FromClause> {
        match &self.from {
            FromPolicy::From(clause) => Some(clause),
            FromPolicy::NoFrom(_) => None,
        }
    }

    /// The present FROM clause, for appending dynamic fragments.
    pub fn from_clause_mut(&mut self) -> Option<&mut FromClause> {
        match &mut self.from {
            FromPolicy::From(clause) => Some(clause),
            FromPolicy::NoFrom(_) => None,
        }
    }

    fn no_from(&self) -> Result<&NoFrom> {
        match &self.from {
            FromPolicy::NoFrom(no_from) => Ok(no_from),
            FromPolicy::From(_) => Err(trace_rejected!(ClauseError::ClauseAlreadyPresent {
                clause: FromClause::KEYWORD,
            })),
        }
    }

    fn with_from(&self, clause: FromClause) -> Self {
        Self {
            dynamic: self.dynamic,
            from: FromPolicy::From(clause),
        }
    }
}

impl ToSQL for Statement {
    fn write_sql(&self, ctx: &mut Context) {
        self.from.write_sql(ctx);
    }
}

/// Builds a static statement selecting from `table`.
pub fn from(table: impl Node) -> Result<Statement> {
    Statement::new().from(table)
}
