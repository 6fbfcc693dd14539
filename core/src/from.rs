//! The FROM clause: data, policy, validation and rendering.

use crate::error::{Capability, ClauseError, Result};
use crate::graph::{colliding_names, name_set, repeated_tables};
use crate::prelude::*;
use crate::trace::{trace_append, trace_clause, trace_rejected};
use crate::{Clause, Context, Node, TableLike, TableRef, TableSet, ToSQL, sql::Token};
use smallvec::SmallVec;

const FROM: &str = "from";
const DYNAMIC_FROM: &str = "dynamic_from";
const FROM_ADD: &str = "from::add";

/// State owned by a present FROM clause.
///
/// `table` is fixed at creation. `dynamic_tables` only grows, one validated
/// fragment at a time. The display names of `table` and every fragment are
/// pairwise distinct.
#[derive(Debug, Clone)]
pub struct FromData {
    table: TableRef,
    dynamic_tables: SmallVec<[TableRef; 4]>,
}

impl FromData {
    fn new(table: TableRef) -> Self {
        Self {
            table,
            dynamic_tables: SmallVec::new(),
        }
    }

    #[inline]
    pub fn table(&self) -> &TableRef {
        &self.table
    }

    #[inline]
    pub fn dynamic_tables(&self) -> &[TableRef] {
        &self.dynamic_tables
    }

    /// Tables in scope: the static table plus every appended fragment.
    pub fn provided_tables(&self) -> TableSet {
        self.dynamic_tables
            .iter()
            .fold(self.table.provided_tables(), |tables, fragment| {
                tables.union(&fragment.provided_tables())
            })
    }
}

impl ToSQL for FromData {
    fn write_sql(&self, ctx: &mut Context) {
        ctx.write_char(' ').write_token(Token::FROM).write_char(' ');
        self.table.write_sql(ctx);
        if !self.dynamic_tables.is_empty() {
            ctx.write_char(' ');
            crate::write_list(&self.dynamic_tables, " ", ctx);
        }
    }
}

/// A present FROM clause.
#[derive(Debug, Clone)]
pub struct FromClause {
    data: FromData,
    is_dynamic: bool,
}

impl FromClause {
    /// Whether fragments may be appended with [`add`](Self::add).
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.is_dynamic
    }

    /// Appends a dynamic join.
    ///
    /// The fragment's condition may reference any table already in scope.
    /// On error the clause is left untouched.
    pub fn add(&mut self, fragment: impl Node) -> Result<()> {
        if !self.is_dynamic {
            return Err(trace_rejected!(ClauseError::StaticClauseNotAppendable {
                clause: FROM
            }));
        }
        let fragment = dynamic_join_arg(fragment)?;
        self.check_fragment(&*fragment)
            .map_err(|err| trace_rejected!(err))?;

        self.data.dynamic_tables.push(fragment);
        trace_append!(FromClause::KEYWORD, self.data.dynamic_tables.len());
        Ok(())
    }

    fn check_fragment(&self, fragment: &dyn TableLike) -> Result<()> {
        let listed = fragment.listed_tables();
        let repeated = repeated_tables(&listed);
        if !repeated.is_empty() {
            return Err(ClauseError::DuplicateTableReference {
                clause: FROM_ADD,
                tables: repeated.to_names(),
            });
        }

        let known = self.data.provided_tables();
        let missing = fragment.required_tables().difference(&known);
        if !missing.is_empty() {
            return Err(ClauseError::UnresolvedTableDependency {
                clause: FROM_ADD,
                tables: missing.to_names(),
            });
        }

        let provided = fragment.provided_tables();
        let mut names = name_set(&known);
        let count = known.len() + provided.len();
        names.extend(provided.iter().map(|id| id.name()));
        if names.len() != count {
            return Err(ClauseError::DuplicateTableName {
                clause: FROM_ADD,
                names: colliding_names(known.iter().chain(provided.iter())),
            });
        }
        Ok(())
    }
}

impl Clause for FromClause {
    type Data = FromData;

    const KEYWORD: &'static str = "FROM";

    #[inline]
    fn data(&self) -> &FromData {
        &self.data
    }
}

/// The absent FROM clause; holds the entry points that create one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoFrom;

impl NoFrom {
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Creates a static FROM clause over `table`.
    pub fn from(&self, table: impl Node) -> Result<FromClause> {
        create(FROM, table, false)
    }

    /// Creates a FROM clause that accepts [`FromClause::add`].
    ///
    /// `dynamic_capable` is the enclosing statement's capability flag.
    pub fn dynamic_from(&self, dynamic_capable: bool, table: impl Node) -> Result<FromClause> {
        if !dynamic_capable {
            return Err(trace_rejected!(ClauseError::DynamicNotAllowed {
                clause: DYNAMIC_FROM
            }));
        }
        create(DYNAMIC_FROM, table, true)
    }
}

fn create(clause: &'static str, table: impl Node, is_dynamic: bool) -> Result<FromClause> {
    let table = table_arg(clause, table)?;
    check_table(clause, &*table).map_err(|err| trace_rejected!(err))?;

    trace_clause!(FromClause::KEYWORD, is_dynamic, table.provided_tables());
    Ok(FromClause {
        data: FromData::new(table),
        is_dynamic,
    })
}

/// Validates a table expression about to become the static FROM table.
fn check_table(clause: &'static str, table: &dyn TableLike) -> Result<()> {
    let required = table.required_tables();
    if !required.is_empty() {
        return Err(ClauseError::UnresolvedTableDependency {
            clause,
            tables: required.to_names(),
        });
    }

    let listed = table.listed_tables();
    let provided = table.provided_tables();
    if listed.len() != provided.len() {
        return Err(ClauseError::DuplicateTableReference {
            clause,
            tables: repeated_tables(&listed).to_names(),
        });
    }

    if name_set(&provided).len() != listed.len() {
        return Err(ClauseError::DuplicateTableName {
            clause,
            names: colliding_names(&provided),
        });
    }
    Ok(())
}

// Dynamic joins only render as fragments after a table, so neither one
// nor an expression containing one is accepted as the static table.
fn table_arg(clause: &'static str, arg: impl Node) -> Result<TableRef> {
    let invalid = |found: String| {
        trace_rejected!(ClauseError::InvalidArgumentCapability {
            clause,
            expected: Capability::Table,
            found,
        })
    };
    match arg.into_table() {
        Ok(table) if table.is_dynamic_join() || table.nests_dynamic_join() => {
            Err(invalid(table.to_sql()))
        }
        Ok(table) => Ok(table),
        Err(node) => Err(invalid(node.to_sql())),
    }
}

fn dynamic_join_arg(arg: impl Node) -> Result<TableRef> {
    let invalid = |found: String| {
        trace_rejected!(ClauseError::InvalidArgumentCapability {
            clause: FROM_ADD,
            expected: Capability::DynamicJoin,
            found,
        })
    };
    match arg.into_table() {
        Ok(table) if table.is_dynamic_join() && !table.nests_dynamic_join() => Ok(table),
        Ok(table) => Err(invalid(table.to_sql())),
        Err(node) => Err(invalid(node.to_sql())),
    }
}
