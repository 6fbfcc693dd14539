//! Tables and the capability traits every table expression implements.

use crate::prelude::*;
use crate::{Column, Context, TableSet, ToSQL, sql::Token};
use compact_str::CompactString;
use core::fmt;
use core::ops::Deref;

/// Structural identity of a table: its base name plus an optional alias.
///
/// Two identities are equal only when both parts are equal. The display
/// name used for column resolution is the alias when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId {
    base: CompactString,
    alias: Option<CompactString>,
}

impl TableId {
    pub fn new(base: impl Into<CompactString>) -> Self {
        Self {
            base: base.into(),
            alias: None,
        }
    }

    pub fn aliased(base: impl Into<CompactString>, alias: impl Into<CompactString>) -> Self {
        Self {
            base: base.into(),
            alias: Some(alias.into()),
        }
    }

    #[inline]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[inline]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Name other parts of the statement refer to this table by.
    #[inline]
    pub fn name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.base)
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} AS {}", self.base, alias),
            None => f.write_str(&self.base),
        }
    }
}

/// Capability shared by tables, aliased tables and joins.
///
/// Clause entry points only accept values exposing this capability; the
/// graph methods are what clause validation runs on.
pub trait TableLike: ToSQL + fmt::Debug + Send + Sync {
    /// Tables this expression introduces.
    fn provided_tables(&self) -> TableSet;

    /// Tables this expression references without introducing them.
    fn required_tables(&self) -> TableSet {
        TableSet::new()
    }

    /// Every table listed in this expression, in order, repeats included.
    fn listed_tables(&self) -> Vec<TableId>;

    /// Whether this expression may be appended to a dynamic clause.
    fn is_dynamic_join(&self) -> bool {
        false
    }

    /// Whether a dynamic join appears anywhere below the top level.
    ///
    /// Dynamic joins render without a left-hand side, so one nested inside
    /// another expression never produces valid SQL.
    fn nests_dynamic_join(&self) -> bool {
        false
    }
}

/// Shared handle to an immutable table expression.
#[derive(Clone)]
pub struct TableRef(Arc<dyn TableLike>);

impl TableRef {
    pub fn new<T: TableLike + 'static>(table: T) -> Self {
        Self(Arc::new(table))
    }
}

impl Deref for TableRef {
    type Target = dyn TableLike;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl ToSQL for TableRef {
    #[inline]
    fn write_sql(&self, ctx: &mut Context) {
        self.0.write_sql(ctx)
    }
}

/// Conversion used by join builders, which only take table expressions.
pub trait IntoTableRef {
    fn into_table_ref(self) -> TableRef;
}

impl<T: TableLike + 'static> IntoTableRef for T {
    #[inline]
    fn into_table_ref(self) -> TableRef {
        TableRef::new(self)
    }
}

impl IntoTableRef for TableRef {
    #[inline]
    fn into_table_ref(self) -> TableRef {
        self
    }
}

/// Any value that can be handed to a clause entry point.
///
/// Columns, conditions and unfinished joins are nodes too; they are
/// rejected at runtime because they do not convert into a table.
pub trait Node: ToSQL + fmt::Debug {
    /// Converts into a table expression, or hands `self` back when this
    /// node is not table-like.
    fn into_table(self) -> core::result::Result<TableRef, Self>
    where
        Self: Sized,
    {
        Err(self)
    }
}

impl Node for TableRef {
    fn into_table(self) -> core::result::Result<TableRef, Self> {
        Ok(self)
    }
}

/// A database table, optionally aliased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    id: TableId,
}

impl Table {
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            id: TableId::new(name),
        }
    }

    /// Same base table under another name. Aliasing an alias replaces it.
    pub fn alias(&self, alias: impl Into<CompactString>) -> Self {
        Self {
            id: TableId::aliased(self.id.base.clone(), alias),
        }
    }

    #[inline]
    pub fn id(&self) -> &TableId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.id.name()
    }

    /// Column of this table, qualified by its display name.
    pub fn col(&self, name: impl Into<CompactString>) -> Column {
        Column::new(self.id.clone(), name)
    }
}

impl ToSQL for Table {
    fn write_sql(&self, ctx: &mut Context) {
        ctx.write_ident(self.id.base());
        if let Some(alias) = self.id.alias() {
            ctx.write_char(' ').write_token(Token::AS).write_char(' ');
            ctx.write_ident(alias);
        }
    }
}

impl TableLike for Table {
    fn provided_tables(&self) -> TableSet {
        TableSet::single(self.id.clone())
    }

    fn listed_tables(&self) -> Vec<TableId> {
        vec![self.id.clone()]
    }
}

impl Node for Table {
    fn into_table(self) -> core::result::Result<TableRef, Self> {
        Ok(TableRef::new(self))
    }
}
