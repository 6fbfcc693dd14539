//! Set utilities over the table graph of a table expression.
//!
//! A table expression *provides* the tables it introduces and *requires* the
//! tables its join conditions reference without introducing them. A FROM
//! clause is well formed once nothing is required and every provided table
//! has its own display name.

use crate::prelude::*;
use crate::{TableId, TableLike, TableNames};
use core::fmt;
use hashbrown::HashSet;

/// A set of table identities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSet(HashSet<TableId>);

impl TableSet {
    #[inline]
    pub fn new() -> Self {
        Self(HashSet::new())
    }

    pub fn single(id: TableId) -> Self {
        let mut set = Self::new();
        set.insert(id);
        set
    }

    /// Returns `false` if the table was already present.
    #[inline]
    pub fn insert(&mut self, id: TableId) -> bool {
        self.0.insert(id)
    }

    #[inline]
    pub fn contains(&self, id: &TableId) -> bool {
        self.0.contains(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TableId> {
        self.0.iter()
    }

    pub fn union(mut self, other: &TableSet) -> TableSet {
        self.extend(other.iter().cloned());
        self
    }

    pub fn difference(&self, other: &TableSet) -> TableSet {
        self.0.difference(&other.0).cloned().collect()
    }

    pub fn is_subset(&self, other: &TableSet) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Sorted identities, for stable messages.
    pub fn sorted(&self) -> Vec<&TableId> {
        let mut ids: Vec<&TableId> = self.0.iter().collect();
        ids.sort();
        ids
    }

    /// Sorted `base AS alias` renderings of the contained identities.
    pub fn to_names(&self) -> TableNames {
        TableNames::new(self.0.iter().map(|id| id.to_string()))
    }
}

impl Extend<TableId> for TableSet {
    fn extend<T: IntoIterator<Item = TableId>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

impl FromIterator<TableId> for TableSet {
    fn from_iter<T: IntoIterator<Item = TableId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'s> IntoIterator for &'s TableSet {
    type Item = &'s TableId;
    type IntoIter = hashbrown::hash_set::Iter<'s, TableId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_names(), f)
    }
}

/// Tables introduced by `expr`.
#[inline]
pub fn provided_tables(expr: &dyn TableLike) -> TableSet {
    expr.provided_tables()
}

/// Tables referenced by `expr` but not introduced by it.
#[inline]
pub fn required_tables(expr: &dyn TableLike) -> TableSet {
    expr.required_tables()
}

/// Number of tables listed in `expr`, repeats included.
#[inline]
pub fn table_count(expr: &dyn TableLike) -> usize {
    expr.listed_tables().len()
}

/// Display names of `tables`.
///
/// Two identities can differ and still collide here, e.g. two different
/// base tables aliased to the same name.
pub fn name_set(tables: &TableSet) -> HashSet<&str> {
    tables.iter().map(TableId::name).collect()
}

/// Identities listed more than once.
pub(crate) fn repeated_tables(listed: &[TableId]) -> TableSet {
    let mut seen = HashSet::with_capacity(listed.len());
    listed
        .iter()
        .filter(|id| !seen.insert(*id))
        .cloned()
        .collect()
}

/// Display names shared by more than one identity in `tables`.
pub(crate) fn colliding_names<'t, I>(tables: I) -> TableNames
where
    I: IntoIterator<Item = &'t TableId>,
{
    let mut seen = HashSet::new();
    TableNames::new(
        tables
            .into_iter()
            .map(TableId::name)
            .filter(|name| !seen.insert(*name)),
    )
}
