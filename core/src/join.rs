//! Static and dynamic joins.
//!
//! A join starts as a [`PreJoin`] (or [`PreDynamicJoin`]), which is not a
//! table expression. Supplying a condition with `on` or opting out with
//! `unconditionally` completes it.

use crate::prelude::*;
use crate::{
    Context, Expr, IntoTableRef, Node, TableId, TableLike, TableRef, TableSet, ToSQL, sql::Token,
};
use paste::paste;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum JoinType {
    #[default]
    Join,
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

/// Keyword flags of a join.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Join {
    pub natural: bool,
    pub join_type: JoinType,
    pub outer: bool,
}

impl Join {
    /// Plain `JOIN`.
    pub const fn new() -> Self {
        Self {
            natural: false,
            join_type: JoinType::Join,
            outer: false,
        }
    }

    pub const fn natural(mut self) -> Self {
        self.natural = true;
        self
    }

    pub const fn inner(mut self) -> Self {
        self.join_type = JoinType::Inner;
        self
    }

    pub const fn left(mut self) -> Self {
        self.join_type = JoinType::Left;
        self
    }

    pub const fn right(mut self) -> Self {
        self.join_type = JoinType::Right;
        self
    }

    pub const fn full(mut self) -> Self {
        self.join_type = JoinType::Full;
        self
    }

    pub const fn cross(mut self) -> Self {
        self.join_type = JoinType::Cross;
        self
    }

    /// Only rendered for LEFT, RIGHT and FULL joins.
    pub const fn outer(mut self) -> Self {
        self.outer = true;
        self
    }

    /// SQL keyword sequence for these flags.
    pub const fn keyword(&self) -> &'static str {
        match (self.natural, self.join_type, self.outer) {
            (true, JoinType::Join, _) => "NATURAL JOIN",
            (true, JoinType::Inner, _) => "NATURAL INNER JOIN",
            (true, JoinType::Left, false) => "NATURAL LEFT JOIN",
            (true, JoinType::Left, true) => "NATURAL LEFT OUTER JOIN",
            (true, JoinType::Right, false) => "NATURAL RIGHT JOIN",
            (true, JoinType::Right, true) => "NATURAL RIGHT OUTER JOIN",
            (true, JoinType::Full, false) => "NATURAL FULL JOIN",
            (true, JoinType::Full, true) => "NATURAL FULL OUTER JOIN",
            (true, JoinType::Cross, _) => "NATURAL CROSS JOIN",
            (false, JoinType::Join, _) => "JOIN",
            (false, JoinType::Inner, _) => "INNER JOIN",
            (false, JoinType::Left, false) => "LEFT JOIN",
            (false, JoinType::Left, true) => "LEFT OUTER JOIN",
            (false, JoinType::Right, false) => "RIGHT JOIN",
            (false, JoinType::Right, true) => "RIGHT OUTER JOIN",
            (false, JoinType::Full, false) => "FULL JOIN",
            (false, JoinType::Full, true) => "FULL OUTER JOIN",
            (false, JoinType::Cross, _) => "CROSS JOIN",
        }
    }
}

impl ToSQL for Join {
    fn write_sql(&self, ctx: &mut Context) {
        ctx.write_str(self.keyword());
    }
}

fn write_condition(condition: &Option<Expr>, ctx: &mut Context) {
    if let Some(condition) = condition {
        ctx.write_char(' ').write_token(Token::ON).write_char(' ');
        condition.write_sql(ctx);
    }
}

fn has_dynamic_join(side: &TableRef) -> bool {
    side.is_dynamic_join() || side.nests_dynamic_join()
}

fn condition_tables(condition: &Option<Expr>) -> TableSet {
    condition
        .as_ref()
        .map(Expr::referenced_tables)
        .unwrap_or_default()
}

/// Join of two table expressions still waiting for its condition.
#[derive(Debug, Clone)]
pub struct PreJoin {
    join: Join,
    lhs: TableRef,
    rhs: TableRef,
}

impl PreJoin {
    pub fn new(join: Join, lhs: impl IntoTableRef, rhs: impl IntoTableRef) -> Self {
        Self {
            join,
            lhs: lhs.into_table_ref(),
            rhs: rhs.into_table_ref(),
        }
    }

    /// Completes the join with an `ON` condition.
    pub fn on(self, condition: impl Into<Expr>) -> JoinExpr {
        JoinExpr {
            join: self.join,
            lhs: self.lhs,
            rhs: self.rhs,
            condition: Some(condition.into()),
        }
    }

    /// Completes the join without a condition.
    pub fn unconditionally(self) -> JoinExpr {
        JoinExpr {
            join: self.join,
            lhs: self.lhs,
            rhs: self.rhs,
            condition: None,
        }
    }
}

impl ToSQL for PreJoin {
    fn write_sql(&self, ctx: &mut Context) {
        self.lhs.write_sql(ctx);
        ctx.write_char(' ');
        self.join.write_sql(ctx);
        ctx.write_char(' ');
        self.rhs.write_sql(ctx);
    }
}

impl Node for PreJoin {}

/// A completed join; provides the tables of both sides.
#[derive(Debug, Clone)]
pub struct JoinExpr {
    join: Join,
    lhs: TableRef,
    rhs: TableRef,
    condition: Option<Expr>,
}

impl JoinExpr {
    #[inline]
    pub fn join(&self) -> Join {
        self.join
    }

    #[inline]
    pub fn condition(&self) -> Option<&Expr> {
        self.condition.as_ref()
    }
}

impl ToSQL for JoinExpr {
    fn write_sql(&self, ctx: &mut Context) {
        self.lhs.write_sql(ctx);
        ctx.write_char(' ');
        self.join.write_sql(ctx);
        ctx.write_char(' ');
        self.rhs.write_sql(ctx);
        write_condition(&self.condition, ctx);
    }
}

impl TableLike for JoinExpr {
    fn provided_tables(&self) -> TableSet {
        self.lhs.provided_tables().union(&self.rhs.provided_tables())
    }

    // Each side keeps its own requirements; an enclosing join cannot
    // resolve them, since ON only sees the tables of its own join.
    fn required_tables(&self) -> TableSet {
        let unresolved = condition_tables(&self.condition).difference(&self.provided_tables());
        self.lhs
            .required_tables()
            .union(&self.rhs.required_tables())
            .union(&unresolved)
    }

    fn listed_tables(&self) -> Vec<TableId> {
        let mut listed = self.lhs.listed_tables();
        listed.extend(self.rhs.listed_tables());
        listed
    }

    fn nests_dynamic_join(&self) -> bool {
        has_dynamic_join(&self.lhs) || has_dynamic_join(&self.rhs)
    }
}

impl Node for JoinExpr {
    fn into_table(self) -> core::result::Result<TableRef, Self> {
        Ok(TableRef::new(self))
    }
}

/// Dynamic join still waiting for its condition.
#[derive(Debug, Clone)]
pub struct PreDynamicJoin {
    join: Join,
    rhs: TableRef,
}

impl PreDynamicJoin {
    pub fn new(join: Join, rhs: impl IntoTableRef) -> Self {
        Self {
            join,
            rhs: rhs.into_table_ref(),
        }
    }

    /// Completes the join with an `ON` condition.
    pub fn on(self, condition: impl Into<Expr>) -> DynamicJoin {
        DynamicJoin {
            join: self.join,
            rhs: self.rhs,
            condition: Some(condition.into()),
        }
    }

    /// Completes the join without a condition.
    pub fn unconditionally(self) -> DynamicJoin {
        DynamicJoin {
            join: self.join,
            rhs: self.rhs,
            condition: None,
        }
    }
}

impl ToSQL for PreDynamicJoin {
    fn write_sql(&self, ctx: &mut Context) {
        self.join.write_sql(ctx);
        ctx.write_char(' ');
        self.rhs.write_sql(ctx);
    }
}

impl Node for PreDynamicJoin {}

/// Join fragment appended to a dynamic clause after creation.
///
/// Only the right-hand side is provided; whatever the condition references
/// beyond it must already be in scope where the fragment is appended.
#[derive(Debug, Clone)]
pub struct DynamicJoin {
    join: Join,
    rhs: TableRef,
    condition: Option<Expr>,
}

impl DynamicJoin {
    #[inline]
    pub fn join(&self) -> Join {
        self.join
    }

    #[inline]
    pub fn condition(&self) -> Option<&Expr> {
        self.condition.as_ref()
    }
}

impl ToSQL for DynamicJoin {
    fn write_sql(&self, ctx: &mut Context) {
        self.join.write_sql(ctx);
        ctx.write_char(' ');
        self.rhs.write_sql(ctx);
        write_condition(&self.condition, ctx);
    }
}

impl TableLike for DynamicJoin {
    fn provided_tables(&self) -> TableSet {
        self.rhs.provided_tables()
    }

    fn required_tables(&self) -> TableSet {
        let unresolved = condition_tables(&self.condition).difference(&self.provided_tables());
        self.rhs.required_tables().union(&unresolved)
    }

    fn listed_tables(&self) -> Vec<TableId> {
        self.rhs.listed_tables()
    }

    fn is_dynamic_join(&self) -> bool {
        true
    }

    fn nests_dynamic_join(&self) -> bool {
        has_dynamic_join(&self.rhs)
    }
}

impl Node for DynamicJoin {
    fn into_table(self) -> core::result::Result<TableRef, Self> {
        Ok(TableRef::new(self))
    }
}

macro_rules! join_helpers {
    ($($name:ident => $join:expr),* $(,)?) => {
        paste! {
            $(
                #[doc = "Starts a `" $name "` join of `lhs` and `rhs`."]
                pub fn [<$name _join>](lhs: impl IntoTableRef, rhs: impl IntoTableRef) -> PreJoin {
                    PreJoin::new($join, lhs, rhs)
                }

                #[doc = "Starts a dynamic `" $name "` join of `rhs`."]
                pub fn [<dynamic_ $name _join>](rhs: impl IntoTableRef) -> PreDynamicJoin {
                    PreDynamicJoin::new($join, rhs)
                }
            )*
        }
    };
}

join_helpers! {
    inner => Join::new().inner(),
    left => Join::new().left(),
    left_outer => Join::new().left().outer(),
    right => Join::new().right(),
    right_outer => Join::new().right().outer(),
    full => Join::new().full(),
    full_outer => Join::new().full().outer(),
    natural => Join::new().natural(),
    natural_inner => Join::new().natural().inner(),
    natural_left => Join::new().natural().left(),
    natural_left_outer => Join::new().natural().left().outer(),
    natural_right => Join::new().natural().right(),
    natural_right_outer => Join::new().natural().right().outer(),
    natural_full => Join::new().natural().full(),
    natural_full_outer => Join::new().natural().full().outer(),
}

/// Starts a plain `JOIN` of `lhs` and `rhs`.
pub fn join(lhs: impl IntoTableRef, rhs: impl IntoTableRef) -> PreJoin {
    PreJoin::new(Join::new(), lhs, rhs)
}

/// Starts a dynamic plain `JOIN` of `rhs`.
pub fn dynamic_join(rhs: impl IntoTableRef) -> PreDynamicJoin {
    PreDynamicJoin::new(Join::new(), rhs)
}

/// `lhs CROSS JOIN rhs`; complete without a condition.
pub fn cross_join(lhs: impl IntoTableRef, rhs: impl IntoTableRef) -> JoinExpr {
    PreJoin::new(Join::new().cross(), lhs, rhs).unconditionally()
}

/// `CROSS JOIN rhs` as a dynamic fragment.
pub fn dynamic_cross_join(rhs: impl IntoTableRef) -> DynamicJoin {
    PreDynamicJoin::new(Join::new().cross(), rhs).unconditionally()
}
