//! Column references and the conditions used in join `ON` clauses.
//!
//! Expressions only matter to clause validation through the tables they
//! reference: a join condition naming a table the join does not provide
//! leaves that table *required*.

use crate::prelude::*;
use crate::{Context, Node, TableId, TableSet, ToSQL, sql::Token};
use compact_str::CompactString;

/// A column qualified by the display name of its table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    table: TableId,
    name: CompactString,
}

impl Column {
    pub fn new(table: TableId, name: impl Into<CompactString>) -> Self {
        Self {
            table,
            name: name.into(),
        }
    }

    #[inline]
    pub fn table(&self) -> &TableId {
        &self.table
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ToSQL for Column {
    fn write_sql(&self, ctx: &mut Context) {
        ctx.write_ident(self.table.name());
        ctx.write_token(Token::DOT);
        ctx.write_ident(&self.name);
    }
}

impl Node for Column {}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Integer(i64),
    Text(CompactString),
}

impl ToSQL for Value {
    fn write_sql(&self, ctx: &mut Context) {
        match self {
            Value::Null => {
                ctx.write_str("NULL");
            }
            Value::Integer(value) => {
                ctx.write_integer(*value);
            }
            Value::Text(text) => {
                ctx.write_text_literal(text);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

impl BinaryOp {
    const fn token(&self) -> Token {
        match self {
            BinaryOp::Eq => Token::EQ,
            BinaryOp::NotEq => Token::NE,
            BinaryOp::Lt => Token::LT,
            BinaryOp::LtEq => Token::LE,
            BinaryOp::Gt => Token::GT,
            BinaryOp::GtEq => Token::GE,
            BinaryOp::And => Token::AND,
            BinaryOp::Or => Token::OR,
        }
    }

    // Higher binds tighter.
    const fn precedence(&self) -> u8 {
        match self {
            BinaryOp::Or => 1,
            BinaryOp::And => 2,
            _ => 3,
        }
    }

    // Comparisons do not chain: `a = b = c` is not `a = (b = c)`.
    const fn is_associative(&self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }
}

/// Condition or operand of a condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Column(Column),
    Value(Value),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinaryOp, lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
    }

    /// Tables whose columns appear anywhere in this expression.
    pub fn referenced_tables(&self) -> TableSet {
        let mut tables = TableSet::new();
        self.collect_tables(&mut tables);
        tables
    }

    fn collect_tables(&self, tables: &mut TableSet) {
        match self {
            Expr::Column(column) => {
                tables.insert(column.table().clone());
            }
            Expr::Value(_) => {}
            Expr::Binary { lhs, rhs, .. } => {
                lhs.collect_tables(tables);
                rhs.collect_tables(tables);
            }
        }
    }

    fn write_operand(&self, parent: BinaryOp, ctx: &mut Context) {
        let needs_parens = match self {
            Expr::Binary { op, .. } => {
                op.precedence() < parent.precedence()
                    || (op.precedence() == parent.precedence() && !parent.is_associative())
            }
            _ => false,
        };
        if needs_parens {
            ctx.write_token(Token::LPAREN);
            self.write_sql(ctx);
            ctx.write_token(Token::RPAREN);
        } else {
            self.write_sql(ctx);
        }
    }
}

impl ToSQL for Expr {
    fn write_sql(&self, ctx: &mut Context) {
        match self {
            Expr::Column(column) => column.write_sql(ctx),
            Expr::Value(value) => value.write_sql(ctx),
            Expr::Binary { op, lhs, rhs } => {
                lhs.write_operand(*op, ctx);
                ctx.write_char(' ').write_token(op.token()).write_char(' ');
                rhs.write_operand(*op, ctx);
            }
        }
    }
}

impl Node for Expr {}

impl From<Column> for Expr {
    fn from(column: Column) -> Self {
        Expr::Column(column)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Value(value)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Value(Value::Integer(value))
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Value(Value::Integer(value.into()))
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::Value(Value::Text(value.into()))
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Expr::Value(Value::Text(value.into()))
    }
}

macro_rules! binary_fns {
    ($($(#[$meta:meta])* $name:ident => $op:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
                Expr::binary(BinaryOp::$op, lhs, rhs)
            }
        )*
    };
}

binary_fns! {
    /// `lhs = rhs`
    eq => Eq,
    /// `lhs <> rhs`
    neq => NotEq,
    /// `lhs < rhs`
    lt => Lt,
    /// `lhs <= rhs`
    lte => LtEq,
    /// `lhs > rhs`
    gt => Gt,
    /// `lhs >= rhs`
    gte => GtEq,
    /// `lhs AND rhs`
    and => And,
    /// `lhs OR rhs`
    or => Or,
}
