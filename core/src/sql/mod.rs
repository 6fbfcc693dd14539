mod context;
mod tokens;

use crate::prelude::*;
use crate::Dialect;
pub use context::*;
pub use tokens::*;

/// Renders a value into SQL text.
///
/// Implementations append to the [`Context`] and must be deterministic:
/// rendering the same value twice yields the same text.
pub trait ToSQL {
    fn write_sql(&self, ctx: &mut Context);

    /// Renders with the default (generic) dialect.
    fn to_sql(&self) -> String {
        self.sql_with(Dialect::default())
    }

    fn sql_with(&self, dialect: Dialect) -> String {
        let mut ctx = Context::new(dialect);
        self.write_sql(&mut ctx);
        ctx.finish()
    }
}

impl<T: ToSQL + ?Sized> ToSQL for &T {
    #[inline]
    fn write_sql(&self, ctx: &mut Context) {
        (**self).write_sql(ctx)
    }
}

impl<T: ToSQL + ?Sized> ToSQL for Box<T> {
    #[inline]
    fn write_sql(&self, ctx: &mut Context) {
        (**self).write_sql(ctx)
    }
}

impl<T: ToSQL + ?Sized> ToSQL for Arc<T> {
    #[inline]
    fn write_sql(&self, ctx: &mut Context) {
        (**self).write_sql(ctx)
    }
}

/// Writes `items` joined by `separator`. Writes nothing for an empty list.
pub fn write_list<I>(items: I, separator: &str, ctx: &mut Context)
where
    I: IntoIterator,
    I::Item: ToSQL,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            ctx.write_str(separator);
        }
        item.write_sql(ctx);
    }
}
