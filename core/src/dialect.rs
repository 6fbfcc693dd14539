//! SQL dialects the renderer can target.

/// Controls how identifiers are written when a statement is rendered.
///
/// Validation never depends on the dialect; it only changes the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// Bare identifiers, e.g. `FROM users`.
    #[default]
    Generic,
    /// Double-quoted identifiers, e.g. `FROM "users"`.
    SQLite,
    /// Double-quoted identifiers, e.g. `FROM "users"`.
    PostgreSQL,
    /// Backtick-quoted identifiers, e.g. ``FROM `users` ``.
    MySQL,
}

impl Dialect {
    /// The character wrapped around identifiers, if any.
    #[inline]
    pub const fn identifier_quote(&self) -> Option<char> {
        match self {
            Dialect::Generic => None,
            Dialect::SQLite | Dialect::PostgreSQL => Some('"'),
            Dialect::MySQL => Some('`'),
        }
    }
}
