use crate::prelude::*;
use crate::{Dialect, sql::Token};
use core::fmt::Write;

/// Render buffer handed to every [`ToSQL`](crate::ToSQL) implementation.
///
/// Writes are infallible; the buffer only grows.
#[derive(Debug, Clone, Default)]
pub struct Context {
    buf: String,
    dialect: Dialect,
}

impl Context {
    #[inline]
    pub fn new(dialect: Dialect) -> Self {
        Self {
            buf: String::with_capacity(64),
            dialect,
        }
    }

    #[inline]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    #[inline]
    pub fn write_str(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self
    }

    #[inline]
    pub fn write_char(&mut self, c: char) -> &mut Self {
        self.buf.push(c);
        self
    }

    #[inline]
    pub fn write_token(&mut self, token: Token) -> &mut Self {
        self.write_str(token.as_str())
    }

    /// Writes an identifier, quoted according to the dialect.
    ///
    /// Quote characters inside the name are doubled.
    pub fn write_ident(&mut self, name: &str) -> &mut Self {
        match self.dialect.identifier_quote() {
            None => self.write_str(name),
            Some(quote) => {
                self.buf.push(quote);
                for c in name.chars() {
                    if c == quote {
                        self.buf.push(quote);
                    }
                    self.buf.push(c);
                }
                self.buf.push(quote);
                self
            }
        }
    }

    /// Writes a single-quoted string literal.
    pub fn write_text_literal(&mut self, text: &str) -> &mut Self {
        self.buf.push('\'');
        for c in text.chars() {
            if c == '\'' {
                self.buf.push('\'');
            }
            self.buf.push(c);
        }
        self.buf.push('\'');
        self
    }

    pub fn write_integer(&mut self, value: i64) -> &mut Self {
        self.buf.push_str(&value.to_string());
        self
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[inline]
    pub fn finish(self) -> String {
        self.buf
    }
}

impl Write for Context {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}
