/// SQL keywords and operators emitted by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    FROM,
    ON,
    AS,
    AND,
    OR,
    EQ,
    NE,
    LT,
    LE,
    GT,
    GE,
    DOT,
    LPAREN,
    RPAREN,
}

impl Token {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Token::FROM => "FROM",
            Token::ON => "ON",
            Token::AS => "AS",
            Token::AND => "AND",
            Token::OR => "OR",
            Token::EQ => "=",
            Token::NE => "<>",
            Token::LT => "<",
            Token::LE => "<=",
            Token::GT => ">",
            Token::GE => ">=",
            Token::DOT => ".",
            Token::LPAREN => "(",
            Token::RPAREN => ")",
        }
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
