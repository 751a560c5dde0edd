use errmsgs_errors::SourceSpan;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Delimiter {
    Paren,
    Brace,
    Bracket,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum LiteralToken<'src> {
    /// Anything starting with a digit, suffixes included. Validated by the parser.
    Number(&'src str),
    /// The slice includes the double quotations.
    Str(&'src str),
    /// The slice includes the single quotes.
    Char(&'src str),
}
impl<'src> LiteralToken<'src> {
    pub fn as_str(self) -> &'src str {
        match self {
            LiteralToken::Number(s) | LiteralToken::Str(s) | LiteralToken::Char(s) => s,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TokenKind<'src> {
    Ident(&'src str),
    OpenDelimiter(Delimiter),
    CloseDelimiter(Delimiter),
    Semicolon,
    Comma,
    Eq,
    Minus,
    /// Any other operator character. The table grammar doesn't care about them.
    Punct(&'src str),
    Literal(LiteralToken<'src>),
}

impl<'src> TokenKind<'src> {
    pub fn as_str(self) -> &'src str {
        use Delimiter::*;
        use TokenKind::*;
        match self {
            Ident(id) => id,
            OpenDelimiter(Paren) => "(",
            OpenDelimiter(Bracket) => "[",
            OpenDelimiter(Brace) => "{",
            CloseDelimiter(Paren) => ")",
            CloseDelimiter(Bracket) => "]",
            CloseDelimiter(Brace) => "}",
            Semicolon => ";",
            Comma => ",",
            Eq => "=",
            Minus => "-",
            Punct(p) => p,
            Literal(lit) => lit.as_str(),
        }
    }
}

impl<'src> Display for TokenKind<'src> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    pub span: SourceSpan,
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.span == other.span
    }
}
