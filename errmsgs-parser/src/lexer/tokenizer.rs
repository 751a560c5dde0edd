use std::{ops::Range, rc::Rc};

use super::{
    tokens::{Delimiter, LiteralToken, Token, TokenKind},
    SourceReader,
};

use errmsgs_errors::{HeaderError, SourceSpan};
use unicode_ident::{is_xid_continue, is_xid_start};

pub fn is_ident_start(c: char) -> bool {
    is_xid_start(c) || c == '_'
}

pub struct TokenStream<'src>(pub Rc<[Token<'src>]>, pub &'src str);

impl<'src> SourceReader<'src> {
    /// Split C source into tokens. Comments and preprocessor lines are dropped; characters
    /// that can't start a token are reported and skipped so one stray byte doesn't hide the
    /// rest of the file.
    pub fn tokenize(&mut self) -> (TokenStream<'src>, Vec<HeaderError<'src>>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        while let Some(c) = self.peek() {
            let start = self.index;
            let kind = match c {
                c if c.is_whitespace() => {
                    self.next_char();
                    continue;
                }

                '/' => {
                    self.next_char();
                    match self.peek() {
                        Some('*') => {
                            if let Err(err) = self.eat_block_comment(start) {
                                errors.push(err);
                            }
                            continue;
                        }
                        Some('/') => {
                            self.eat_while(|c| c != '\n');
                            continue;
                        }
                        _ => TokenKind::Punct(self.slice_from(start)),
                    }
                }

                '#' => {
                    self.eat_directive();
                    continue;
                }

                c if is_ident_start(c) => {
                    self.eat_while(is_xid_continue);
                    TokenKind::Ident(self.slice_from(start))
                }

                // Suffixes and malformed digits are kept in the token and left to the parser.
                c if c.is_ascii_digit() => {
                    self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
                    TokenKind::Literal(LiteralToken::Number(self.slice_from(start)))
                }

                '"' => {
                    let Some(Range { start, end }) = self.eat_quoted('"', "string", &mut errors)
                    else {
                        continue;
                    };
                    TokenKind::Literal(LiteralToken::Str(&self.source[start..end]))
                }
                '\'' => {
                    let Some(Range { start, end }) =
                        self.eat_quoted('\'', "character", &mut errors)
                    else {
                        continue;
                    };
                    TokenKind::Literal(LiteralToken::Char(&self.source[start..end]))
                }

                // Delimiters.
                '(' | ')' | '{' | '}' | '[' | ']' => {
                    self.next_char();
                    let delim = match c {
                        '(' | ')' => Delimiter::Paren,
                        '{' | '}' => Delimiter::Brace,
                        _ => Delimiter::Bracket,
                    };
                    if matches!(c, '(' | '{' | '[') {
                        TokenKind::OpenDelimiter(delim)
                    } else {
                        TokenKind::CloseDelimiter(delim)
                    }
                }

                ';' => {
                    self.next_char();
                    TokenKind::Semicolon
                }
                ',' => {
                    self.next_char();
                    TokenKind::Comma
                }
                '=' => {
                    self.next_char();
                    TokenKind::Eq
                }
                '-' => {
                    self.next_char();
                    TokenKind::Minus
                }
                c if c.is_ascii_punctuation() => {
                    self.next_char();
                    TokenKind::Punct(self.slice_backward(1))
                }

                _ => {
                    self.next_char();
                    errors.push(HeaderError::UnexpectedChar {
                        ch: c,
                        loc: self.source_span_from(start),
                    });
                    continue;
                }
            };
            tokens.push(Token {
                kind,
                span: self.source_span_from(start),
            });
        }

        (TokenStream(tokens.into(), self.source), errors)
    }

    /// The reader should be on the `*` of the opening `/*`.
    fn eat_block_comment(&mut self, start: usize) -> Result<(), HeaderError<'src>> {
        self.next_char();
        loop {
            match self.next_char() {
                Some('*') if self.peek() == Some('/') => {
                    self.next_char();
                    return Ok(());
                }
                Some(_) => {}
                None => {
                    return Err(HeaderError::UnterminatedComment {
                        loc: SourceSpan::from((start, 2)),
                    })
                }
            }
        }
    }

    /// Skip a preprocessor line, following backslash continuations.
    fn eat_directive(&mut self) {
        while let Some(c) = self.next_char() {
            match c {
                '\\' => {
                    if self.peek() == Some('\r') {
                        self.next_char();
                    }
                    if self.peek() == Some('\n') {
                        self.next_char();
                    }
                }
                '\n' => break,
                _ => {}
            }
        }
    }

    /// Eat a quoted literal, returning its range with the quotes. Escapes are skipped over
    /// here and decoded later. A raw newline or end of input ends the literal with an error.
    fn eat_quoted(
        &mut self,
        quote: char,
        what: &'static str,
        errors: &mut Vec<HeaderError<'src>>,
    ) -> Option<Range<usize>> {
        let span_start = self.index;
        self.next_char();

        loop {
            match self.next_char() {
                Some('\\') => {
                    self.next_char();
                }
                Some(c) if c == quote => return Some(span_start..self.index),
                Some('\n') | None => {
                    errors.push(HeaderError::UnterminatedLiteral {
                        what,
                        loc: SourceSpan::from((span_start, 1)),
                    });
                    return None;
                }
                Some(_) => {}
            }
        }
    }
}
