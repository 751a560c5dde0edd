//! Turns the token stream of a C header into a message table.
//!
//! ## Conventions
//!
//! For functions starting with `parse_`:
//! - Upon entering, `current_token` is the first token of the grammar.
//! - Upon exiting successfully, `current_token` is the first token after the grammar.
//!
//! Only the initializer of the table is really parsed. Everything else in the header is
//! skipped at the token level, so the declarations around the table can be arbitrary C.

use errmsgs_errors::{point_span, HeaderError, SourceSpan};
use errmsgs_gen::ErrorMessageRecord;

use crate::lexer::tokenizer::TokenStream;
use crate::lexer::tokens::*;

mod table;

/// Name of the array in Firebird's `msgs.h`.
pub const DEFAULT_TABLE: &str = "messages";

/// A table read from a header, sentinel removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    pub records: Vec<ErrorMessageRecord>,
    /// Entries that followed the sentinel. A C loop over the array never sees them.
    pub ignored: usize,
    /// From the table name to the closing brace.
    pub span: SourceSpan,
}

/// This is what the parser uses to iterate over the tokens. Since the `TokenStream` is
/// immutable, we keep track of the index of the next token to be returned.
pub struct TokenStreamCursor<'src> {
    stream: TokenStream<'src>,
    /// The index of the next token to be returned.
    pub index: usize,
}

impl<'src> TokenStreamCursor<'src> {
    pub fn new(stream: TokenStream<'src>) -> TokenStreamCursor<'src> {
        TokenStreamCursor { stream, index: 0 }
    }

    pub fn next_token(&mut self) -> Option<Token<'src>> {
        let token = self.stream.0.get(self.index).copied();
        self.index += 1;
        token
    }
}

pub struct Parser<'src> {
    source: &'src str,
    cursor: TokenStreamCursor<'src>,
    current_token: Option<Token<'src>>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, stream: TokenStream<'src>) -> Parser<'src> {
        let mut parser = Parser {
            source,
            cursor: TokenStreamCursor::new(stream),
            current_token: None,
        };
        parser.next();
        parser
    }

    pub fn next(&mut self) {
        self.current_token = self.cursor.next_token();
    }

    fn current_kind(&self) -> Option<TokenKind<'src>> {
        self.current_token.map(|tok| tok.kind)
    }

    /// Span of the current token, or an empty span at the end of the source.
    fn current_span(&self) -> SourceSpan {
        self.current_token
            .map_or_else(|| point_span(self.source.len()), |tok| tok.span)
    }

    fn expected(&self, ex: &'static str) -> HeaderError<'src> {
        HeaderError::ExpectedFound {
            ex,
            found: self.current_kind().map(|kind| kind.as_str().into()),
            loc: self.current_span(),
        }
    }

    /// Consume a token of `kind`, returning its span.
    fn eat(
        &mut self,
        kind: TokenKind<'src>,
        ex: &'static str,
    ) -> Result<SourceSpan, HeaderError<'src>> {
        if self.current_kind() == Some(kind) {
            let span = self.current_span();
            self.next();
            Ok(span)
        } else {
            Err(self.expected(ex))
        }
    }

    /// Main entry point for parsing. Returns the table if it could be read, along with any
    /// errors and warnings found along the way.
    pub fn parse(&mut self, table: &str) -> (Option<ParsedTable>, Vec<HeaderError<'src>>) {
        let mut errs = vec![];
        let Some(start) = self.seek_table(table) else {
            errs.push(HeaderError::TableNotFound {
                name: table.to_string().into(),
            });
            return (None, errs);
        };
        match self.parse_table_body(table, start) {
            Ok((parsed, sentinel)) => {
                if parsed.ignored > 0 {
                    errs.push(HeaderError::EntriesAfterSentinel {
                        count: parsed.ignored,
                        loc: sentinel,
                    });
                }
                (Some(parsed), errs)
            }
            Err(err) => {
                errs.push(err);
                (None, errs)
            }
        }
    }
}
