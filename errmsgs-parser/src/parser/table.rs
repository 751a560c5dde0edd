use std::borrow::Cow;

use errmsgs_errors::{merge_spans, HeaderError, SourceSpan};
use errmsgs_gen::ErrorMessageRecord;

use super::{ParsedTable, Parser};
use crate::lexer::tokens::*;
use crate::literal::{decode_c_string, parse_c_int};

impl<'src> Parser<'src> {
    /// Skip forward to `<name> [ ... ] = {`, leaving the cursor on the first token inside the
    /// brace. Returns the span of the name.
    pub(super) fn seek_table(&mut self, name: &str) -> Option<SourceSpan> {
        while let Some(tok) = self.current_token {
            self.next();
            if tok.kind != TokenKind::Ident(name)
                || self.current_kind() != Some(TokenKind::OpenDelimiter(Delimiter::Bracket))
            {
                continue;
            }
            // the size expression, if any
            loop {
                self.next();
                match self.current_kind() {
                    None => return None,
                    Some(TokenKind::CloseDelimiter(Delimiter::Bracket)) => break,
                    _ => {}
                }
            }
            self.next();
            if self.current_kind() != Some(TokenKind::Eq) {
                continue;
            }
            self.next();
            if self.current_kind() != Some(TokenKind::OpenDelimiter(Delimiter::Brace)) {
                continue;
            }
            self.next();
            return Some(tok.span);
        }
        None
    }

    /// Parse the entries up to and including the closing brace of the initializer.
    /// Also returns the span of the sentinel entry.
    pub(super) fn parse_table_body(
        &mut self,
        name: &str,
        start: SourceSpan,
    ) -> Result<(ParsedTable, SourceSpan), HeaderError<'src>> {
        let mut records = vec![];
        let mut sentinel = None;
        let mut ignored = 0;

        loop {
            match self.current_kind() {
                Some(TokenKind::CloseDelimiter(Delimiter::Brace)) => break,
                Some(TokenKind::OpenDelimiter(Delimiter::Brace)) => {}
                _ => return Err(self.expected("`{` or `}`")),
            }

            let (record, span) = self.parse_entry()?;
            if sentinel.is_some() {
                ignored += 1;
            } else if record.is_sentinel() {
                sentinel = Some(span);
            } else {
                records.push(record);
            }

            match self.current_kind() {
                Some(TokenKind::Comma) => self.next(),
                Some(TokenKind::CloseDelimiter(Delimiter::Brace)) => {}
                _ => return Err(self.expected("`,` or `}`")),
            }
        }

        let end = self.current_span();
        self.next();
        let Some(sentinel) = sentinel else {
            return Err(HeaderError::MissingSentinel {
                name: Cow::Owned(name.to_string()),
                loc: end,
            });
        };
        let table = ParsedTable {
            records,
            ignored,
            span: merge_spans(start, end),
        };
        Ok((table, sentinel))
    }

    /// `{ <code>, <text> }`, with an optional trailing comma inside the braces.
    fn parse_entry(&mut self) -> Result<(ErrorMessageRecord, SourceSpan), HeaderError<'src>> {
        let start = self.eat(TokenKind::OpenDelimiter(Delimiter::Brace), "`{`")?;
        let code = self.parse_code()?;
        self.eat(TokenKind::Comma, "`,`")?;
        let text = self.parse_text()?;
        if self.current_kind() == Some(TokenKind::Comma) {
            self.next();
        }
        let end = self.eat(TokenKind::CloseDelimiter(Delimiter::Brace), "`}`")?;
        Ok((ErrorMessageRecord::new(code, text), merge_spans(start, end)))
    }

    fn parse_code(&mut self) -> Result<i64, HeaderError<'src>> {
        let negative = self.current_kind() == Some(TokenKind::Minus);
        if negative {
            self.next();
        }
        match self.current_kind() {
            Some(TokenKind::Literal(LiteralToken::Number(lit))) => {
                let code = parse_c_int(lit, negative, self.current_span())?;
                self.next();
                Ok(code)
            }
            _ => Err(self.expected("message code")),
        }
    }

    /// One or more adjacent string literals, or a null pointer. The null pointer comes back
    /// as an empty string, which marks the sentinel.
    fn parse_text(&mut self) -> Result<String, HeaderError<'src>> {
        match self.current_kind() {
            Some(TokenKind::Ident("NULL"))
            | Some(TokenKind::Literal(LiteralToken::Number("0"))) => {
                self.next();
                return Ok(String::new());
            }
            Some(TokenKind::Literal(LiteralToken::Str(_))) => {}
            _ => return Err(self.expected("message text or NULL")),
        }

        let first = self.current_span();
        let mut last = first;
        let mut bytes = vec![];
        while let Some(Token {
            kind: TokenKind::Literal(LiteralToken::Str(lit)),
            span,
        }) = self.current_token
        {
            decode_c_string(lit, span.offset(), &mut bytes)?;
            last = span;
            self.next();
        }
        String::from_utf8(bytes).map_err(|_| HeaderError::InvalidUtf8 {
            loc: merge_spans(first, last),
        })
    }
}
