use errmsgs_errors::{HeaderError, SourceSpan};

use crate::lexer::tokens::*;

use super::*;

fn kinds<'src>(source: &'src str) -> Vec<TokenKind<'src>> {
    let (tokens, errors) = SourceReader::new(source).tokenize();
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    tokens.0.iter().map(|tok| tok.kind).collect()
}

#[test]
fn test_entry() {
    let entry = r#"{335544321, "arithmetic exception"},"#;

    let mut string_reader = SourceReader::new(entry);

    let (tokens, errors) = string_reader.tokenize();

    assert!(errors.is_empty());
    assert_eq!(
        tokens.0.as_ref(),
        &vec![
            Token {
                kind: TokenKind::OpenDelimiter(Delimiter::Brace),
                span: SourceSpan::from((0, 1)),
            },
            Token {
                kind: TokenKind::Literal(LiteralToken::Number("335544321")),
                span: SourceSpan::from((1, 9)),
            },
            Token {
                kind: TokenKind::Comma,
                span: SourceSpan::from((10, 1)),
            },
            Token {
                kind: TokenKind::Literal(LiteralToken::Str("\"arithmetic exception\"")),
                span: SourceSpan::from((12, 22)),
            },
            Token {
                kind: TokenKind::CloseDelimiter(Delimiter::Brace),
                span: SourceSpan::from((34, 1)),
            },
            Token {
                kind: TokenKind::Comma,
                span: SourceSpan::from((35, 1)),
            },
        ]
    );
}

#[test]
fn test_declaration() {
    let decl = "static const struct {\n\tSLONG code_number;\n\tconst SCHAR *code_text;\n} messages[] = {";
    assert_eq!(
        kinds(decl),
        vec![
            TokenKind::Ident("static"),
            TokenKind::Ident("const"),
            TokenKind::Ident("struct"),
            TokenKind::OpenDelimiter(Delimiter::Brace),
            TokenKind::Ident("SLONG"),
            TokenKind::Ident("code_number"),
            TokenKind::Semicolon,
            TokenKind::Ident("const"),
            TokenKind::Ident("SCHAR"),
            TokenKind::Punct("*"),
            TokenKind::Ident("code_text"),
            TokenKind::Semicolon,
            TokenKind::CloseDelimiter(Delimiter::Brace),
            TokenKind::Ident("messages"),
            TokenKind::OpenDelimiter(Delimiter::Bracket),
            TokenKind::CloseDelimiter(Delimiter::Bracket),
            TokenKind::Eq,
            TokenKind::OpenDelimiter(Delimiter::Brace),
        ]
    );
}

#[test]
fn test_comments_and_directives() {
    let source = r#"/* block
 * comment */
#define SLONG long \
    int
#include "msgs.h"
// line comment
{-1, "x"} /* trailing */ // more"#;
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::OpenDelimiter(Delimiter::Brace),
            TokenKind::Minus,
            TokenKind::Literal(LiteralToken::Number("1")),
            TokenKind::Comma,
            TokenKind::Literal(LiteralToken::Str("\"x\"")),
            TokenKind::CloseDelimiter(Delimiter::Brace),
        ]
    );
}

#[test]
fn test_literals() {
    assert_eq!(
        kinds(r#"0x1FUL 'a' '\'' "say \"hi\"" "a\\" / x"#),
        vec![
            TokenKind::Literal(LiteralToken::Number("0x1FUL")),
            TokenKind::Literal(LiteralToken::Char("'a'")),
            TokenKind::Literal(LiteralToken::Char(r"'\''")),
            TokenKind::Literal(LiteralToken::Str(r#""say \"hi\"""#)),
            TokenKind::Literal(LiteralToken::Str(r#""a\\""#)),
            TokenKind::Punct("/"),
            TokenKind::Ident("x"),
        ]
    );
}

#[test]
fn test_unterminated() {
    let (tokens, errors) = SourceReader::new("{1, \"open\n}").tokenize();
    assert_eq!(
        errors,
        vec![HeaderError::UnterminatedLiteral {
            what: "string",
            loc: SourceSpan::from((4, 1)),
        }]
    );
    // lexing picks up again on the next line
    assert_eq!(
        tokens.0.last().map(|tok| tok.kind),
        Some(TokenKind::CloseDelimiter(Delimiter::Brace))
    );

    let (_, errors) = SourceReader::new("x /* never closed").tokenize();
    assert_eq!(
        errors,
        vec![HeaderError::UnterminatedComment {
            loc: SourceSpan::from((2, 2)),
        }]
    );
}

#[test]
fn test_unexpected_char() {
    let (tokens, errors) = SourceReader::new("a \u{a7} b").tokenize();
    assert_eq!(
        errors,
        vec![HeaderError::UnexpectedChar {
            ch: '\u{a7}',
            loc: SourceSpan::from((2, 2)),
        }]
    );
    assert_eq!(tokens.0.len(), 2);
}
