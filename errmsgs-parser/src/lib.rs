//! Reads a static `{code, "text"}` message table out of a C header such as Firebird's `msgs.h`.

use errmsgs_errors::HeaderError;

pub mod lexer;
pub mod literal;
pub mod parser;

pub use lexer::SourceReader;
pub use parser::{ParsedTable, Parser, DEFAULT_TABLE};


/// Tokenize and parse `source`, looking for the array named `table`.
///
/// Errors from both stages are returned together; warnings are mixed in, use
/// [`HeaderError::is_err`] to tell them apart. A table is only returned if its initializer
/// could be read all the way to the closing brace.
pub fn parse_header<'src>(
    source: &'src str,
    table: &str,
) -> (Option<ParsedTable>, Vec<HeaderError<'src>>) {
    let (stream, mut errs) = SourceReader::new(source).tokenize();
    let (parsed, parse_errs) = Parser::new(source, stream).parse(table);
    errs.extend(parse_errs);
    (parsed, errs)
}
