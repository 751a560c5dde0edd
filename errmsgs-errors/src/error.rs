use miette::{Diagnostic, SourceSpan};
use std::borrow::Cow;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Problems found while reading a message table out of a C header.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum HeaderError<'src> {
    // Lexing
    #[error("unexpected character {ch:?}")]
    UnexpectedChar {
        ch: char,
        #[label]
        loc: SourceSpan,
    },
    #[error("unterminated {what} literal")]
    UnterminatedLiteral {
        what: &'static str,
        #[label("literal starts here")]
        loc: SourceSpan,
    },
    #[error("unterminated block comment")]
    UnterminatedComment {
        #[label("comment starts here")]
        loc: SourceSpan,
    },
    #[error("invalid escape sequence `{esc}`")]
    #[diagnostic(help("valid escapes are \\n \\t \\r \\\\ \\\" \\' \\? \\a \\b \\f \\v, octal and \\x hex"))]
    InvalidEscape {
        esc: Cow<'src, str>,
        #[label]
        loc: SourceSpan,
    },
    #[error("string literal is not valid UTF-8")]
    InvalidUtf8 {
        #[label]
        loc: SourceSpan,
    },

    // Parsing
    #[error("expected {ex}, found {}", .found.as_deref().unwrap_or("end of input"))]
    ExpectedFound {
        ex: &'static str,
        found: Option<Cow<'src, str>>,
        #[label]
        loc: SourceSpan,
    },
    #[error("message code `{lit}` does not fit in a 64-bit integer")]
    CodeOutOfRange {
        lit: Cow<'src, str>,
        #[label]
        loc: SourceSpan,
    },
    #[error(r#"no table named "{name}" was found"#)]
    #[diagnostic(help("the table should look like `{name}[] = {{ {{code, \"text\"}}, ..., {{0, NULL}} }};`"))]
    TableNotFound { name: Cow<'src, str> },
    #[error(r#"table "{name}" is not terminated by a sentinel entry"#)]
    #[diagnostic(help("the last entry must have an empty or NULL message, e.g. `{{0, NULL}}`"))]
    MissingSentinel {
        name: Cow<'src, str>,
        #[label("table ends here")]
        loc: SourceSpan,
    },

    // warnings
    #[error("{count} entries after the sentinel will be ignored")]
    #[diagnostic(severity(warning))]
    EntriesAfterSentinel {
        count: usize,
        #[label("sentinel is here")]
        loc: SourceSpan,
    },
}
impl<'src> HeaderError<'src> {
    pub fn is_err(&self) -> bool {
        self.severity()
            .map_or(true, |s| s == miette::Severity::Error)
    }
    pub fn into_owned(self) -> HeaderError<'static> {
        use HeaderError::*;
        fn own(s: Cow<str>) -> Cow<'static, str> {
            Cow::Owned(s.into_owned())
        }
        match self {
            UnexpectedChar { ch, loc } => UnexpectedChar { ch, loc },
            UnterminatedLiteral { what, loc } => UnterminatedLiteral { what, loc },
            UnterminatedComment { loc } => UnterminatedComment { loc },
            InvalidEscape { esc, loc } => InvalidEscape { esc: own(esc), loc },
            InvalidUtf8 { loc } => InvalidUtf8 { loc },
            ExpectedFound { ex, found, loc } => ExpectedFound {
                ex,
                found: found.map(own),
                loc,
            },
            CodeOutOfRange { lit, loc } => CodeOutOfRange { lit: own(lit), loc },
            TableNotFound { name } => TableNotFound { name: own(name) },
            MissingSentinel { name, loc } => MissingSentinel {
                name: own(name),
                loc,
            },
            EntriesAfterSentinel { count, loc } => EntriesAfterSentinel { count, loc },
        }
    }
}

/// Failure while writing a generated module.
#[derive(Debug, Error, Diagnostic)]
pub enum TranscodeError {
    #[error("couldn't write {}", .path.display())]
    #[diagnostic(help("the parent directory must already exist"))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
impl TranscodeError {
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
    /// Underlying I/O error kind, for callers that want to branch on it.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::Io { source, .. } => source.kind(),
        }
    }
}

/// Marker error for when the header had diagnostics, which have already been printed.
#[derive(Debug, Clone, Copy, Error)]
#[error("{0} error(s) were found in the header")]
pub struct HeaderErrors(pub usize);
