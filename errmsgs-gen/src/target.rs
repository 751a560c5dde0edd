//! Output languages.
//!
//! A [`Target`] knows how to spell the pieces of the generated module: comments, the function
//! wrapping the table, one table entry, and string literals. Everything else (banner text,
//! iteration order, sentinel handling) lives in the [`Transcoder`](crate::Transcoder).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter, Write as _};
use std::io::{self, Write};
use std::str::FromStr;
use thiserror::Error;

pub trait Target {
    /// Line comment prefix, without the trailing space.
    fn comment(&self) -> &'static str;
    /// Full-width rule line used above the license banner.
    fn rule(&self) -> &'static str;
    fn prologue(&self, out: &mut dyn Write, function: &str) -> io::Result<()>;
    fn entry(&self, out: &mut dyn Write, code: i64, literal: &str) -> io::Result<()>;
    fn epilogue(&self, out: &mut dyn Write) -> io::Result<()>;
    /// Escape for characters that need it in this language but aren't handled by [`escape`].
    fn escape_special(&self, _c: char) -> Option<&'static str> {
        None
    }
    /// Spell a control character that has no short escape.
    fn escape_control(&self, c: char, out: &mut String);
    /// Words that can't be used as the generated function's name.
    fn keywords(&self) -> &'static [&'static str];
    fn is_reserved(&self, name: &str) -> bool {
        self.keywords().contains(&name)
    }
    /// Quote `text` as a string literal with the trailing newline marker appended.
    fn quote(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 4);
        out.push('"');
        escape(self, text, &mut out);
        out.push_str("\\n\"");
        out
    }
}

/// Shared escaping for double-quoted literals: backslashes, quotes, and the usual whitespace
/// controls. `%` and `@` placeholders pass through untouched.
pub fn escape<T: Target + ?Sized>(target: &T, text: &str, out: &mut String) {
    for c in text.chars() {
        if let Some(esc) = target.escape_special(c) {
            out.push_str(esc);
            continue;
        }
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => target.escape_control(c, out),
            c => out.push(c),
        }
    }
}

pub struct Julia;
impl Target for Julia {
    fn comment(&self) -> &'static str {
        "#"
    }
    fn rule(&self) -> &'static str {
        "#############################################################################"
    }
    fn prologue(&self, out: &mut dyn Write, function: &str) -> io::Result<()> {
        writeln!(out, "function {function}()::Dict{{Int64, String}}")?;
        writeln!(out, "    Dict{{Int64, String}}(")
    }
    fn entry(&self, out: &mut dyn Write, code: i64, literal: &str) -> io::Result<()> {
        writeln!(out, "        {code} => {literal},")
    }
    fn epilogue(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "    )")?;
        writeln!(out, "end")
    }
    fn escape_special(&self, c: char) -> Option<&'static str> {
        // `$` would start string interpolation
        (c == '$').then_some("\\$")
    }
    fn keywords(&self) -> &'static [&'static str] {
        &[
            "baremodule", "begin", "break", "catch", "const", "continue", "do", "else", "elseif",
            "end", "export", "false", "finally", "for", "function", "global", "if", "import",
            "let", "local", "macro", "module", "quote", "return", "struct", "true", "try",
            "using", "while",
        ]
    }
    fn escape_control(&self, c: char, out: &mut String) {
        let _ = write!(out, "\\u{:04x}", c as u32);
    }
}

pub struct Python;
impl Target for Python {
    fn comment(&self) -> &'static str {
        "#"
    }
    fn rule(&self) -> &'static str {
        "#############################################################################"
    }
    fn prologue(&self, out: &mut dyn Write, function: &str) -> io::Result<()> {
        writeln!(out, "def {function}():")?;
        writeln!(out, "    return {{")
    }
    fn entry(&self, out: &mut dyn Write, code: i64, literal: &str) -> io::Result<()> {
        writeln!(out, "        {code}: {literal},")
    }
    fn epilogue(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "    }}")
    }
    fn keywords(&self) -> &'static [&'static str] {
        &[
            "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
            "continue", "def", "del", "elif", "else", "except", "finally", "for", "from",
            "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass",
            "raise", "return", "try", "while", "with", "yield",
        ]
    }
    fn escape_control(&self, c: char, out: &mut String) {
        let c = c as u32;
        let _ = if c <= 0xff {
            write!(out, "\\x{c:02x}")
        } else {
            write!(out, "\\u{c:04x}")
        };
    }
}

pub struct Rust;
impl Target for Rust {
    fn comment(&self) -> &'static str {
        "//"
    }
    fn rule(&self) -> &'static str {
        "/////////////////////////////////////////////////////////////////////////////"
    }
    fn prologue(&self, out: &mut dyn Write, function: &str) -> io::Result<()> {
        writeln!(out, "use std::collections::HashMap;")?;
        writeln!(out)?;
        writeln!(out, "pub fn {function}() -> HashMap<i64, &'static str> {{")?;
        writeln!(out, "    HashMap::from([")
    }
    fn entry(&self, out: &mut dyn Write, code: i64, literal: &str) -> io::Result<()> {
        writeln!(out, "        ({code}, {literal}),")
    }
    fn epilogue(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "    ])")?;
        writeln!(out, "}}")
    }
    fn escape_special(&self, c: char) -> Option<&'static str> {
        (c == '\0').then_some("\\0")
    }
    // includes the reserved-for-future-use words
    fn keywords(&self) -> &'static [&'static str] {
        &[
            "Self", "abstract", "as", "async", "await", "become", "box", "break", "const",
            "continue", "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn",
            "for", "gen", "if", "impl", "in", "let", "loop", "macro", "match", "mod", "move",
            "mut", "override", "priv", "pub", "ref", "return", "self", "static", "struct",
            "super", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
            "virtual", "where", "while", "yield",
        ]
    }
    fn escape_control(&self, c: char, out: &mut String) {
        let _ = write!(out, "\\u{{{:x}}}", c as u32);
    }
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[value(alias = "jl")]
    #[serde(alias = "jl")]
    Julia,
    #[value(alias = "py")]
    #[serde(alias = "py")]
    Python,
    #[value(alias = "rs")]
    #[serde(alias = "rs")]
    Rust,
}
impl Language {
    pub const ALL: [Language; 3] = [Language::Julia, Language::Python, Language::Rust];
    pub fn target(self) -> &'static dyn Target {
        match self {
            Self::Julia => &Julia,
            Self::Python => &Python,
            Self::Rust => &Rust,
        }
    }
    pub fn extension(self) -> &'static str {
        match self {
            Self::Julia => "jl",
            Self::Python => "py",
            Self::Rust => "rs",
        }
    }
    /// Where the module goes when no output path is given, relative to the consuming package.
    pub fn default_output(self) -> String {
        format!("src/errmsgs.{}", self.extension())
    }
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Julia => "julia",
            Self::Python => "python",
            Self::Rust => "rust",
        }
    }
}
impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown target language {0:?} (expected julia, python, or rust)")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true).map_err(|_| UnknownLanguage(s.to_string()))
    }
}
