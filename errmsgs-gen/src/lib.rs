//! Turns a message table into a source module for another language.
//!
//! The output is always the same shape: the Interbase Public License banner, a one-line
//! attribution comment, and a single function returning the table as a map literal. Entries
//! come out in input order, duplicates included, and stop at the first sentinel record.

use errmsgs_errors::TranscodeError;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod record;
pub mod target;
pub use record::ErrorMessageRecord;
pub use target::{Language, Target, UnknownLanguage};

#[cfg(test)]
mod tests;

/// License the upstream message texts are distributed under. Blank entries become bare
/// comment lines.
pub const LICENSE_BANNER: &[&str] = &[
    "The contents of this file are subject to the Interbase Public",
    "License Version 1.0 (the \"License\"); you may not use this file",
    "except in compliance with the License. You may obtain a copy",
    "of the License at http://www.Inprise.com/IPL.html",
    "",
    "Software distributed under the License is distributed on an",
    "\"AS IS\" basis, WITHOUT WARRANTY OF ANY KIND, either express",
    "or implied. See the License for the specific language governing",
    "rights and limitations under the License.",
];
pub const GENERATED_BY: &str = "generated by errmsgs";
pub const DEFAULT_FUNCTION: &str = "get_errmsgs";

/// Settings for one generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcoder<'a> {
    pub language: Language,
    pub function: Cow<'a, str>,
}
impl Default for Transcoder<'_> {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
impl<'a> Transcoder<'a> {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            function: DEFAULT_FUNCTION.into(),
        }
    }
    pub fn with_function(mut self, function: impl Into<Cow<'a, str>>) -> Self {
        self.function = function.into();
        self
    }

    /// Write the whole module to `out`, returning the number of entries emitted.
    pub fn write_to<W: Write>(
        &self,
        records: &[ErrorMessageRecord],
        out: &mut W,
    ) -> io::Result<usize> {
        let target = self.language.target();
        let comment = target.comment();
        writeln!(out, "{}", target.rule())?;
        for line in LICENSE_BANNER {
            if line.is_empty() {
                writeln!(out, "{comment}")?;
            } else {
                writeln!(out, "{comment} {line}")?;
            }
        }
        writeln!(out)?;
        writeln!(out, "{comment} {GENERATED_BY}")?;
        writeln!(out)?;
        target.prologue(&mut *out, &self.function)?;
        let mut count = 0;
        for record in records.iter().take_while(|r| !r.is_sentinel()) {
            target.entry(&mut *out, record.code(), &target.quote(record.text()))?;
            count += 1;
        }
        target.epilogue(&mut *out)?;
        Ok(count)
    }

    /// Render the module into a string.
    pub fn render(&self, records: &[ErrorMessageRecord]) -> String {
        let mut buf = Vec::new();
        // writing into a Vec can't fail
        let _ = self.write_to(records, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Create (or truncate) `path` and write the module into it.
    ///
    /// Missing parent directories are not created. On failure the file may be left truncated,
    /// rerunning regenerates it.
    pub fn generate(
        &self,
        records: &[ErrorMessageRecord],
        path: impl AsRef<Path>,
    ) -> Result<usize, TranscodeError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(TranscodeError::io(path))?;
        let mut out = BufWriter::new(file);
        let count = self
            .write_to(records, &mut out)
            .map_err(TranscodeError::io(path))?;
        out.flush().map_err(TranscodeError::io(path))?;
        Ok(count)
    }
}

/// Generate the default (Julia, `get_errmsgs`) module at `path`.
pub fn generate(
    records: &[ErrorMessageRecord],
    path: impl AsRef<Path>,
) -> Result<usize, TranscodeError> {
    Transcoder::default().generate(records, path)
}
