use anyhow::Context;
use anyhow_std::*;
use clap::Parser;
use clio::Input;
use const_format::{formatcp, str_index};
use errmsgs_errors::{color, error, info, warning, HeaderErrors};
use errmsgs_gen::{ErrorMessageRecord, Language, Transcoder, DEFAULT_FUNCTION};
use errmsgs_parser::{parse_header, DEFAULT_TABLE};
use miette::{NamedSource, Report};
use std::io::{self, Write};
use std::path::PathBuf;

pub mod config;
pub use config::Config;


/// Firebird's message header, compiled in so a bare `errmsgs` run needs no input files.
pub const VENDORED_HEADER: &str = include_str!("../vendor/msgs.h");
pub const VENDORED_NAME: &str = "<vendored msgs.h>";
/// Whether the compiled-in header is the shipped sample rather than a full upstream copy.
pub const VENDORED_IS_SAMPLE: bool = cfg!(sample_header);

#[cfg(has_git)]
const GIT_INFO: &str = formatcp!(
    "commit {} on branch {}",
    str_index!(env!("GIT_COMMIT"), ..6),
    env!("GIT_BRANCH")
);
#[cfg(not(has_git))]
const GIT_INFO: &str = "not found";

pub static LONG_VERSION: &str = formatcp!(
    "{}\nGit {}\nDebug {}",
    env!("CARGO_PKG_VERSION"),
    GIT_INFO,
    if cfg!(debug_assertions) {
        "enabled"
    } else {
        "disabled"
    }
);

/// Generate a message-code lookup table from a C header.
#[derive(Debug, Clone, Parser)]
#[command(name = "errmsgs", author, version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Header containing the message table, or `-` for stdin [default: vendored Firebird msgs.h]
    #[arg(long)]
    pub header: Option<Input>,
    /// File to write [default: src/errmsgs.<ext>]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Language of the generated module
    #[arg(short, long)]
    pub target: Option<Language>,
    /// Name of the array in the header [default: messages]
    #[arg(long)]
    pub table: Option<String>,
    /// Name of the generated function [default: get_errmsgs]
    #[arg(long)]
    pub function: Option<String>,
    /// TOML file supplying defaults for the options above
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Print the parsed table as JSON instead of writing a module
    #[arg(long)]
    pub dump_table: bool,
    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub enum HeaderSource {
    Vendored,
    Input(Input),
    Path(PathBuf),
}
impl HeaderSource {
    /// Read the header, returning a display name and its contents.
    pub fn read(self) -> anyhow::Result<(String, String)> {
        match self {
            Self::Vendored => Ok((VENDORED_NAME.to_string(), VENDORED_HEADER.to_string())),
            Self::Input(mut input) => {
                let name = input.path().display().to_string();
                let code = io::read_to_string(&mut input)
                    .with_context(|| format!("failed to read {name}"))?;
                Ok((name, code))
            }
            Self::Path(path) => {
                let code = path.read_to_string_anyhow()?;
                Ok((path.display().to_string(), code))
            }
        }
    }
}

/// Everything a run needs, after the command line has been merged over the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub header: HeaderSource,
    pub output: PathBuf,
    pub language: Language,
    pub table: String,
    pub function: String,
    pub dump_table: bool,
    /// Neither the command line nor the config named an output file.
    pub default_output: bool,
}
impl Settings {
    pub fn resolve(cli: Cli) -> anyhow::Result<Self> {
        let config = match &cli.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        Ok(Self::merge(cli, config))
    }

    /// Command line first, then the config, then the built-in defaults.
    pub fn merge(cli: Cli, config: Config) -> Self {
        let header = match (cli.header, config.header) {
            (Some(input), _) => HeaderSource::Input(input),
            (None, Some(path)) => HeaderSource::Path(path),
            (None, None) => HeaderSource::Vendored,
        };
        let language = cli.target.or(config.target).unwrap_or_default();
        let output = cli.output.or(config.output);
        Self {
            header,
            default_output: output.is_none(),
            output: output.unwrap_or_else(|| language.default_output().into()),
            language,
            table: cli
                .table
                .or(config.table)
                .unwrap_or_else(|| DEFAULT_TABLE.to_string()),
            function: cli
                .function
                .or(config.function)
                .unwrap_or_else(|| DEFAULT_FUNCTION.to_string()),
            dump_table: cli.dump_table,
        }
    }

    /// Reject settings that would write a broken module or clobber a full table.
    pub fn check(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            is_identifier(&self.function),
            "{:?} is not a valid function name",
            self.function
        );
        anyhow::ensure!(
            !self.language.target().is_reserved(&self.function),
            "`{}` is a reserved word in {} and can't name the generated function",
            self.function,
            self.language
        );
        anyhow::ensure!(
            !(VENDORED_IS_SAMPLE
                && matches!(self.header, HeaderSource::Vendored)
                && self.default_output
                && !self.dump_table),
            "the compiled-in msgs.h is only a sample of the Firebird table, refusing to overwrite {}\n\
             pass --header with the upstream msgs.h, or --output to write the sample elsewhere",
            self.output.display()
        );
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Write the records as a JSON array, one object per entry.
pub fn dump_table<W: Write>(records: &[ErrorMessageRecord], mut out: W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut out, records)?;
    writeln!(out)?;
    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub struct Exit(pub i32);
impl std::fmt::Display for Exit {
    fn fmt(&self, _f: &mut std::fmt::Formatter) -> std::fmt::Result {
        Ok(())
    }
}
impl std::error::Error for Exit {}

pub fn driver(cli: Cli) -> anyhow::Result<()> {
    color::set_quiet(cli.quiet);
    let settings = Settings::resolve(cli)?;
    settings.check()?;

    let (name, code) = settings.header.read()?;
    let (table, errs) = parse_header(&code, &settings.table);
    let mut fail = 0;
    for err in errs {
        fail += usize::from(err.is_err());
        let src = NamedSource::new(&name, code.clone());
        eprintln!("{:?}", Report::from(err.into_owned()).with_source_code(src));
    }
    let table = match table {
        Some(table) if fail == 0 => table,
        _ => {
            error!("{}", HeaderErrors(fail.max(1)));
            return Err(Exit(1).into());
        }
    };
    if table.records.is_empty() {
        warning!("table \"{}\" in {name} has no entries", settings.table);
    }

    if settings.dump_table {
        return dump_table(&table.records, io::stdout().lock());
    }

    let count = Transcoder::new(settings.language)
        .with_function(settings.function)
        .generate(&table.records, &settings.output)?;
    info!(
        "wrote {count} {} entries to {}",
        settings.language,
        settings.output.display()
    );
    Ok(())
}

pub mod prelude {
    pub use super::{driver, Cli, Exit};
    pub use clap::Parser as _;
}
