use std::fmt::Arguments;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Silence `info!` output. Errors and warnings are always printed.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Write a `level: message` line to stderr with the level colored.
/// Failures to write to stderr are ignored, there's nowhere left to report them.
pub fn emit(level: &str, color: Color, args: Arguments) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = write!(stderr, "{level}");
    let _ = stderr.reset();
    let _ = writeln!(stderr, ": {args}");
}

#[macro_export]
macro_rules! error {
    ($($toks:tt)*) => {
        $crate::color::emit("error", $crate::termcolor::Color::Red, format_args!($($toks)*))
    }
}
#[macro_export]
macro_rules! warning {
    ($($toks:tt)*) => {
        $crate::color::emit("warning", $crate::termcolor::Color::Yellow, format_args!($($toks)*))
    }
}
#[macro_export]
macro_rules! info {
    ($($toks:tt)*) => {
        if !$crate::color::is_quiet() {
            $crate::color::emit("info", $crate::termcolor::Color::Green, format_args!($($toks)*))
        }
    }
}
