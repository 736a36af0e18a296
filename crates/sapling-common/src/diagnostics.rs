//! Advisory diagnostics with colored terminal output.
//!
//! Diagnostics are output-only: nothing written here feeds back into a parse,
//! so a tree is identical whatever the verbosity is set to. The verbosity is
//! process-wide and atomic, so concurrent parses may report freely.

use std::sync::atomic::{AtomicU8, Ordering};

use owo_colors::{OwoColorize, Stream, Style};
use strum_macros::{Display, EnumString};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Level {
    /// Progress of the tree builder (open tags, self-closing tags, close resolution).
    Info,
    /// Recoverable problem in the input, e.g. an unresolved closing tag.
    Warning,
}

/// How much diagnostic output reaches stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Verbosity {
    /// Print nothing.
    Quiet = 0,
    /// Print warnings only.
    Warnings = 1,
    /// Print warnings and informational messages.
    Verbose = 2,
}

impl Verbosity {
    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Quiet,
            1 => Self::Warnings,
            _ => Self::Verbose,
        }
    }

    const fn allows(self, level: Level) -> bool {
        match level {
            Level::Warning => self as u8 >= Self::Warnings as u8,
            Level::Info => self as u8 >= Self::Verbose as u8,
        }
    }
}

static VERBOSITY: AtomicU8 = AtomicU8::new(Verbosity::Warnings as u8);

/// Set the process-wide verbosity.
pub fn set_verbosity(verbosity: Verbosity) {
    VERBOSITY.store(verbosity as u8, Ordering::Relaxed);
}

/// Current process-wide verbosity.
#[must_use]
pub fn verbosity() -> Verbosity {
    Verbosity::from_u8(VERBOSITY.load(Ordering::Relaxed))
}

/// Whether a diagnostic of `level` would be printed right now.
#[must_use]
pub fn enabled(level: Level) -> bool {
    verbosity().allows(level)
}

/// Report a diagnostic for `component`.
///
/// # Example
/// ```ignore
/// report(Level::Warning, "Tree Builder", "tag: b not closed");
/// ```
pub fn report(level: Level, component: &str, message: &str) {
    if !enabled(level) {
        return;
    }
    eprintln!("{}", format_line(level, component, message));
}

/// One diagnostic line, colored only when stderr supports it.
fn format_line(level: Level, component: &str, message: &str) -> String {
    let tag = format!("[{component}] {level}:");
    match level {
        Level::Info => format!(
            "{} {message}",
            tag.if_supports_color(Stream::Stderr, |t| t.dimmed())
        ),
        Level::Warning => {
            let style = Style::new().yellow().bold();
            format!(
                "{} {}",
                tag.if_supports_color(Stream::Stderr, |t| t.style(style)),
                message.if_supports_color(Stream::Stderr, |m| m.yellow())
            )
        }
    }
}

/// Shorthand for [`report`] at [`Level::Info`].
pub fn info(component: &str, message: &str) {
    report(Level::Info, component, message);
}

/// Shorthand for [`report`] at [`Level::Warning`].
pub fn warn(component: &str, message: &str) {
    report(Level::Warning, component, message);
}
