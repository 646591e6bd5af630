//! Console diagnostics
//!
//! All progress and warning output goes through the [`Reporter`] trait so the
//! merge pipeline never prints directly. The console implementation honors
//! the global `--quiet` / `--verbose` flags; [`SilentReporter`] discards
//! everything.
//!
//! Diagnostics are written to stderr. Stdout is reserved for the merge
//! summary so it can be piped.

use console::Style;

/// How much the console reporter prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings only
    Quiet,
    /// Progress and warnings
    #[default]
    Normal,
    /// Progress, warnings and per-record detail
    Verbose,
}

impl Verbosity {
    /// Resolve verbosity from the global CLI flags. `--quiet` wins.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Sink for human-readable diagnostics
pub trait Reporter {
    /// Progress message for a pipeline step
    fn status(&mut self, message: &str);

    /// Non-fatal problem; processing continues
    fn warn(&mut self, message: &str);

    /// Extra detail, only interesting with `--verbose`
    fn detail(&mut self, message: &str);
}

/// Styled stderr reporter
pub struct ConsoleReporter {
    verbosity: Verbosity,
}

impl ConsoleReporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl Reporter for ConsoleReporter {
    fn status(&mut self, message: &str) {
        if self.verbosity != Verbosity::Quiet {
            eprintln!("{message}");
        }
    }

    fn warn(&mut self, message: &str) {
        eprintln!(
            "{} {}",
            Style::new().bold().yellow().apply_to("Warning:"),
            message
        );
    }

    fn detail(&mut self, message: &str) {
        if self.verbosity == Verbosity::Verbose {
            eprintln!("  {}", Style::new().dim().apply_to(message));
        }
    }
}

/// No-op reporter
#[allow(dead_code)]
#[derive(Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn status(&mut self, _message: &str) {}

    fn warn(&mut self, _message: &str) {}

    fn detail(&mut self, _message: &str) {}
}

/// Reporter that keeps every message, for assertions in tests
#[cfg(test)]
#[derive(Default, Debug)]
pub struct RecordingReporter {
    pub statuses: Vec<String>,
    pub warnings: Vec<String>,
    pub details: Vec<String>,
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn status(&mut self, message: &str) {
        self.statuses.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn detail(&mut self, message: &str) {
        self.details.push(message.to_string());
    }
}
