//! User facing progress messages and the end-of-run summary.

use std::io::{self, Write};

use colored::Colorize;

use crate::RunStats;

/// Classification of a single reported event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Success,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "ERROR! ",
            Severity::Warning => "WARNING! ",
            Severity::Success => "SUCCESS! ",
        }
    }
}

/// How message prefixes are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    #[default]
    Colored,
    Plain,
}

impl OutputStyle {
    pub fn prefix(self, severity: Severity) -> String {
        let label = severity.label();
        match self {
            OutputStyle::Plain => label.to_string(),
            OutputStyle::Colored => match severity {
                Severity::Error => label.red().bold().to_string(),
                Severity::Warning => label.yellow().bold().to_string(),
                Severity::Success => label.green().bold().to_string(),
            },
        }
    }
}

/// Sink for conversion events.
pub trait Reporter {
    fn report(&mut self, severity: Severity, message: &str);

    /// Called once after the traversal finished.
    fn summary(&mut self, stats: &RunStats);

    fn error(&mut self, message: &str) {
        self.report(Severity::Error, message);
    }

    fn warning(&mut self, message: &str) {
        self.report(Severity::Warning, message);
    }

    fn success(&mut self, message: &str) {
        self.report(Severity::Success, message);
    }
}

/// Writes successes and the summary to `out`, errors and warnings to `err`.
/// When the summary is JSON, successes move to `err` as well.
pub struct ConsoleReporter<O: Write, E: Write> {
    style: OutputStyle,
    json_summary: bool,
    out: O,
    err: E,
}

impl ConsoleReporter<io::Stdout, io::Stderr> {
    /// Reporter bound to the process's standard streams.
    pub fn stdio(style: OutputStyle) -> Self {
        Self::new(style, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    pub fn new(style: OutputStyle, out: O, err: E) -> Self {
        Self {
            style,
            json_summary: false,
            out,
            err,
        }
    }

    /// Print the summary as a JSON object instead of text.
    pub fn with_json_summary(mut self, json: bool) -> Self {
        self.json_summary = json;
        self
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn write_summary(&mut self, stats: &RunStats) -> io::Result<()> {
        if self.json_summary {
            serde_json::to_writer(&mut self.out, stats)?;
            writeln!(self.out)
        } else {
            writeln!(
                self.out,
                "\nFinished converting files.\nTotal: {}\nFailed: {}\nCompleted: {}",
                stats.total, stats.failed, stats.completed
            )
        }
    }
}

impl<O: Write, E: Write> Reporter for ConsoleReporter<O, E> {
    fn report(&mut self, severity: Severity, message: &str) {
        let prefix = self.style.prefix(severity);
        // Nothing sensible to do if the terminal itself is gone.
        // With a JSON summary stdout carries nothing but the JSON object.
        let _ = match severity {
            Severity::Success if !self.json_summary => writeln!(self.out, "{prefix}{message}"),
            _ => writeln!(self.err, "{prefix}{message}"),
        };
    }

    fn summary(&mut self, stats: &RunStats) {
        let _ = self.write_summary(stats);
        let _ = self.out.flush();
    }
}
