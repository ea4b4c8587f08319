use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing status
/// messages to stderr so they never mix with a report written to stdout.
/// Colors are applied only when stderr is a terminal.
pub struct StderrProgressReporter {
    quiet: bool,
    colored: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            quiet: false,
            colored: std::io::stderr().is_terminal(),
        }
    }

    /// A reporter that suppresses progress and completion messages.
    /// Errors are still written.
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::new()
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_error(&self, message: &str) {
        if self.colored {
            eprintln!("{}", message.yellow());
        } else {
            eprintln!("{}", message);
        }
    }

    fn report_completion(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.colored {
            eprintln!("{}", message.green());
        } else {
            eprintln!("{}", message);
        }
    }
}
