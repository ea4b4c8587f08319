//! Logger initialization for the `log` facade.

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Verbosity selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// `--quiet`: errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// `--debug`
    Debug,
    /// `--trace`: everything, including per-token parser output
    Trace,
}

impl LogLevel {
    /// The most verbose flag wins when several are set
    pub fn from_flags(quiet: bool, debug: bool, trace: bool) -> Self {
        if trace {
            LogLevel::Trace
        } else if debug {
            LogLevel::Debug
        } else if quiet {
            LogLevel::Quiet
        } else {
            LogLevel::Normal
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Quiet => LevelFilter::Error,
            LogLevel::Normal => LevelFilter::Warn,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Installs the stderr logger. `RUST_LOG` overrides the flag-derived level.
pub fn init_logging(level: LogLevel) {
    let mut builder = Builder::new();
    builder
        .filter_level(level.level_filter())
        .format_timestamp_millis()
        .target(Target::Stderr)
        .parse_default_env();

    if let Err(e) = builder.try_init() {
        eprintln!("Error initializing logging: {:?}", e);
    }
}
