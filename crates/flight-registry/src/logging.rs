//! Diagnostic logging for the `flights` session.
//!
//! The session owns stdout for prompts and flight tables and stderr for
//! `Error:` reports. Log events also go to stderr, in a compact form without
//! timestamps, so a quiet session shows only what the user typed and what
//! the registry printed back.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crate target that the default filter applies to.
const LOG_TARGET: &str = "flight_registry";

/// How much the session logs about its own work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Only failures that end the session.
    Quiet,
    /// Reported command errors such as unreadable or invalid files.
    #[default]
    Normal,
    /// Every dispatched command, file access and search.
    Verbose,
    /// Individual registry insertions as well.
    Trace,
}

impl Verbosity {
    /// Pick a verbosity from the repeatable `-v` count and the `-q` switch.
    ///
    /// `-q` wins over any number of `-v`.
    #[must_use]
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    /// Most detailed level logged at this verbosity.
    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter directive used when `RUST_LOG` is unset.
    #[must_use]
    pub fn directive(self) -> String {
        format!("{LOG_TARGET}={}", self.level())
    }
}

/// Install the stderr subscriber for the session.
///
/// `RUST_LOG` replaces the directive derived from `verbosity` when set.
/// Calling this more than once keeps the first subscriber.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use flight_registry::{cli::Cli, init_logging};
///
/// // `flights -v` logs each command and file access to stderr
/// let cli = Cli::parse_from(["flights", "-v"]);
/// init_logging(cli.verbosity());
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .without_time()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// Route warnings to the test harness output.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(Verbosity::from_flags(0, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(1, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(2, false), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(9, false), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(3, true), Verbosity::Quiet);
    }

    #[test]
    fn test_level() {
        assert_eq!(Verbosity::Quiet.level(), Level::ERROR);
        assert_eq!(Verbosity::Normal.level(), Level::WARN);
        assert_eq!(Verbosity::Verbose.level(), Level::DEBUG);
        assert_eq!(Verbosity::Trace.level(), Level::TRACE);
    }

    #[test]
    fn test_directive_targets_this_crate() {
        assert_eq!(Verbosity::Normal.directive(), "flight_registry=WARN");
        assert_eq!(Verbosity::Trace.directive(), "flight_registry=TRACE");
    }

    #[test]
    fn test_init_logging_twice_keeps_first_subscriber() {
        init_logging(Verbosity::Quiet);
        init_logging(Verbosity::Trace);
    }
}
