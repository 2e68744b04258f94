//! Command-line interface for flight-registry.
//!
//! This module provides the process arguments of the `flights` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::logging::Verbosity;

/// flights - Keep a sorted list of flights
///
/// Starts an interactive session for adding, listing and searching flights
/// and for saving them to and loading them from JSON files.
#[derive(Debug, Parser)]
#[command(name = "flights")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Load flights from this file before the session starts
    #[arg(short, long, value_name = "FILE")]
    pub load: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }
}
