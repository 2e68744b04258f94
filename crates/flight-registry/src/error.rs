//! Error types for flight-registry.
//!
//! This module defines all error types used throughout the crate, separating
//! recoverable input and file errors from fatal terminal and configuration
//! failures.

use std::path::PathBuf;
use thiserror::Error;

use crate::storage::schema::Violation;

/// The main error type for flight-registry operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    /// A flight number could not be parsed as an integer.
    #[error("invalid flight number '{input}': expected an integer")]
    InvalidFlightNumber {
        /// The text the user entered.
        input: String,
    },

    /// A destination was left empty.
    #[error("destination must not be empty")]
    EmptyDestination,

    /// The command keyword is not recognized.
    #[error("unknown command '{command}'")]
    UnknownCommand {
        /// The command line as entered.
        command: String,
    },

    /// A file command was given without a file name and no default is configured.
    #[error("'{command}' needs a file name: {command} <filename>")]
    MissingFileName {
        /// The command keyword.
        command: &'static str,
    },

    // === File Errors ===
    /// Failed to read a data file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a data file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The loaded document does not match the flight list schema.
    #[error("{message}")]
    SchemaValidation {
        /// Path to the data file.
        path: PathBuf,
        /// Message of the first violation found.
        message: String,
        /// Every violation found, in document order.
        violations: Vec<Violation>,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for flight-registry operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an unknown command error.
    #[must_use]
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::UnknownCommand {
            command: command.into(),
        }
    }

    /// Create an invalid flight number error.
    #[must_use]
    pub fn invalid_flight_number(input: impl Into<String>) -> Self {
        Self::InvalidFlightNumber {
            input: input.into(),
        }
    }

    /// Check if the REPL can report this error and keep running.
    ///
    /// Terminal I/O and configuration failures are fatal; everything else is
    /// reported to the user.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::Io(_) | Self::ConfigLoad(_) | Self::ConfigValidation { .. }
        )
    }

    /// Schema violations carried by this error, empty for other kinds.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::SchemaValidation { violations, .. } => violations,
            _ => &[],
        }
    }
}
