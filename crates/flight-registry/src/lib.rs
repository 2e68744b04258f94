//! `flight-registry` - An interactive registry of flights
//!
//! This library keeps flight records sorted by destination, searches them by
//! plane type, and persists them as schema-validated JSON files.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod flight;
pub mod logging;
pub mod registry;
pub mod repl;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
pub use flight::FlightRecord;
pub use logging::init_logging;
pub use registry::Registry;
pub use repl::{Command, Repl};
pub use storage::Storage;
