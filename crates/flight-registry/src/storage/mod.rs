//! JSON persistence for flight records.
//!
//! This module saves the registry as a JSON array and loads it back,
//! validating loaded documents against the flight list schema before any
//! record is accepted.

pub mod schema;

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::flight::FlightRecord;

/// Default JSON indentation width.
pub const DEFAULT_INDENT: usize = 4;

/// Reads and writes flight list files.
///
/// Files are UTF-8 JSON with non-ASCII characters written literally.
/// Each save overwrites the whole file; there is no atomic replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storage {
    /// Indentation width in spaces.
    indent: usize,
}

impl Default for Storage {
    fn default() -> Self {
        Self::with_indent(DEFAULT_INDENT)
    }
}

impl Storage {
    /// Create a storage with the default indentation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that indents saved files by `indent` spaces.
    #[must_use]
    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    /// Get the indentation width.
    #[must_use]
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Serialize records into the file format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self, records: &[FlightRecord]) -> Result<String> {
        let indent = " ".repeat(self.indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut serializer)?;
        buf.push(b'\n');

        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Save records to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileWrite`] if the file cannot be written.
    pub fn save(&self, records: &[FlightRecord], path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = self.to_json(records)?;

        debug!("Writing {} flights to {}", records.len(), path.display());
        std::fs::write(path, contents).map_err(|source| Error::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Saved {} flights to {}", records.len(), path.display());
        Ok(())
    }

    /// Load records from `path`.
    ///
    /// The records are returned in file order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileRead`] if the file cannot be read,
    /// [`Error::Json`] if it is not valid JSON, and
    /// [`Error::SchemaValidation`] if the document does not match the schema.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Vec<FlightRecord>> {
        let path = path.as_ref();

        debug!("Reading flights from {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let records = Self::decode(&contents, path)?;

        info!("Loaded {} flights from {}", records.len(), path.display());
        Ok(records)
    }

    /// Parse and validate a flight list document read from `path`.
    fn decode(contents: &str, path: &Path) -> Result<Vec<FlightRecord>> {
        let document: Value = serde_json::from_str(contents)?;

        let violations = schema::validate(&document);
        if let Some(first) = violations.first() {
            warn!(
                count = violations.len(),
                "{} failed validation: {}",
                path.display(),
                first
            );
            return Err(Error::SchemaValidation {
                path: path.to_path_buf(),
                message: first.message.clone(),
                violations,
            });
        }

        Ok(serde_json::from_value(document)?)
    }
}
