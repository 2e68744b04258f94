//! In-memory flight registry.
//!
//! The registry owns its records by value and keeps them sorted ascending by
//! destination at all times.

use tracing::{debug, trace};

use crate::flight::FlightRecord;

/// Ordered collection of flight records.
///
/// Records are kept sorted by destination using byte-wise string ordering.
/// Records sharing a destination keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    records: Vec<FlightRecord>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from records in any order.
    ///
    /// The records are stably sorted by destination.
    #[must_use]
    pub fn from_records(mut records: Vec<FlightRecord>) -> Self {
        records.sort_by(|a, b| a.destination.cmp(&b.destination));
        debug!(count = records.len(), "Registry built from records");
        Self { records }
    }

    /// Insert a record at its sorted position.
    ///
    /// A record goes after any existing records with the same destination.
    pub fn add(&mut self, record: FlightRecord) {
        let index = self
            .records
            .partition_point(|existing| existing.destination <= record.destination);
        trace!(index, flight = %record, "Inserting flight");
        self.records.insert(index, record);
    }

    /// All records in destination order.
    #[must_use]
    pub fn list(&self) -> &[FlightRecord] {
        &self.records
    }

    /// Records served by the given plane type, in destination order.
    ///
    /// An empty result means no flight uses that plane type.
    #[must_use]
    pub fn find(&self, plane_type: &str) -> Vec<&FlightRecord> {
        let found: Vec<_> = self
            .records
            .iter()
            .filter(|record| record.is_served_by(plane_type))
            .collect();
        debug!(plane_type, matches = found.len(), "Searched registry");
        found
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the registry holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
