//! Core flight record type.
//!
//! This module defines the record held by the registry and the JSON shape it
//! is persisted in.

use serde::{Deserialize, Deserializer, Serialize};

/// JSON key of the destination field.
pub const DESTINATION_KEY: &str = "destination";

/// JSON key of the flight number field.
pub const FLIGHT_NUMBER_KEY: &str = "flight number";

/// JSON key of the plane type field.
pub const PLANE_TYPE_KEY: &str = "type of plane";

/// A single flight.
///
/// Records have no identity beyond their fields; two records with the same
/// destination, number and plane type are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Arrival location, used as the sort key.
    pub destination: String,

    /// Flight number.
    ///
    /// Files may spell it as an integral float such as `101.0`.
    #[serde(
        rename = "flight number",
        deserialize_with = "deserialize_flight_number"
    )]
    pub flight_number: i64,

    /// Aircraft model designation, used as the search key.
    #[serde(rename = "type of plane")]
    pub plane_type: String,
}

impl FlightRecord {
    /// Create a new flight record.
    #[must_use]
    pub fn new(
        destination: impl Into<String>,
        flight_number: i64,
        plane_type: impl Into<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            flight_number,
            plane_type: plane_type.into(),
        }
    }

    /// Check if this flight is served by the given plane type.
    ///
    /// The comparison is exact and case-sensitive.
    #[must_use]
    pub fn is_served_by(&self, plane_type: &str) -> bool {
        self.plane_type == plane_type
    }
}

/// Convert an integral float to `i64`.
///
/// Returns `None` if `value` has a fractional part or lies outside the
/// `i64` range.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn integral_f64_to_i64(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then_some(value as i64)
}

fn deserialize_flight_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Integer(i64),
        Float(f64),
    }

    match Number::deserialize(deserializer)? {
        Number::Integer(number) => Ok(number),
        Number::Float(number) => integral_f64_to_i64(number).ok_or_else(|| {
            serde::de::Error::custom(format!("{number} is not a valid flight number"))
        }),
    }
}

impl std::fmt::Display for FlightRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} #{} ({})",
            self.destination, self.flight_number, self.plane_type
        )
    }
}
