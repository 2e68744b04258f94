//! Table rendering for flight listings.

use std::fmt;

use crate::flight::FlightRecord;

const INDEX_WIDTH: usize = 4;
const DESTINATION_WIDTH: usize = 30;
const FLIGHT_NUMBER_WIDTH: usize = 20;
const PLANE_TYPE_WIDTH: usize = 20;

/// Flights laid out as a bordered table with a 1-based index column.
///
/// Rows appear in iteration order. Callers print a separate message instead
/// of displaying an empty table. The last border has no trailing newline.
#[derive(Debug)]
pub struct Table<'a> {
    flights: Vec<&'a FlightRecord>,
}

impl<'a> Table<'a> {
    /// Collect the rows of a table.
    #[must_use]
    pub fn new(flights: impl IntoIterator<Item = &'a FlightRecord>) -> Self {
        Self {
            flights: flights.into_iter().collect(),
        }
    }

    fn border(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "+-{}-+-{}-+-{}-+-{}-+",
            "-".repeat(INDEX_WIDTH),
            "-".repeat(DESTINATION_WIDTH),
            "-".repeat(FLIGHT_NUMBER_WIDTH),
            "-".repeat(PLANE_TYPE_WIDTH),
        )
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::border(f)?;
        writeln!(f)?;
        writeln!(
            f,
            "| {:^INDEX_WIDTH$} | {:^DESTINATION_WIDTH$} | {:^FLIGHT_NUMBER_WIDTH$} | {:^PLANE_TYPE_WIDTH$} |",
            "No", "Destination", "Flight number", "Plane type",
        )?;
        Self::border(f)?;
        writeln!(f)?;

        for (index, flight) in self.flights.iter().enumerate() {
            writeln!(
                f,
                "| {:>INDEX_WIDTH$} | {:<DESTINATION_WIDTH$} | {:<FLIGHT_NUMBER_WIDTH$} | {:>PLANE_TYPE_WIDTH$} |",
                index + 1,
                flight.destination,
                flight.flight_number,
                flight.plane_type,
            )?;
        }

        Self::border(f)
    }
}
