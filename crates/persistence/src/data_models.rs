// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use skybook_domain::{Flight, Gender, Passenger};

/// Storage format for departure timestamps (naive UTC).
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Storage format for dates of birth.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a departure timestamp for storage.
#[must_use]
pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

/// Parses a stored departure timestamp.
///
/// # Errors
///
/// Returns an error if the stored text is not in the storage format.
pub fn parse_datetime(text: &str) -> Result<NaiveDateTime, PersistenceError> {
    NaiveDateTime::parse_from_str(text, DATETIME_FORMAT).map_err(|e| {
        PersistenceError::DatabaseError(format!("Unreadable stored timestamp '{text}': {e}"))
    })
}

/// A row from the `flights` table.
#[derive(Debug, Clone, Queryable)]
pub struct FlightRow {
    pub flight_id: i64,
    pub airline_id: i64,
    pub embarkation_airport_id: i64,
    pub destination_airport_id: i64,
    pub aircraft_layout_id: Option<i64>,
    pub number: String,
    pub departure: String,
    pub duration_minutes: i32,
}

impl FlightRow {
    /// Converts the stored row into the domain flight type.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored departure timestamp is unreadable.
    pub fn into_domain(self) -> Result<Flight, PersistenceError> {
        let departure: NaiveDateTime = parse_datetime(&self.departure)?;
        Ok(Flight {
            flight_id: Some(self.flight_id),
            airline_id: self.airline_id,
            embarkation_airport_id: self.embarkation_airport_id,
            destination_airport_id: self.destination_airport_id,
            aircraft_layout_id: self.aircraft_layout_id,
            number: self.number,
            departure,
            duration_minutes: i64::from(self.duration_minutes),
        })
    }
}

/// A row from the `passengers` table.
#[derive(Debug, Clone, Queryable)]
pub struct PassengerRow {
    pub passenger_id: i64,
    pub name: String,
    pub gender: String,
    pub dob: String,
    pub nationality: String,
    pub residency: String,
    pub passport_number: String,
}

impl PassengerRow {
    /// Converts the stored row into the domain passenger type.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored gender or date of birth is
    /// unreadable.
    pub fn into_domain(self) -> Result<Passenger, PersistenceError> {
        let gender: Gender = self
            .gender
            .parse()
            .map_err(|_| PersistenceError::DatabaseError(format!(
                "Unreadable stored gender '{}'",
                self.gender
            )))?;
        let dob: NaiveDate = NaiveDate::parse_from_str(&self.dob, DATE_FORMAT).map_err(|e| {
            PersistenceError::DatabaseError(format!("Unreadable stored date '{}': {e}", self.dob))
        })?;
        Ok(Passenger {
            passenger_id: Some(self.passenger_id),
            name: self.name,
            gender,
            dob,
            nationality: self.nationality,
            residency: self.residency,
            passport_number: self.passport_number,
        })
    }
}
