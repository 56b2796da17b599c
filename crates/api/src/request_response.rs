// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API boundary.
//!
//! These are plain-data shapes for an external web or CLI layer. They
//! carry canonical IDs and display-ready strings, never live domain
//! objects.

use serde::{Deserialize, Serialize};

/// An airline, as presented to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineInfo {
    pub airline_id: i64,
    pub name: String,
}

/// An airport, as presented to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportInfo {
    pub airport_id: i64,
    pub code: String,
    pub name: String,
    pub timezone: String,
}

/// One row of an aircraft layout, as presented to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowInfo {
    pub number: u32,
    pub seating_class: String,
    pub seat_letters: String,
}

/// An aircraft layout with its rows and derived capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub layout_id: i64,
    pub airline_id: i64,
    pub aircraft: String,
    pub name: String,
    pub capacity: usize,
    pub rows: Vec<RowInfo>,
}

/// A flight with its derived seating figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightInfo {
    pub flight_id: i64,
    pub airline_id: i64,
    pub embarkation_airport_id: i64,
    pub destination_airport_id: i64,
    pub aircraft_layout_id: Option<i64>,
    pub number: String,
    /// The departure date and time in UTC, `YYYY-MM-DD HH:MM:SS`.
    pub departs_utc: String,
    /// The flight duration formatted as `H:MM`.
    pub duration: String,
    /// Total seat count, 0 if no layout has been applied.
    pub capacity: usize,
    /// Number of passengers associated with the flight.
    pub passenger_count: usize,
    /// Seats left once every passenger is seated, never negative.
    pub available_capacity: usize,
}

/// A seat and its occupant, as presented to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatInfo {
    pub seat_number: String,
    pub passenger_id: Option<i64>,
}

/// A passenger, as presented to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerInfo {
    pub passenger_id: i64,
    pub name: String,
    /// "M" or "F".
    pub gender: String,
    /// Date of birth, `YYYY-MM-DD`.
    pub dob: String,
    pub nationality: String,
    pub residency: String,
    pub passport_number: String,
}

/// Request to create a flight. Dates and times arrive in the formats the
/// booking forms use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFlightRequest {
    pub airline_name: String,
    pub embarkation_code: String,
    pub destination_code: String,
    pub number: String,
    /// Departure date, `DD/MM/YYYY`.
    pub departure_date: String,
    /// Departure time, `HH:MM` (UTC).
    pub departure_time: String,
    /// Flight duration, `HH:MM`.
    pub duration: String,
}

/// Request to create a passenger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePassengerRequest {
    pub name: String,
    /// "M" or "F".
    pub gender: String,
    /// Date of birth, `YYYY-MM-DD`.
    pub dob: String,
    pub nationality: String,
    pub residency: String,
    pub passport_number: String,
}

/// The result of applying an aircraft layout to a flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyLayoutResponse {
    pub flight_id: i64,
    pub layout_id: i64,
    /// Total seat count under the new layout.
    pub capacity: usize,
    /// Passengers who kept their previous seat number.
    pub preserved: usize,
    /// Passengers moved because their seat number no longer exists.
    pub displaced: usize,
}

/// The result of allocating a seat to a passenger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocateSeatResponse {
    pub flight_id: i64,
    pub passenger_id: i64,
    pub seat_number: String,
    /// The seat the passenger previously held, if the allocation was a
    /// move.
    pub vacated_seat: Option<String>,
}
