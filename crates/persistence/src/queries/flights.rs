// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use skybook::SeatingState;
use skybook_domain::{Flight, SeatAssignment};

use crate::data_models::FlightRow;
use crate::diesel_schema::{flight_passengers, flights, seats};
use crate::error::PersistenceError;

/// Retrieves a flight by its canonical ID.
///
/// # Errors
///
/// Returns an error if the flight does not exist.
pub fn get_flight(conn: &mut SqliteConnection, flight_id: i64) -> Result<Flight, PersistenceError> {
    let result = flights::table
        .filter(flights::flight_id.eq(flight_id))
        .first::<FlightRow>(conn);

    match result {
        Ok(row) => row.into_domain(),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::FlightNotFound(flight_id)),
        Err(e) => Err(e.into()),
    }
}

/// Lists all flights, ordered by departure date and time.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_flights(conn: &mut SqliteConnection) -> Result<Vec<Flight>, PersistenceError> {
    let rows: Vec<FlightRow> = flights::table
        .order(flights::departure.asc())
        .load::<FlightRow>(conn)?;

    rows.into_iter().map(FlightRow::into_domain).collect()
}

/// Lists the IDs of the passengers associated with a flight.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_passenger_ids(
    conn: &mut SqliteConnection,
    flight_id: i64,
) -> Result<Vec<i64>, PersistenceError> {
    Ok(flight_passengers::table
        .filter(flight_passengers::flight_id.eq(flight_id))
        .select(flight_passengers::passenger_id)
        .order(flight_passengers::passenger_id.asc())
        .load::<i64>(conn)?)
}

/// Lists a flight's seats in creation order.
///
/// Creation order is seat rowid order: seats are inserted row-major when a
/// layout is applied, so this is also the deterministic re-seating order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_seats(
    conn: &mut SqliteConnection,
    flight_id: i64,
) -> Result<Vec<SeatAssignment>, PersistenceError> {
    let rows: Vec<(i64, i64, Option<i64>, String)> = seats::table
        .filter(seats::flight_id.eq(flight_id))
        .order(seats::seat_id.asc())
        .load::<(i64, i64, Option<i64>, String)>(conn)?;

    Ok(rows
        .into_iter()
        .map(|(_, _, passenger_id, seat_number)| SeatAssignment {
            seat_number,
            passenger_id,
        })
        .collect())
}

/// Assembles the seating-relevant state of a flight for the engine.
///
/// # Errors
///
/// Returns an error if the flight does not exist or a query fails.
pub fn get_seating_state(
    conn: &mut SqliteConnection,
    flight_id: i64,
) -> Result<SeatingState, PersistenceError> {
    let flight: Flight = get_flight(conn, flight_id)?;

    Ok(SeatingState {
        airline_id: flight.airline_id,
        aircraft_layout_id: flight.aircraft_layout_id,
        passenger_ids: list_passenger_ids(conn, flight_id)?,
        seats: list_seats(conn, flight_id)?,
    })
}
