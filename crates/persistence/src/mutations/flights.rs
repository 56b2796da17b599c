// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDateTime;
use diesel::SqliteConnection;
use diesel::prelude::*;
use skybook_domain::{Airline, Airport, Flight, validate_flight_fields};
use tracing::debug;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::format_datetime;
use crate::diesel_schema::{flight_passengers, flights};
use crate::error::{PersistenceError, is_unique_violation};
use crate::queries;

/// The fields needed to create a flight. The airline is named and the
/// airports are coded the way the caller sees them; resolution to IDs
/// happens inside the create.
#[derive(Debug, Clone)]
pub struct NewFlight<'a> {
    /// The operating airline's name.
    pub airline_name: &'a str,
    /// The 3-letter code of the airport of embarkation.
    pub embarkation_code: &'a str,
    /// The 3-letter code of the destination airport.
    pub destination_code: &'a str,
    /// The flight number.
    pub number: &'a str,
    /// The departure date and time, in UTC.
    pub departure: NaiveDateTime,
    /// The flight duration, in minutes.
    pub duration_minutes: i64,
}

/// Creates a flight.
///
/// # Errors
///
/// Returns an error if:
/// - The flight number is blank or the airports are the same
/// - The airline or either airport does not exist
/// - A flight with the same number and departure already exists
pub fn create_flight(
    conn: &mut SqliteConnection,
    new_flight: &NewFlight<'_>,
) -> Result<Flight, PersistenceError> {
    validate_flight_fields(
        new_flight.number,
        new_flight.embarkation_code,
        new_flight.destination_code,
    )?;

    let duration_minutes: i32 = i32::try_from(new_flight.duration_minutes)
        .map_err(|_| PersistenceError::QueryFailed(String::from("Flight duration out of range")))?;

    conn.transaction(|conn| {
        let airline: Airline = queries::airlines::get_airline_by_name(conn, new_flight.airline_name)?;
        let embarkation: Airport =
            queries::airports::get_airport_by_code(conn, new_flight.embarkation_code)?;
        let destination: Airport =
            queries::airports::get_airport_by_code(conn, new_flight.destination_code)?;

        let airline_id: i64 = airline.airline_id.unwrap_or_default();
        let embarkation_airport_id: i64 = embarkation.airport_id.unwrap_or_default();
        let destination_airport_id: i64 = destination.airport_id.unwrap_or_default();
        let departure_text: String = format_datetime(new_flight.departure);

        diesel::insert_into(flights::table)
            .values((
                flights::airline_id.eq(airline_id),
                flights::embarkation_airport_id.eq(embarkation_airport_id),
                flights::destination_airport_id.eq(destination_airport_id),
                flights::number.eq(new_flight.number),
                flights::departure.eq(&departure_text),
                flights::duration_minutes.eq(duration_minutes),
            ))
            .execute(conn)
            .map_err(|e| {
                if is_unique_violation(&e) {
                    PersistenceError::DuplicateFlight {
                        number: new_flight.number.to_string(),
                        departure: departure_text.clone(),
                    }
                } else {
                    e.into()
                }
            })?;

        let flight_id: i64 = get_last_insert_rowid(conn)?;
        debug!(flight_id, number = new_flight.number, "Created flight");

        Ok(Flight {
            flight_id: Some(flight_id),
            airline_id,
            embarkation_airport_id,
            destination_airport_id,
            aircraft_layout_id: None,
            number: new_flight.number.to_string(),
            departure: new_flight.departure,
            duration_minutes: new_flight.duration_minutes,
        })
    })
}

/// Deletes a flight. Its seats and passenger associations cascade away
/// with it.
///
/// # Errors
///
/// Returns an error if the flight does not exist.
pub fn delete_flight(conn: &mut SqliteConnection, flight_id: i64) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        queries::flights::get_flight(conn, flight_id)?;

        diesel::delete(flights::table.filter(flights::flight_id.eq(flight_id))).execute(conn)?;

        debug!(flight_id, "Deleted flight");
        Ok(())
    })
}

/// Associates a passenger with a flight.
///
/// # Errors
///
/// Returns an error if the flight or passenger does not exist, or the
/// passenger is already on the flight.
pub fn add_passenger_to_flight(
    conn: &mut SqliteConnection,
    flight_id: i64,
    passenger_id: i64,
) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        queries::flights::get_flight(conn, flight_id)?;
        queries::passengers::get_passenger(conn, passenger_id)?;

        diesel::insert_into(flight_passengers::table)
            .values((
                flight_passengers::flight_id.eq(flight_id),
                flight_passengers::passenger_id.eq(passenger_id),
            ))
            .execute(conn)
            .map_err(|e| {
                if is_unique_violation(&e) {
                    PersistenceError::PassengerAlreadyOnFlight {
                        flight_id,
                        passenger_id,
                    }
                } else {
                    e.into()
                }
            })?;

        debug!(flight_id, passenger_id, "Added passenger to flight");
        Ok(())
    })
}
