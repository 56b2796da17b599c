// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers translate request shapes into persistence calls and
//! persistence/engine errors into [`ApiError`]s. They hold no state of
//! their own; the caller owns the [`Persistence`] adapter.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use skybook::{ReallocationPlan, SeatMove};
use skybook_domain::{
    AircraftLayout, Airline, Airport, Flight, Gender, Passenger, parse_departure,
    parse_duration_minutes,
};
use skybook_persistence::{NewFlight, Persistence};

use crate::error::ApiError;
use crate::request_response::{
    AirlineInfo, AirportInfo, AllocateSeatResponse, ApplyLayoutResponse, CreateFlightRequest,
    CreatePassengerRequest, FlightInfo, LayoutInfo, PassengerInfo, RowInfo, SeatInfo,
};

fn into_airline_info(airline: Airline) -> AirlineInfo {
    AirlineInfo {
        airline_id: airline.airline_id.unwrap_or_default(),
        name: airline.name,
    }
}

pub(crate) fn into_airport_info(airport: Airport) -> AirportInfo {
    AirportInfo {
        airport_id: airport.airport_id.unwrap_or_default(),
        code: airport.code,
        name: airport.name,
        timezone: airport.timezone,
    }
}

pub(crate) fn into_layout_info(layout: AircraftLayout) -> LayoutInfo {
    let capacity: usize = layout.capacity();
    LayoutInfo {
        layout_id: layout.layout_id.unwrap_or_default(),
        airline_id: layout.airline_id,
        aircraft: layout.aircraft,
        name: layout.name,
        capacity,
        rows: layout
            .rows
            .into_iter()
            .map(|row| RowInfo {
                number: row.number,
                seating_class: row.seating_class,
                seat_letters: row.seat_letters,
            })
            .collect(),
    }
}

fn into_passenger_info(passenger: Passenger) -> PassengerInfo {
    PassengerInfo {
        passenger_id: passenger.passenger_id.unwrap_or_default(),
        name: passenger.name,
        gender: passenger.gender.as_str().to_string(),
        dob: passenger.dob.format("%Y-%m-%d").to_string(),
        nationality: passenger.nationality,
        residency: passenger.residency,
        passport_number: passenger.passport_number,
    }
}

fn into_flight_info(
    persistence: &mut Persistence,
    flight: Flight,
) -> Result<FlightInfo, ApiError> {
    let flight_id: i64 = flight.flight_id.unwrap_or_default();
    let capacity: usize = persistence.list_seats(flight_id)?.len();
    let passenger_count: usize = persistence.list_passengers_for_flight(flight_id)?.len();
    let available_capacity: usize = capacity.saturating_sub(passenger_count);

    Ok(FlightInfo {
        flight_id,
        airline_id: flight.airline_id,
        embarkation_airport_id: flight.embarkation_airport_id,
        destination_airport_id: flight.destination_airport_id,
        aircraft_layout_id: flight.aircraft_layout_id,
        number: flight.number.clone(),
        departs_utc: flight.departure.format("%Y-%m-%d %H:%M:%S").to_string(),
        duration: flight.formatted_duration(),
        capacity,
        passenger_count,
        available_capacity,
    })
}

// ============================================================================
// Airlines
// ============================================================================

/// Creates an airline.
///
/// # Errors
///
/// Returns an error if the name is blank or already taken.
pub fn create_airline(
    persistence: &mut Persistence,
    name: &str,
) -> Result<AirlineInfo, ApiError> {
    Ok(into_airline_info(persistence.create_airline(name)?))
}

/// Lists all airlines, ordered by name.
///
/// # Errors
///
/// Returns an error if the underlying query fails.
pub fn list_airlines(persistence: &mut Persistence) -> Result<Vec<AirlineInfo>, ApiError> {
    Ok(persistence
        .list_airlines()?
        .into_iter()
        .map(into_airline_info)
        .collect())
}

/// Retrieves an airline by its canonical ID.
///
/// # Errors
///
/// Returns an error if the airline does not exist.
pub fn get_airline_by_id(
    persistence: &mut Persistence,
    airline_id: i64,
) -> Result<AirlineInfo, ApiError> {
    Ok(into_airline_info(persistence.get_airline_by_id(airline_id)?))
}

/// Retrieves an airline by its unique name.
///
/// # Errors
///
/// Returns an error if no airline with the name exists.
pub fn get_airline_by_name(
    persistence: &mut Persistence,
    name: &str,
) -> Result<AirlineInfo, ApiError> {
    Ok(into_airline_info(persistence.get_airline_by_name(name)?))
}

/// Deletes an airline.
///
/// # Errors
///
/// Returns an error if the airline does not exist or is still referenced.
pub fn delete_airline(persistence: &mut Persistence, airline_id: i64) -> Result<(), ApiError> {
    Ok(persistence.delete_airline(airline_id)?)
}

// ============================================================================
// Airports
// ============================================================================

/// Creates an airport.
///
/// # Errors
///
/// Returns an error if a field is invalid or the code is already taken.
pub fn create_airport(
    persistence: &mut Persistence,
    code: &str,
    name: &str,
    timezone: &str,
) -> Result<AirportInfo, ApiError> {
    Ok(into_airport_info(
        persistence.create_airport(code, name, timezone)?,
    ))
}

/// Lists all airports, ordered by code.
///
/// # Errors
///
/// Returns an error if the underlying query fails.
pub fn list_airports(persistence: &mut Persistence) -> Result<Vec<AirportInfo>, ApiError> {
    Ok(persistence
        .list_airports()?
        .into_iter()
        .map(into_airport_info)
        .collect())
}

/// Retrieves an airport by its unique 3-letter code.
///
/// # Errors
///
/// Returns an error if no airport with the code exists.
pub fn get_airport_by_code(
    persistence: &mut Persistence,
    code: &str,
) -> Result<AirportInfo, ApiError> {
    Ok(into_airport_info(persistence.get_airport_by_code(code)?))
}

/// Deletes an airport.
///
/// # Errors
///
/// Returns an error if the airport does not exist or is still referenced.
pub fn delete_airport(persistence: &mut Persistence, airport_id: i64) -> Result<(), ApiError> {
    Ok(persistence.delete_airport(airport_id)?)
}

// ============================================================================
// Layout catalog
// ============================================================================

/// Creates an aircraft layout with no rows.
///
/// # Errors
///
/// Returns an error if the airline does not exist or the layout identity
/// is already taken.
pub fn create_layout(
    persistence: &mut Persistence,
    airline_id: i64,
    aircraft: &str,
    name: &str,
) -> Result<LayoutInfo, ApiError> {
    Ok(into_layout_info(
        persistence.create_layout(airline_id, aircraft, name)?,
    ))
}

/// Adds a row definition to a layout.
///
/// # Errors
///
/// Returns an error if a field is blank, the layout is missing, or the
/// row number is already taken.
pub fn add_row_to_layout(
    persistence: &mut Persistence,
    layout_id: i64,
    row_number: u32,
    seating_class: &str,
    seat_letters: &str,
) -> Result<RowInfo, ApiError> {
    let row = persistence.add_row_to_layout(layout_id, row_number, seating_class, seat_letters)?;
    Ok(RowInfo {
        number: row.number,
        seating_class: row.seating_class,
        seat_letters: row.seat_letters,
    })
}

/// Updates a row definition in place.
///
/// # Errors
///
/// Returns an error if a field is blank or the layout or row is missing.
pub fn update_row_definition(
    persistence: &mut Persistence,
    layout_id: i64,
    row_number: u32,
    seating_class: &str,
    seat_letters: &str,
) -> Result<(), ApiError> {
    Ok(persistence.update_row_definition(layout_id, row_number, seating_class, seat_letters)?)
}

/// Deletes a row definition.
///
/// # Errors
///
/// Returns an error if the layout or row is missing.
pub fn delete_row_from_layout(
    persistence: &mut Persistence,
    layout_id: i64,
    row_number: u32,
) -> Result<(), ApiError> {
    Ok(persistence.delete_row_from_layout(layout_id, row_number)?)
}

/// Retrieves a layout with its rows and capacity.
///
/// # Errors
///
/// Returns an error if the layout does not exist.
pub fn get_layout(persistence: &mut Persistence, layout_id: i64) -> Result<LayoutInfo, ApiError> {
    Ok(into_layout_info(persistence.get_layout(layout_id)?))
}

/// Lists layouts ordered by aircraft model and layout name, optionally
/// restricted to one airline.
///
/// # Errors
///
/// Returns an error if the underlying query fails.
pub fn list_layouts(
    persistence: &mut Persistence,
    airline_id: Option<i64>,
) -> Result<Vec<LayoutInfo>, ApiError> {
    Ok(persistence
        .list_layouts(airline_id)?
        .into_iter()
        .map(into_layout_info)
        .collect())
}

/// Deletes a layout.
///
/// # Errors
///
/// Returns an error if the layout does not exist or is applied to a
/// flight.
pub fn delete_layout(persistence: &mut Persistence, layout_id: i64) -> Result<(), ApiError> {
    Ok(persistence.delete_layout(layout_id)?)
}

// ============================================================================
// Flights
// ============================================================================

/// Creates a flight from form-shaped input.
///
/// # Errors
///
/// Returns an error if a date, time or duration fails to parse, a field
/// is invalid, a referenced entity is missing, or the flight identity is
/// already taken.
pub fn create_flight(
    persistence: &mut Persistence,
    request: &CreateFlightRequest,
) -> Result<FlightInfo, ApiError> {
    let departure: NaiveDateTime =
        parse_departure(&request.departure_date, &request.departure_time)?;
    let duration_minutes: i64 = parse_duration_minutes(&request.duration)?;

    let flight: Flight = persistence.create_flight(&NewFlight {
        airline_name: &request.airline_name,
        embarkation_code: &request.embarkation_code,
        destination_code: &request.destination_code,
        number: &request.number,
        departure,
        duration_minutes,
    })?;

    into_flight_info(persistence, flight)
}

/// Retrieves a flight with its derived seating figures.
///
/// # Errors
///
/// Returns an error if the flight does not exist.
pub fn get_flight(persistence: &mut Persistence, flight_id: i64) -> Result<FlightInfo, ApiError> {
    let flight: Flight = persistence.get_flight(flight_id)?;
    into_flight_info(persistence, flight)
}

/// Lists all flights, ordered by departure.
///
/// # Errors
///
/// Returns an error if the underlying query fails.
pub fn list_flights(persistence: &mut Persistence) -> Result<Vec<FlightInfo>, ApiError> {
    let flights: Vec<Flight> = persistence.list_flights()?;
    flights
        .into_iter()
        .map(|flight| into_flight_info(persistence, flight))
        .collect()
}

/// Deletes a flight along with its seats and passenger associations.
///
/// # Errors
///
/// Returns an error if the flight does not exist.
pub fn delete_flight(persistence: &mut Persistence, flight_id: i64) -> Result<(), ApiError> {
    Ok(persistence.delete_flight(flight_id)?)
}

// ============================================================================
// Passengers
// ============================================================================

/// Creates a passenger from form-shaped input.
///
/// # Errors
///
/// Returns an error if the gender or date of birth fails to parse, a
/// field is blank, or the passport number is already taken.
pub fn create_passenger(
    persistence: &mut Persistence,
    request: &CreatePassengerRequest,
) -> Result<PassengerInfo, ApiError> {
    let gender: Gender = Gender::from_str(&request.gender)?;
    let dob: NaiveDate =
        NaiveDate::parse_from_str(&request.dob, "%Y-%m-%d").map_err(|e| ApiError::InvalidInput {
            field: String::from("dob"),
            message: format!("Failed to parse date of birth '{}': {e}", request.dob),
        })?;

    let passenger: Passenger = Passenger::new(
        request.name.clone(),
        gender,
        dob,
        request.nationality.clone(),
        request.residency.clone(),
        request.passport_number.clone(),
    );

    Ok(into_passenger_info(persistence.create_passenger(&passenger)?))
}

/// Associates a passenger with a flight.
///
/// # Errors
///
/// Returns an error if either entity is missing or the association
/// already exists.
pub fn add_passenger_to_flight(
    persistence: &mut Persistence,
    flight_id: i64,
    passenger_id: i64,
) -> Result<(), ApiError> {
    Ok(persistence.add_passenger_to_flight(flight_id, passenger_id)?)
}

/// Removes a passenger from a flight, vacating any seat they hold, and
/// deletes the passenger record.
///
/// # Errors
///
/// Returns an error if the flight or passenger does not exist.
pub fn delete_passenger(
    persistence: &mut Persistence,
    flight_id: i64,
    passenger_id: i64,
) -> Result<(), ApiError> {
    Ok(persistence.delete_passenger(flight_id, passenger_id)?)
}

/// Lists the passengers associated with a flight.
///
/// # Errors
///
/// Returns an error if the underlying query fails.
pub fn list_flight_passengers(
    persistence: &mut Persistence,
    flight_id: i64,
) -> Result<Vec<PassengerInfo>, ApiError> {
    Ok(persistence
        .list_passengers_for_flight(flight_id)?
        .into_iter()
        .map(into_passenger_info)
        .collect())
}

// ============================================================================
// Seating
// ============================================================================

/// Applies an aircraft layout to a flight, preserving seat allocations by
/// seat number and re-seating displaced passengers.
///
/// # Errors
///
/// Returns an error if the flight or layout is missing or the seating
/// engine rejects the application; the flight is unchanged in that case.
pub fn apply_aircraft_layout(
    persistence: &mut Persistence,
    flight_id: i64,
    layout_id: i64,
) -> Result<ApplyLayoutResponse, ApiError> {
    let plan: ReallocationPlan = persistence.apply_aircraft_layout(flight_id, layout_id)?;

    Ok(ApplyLayoutResponse {
        flight_id,
        layout_id,
        capacity: plan.seats.len(),
        preserved: plan.preserved_count,
        displaced: plan.displaced.len(),
    })
}

/// Allocates a seat to a passenger, vacating any seat they already hold
/// on the flight.
///
/// # Errors
///
/// Returns an error if the seating engine rejects the allocation.
pub fn allocate_seat(
    persistence: &mut Persistence,
    flight_id: i64,
    passenger_id: i64,
    seat_number: &str,
) -> Result<AllocateSeatResponse, ApiError> {
    let seat_move: SeatMove = persistence.allocate_seat(flight_id, passenger_id, seat_number)?;

    Ok(AllocateSeatResponse {
        flight_id,
        passenger_id,
        seat_number: seat_move.target_seat,
        vacated_seat: seat_move.vacated_seat,
    })
}

/// Lists a flight's seats in creation order.
///
/// # Errors
///
/// Returns an error if the underlying query fails.
pub fn list_seats(
    persistence: &mut Persistence,
    flight_id: i64,
) -> Result<Vec<SeatInfo>, ApiError> {
    Ok(persistence
        .list_seats(flight_id)?
        .into_iter()
        .map(|seat| SeatInfo {
            seat_number: seat.seat_number,
            passenger_id: seat.passenger_id,
        })
        .collect())
}
