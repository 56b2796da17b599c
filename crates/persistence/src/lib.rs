// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Skybook flight booking system.
//!
//! This crate provides `SQLite` persistence, via Diesel, for the flight
//! booking schema: airlines, airports, flights, passengers, aircraft
//! layouts and seats. It also executes the seating engine's plans, so the
//! whole validate-swap-replay sequence of a layout application commits or
//! rolls back as one unit.
//!
//! ## Database Backend
//!
//! `SQLite` is the single supported backend:
//!
//! - In-memory databases for unit and integration tests
//! - File-based databases (with WAL mode) for real deployments
//!
//! Foreign key enforcement is switched on at connection time and verified
//! at startup; the referential guards in this system depend on it.
//!
//! ## Testing Philosophy
//!
//! - Standard tests (`cargo test`) run against unique in-memory databases
//! - No external infrastructure is required

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use skybook::{ReallocationPlan, SeatMove, SeatingState};
use skybook_domain::{AircraftLayout, Airline, Airport, Flight, Passenger, RowDefinition, SeatAssignment};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use mutations::flights::NewFlight;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique sequential
/// ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the flight booking schema.
///
/// One adapter owns one `SQLite` connection. Every mutating method runs
/// in its own transaction; a failure on any path leaves the database as
/// it was.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite`
    /// database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based
    /// collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_skybook_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite`
    /// database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError(String::from("Invalid database path"))
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Airlines
    // ========================================================================

    /// Creates an airline.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or already taken.
    pub fn create_airline(&mut self, name: &str) -> Result<Airline, PersistenceError> {
        mutations::airlines::create_airline(&mut self.conn, name)
    }

    /// Retrieves an airline by its canonical ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the airline does not exist.
    pub fn get_airline_by_id(&mut self, airline_id: i64) -> Result<Airline, PersistenceError> {
        queries::airlines::get_airline_by_id(&mut self.conn, airline_id)
    }

    /// Retrieves an airline by its unique name.
    ///
    /// # Errors
    ///
    /// Returns an error if no airline with the name exists.
    pub fn get_airline_by_name(&mut self, name: &str) -> Result<Airline, PersistenceError> {
        queries::airlines::get_airline_by_name(&mut self.conn, name)
    }

    /// Lists all airlines, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_airlines(&mut self) -> Result<Vec<Airline>, PersistenceError> {
        queries::airlines::list_airlines(&mut self.conn)
    }

    /// Deletes an airline. Flights cascade; layouts block.
    ///
    /// # Errors
    ///
    /// Returns an error if the airline does not exist or is still
    /// referenced.
    pub fn delete_airline(&mut self, airline_id: i64) -> Result<(), PersistenceError> {
        mutations::airlines::delete_airline(&mut self.conn, airline_id)
    }

    // ========================================================================
    // Airports
    // ========================================================================

    /// Creates an airport.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is invalid, the timezone is
    /// unrecognized, or the code is already taken.
    pub fn create_airport(
        &mut self,
        code: &str,
        name: &str,
        timezone: &str,
    ) -> Result<Airport, PersistenceError> {
        mutations::airports::create_airport(&mut self.conn, code, name, timezone)
    }

    /// Retrieves an airport by its canonical ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the airport does not exist.
    pub fn get_airport_by_id(&mut self, airport_id: i64) -> Result<Airport, PersistenceError> {
        queries::airports::get_airport_by_id(&mut self.conn, airport_id)
    }

    /// Retrieves an airport by its unique 3-letter code.
    ///
    /// # Errors
    ///
    /// Returns an error if no airport with the code exists.
    pub fn get_airport_by_code(&mut self, code: &str) -> Result<Airport, PersistenceError> {
        queries::airports::get_airport_by_code(&mut self.conn, code)
    }

    /// Lists all airports, ordered by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_airports(&mut self) -> Result<Vec<Airport>, PersistenceError> {
        queries::airports::list_airports(&mut self.conn)
    }

    /// Deletes an airport.
    ///
    /// # Errors
    ///
    /// Returns an error if the airport does not exist or is still
    /// referenced by a flight.
    pub fn delete_airport(&mut self, airport_id: i64) -> Result<(), PersistenceError> {
        mutations::airports::delete_airport(&mut self.conn, airport_id)
    }

    // ========================================================================
    // Layout catalog
    // ========================================================================

    /// Creates an aircraft layout with no rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the airline does not exist or the (airline,
    /// aircraft, name) triple is already taken.
    pub fn create_layout(
        &mut self,
        airline_id: i64,
        aircraft: &str,
        name: &str,
    ) -> Result<AircraftLayout, PersistenceError> {
        mutations::layouts::create_layout(&mut self.conn, airline_id, aircraft, name)
    }

    /// Adds a row definition to a layout.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is blank, the layout does not exist, or
    /// the row number is already taken.
    pub fn add_row_to_layout(
        &mut self,
        layout_id: i64,
        row_number: u32,
        seating_class: &str,
        seat_letters: &str,
    ) -> Result<RowDefinition, PersistenceError> {
        mutations::layouts::add_row_to_layout(
            &mut self.conn,
            layout_id,
            row_number,
            seating_class,
            seat_letters,
        )
    }

    /// Updates a row definition in place.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is blank or the layout or row does not
    /// exist.
    pub fn update_row_definition(
        &mut self,
        layout_id: i64,
        row_number: u32,
        seating_class: &str,
        seat_letters: &str,
    ) -> Result<(), PersistenceError> {
        mutations::layouts::update_row_definition(
            &mut self.conn,
            layout_id,
            row_number,
            seating_class,
            seat_letters,
        )
    }

    /// Deletes a row definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout or row does not exist.
    pub fn delete_row_from_layout(
        &mut self,
        layout_id: i64,
        row_number: u32,
    ) -> Result<(), PersistenceError> {
        mutations::layouts::delete_row_from_layout(&mut self.conn, layout_id, row_number)
    }

    /// Retrieves a layout with its row definitions.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout does not exist.
    pub fn get_layout(&mut self, layout_id: i64) -> Result<AircraftLayout, PersistenceError> {
        queries::layouts::get_layout(&mut self.conn, layout_id)
    }

    /// Lists layouts ordered by aircraft model and layout name, optionally
    /// restricted to one airline.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_layouts(
        &mut self,
        airline_id: Option<i64>,
    ) -> Result<Vec<AircraftLayout>, PersistenceError> {
        queries::layouts::list_layouts(&mut self.conn, airline_id)
    }

    /// Returns a layout's total seat count.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout does not exist.
    pub fn layout_capacity(&mut self, layout_id: i64) -> Result<usize, PersistenceError> {
        queries::layouts::layout_capacity(&mut self.conn, layout_id)
    }

    /// Deletes a layout and its rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout does not exist or is applied to a
    /// flight.
    pub fn delete_layout(&mut self, layout_id: i64) -> Result<(), PersistenceError> {
        mutations::layouts::delete_layout(&mut self.conn, layout_id)
    }

    /// Creates a layout and all of its rows in one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any constituent create fails; nothing is
    /// persisted in that case.
    pub fn import_layout(
        &mut self,
        airline_id: i64,
        aircraft: &str,
        name: &str,
        rows: &[RowDefinition],
    ) -> Result<AircraftLayout, PersistenceError> {
        mutations::layouts::import_layout(&mut self.conn, airline_id, aircraft, name, rows)
    }

    // ========================================================================
    // Flights & passengers
    // ========================================================================

    /// Creates a flight.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is invalid, a referenced entity is
    /// missing, or the (number, departure) pair is already taken.
    pub fn create_flight(&mut self, new_flight: &NewFlight<'_>) -> Result<Flight, PersistenceError> {
        mutations::flights::create_flight(&mut self.conn, new_flight)
    }

    /// Retrieves a flight by its canonical ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the flight does not exist.
    pub fn get_flight(&mut self, flight_id: i64) -> Result<Flight, PersistenceError> {
        queries::flights::get_flight(&mut self.conn, flight_id)
    }

    /// Lists all flights, ordered by departure.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_flights(&mut self) -> Result<Vec<Flight>, PersistenceError> {
        queries::flights::list_flights(&mut self.conn)
    }

    /// Deletes a flight along with its seats and passenger associations.
    ///
    /// # Errors
    ///
    /// Returns an error if the flight does not exist.
    pub fn delete_flight(&mut self, flight_id: i64) -> Result<(), PersistenceError> {
        mutations::flights::delete_flight(&mut self.conn, flight_id)
    }

    /// Creates a passenger.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is blank or the passport number is
    /// already taken.
    pub fn create_passenger(
        &mut self,
        passenger: &Passenger,
    ) -> Result<Passenger, PersistenceError> {
        mutations::passengers::create_passenger(&mut self.conn, passenger)
    }

    /// Retrieves a passenger by their canonical ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the passenger does not exist.
    pub fn get_passenger(&mut self, passenger_id: i64) -> Result<Passenger, PersistenceError> {
        queries::passengers::get_passenger(&mut self.conn, passenger_id)
    }

    /// Associates a passenger with a flight.
    ///
    /// # Errors
    ///
    /// Returns an error if either entity is missing or the association
    /// already exists.
    pub fn add_passenger_to_flight(
        &mut self,
        flight_id: i64,
        passenger_id: i64,
    ) -> Result<(), PersistenceError> {
        mutations::flights::add_passenger_to_flight(&mut self.conn, flight_id, passenger_id)
    }

    /// Removes a passenger from a flight, vacates their seats and deletes
    /// the passenger record.
    ///
    /// # Errors
    ///
    /// Returns an error if the flight or passenger does not exist.
    pub fn delete_passenger(
        &mut self,
        flight_id: i64,
        passenger_id: i64,
    ) -> Result<(), PersistenceError> {
        mutations::passengers::delete_passenger(&mut self.conn, flight_id, passenger_id)
    }

    /// Lists the passengers associated with a flight.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_passengers_for_flight(
        &mut self,
        flight_id: i64,
    ) -> Result<Vec<Passenger>, PersistenceError> {
        queries::passengers::list_passengers_for_flight(&mut self.conn, flight_id)
    }

    // ========================================================================
    // Seating
    // ========================================================================

    /// Lists a flight's seats in creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_seats(&mut self, flight_id: i64) -> Result<Vec<SeatAssignment>, PersistenceError> {
        queries::flights::list_seats(&mut self.conn, flight_id)
    }

    /// Assembles the seating-relevant state of a flight.
    ///
    /// # Errors
    ///
    /// Returns an error if the flight does not exist.
    pub fn get_seating_state(&mut self, flight_id: i64) -> Result<SeatingState, PersistenceError> {
        queries::flights::get_seating_state(&mut self.conn, flight_id)
    }

    /// Applies an aircraft layout to a flight as one atomic unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the application or any step
    /// fails; the flight's prior seats and layout are unchanged in that
    /// case.
    pub fn apply_aircraft_layout(
        &mut self,
        flight_id: i64,
        layout_id: i64,
    ) -> Result<ReallocationPlan, PersistenceError> {
        mutations::seating::apply_aircraft_layout(&mut self.conn, flight_id, layout_id)
    }

    /// Allocates a seat to a passenger, vacating any seat they already
    /// hold on the flight.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the allocation or any step
    /// fails.
    pub fn allocate_seat(
        &mut self,
        flight_id: i64,
        passenger_id: i64,
        seat_number: &str,
    ) -> Result<SeatMove, PersistenceError> {
        mutations::seating::allocate_seat(&mut self.conn, flight_id, passenger_id, seat_number)
    }
}
