// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use skybook::EngineError;
use skybook_domain::DomainError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested airline was not found.
    AirlineNotFound(i64),
    /// No airline with the given name exists.
    AirlineNotFoundByName(String),
    /// The requested airport was not found.
    AirportNotFound(i64),
    /// No airport with the given code exists.
    AirportNotFoundByCode(String),
    /// The requested flight was not found.
    FlightNotFound(i64),
    /// The requested aircraft layout was not found.
    LayoutNotFound(i64),
    /// The requested row definition was not found.
    RowNotFound {
        /// The layout that was searched.
        layout_id: i64,
        /// The missing row number.
        row_number: u32,
    },
    /// The requested passenger was not found.
    PassengerNotFound(i64),
    /// An airline with the given name already exists.
    DuplicateAirline(String),
    /// An airport with the given code already exists.
    DuplicateAirport(String),
    /// A layout with the given identity already exists for the airline.
    DuplicateLayout {
        /// The owning airline.
        airline_id: i64,
        /// The aircraft model.
        aircraft: String,
        /// The layout name (possibly empty).
        name: String,
    },
    /// A row with the given number already exists in the layout.
    DuplicateRow {
        /// The layout the row was added to.
        layout_id: i64,
        /// The duplicate row number.
        row_number: u32,
    },
    /// A flight with the given number and departure already exists.
    DuplicateFlight {
        /// The flight number.
        number: String,
        /// The departure date and time.
        departure: String,
    },
    /// A passenger with the given passport number already exists.
    DuplicatePassport(String),
    /// The passenger is already associated with the flight.
    PassengerAlreadyOnFlight {
        /// The flight.
        flight_id: i64,
        /// The passenger.
        passenger_id: i64,
    },
    /// The airline cannot be deleted while layouts reference it.
    AirlineInUse(i64),
    /// The airport cannot be deleted while flights reference it.
    AirportInUse(i64),
    /// The layout cannot be deleted while flights reference it.
    LayoutInUse(i64),
    /// A field-level domain rule was violated.
    DomainViolation(DomainError),
    /// The seating engine rejected the requested change; nothing was
    /// persisted.
    EngineRejected(EngineError),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::AirlineNotFound(id) => write!(f, "Airline not found: {id}"),
            Self::AirlineNotFoundByName(name) => write!(f, "Airline not found: {name}"),
            Self::AirportNotFound(id) => write!(f, "Airport not found: {id}"),
            Self::AirportNotFoundByCode(code) => write!(f, "Airport not found: {code}"),
            Self::FlightNotFound(id) => write!(f, "Flight not found: {id}"),
            Self::LayoutNotFound(id) => write!(f, "Aircraft layout not found: {id}"),
            Self::RowNotFound {
                layout_id,
                row_number,
            } => {
                write!(f, "Row {row_number} not found in layout {layout_id}")
            }
            Self::PassengerNotFound(id) => write!(f, "Passenger not found: {id}"),
            Self::DuplicateAirline(name) => {
                write!(f, "An airline named '{name}' already exists")
            }
            Self::DuplicateAirport(code) => {
                write!(f, "An airport with code '{code}' already exists")
            }
            Self::DuplicateLayout {
                airline_id,
                aircraft,
                name,
            } => {
                write!(
                    f,
                    "Airline {airline_id} already has a layout '{name}' for aircraft '{aircraft}'"
                )
            }
            Self::DuplicateRow {
                layout_id,
                row_number,
            } => {
                write!(f, "Layout {layout_id} already has a row {row_number}")
            }
            Self::DuplicateFlight { number, departure } => {
                write!(f, "Flight {number} departing {departure} already exists")
            }
            Self::DuplicatePassport(passport_number) => {
                write!(
                    f,
                    "A passenger with passport number '{passport_number}' already exists"
                )
            }
            Self::PassengerAlreadyOnFlight {
                flight_id,
                passenger_id,
            } => {
                write!(
                    f,
                    "Passenger {passenger_id} is already on flight {flight_id}"
                )
            }
            Self::AirlineInUse(id) => {
                write!(f, "Airline {id} cannot be deleted: still referenced")
            }
            Self::AirportInUse(id) => {
                write!(f, "Airport {id} cannot be deleted: still referenced")
            }
            Self::LayoutInUse(id) => {
                write!(
                    f,
                    "Aircraft layout {id} cannot be deleted: applied to at least one flight"
                )
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::EngineRejected(err) => write!(f, "Seating change rejected: {err}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        Self::DatabaseError(err.to_string())
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<EngineError> for PersistenceError {
    fn from(err: EngineError) -> Self {
        Self::EngineRejected(err)
    }
}

/// Returns whether the error is a storage-level uniqueness violation.
///
/// Used at mutation sites to translate constraint failures into the typed
/// duplicate errors above instead of leaking raw database errors.
pub(crate) fn is_unique_violation(err: &diesel::result::Error) -> bool {
    matches!(
        err,
        diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _
        )
    )
}

/// Returns whether the error is a storage-level foreign key violation.
pub(crate) fn is_foreign_key_violation(err: &diesel::result::Error) -> bool {
    matches!(
        err,
        diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ForeignKeyViolation,
            _
        )
    )
}

/// Returns whether the error is a storage-level CHECK constraint violation.
pub(crate) fn is_check_violation(err: &diesel::result::Error) -> bool {
    matches!(
        err,
        diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::CheckViolation,
            _
        )
    )
}
