// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use skybook::EngineError;
use skybook_domain::DomainError;
use skybook_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/engine/persistence errors and represent
/// the API contract. Lower-layer errors are translated explicitly and
/// never leaked directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A create or update would violate a uniqueness rule.
    DuplicateResource {
        /// The type of resource.
        resource_type: String,
        /// A human-readable description of the conflict.
        message: String,
    },
    /// A deletion was blocked because the target is still referenced.
    ResourceInUse {
        /// The type of resource.
        resource_type: String,
        /// A human-readable description of what still references it.
        message: String,
    },
    /// A seating rule was violated.
    SeatingRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// No boarding card generator is registered for the requested format.
    MissingCardGenerator {
        /// The requested card format.
        card_format: String,
    },
    /// Writing a boarding card file failed.
    CardWriteFailed {
        /// A description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::DuplicateResource {
                resource_type,
                message,
            } => {
                write!(f, "Duplicate {resource_type}: {message}")
            }
            Self::ResourceInUse {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} in use: {message}")
            }
            Self::SeatingRuleViolation { rule, message } => {
                write!(f, "Seating rule violation ({rule}): {message}")
            }
            Self::MissingCardGenerator { card_format } => {
                write!(
                    f,
                    "Boarding card generator not registered for format '{card_format}'"
                )
            }
            Self::CardWriteFailed { message } => {
                write!(f, "Failed to write boarding card: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Names the input field a domain validation error belongs to.
const fn domain_error_field(err: &DomainError) -> &'static str {
    match err {
        DomainError::InvalidAirlineName(_) => "name",
        DomainError::InvalidAirportCode(_) => "code",
        DomainError::InvalidAirportName(_) => "name",
        DomainError::InvalidTimezone(_) => "timezone",
        DomainError::InvalidFlightNumber(_) => "number",
        DomainError::SameEmbarkationAndDestination { .. } => "destination_code",
        DomainError::InvalidSeatingClass(_) => "seating_class",
        DomainError::InvalidSeatLetters(_) => "seat_letters",
        DomainError::InvalidPassengerName(_) => "name",
        DomainError::InvalidPassportNumber(_) => "passport_number",
        DomainError::InvalidGender(_) => "gender",
        DomainError::DateParseError { .. } => "departure_date",
        DomainError::TimeParseError { .. } => "departure_time",
        DomainError::DurationParseError { .. } => "duration",
    }
}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: &DomainError) -> ApiError {
    ApiError::InvalidInput {
        field: domain_error_field(err).to_string(),
        message: err.to_string(),
    }
}

/// Translates a seating engine error into an API error.
///
/// Seat lookups map to not-found; everything else is a rule violation
/// with a stable rule identifier the caller can branch on.
#[must_use]
pub fn translate_engine_error(err: &EngineError) -> ApiError {
    let rule: &str = match err {
        EngineError::LayoutNotForAirline { .. } => "cross-airline",
        EngineError::LayoutAlreadyApplied(_) => "layout-already-applied",
        EngineError::InsufficientCapacity { .. } => "insufficient-capacity",
        EngineError::NoLayoutApplied => "no-layout",
        EngineError::PassengerNotOnFlight(_) => "passenger-not-on-flight",
        EngineError::SeatAlreadyAllocatedToPassenger { .. } => "seat-already-allocated",
        EngineError::SeatAllocatedToOtherPassenger { .. } => "seat-occupied",
        EngineError::SeatNotFound(seat_number) => {
            return ApiError::ResourceNotFound {
                resource_type: String::from("Seat"),
                message: format!("No seat {seat_number} on the flight"),
            };
        }
    };

    ApiError::SeatingRuleViolation {
        rule: rule.to_string(),
        message: err.to_string(),
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: &PersistenceError) -> ApiError {
    match err {
        PersistenceError::AirlineNotFound(_) | PersistenceError::AirlineNotFoundByName(_) => {
            ApiError::ResourceNotFound {
                resource_type: String::from("Airline"),
                message: err.to_string(),
            }
        }
        PersistenceError::AirportNotFound(_) | PersistenceError::AirportNotFoundByCode(_) => {
            ApiError::ResourceNotFound {
                resource_type: String::from("Airport"),
                message: err.to_string(),
            }
        }
        PersistenceError::FlightNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Flight"),
            message: err.to_string(),
        },
        PersistenceError::LayoutNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Aircraft layout"),
            message: err.to_string(),
        },
        PersistenceError::RowNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Row definition"),
            message: err.to_string(),
        },
        PersistenceError::PassengerNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Passenger"),
            message: err.to_string(),
        },
        PersistenceError::DuplicateAirline(_) => ApiError::DuplicateResource {
            resource_type: String::from("Airline"),
            message: err.to_string(),
        },
        PersistenceError::DuplicateAirport(_) => ApiError::DuplicateResource {
            resource_type: String::from("Airport"),
            message: err.to_string(),
        },
        PersistenceError::DuplicateLayout { .. } => ApiError::DuplicateResource {
            resource_type: String::from("Aircraft layout"),
            message: err.to_string(),
        },
        PersistenceError::DuplicateRow { .. } => ApiError::DuplicateResource {
            resource_type: String::from("Row definition"),
            message: err.to_string(),
        },
        PersistenceError::DuplicateFlight { .. } => ApiError::DuplicateResource {
            resource_type: String::from("Flight"),
            message: err.to_string(),
        },
        PersistenceError::DuplicatePassport(_) => ApiError::DuplicateResource {
            resource_type: String::from("Passenger"),
            message: err.to_string(),
        },
        PersistenceError::PassengerAlreadyOnFlight { .. } => ApiError::DuplicateResource {
            resource_type: String::from("Flight passenger"),
            message: err.to_string(),
        },
        PersistenceError::AirlineInUse(_) => ApiError::ResourceInUse {
            resource_type: String::from("Airline"),
            message: err.to_string(),
        },
        PersistenceError::AirportInUse(_) => ApiError::ResourceInUse {
            resource_type: String::from("Airport"),
            message: err.to_string(),
        },
        PersistenceError::LayoutInUse(_) => ApiError::ResourceInUse {
            resource_type: String::from("Aircraft layout"),
            message: err.to_string(),
        },
        PersistenceError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        PersistenceError::EngineRejected(engine_err) => translate_engine_error(engine_err),
        PersistenceError::DatabaseError(_)
        | PersistenceError::DatabaseConnectionFailed(_)
        | PersistenceError::MigrationFailed(_)
        | PersistenceError::QueryFailed(_)
        | PersistenceError::InitializationError(_)
        | PersistenceError::ForeignKeyEnforcementNotEnabled => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        translate_persistence_error(&err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(&err)
    }
}
