// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An airline that operates flights and owns aircraft layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airline {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the airline has not been persisted yet.
    pub airline_id: Option<i64>,
    /// The airline name. Unique across all airlines.
    pub name: String,
}

impl Airline {
    /// Creates a new `Airline` without a persisted ID.
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            airline_id: None,
            name,
        }
    }

    /// Creates an `Airline` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(airline_id: i64, name: String) -> Self {
        Self {
            airline_id: Some(airline_id),
            name,
        }
    }
}

/// An airport, identified by its 3-letter IATA code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the airport has not been persisted yet.
    pub airport_id: Option<i64>,
    /// The 3-letter IATA code, e.g. "LGW". Unique across all airports.
    pub code: String,
    /// The airport name, e.g. "London Gatwick".
    pub name: String,
    /// The IANA timezone identifier, e.g. "Europe/London".
    pub timezone: String,
}

impl Airport {
    /// Creates a new `Airport` without a persisted ID.
    #[must_use]
    pub const fn new(code: String, name: String, timezone: String) -> Self {
        Self {
            airport_id: None,
            code,
            name,
            timezone,
        }
    }

    /// Creates an `Airport` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(airport_id: i64, code: String, name: String, timezone: String) -> Self {
        Self {
            airport_id: Some(airport_id),
            code,
            name,
            timezone,
        }
    }

    /// Resolves the stored timezone identifier to a `chrono_tz` timezone.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored identifier is not a recognized IANA
    /// timezone.
    pub fn tz(&self) -> Result<Tz, DomainError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| DomainError::InvalidTimezone(self.timezone.clone()))
    }
}

/// Passenger gender as recorded on travel documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Recorded as "M".
    Male,
    /// Recorded as "F".
    Female,
}

impl Gender {
    /// Converts this gender to its single-letter representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            _ => Err(DomainError::InvalidGender(s.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A passenger. Passengers exist independently of flights and may be
/// associated with any number of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the passenger has not been persisted yet.
    pub passenger_id: Option<i64>,
    /// The passenger's full name.
    pub name: String,
    /// The passenger's gender.
    pub gender: Gender,
    /// The passenger's date of birth.
    pub dob: NaiveDate,
    /// The passenger's nationality.
    pub nationality: String,
    /// The passenger's country of residency.
    pub residency: String,
    /// The passport number. Unique across all passengers.
    pub passport_number: String,
}

impl Passenger {
    /// Creates a new `Passenger` without a persisted ID.
    #[must_use]
    pub const fn new(
        name: String,
        gender: Gender,
        dob: NaiveDate,
        nationality: String,
        residency: String,
        passport_number: String,
    ) -> Self {
        Self {
            passenger_id: None,
            name,
            gender,
            dob,
            nationality,
            residency,
            passport_number,
        }
    }
}

/// A concrete seat on a flight, generated from an aircraft layout and
/// optionally bound to a passenger.
///
/// Seat identity is not stable across layout changes. Only the seat number
/// string is carried forward when a new layout is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    /// The seat number, e.g. "12A".
    pub seat_number: String,
    /// The passenger currently holding the seat, if any.
    pub passenger_id: Option<i64>,
}

impl SeatAssignment {
    /// Creates an unoccupied seat with the given number.
    #[must_use]
    pub const fn unassigned(seat_number: String) -> Self {
        Self {
            seat_number,
            passenger_id: None,
        }
    }

    /// Creates a seat occupied by the given passenger.
    #[must_use]
    pub const fn occupied(seat_number: String, passenger_id: i64) -> Self {
        Self {
            seat_number,
            passenger_id: Some(passenger_id),
        }
    }

    /// Returns whether the seat has no passenger bound to it.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.passenger_id.is_none()
    }
}
