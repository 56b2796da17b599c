// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Airline name is empty or invalid.
    InvalidAirlineName(String),
    /// Airport code is not a 3-letter IATA code.
    InvalidAirportCode(String),
    /// Airport name is empty or invalid.
    InvalidAirportName(String),
    /// Airport timezone is not a recognized IANA timezone.
    InvalidTimezone(String),
    /// Flight number is empty or invalid.
    InvalidFlightNumber(String),
    /// Embarkation and destination airports are the same.
    SameEmbarkationAndDestination {
        /// The airport code used for both ends of the flight.
        code: String,
    },
    /// Seating class is empty or whitespace-only.
    InvalidSeatingClass(String),
    /// Seat letters are empty or whitespace-only.
    InvalidSeatLetters(String),
    /// Passenger name is empty or invalid.
    InvalidPassengerName(String),
    /// Passport number is empty or invalid.
    InvalidPassportNumber(String),
    /// Gender is not a recognized value.
    InvalidGender(String),
    /// Failed to parse a departure date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a departure time from a string.
    TimeParseError {
        /// The invalid time string.
        time_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a flight duration from a string.
    DurationParseError {
        /// The invalid duration string.
        duration_string: String,
        /// A description of what was wrong with it.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAirlineName(msg) => write!(f, "Invalid airline name: {msg}"),
            Self::InvalidAirportCode(msg) => write!(f, "Invalid airport code: {msg}"),
            Self::InvalidAirportName(msg) => write!(f, "Invalid airport name: {msg}"),
            Self::InvalidTimezone(tz) => write!(f, "Invalid airport timezone: {tz}"),
            Self::InvalidFlightNumber(msg) => write!(f, "Invalid flight number: {msg}"),
            Self::SameEmbarkationAndDestination { code } => {
                write!(
                    f,
                    "Embarkation and destination airports cannot both be {code}"
                )
            }
            Self::InvalidSeatingClass(msg) => write!(f, "Invalid seating class: {msg}"),
            Self::InvalidSeatLetters(msg) => write!(f, "Invalid seat letters: {msg}"),
            Self::InvalidPassengerName(msg) => write!(f, "Invalid passenger name: {msg}"),
            Self::InvalidPassportNumber(msg) => write!(f, "Invalid passport number: {msg}"),
            Self::InvalidGender(value) => write!(f, "Invalid gender: {value}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::TimeParseError { time_string, error } => {
                write!(f, "Failed to parse time '{time_string}': {error}")
            }
            Self::DurationParseError {
                duration_string,
                error,
            } => {
                write!(f, "Failed to parse duration '{duration_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
