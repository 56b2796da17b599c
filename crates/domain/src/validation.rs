// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates an airline name.
///
/// # Errors
///
/// Returns an error if the name is empty or whitespace-only.
pub fn validate_airline_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidAirlineName(String::from(
            "Airline name cannot be blank",
        )));
    }
    Ok(())
}

/// Validates airport fields.
///
/// The timezone identifier is validated separately, at the point it is
/// resolved, so that records imported before a timezone database update
/// still load.
///
/// # Errors
///
/// Returns an error if:
/// - The code is not exactly 3 ASCII letters
/// - The name is empty or whitespace-only
pub fn validate_airport_fields(code: &str, name: &str) -> Result<(), DomainError> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DomainError::InvalidAirportCode(format!(
            "Airport code must be 3 letters, got '{code}'"
        )));
    }

    if name.trim().is_empty() {
        return Err(DomainError::InvalidAirportName(String::from(
            "Airport name cannot be blank",
        )));
    }

    Ok(())
}

/// Validates flight fields.
///
/// # Errors
///
/// Returns an error if:
/// - The flight number is empty or whitespace-only
/// - The embarkation and destination airport codes are the same
pub fn validate_flight_fields(
    number: &str,
    embarkation_code: &str,
    destination_code: &str,
) -> Result<(), DomainError> {
    if number.trim().is_empty() {
        return Err(DomainError::InvalidFlightNumber(String::from(
            "Flight number cannot be blank",
        )));
    }

    if embarkation_code == destination_code {
        return Err(DomainError::SameEmbarkationAndDestination {
            code: embarkation_code.to_string(),
        });
    }

    Ok(())
}

/// Validates a row definition's seating class and seat letters.
///
/// This mirrors the storage-level CHECK constraints so the rule is
/// reported before an insert is attempted.
///
/// # Errors
///
/// Returns an error if either field is empty or whitespace-only.
pub fn validate_row_definition(seating_class: &str, seat_letters: &str) -> Result<(), DomainError> {
    if seating_class.trim().is_empty() {
        return Err(DomainError::InvalidSeatingClass(String::from(
            "Seating class cannot be blank",
        )));
    }

    if seat_letters.trim().is_empty() {
        return Err(DomainError::InvalidSeatLetters(String::from(
            "Seat letters cannot be blank",
        )));
    }

    Ok(())
}

/// Validates passenger fields.
///
/// # Errors
///
/// Returns an error if the name or passport number is empty or
/// whitespace-only.
pub fn validate_passenger_fields(name: &str, passport_number: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidPassengerName(String::from(
            "Passenger name cannot be blank",
        )));
    }

    if passport_number.trim().is_empty() {
        return Err(DomainError::InvalidPassportNumber(String::from(
            "Passport number cannot be blank",
        )));
    }

    Ok(())
}
