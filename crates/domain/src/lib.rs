// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod flight;
mod layout;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use flight::{Flight, parse_departure, parse_duration_minutes};
pub use layout::{AircraftLayout, RowDefinition};
pub use types::{Airline, Airport, Gender, Passenger, SeatAssignment};
pub use validation::{
    validate_airline_name, validate_airport_fields, validate_flight_fields,
    validate_passenger_fields, validate_row_definition,
};
