// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while planning seating changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The candidate layout belongs to a different airline than the flight.
    LayoutNotForAirline {
        /// The airline owning the layout.
        layout_airline_id: i64,
        /// The airline operating the flight.
        flight_airline_id: i64,
    },
    /// The candidate layout is already applied to the flight.
    LayoutAlreadyApplied(i64),
    /// The candidate layout has fewer seats than the flight has passengers.
    InsufficientCapacity {
        /// The layout's total seat count.
        capacity: usize,
        /// The flight's passenger count.
        passenger_count: usize,
    },
    /// A seat operation was attempted on a flight with no seats.
    NoLayoutApplied,
    /// The passenger is not associated with the flight.
    PassengerNotOnFlight(i64),
    /// No seat with the requested number exists on the flight.
    SeatNotFound(String),
    /// The seat is already held by the requesting passenger.
    SeatAlreadyAllocatedToPassenger {
        /// The requested seat number.
        seat_number: String,
    },
    /// The seat is held by a different passenger.
    SeatAllocatedToOtherPassenger {
        /// The requested seat number.
        seat_number: String,
        /// The passenger currently holding the seat.
        passenger_id: i64,
    },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LayoutNotForAirline {
                layout_airline_id,
                flight_airline_id,
            } => {
                write!(
                    f,
                    "Layout belongs to airline {layout_airline_id}, not the flight's airline {flight_airline_id}"
                )
            }
            Self::LayoutAlreadyApplied(layout_id) => {
                write!(f, "Layout {layout_id} is already applied to the flight")
            }
            Self::InsufficientCapacity {
                capacity,
                passenger_count,
            } => {
                write!(
                    f,
                    "Layout has {capacity} seats but the flight has {passenger_count} passengers"
                )
            }
            Self::NoLayoutApplied => {
                write!(f, "The flight does not have an aircraft layout")
            }
            Self::PassengerNotOnFlight(passenger_id) => {
                write!(f, "Passenger {passenger_id} is not on the flight")
            }
            Self::SeatNotFound(seat_number) => {
                write!(f, "Seat {seat_number} does not exist on the flight")
            }
            Self::SeatAlreadyAllocatedToPassenger { seat_number } => {
                write!(f, "Seat {seat_number} is already allocated to the passenger")
            }
            Self::SeatAllocatedToOtherPassenger {
                seat_number,
                passenger_id,
            } => {
                write!(
                    f,
                    "Seat {seat_number} is already allocated to passenger {passenger_id}"
                )
            }
        }
    }
}

impl std::error::Error for EngineError {}
