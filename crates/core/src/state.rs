// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use skybook_domain::SeatAssignment;

/// The seating-relevant state of one flight, as loaded from storage.
///
/// Seats must be in creation order (the order they were materialized when
/// the current layout was applied). Passengers must be in association
/// order. Both orderings feed the deterministic re-seating contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingState {
    /// The airline operating the flight.
    pub airline_id: i64,
    /// The layout currently applied to the flight, if any.
    pub aircraft_layout_id: Option<i64>,
    /// The passengers associated with the flight, in association order.
    pub passenger_ids: Vec<i64>,
    /// The flight's seats in creation order, empty if no layout has been
    /// applied.
    pub seats: Vec<SeatAssignment>,
}

impl SeatingState {
    /// Creates the state of a flight with no layout, no seats and no
    /// passengers.
    #[must_use]
    pub const fn new(airline_id: i64) -> Self {
        Self {
            airline_id,
            aircraft_layout_id: None,
            passenger_ids: Vec::new(),
            seats: Vec::new(),
        }
    }

    /// Returns the number of passengers associated with the flight.
    #[must_use]
    pub fn passenger_count(&self) -> usize {
        self.passenger_ids.len()
    }

    /// Returns the (seat number, passenger) pairs for every occupied seat,
    /// in seat creation order. Unoccupied seats carry no information
    /// forward and are dropped.
    #[must_use]
    pub fn occupied_seats(&self) -> Vec<(String, i64)> {
        self.seats
            .iter()
            .filter_map(|seat| {
                seat.passenger_id
                    .map(|passenger_id| (seat.seat_number.clone(), passenger_id))
            })
            .collect()
    }
}

/// The outcome of planning a layout application: the complete replacement
/// seat set, with prior allocations replayed and displaced passengers
/// re-seated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReallocationPlan {
    /// The new seats in creation order (row-major, letter order within each
    /// row), with their resolved occupants.
    pub seats: Vec<SeatAssignment>,
    /// How many passengers kept their previous seat number.
    pub preserved_count: usize,
    /// Passengers whose previous seat number does not exist in the new
    /// layout, in snapshot order.
    pub displaced: Vec<i64>,
    /// Displaced passengers for whom no free seat remained. Empty whenever
    /// the capacity check passed.
    pub unseated: Vec<i64>,
}

/// The outcome of planning a single-seat allocation: which seat to vacate,
/// if the passenger already holds one, and which seat to assign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMove {
    /// The passenger's current seat, to be vacated. `None` for a first
    /// allocation.
    pub vacated_seat: Option<String>,
    /// The seat to assign to the passenger.
    pub target_seat: String,
}
