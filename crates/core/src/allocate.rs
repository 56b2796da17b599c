// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::EngineError;
use crate::state::{SeatMove, SeatingState};
use skybook_domain::SeatAssignment;

/// Plans the allocation of a seat to a passenger.
///
/// When the passenger already holds a different seat on the flight, the
/// plan vacates it, making the operation a move. Requesting the seat the
/// passenger already holds is rejected rather than treated as a no-op.
///
/// # Arguments
///
/// * `state` - The flight's current seating state
/// * `passenger_id` - The passenger to seat
/// * `seat_number` - The requested seat number, e.g. "28A"
///
/// # Errors
///
/// Returns an error if:
/// - The flight has no seats
/// - The passenger is not associated with the flight
/// - No seat with the requested number exists
/// - The seat is already held by this passenger, or by another
pub fn plan_seat_allocation(
    state: &SeatingState,
    passenger_id: i64,
    seat_number: &str,
) -> Result<SeatMove, EngineError> {
    if state.seats.is_empty() {
        return Err(EngineError::NoLayoutApplied);
    }

    if !state.passenger_ids.contains(&passenger_id) {
        return Err(EngineError::PassengerNotOnFlight(passenger_id));
    }

    let target: &SeatAssignment = state
        .seats
        .iter()
        .find(|seat| seat.seat_number == seat_number)
        .ok_or_else(|| EngineError::SeatNotFound(seat_number.to_string()))?;

    match target.passenger_id {
        Some(holder) if holder == passenger_id => {
            return Err(EngineError::SeatAlreadyAllocatedToPassenger {
                seat_number: seat_number.to_string(),
            });
        }
        Some(holder) => {
            return Err(EngineError::SeatAllocatedToOtherPassenger {
                seat_number: seat_number.to_string(),
                passenger_id: holder,
            });
        }
        None => {}
    }

    let vacated_seat: Option<String> = state
        .seats
        .iter()
        .find(|seat| seat.passenger_id == Some(passenger_id))
        .map(|seat| seat.seat_number.clone());

    Ok(SeatMove {
        vacated_seat,
        target_seat: seat_number.to_string(),
    })
}
