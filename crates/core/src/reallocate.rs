// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::EngineError;
use crate::state::{ReallocationPlan, SeatingState};
use skybook_domain::{AircraftLayout, SeatAssignment};
use std::collections::HashMap;

/// Plans the application of an aircraft layout to a flight.
///
/// The plan replaces the flight's seat set with seats generated from the
/// layout, carrying passenger allocations across by seat number where the
/// number still exists and re-seating the rest deterministically:
///
/// 1. The layout must belong to the flight's airline, must not already be
///    applied, and must have capacity for every passenger on the flight.
/// 2. Current allocations are snapshotted as (seat number, passenger)
///    pairs in seat creation order.
/// 3. New seats are materialized in row-major order, letter order within
///    each row.
/// 4. Snapshot pairs whose seat number exists in the new set are replayed
///    onto it; the rest become the displaced list, in snapshot order.
/// 5. Displaced passengers are paired positionally with the remaining free
///    seats in creation order.
///
/// The function is pure. Executing the plan (and making it atomic) is the
/// storage layer's responsibility.
///
/// # Arguments
///
/// * `state` - The flight's current seating state
/// * `layout` - The candidate layout
///
/// # Errors
///
/// Returns an error if:
/// - The layout belongs to a different airline
/// - The layout is already applied to the flight
/// - The layout's capacity is below the flight's passenger count
pub fn plan_reallocation(
    state: &SeatingState,
    layout: &AircraftLayout,
) -> Result<ReallocationPlan, EngineError> {
    if layout.airline_id != state.airline_id {
        return Err(EngineError::LayoutNotForAirline {
            layout_airline_id: layout.airline_id,
            flight_airline_id: state.airline_id,
        });
    }

    if let Some(current_layout_id) = state.aircraft_layout_id {
        if layout.layout_id == Some(current_layout_id) {
            return Err(EngineError::LayoutAlreadyApplied(current_layout_id));
        }
    }

    let capacity: usize = layout.capacity();
    let passenger_count: usize = state.passenger_count();
    if capacity < passenger_count {
        return Err(EngineError::InsufficientCapacity {
            capacity,
            passenger_count,
        });
    }

    let snapshot: Vec<(String, i64)> = state.occupied_seats();

    let mut seats: Vec<SeatAssignment> = layout
        .seat_numbers()
        .map(SeatAssignment::unassigned)
        .collect();

    // Seat numbers are unique within a layout, so replay order cannot
    // produce conflicting writes
    let position_by_number: HashMap<String, usize> = seats
        .iter()
        .enumerate()
        .map(|(position, seat)| (seat.seat_number.clone(), position))
        .collect();

    let mut preserved_count: usize = 0;
    let mut displaced: Vec<i64> = Vec::new();
    for (seat_number, passenger_id) in &snapshot {
        if let Some(&position) = position_by_number.get(seat_number) {
            seats[position].passenger_id = Some(*passenger_id);
            preserved_count += 1;
        } else {
            displaced.push(*passenger_id);
        }
    }

    // Pair the Nth displaced passenger with the Nth free seat in creation
    // order. The capacity check above guarantees enough free seats remain,
    // so unseated stays empty in practice; anyone left over is reported
    // rather than dropped.
    let mut unseated: Vec<i64> = Vec::new();
    let mut free_seats = seats.iter_mut().filter(|seat| seat.is_free());
    for passenger_id in &displaced {
        match free_seats.next() {
            Some(seat) => seat.passenger_id = Some(*passenger_id),
            None => unseated.push(*passenger_id),
        }
    }
    drop(free_seats);

    Ok(ReallocationPlan {
        seats,
        preserved_count,
        displaced,
        unseated,
    })
}
