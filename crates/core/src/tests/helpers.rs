// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::SeatingState;
use skybook_domain::{AircraftLayout, RowDefinition, SeatAssignment};

/// A persisted layout for airline 1 with the given rows, each row given as
/// (row number, seat letters), all economy class.
pub fn create_test_layout(layout_id: i64, rows: &[(u32, &str)]) -> AircraftLayout {
    let mut layout: AircraftLayout =
        AircraftLayout::new(1, String::from("A320"), String::from("Standard"));
    layout.layout_id = Some(layout_id);
    for (number, letters) in rows {
        layout.rows.push(RowDefinition::new(
            *number,
            String::from("Economy"),
            String::from(*letters),
        ));
    }
    layout
}

/// A flight state for airline 1 with layout 1 applied, the given passengers
/// aboard, and seats generated from a single 6-letter row.
pub fn create_seated_state(passenger_ids: &[i64]) -> SeatingState {
    let layout: AircraftLayout = create_test_layout(1, &[(1, "ABCDEF")]);
    let mut state: SeatingState = SeatingState::new(1);
    state.aircraft_layout_id = Some(1);
    state.passenger_ids = passenger_ids.to_vec();
    state.seats = layout
        .seat_numbers()
        .map(SeatAssignment::unassigned)
        .collect();
    state
}

/// Binds a passenger to a seat number in the state. The seat must exist.
pub fn seat_passenger(state: &mut SeatingState, seat_number: &str, passenger_id: i64) {
    let seat = state
        .seats
        .iter_mut()
        .find(|seat| seat.seat_number == seat_number)
        .unwrap();
    seat.passenger_id = Some(passenger_id);
}
