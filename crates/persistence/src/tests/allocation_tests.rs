// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::PersistenceError;
use crate::tests::helpers::{
    create_test_flight, create_test_layout, create_test_passenger_on_flight,
    create_test_persistence, create_test_reference_data,
};
use skybook::EngineError;
use skybook_domain::SeatAssignment;

fn find_seat(seats: &[SeatAssignment], seat_number: &str) -> SeatAssignment {
    seats
        .iter()
        .find(|seat| seat.seat_number == seat_number)
        .cloned()
        .unwrap()
}

#[test]
fn test_allocate_seat_binds_the_passenger() {
    let mut persistence = create_test_persistence();
    let airline_id: i64 = create_test_reference_data(&mut persistence);
    let flight_id: i64 = create_test_flight(&mut persistence);
    let passenger_id: i64 =
        create_test_passenger_on_flight(&mut persistence, flight_id, "P0000001");
    let layout_id: i64 =
        create_test_layout(&mut persistence, airline_id, "A320", "", &[(28, "ABCDEF")]);
    persistence
        .apply_aircraft_layout(flight_id, layout_id)
        .unwrap();

    persistence
        .allocate_seat(flight_id, passenger_id, "28A")
        .unwrap();

    let seats = persistence.list_seats(flight_id).unwrap();
    assert_eq!(find_seat(&seats, "28A").passenger_id, Some(passenger_id));
}

#[test]
fn test_moving_a_passenger_vacates_their_previous_seat() {
    let mut persistence = create_test_persistence();
    let airline_id: i64 = create_test_reference_data(&mut persistence);
    let flight_id: i64 = create_test_flight(&mut persistence);
    let passenger_id: i64 =
        create_test_passenger_on_flight(&mut persistence, flight_id, "P0000001");
    let layout_id: i64 =
        create_test_layout(&mut persistence, airline_id, "A320", "", &[(1, "ABCDEF")]);
    persistence
        .apply_aircraft_layout(flight_id, layout_id)
        .unwrap();
    persistence
        .allocate_seat(flight_id, passenger_id, "1A")
        .unwrap();

    let seat_move = persistence
        .allocate_seat(flight_id, passenger_id, "1B")
        .unwrap();

    assert_eq!(seat_move.vacated_seat, Some(String::from("1A")));
    let seats = persistence.list_seats(flight_id).unwrap();
    assert!(find_seat(&seats, "1A").is_free());
    assert_eq!(find_seat(&seats, "1B").passenger_id, Some(passenger_id));
}

#[test]
fn test_allocating_the_same_seat_twice_is_rejected() {
    let mut persistence = create_test_persistence();
    let airline_id: i64 = create_test_reference_data(&mut persistence);
    let flight_id: i64 = create_test_flight(&mut persistence);
    let passenger_id: i64 =
        create_test_passenger_on_flight(&mut persistence, flight_id, "P0000001");
    let layout_id: i64 =
        create_test_layout(&mut persistence, airline_id, "A320", "", &[(1, "ABCDEF")]);
    persistence
        .apply_aircraft_layout(flight_id, layout_id)
        .unwrap();
    persistence
        .allocate_seat(flight_id, passenger_id, "1A")
        .unwrap();

    let result = persistence.allocate_seat(flight_id, passenger_id, "1A");

    assert_eq!(
        result,
        Err(PersistenceError::EngineRejected(
            EngineError::SeatAlreadyAllocatedToPassenger {
                seat_number: String::from("1A"),
            }
        ))
    );
}

#[test]
fn test_allocating_an_occupied_seat_is_rejected() {
    let mut persistence = create_test_persistence();
    let airline_id: i64 = create_test_reference_data(&mut persistence);
    let flight_id: i64 = create_test_flight(&mut persistence);
    let first_passenger: i64 =
        create_test_passenger_on_flight(&mut persistence, flight_id, "P0000001");
    let second_passenger: i64 =
        create_test_passenger_on_flight(&mut persistence, flight_id, "P0000002");
    let layout_id: i64 =
        create_test_layout(&mut persistence, airline_id, "A320", "", &[(1, "ABCDEF")]);
    persistence
        .apply_aircraft_layout(flight_id, layout_id)
        .unwrap();
    persistence
        .allocate_seat(flight_id, first_passenger, "1A")
        .unwrap();

    let result = persistence.allocate_seat(flight_id, second_passenger, "1A");

    assert_eq!(
        result,
        Err(PersistenceError::EngineRejected(
            EngineError::SeatAllocatedToOtherPassenger {
                seat_number: String::from("1A"),
                passenger_id: first_passenger,
            }
        ))
    );
}

#[test]
fn test_allocation_without_a_layout_is_rejected() {
    let mut persistence = create_test_persistence();
    create_test_reference_data(&mut persistence);
    let flight_id: i64 = create_test_flight(&mut persistence);
    let passenger_id: i64 =
        create_test_passenger_on_flight(&mut persistence, flight_id, "P0000001");

    let result = persistence.allocate_seat(flight_id, passenger_id, "1A");

    assert_eq!(
        result,
        Err(PersistenceError::EngineRejected(EngineError::NoLayoutApplied))
    );
}

#[test]
fn test_allocation_requires_passenger_on_the_flight() {
    let mut persistence = create_test_persistence();
    let airline_id: i64 = create_test_reference_data(&mut persistence);
    let flight_id: i64 = create_test_flight(&mut persistence);
    let layout_id: i64 =
        create_test_layout(&mut persistence, airline_id, "A320", "", &[(1, "ABCDEF")]);
    persistence
        .apply_aircraft_layout(flight_id, layout_id)
        .unwrap();

    let result = persistence.allocate_seat(flight_id, 42, "1A");

    assert_eq!(
        result,
        Err(PersistenceError::EngineRejected(
            EngineError::PassengerNotOnFlight(42)
        ))
    );
}

#[test]
fn test_allocation_requires_an_existing_seat() {
    let mut persistence = create_test_persistence();
    let airline_id: i64 = create_test_reference_data(&mut persistence);
    let flight_id: i64 = create_test_flight(&mut persistence);
    let passenger_id: i64 =
        create_test_passenger_on_flight(&mut persistence, flight_id, "P0000001");
    let layout_id: i64 =
        create_test_layout(&mut persistence, airline_id, "A320", "", &[(1, "ABCDEF")]);
    persistence
        .apply_aircraft_layout(flight_id, layout_id)
        .unwrap();

    let result = persistence.allocate_seat(flight_id, passenger_id, "9Z");

    assert_eq!(
        result,
        Err(PersistenceError::EngineRejected(EngineError::SeatNotFound(
            String::from("9Z")
        )))
    );
}
