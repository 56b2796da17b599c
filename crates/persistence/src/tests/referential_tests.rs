// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::PersistenceError;
use crate::tests::helpers::{
    create_test_flight, create_test_layout, create_test_persistence, create_test_reference_data,
};

#[test]
fn test_applied_layout_cannot_be_deleted() {
    let mut persistence = create_test_persistence();
    let airline_id: i64 = create_test_reference_data(&mut persistence);
    let flight_id: i64 = create_test_flight(&mut persistence);
    let layout_id: i64 =
        create_test_layout(&mut persistence, airline_id, "A320", "", &[(1, "ABCDEF")]);
    persistence
        .apply_aircraft_layout(flight_id, layout_id)
        .unwrap();

    assert_eq!(
        persistence.delete_layout(layout_id),
        Err(PersistenceError::LayoutInUse(layout_id))
    );

    // Once the referencing flight is gone the layout can be deleted
    persistence.delete_flight(flight_id).unwrap();
    assert!(persistence.delete_layout(layout_id).is_ok());
    assert_eq!(
        persistence.get_layout(layout_id),
        Err(PersistenceError::LayoutNotFound(layout_id))
    );
}

#[test]
fn test_unapplied_layout_can_be_deleted() {
    let mut persistence = create_test_persistence();
    let airline_id: i64 = create_test_reference_data(&mut persistence);
    let layout_id: i64 =
        create_test_layout(&mut persistence, airline_id, "A320", "", &[(1, "ABCDEF")]);

    assert!(persistence.delete_layout(layout_id).is_ok());
}

#[test]
fn test_airport_referenced_by_a_flight_cannot_be_deleted() {
    let mut persistence = create_test_persistence();
    create_test_reference_data(&mut persistence);
    create_test_flight(&mut persistence);
    let airport_id: i64 = persistence
        .get_airport_by_code("LGW")
        .unwrap()
        .airport_id
        .unwrap();

    assert_eq!(
        persistence.delete_airport(airport_id),
        Err(PersistenceError::AirportInUse(airport_id))
    );
}

#[test]
fn test_airline_with_layouts_cannot_be_deleted() {
    let mut persistence = create_test_persistence();
    let airline_id: i64 = create_test_reference_data(&mut persistence);
    create_test_layout(&mut persistence, airline_id, "A320", "", &[]);

    assert_eq!(
        persistence.delete_airline(airline_id),
        Err(PersistenceError::AirlineInUse(airline_id))
    );
}

#[test]
fn test_deleting_an_airline_cascades_its_flights() {
    let mut persistence = create_test_persistence();
    let airline_id: i64 = create_test_reference_data(&mut persistence);
    let flight_id: i64 = create_test_flight(&mut persistence);

    persistence.delete_airline(airline_id).unwrap();

    assert_eq!(
        persistence.get_flight(flight_id),
        Err(PersistenceError::FlightNotFound(flight_id))
    );
}

#[test]
fn test_deleting_a_flight_cascades_its_seats() {
    let mut persistence = create_test_persistence();
    let airline_id: i64 = create_test_reference_data(&mut persistence);
    let flight_id: i64 = create_test_flight(&mut persistence);
    let layout_id: i64 =
        create_test_layout(&mut persistence, airline_id, "A320", "", &[(1, "ABCDEF")]);
    persistence
        .apply_aircraft_layout(flight_id, layout_id)
        .unwrap();
    assert_eq!(persistence.list_seats(flight_id).unwrap().len(), 6);

    persistence.delete_flight(flight_id).unwrap();

    assert!(persistence.list_seats(flight_id).unwrap().is_empty());
}
