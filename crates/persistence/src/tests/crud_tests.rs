// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_flight, create_test_passenger_on_flight, create_test_persistence,
    create_test_reference_data,
};
use crate::{NewFlight, PersistenceError};
use chrono::NaiveDate;
use skybook_domain::{Airline, Airport, DomainError, Flight, Gender, Passenger, parse_departure};

#[test]
fn test_airlines_are_listed_by_name() {
    let mut persistence = create_test_persistence();
    persistence.create_airline("Jet2").unwrap();
    persistence.create_airline("EasyJet").unwrap();

    let airlines: Vec<Airline> = persistence.list_airlines().unwrap();

    let names: Vec<&str> = airlines.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["EasyJet", "Jet2"]);
}

#[test]
fn test_airline_lookup_by_name_and_id() {
    let mut persistence = create_test_persistence();
    let airline_id: i64 = persistence
        .create_airline("EasyJet")
        .unwrap()
        .airline_id
        .unwrap();

    assert_eq!(
        persistence.get_airline_by_id(airline_id).unwrap().name,
        "EasyJet"
    );
    assert_eq!(
        persistence
            .get_airline_by_name("EasyJet")
            .unwrap()
            .airline_id,
        Some(airline_id)
    );
    assert_eq!(
        persistence.get_airline_by_name("Ryanair"),
        Err(PersistenceError::AirlineNotFoundByName(String::from(
            "Ryanair"
        )))
    );
}

#[test]
fn test_duplicate_airline_name_is_rejected() {
    let mut persistence = create_test_persistence();
    persistence.create_airline("EasyJet").unwrap();

    assert_eq!(
        persistence.create_airline("EasyJet"),
        Err(PersistenceError::DuplicateAirline(String::from("EasyJet")))
    );
}

#[test]
fn test_blank_airline_name_is_rejected() {
    let mut persistence = create_test_persistence();

    assert!(matches!(
        persistence.create_airline("  "),
        Err(PersistenceError::DomainViolation(
            DomainError::InvalidAirlineName(_)
        ))
    ));
}

#[test]
fn test_airports_are_listed_by_code() {
    let mut persistence = create_test_persistence();
    persistence
        .create_airport("RMU", "Murcia International Airport", "Europe/Madrid")
        .unwrap();
    persistence
        .create_airport("LGW", "London Gatwick", "Europe/London")
        .unwrap();

    let airports: Vec<Airport> = persistence.list_airports().unwrap();

    let codes: Vec<&str> = airports.iter().map(|a| a.code.as_str()).collect();
    assert_eq!(codes, vec!["LGW", "RMU"]);
}

#[test]
fn test_duplicate_airport_code_is_rejected() {
    let mut persistence = create_test_persistence();
    persistence
        .create_airport("LGW", "London Gatwick", "Europe/London")
        .unwrap();

    assert_eq!(
        persistence.create_airport("LGW", "Gatwick Again", "Europe/London"),
        Err(PersistenceError::DuplicateAirport(String::from("LGW")))
    );
}

#[test]
fn test_unknown_airport_timezone_is_rejected() {
    let mut persistence = create_test_persistence();

    assert_eq!(
        persistence.create_airport("LGW", "London Gatwick", "Europe/Narnia"),
        Err(PersistenceError::DomainViolation(
            DomainError::InvalidTimezone(String::from("Europe/Narnia"))
        ))
    );
}

#[test]
fn test_create_flight_round_trip() {
    let mut persistence = create_test_persistence();
    create_test_reference_data(&mut persistence);

    let flight_id: i64 = create_test_flight(&mut persistence);

    let flight: Flight = persistence.get_flight(flight_id).unwrap();
    assert_eq!(flight.number, "U28549");
    assert_eq!(flight.duration_minutes, 150);
    assert_eq!(flight.aircraft_layout_id, None);
    assert_eq!(flight.formatted_duration(), "2:30");
}

#[test]
fn test_flights_are_listed_by_departure() {
    let mut persistence = create_test_persistence();
    create_test_reference_data(&mut persistence);
    for (number, date) in [("U20002", "21/11/2026"), ("U20001", "19/11/2026")] {
        persistence
            .create_flight(&NewFlight {
                airline_name: "EasyJet",
                embarkation_code: "LGW",
                destination_code: "RMU",
                number,
                departure: parse_departure(date, "10:45").unwrap(),
                duration_minutes: 150,
            })
            .unwrap();
    }

    let flights: Vec<Flight> = persistence.list_flights().unwrap();

    let numbers: Vec<&str> = flights.iter().map(|f| f.number.as_str()).collect();
    assert_eq!(numbers, vec!["U20001", "U20002"]);
}

#[test]
fn test_duplicate_flight_number_and_departure_is_rejected() {
    let mut persistence = create_test_persistence();
    create_test_reference_data(&mut persistence);
    create_test_flight(&mut persistence);

    let result = persistence.create_flight(&NewFlight {
        airline_name: "EasyJet",
        embarkation_code: "LGW",
        destination_code: "RMU",
        number: "U28549",
        departure: parse_departure("20/11/2026", "10:45").unwrap(),
        duration_minutes: 150,
    });

    assert!(matches!(
        result,
        Err(PersistenceError::DuplicateFlight { .. })
    ));
}

#[test]
fn test_flight_airports_must_differ() {
    let mut persistence = create_test_persistence();
    create_test_reference_data(&mut persistence);

    let result = persistence.create_flight(&NewFlight {
        airline_name: "EasyJet",
        embarkation_code: "LGW",
        destination_code: "LGW",
        number: "U28549",
        departure: parse_departure("20/11/2026", "10:45").unwrap(),
        duration_minutes: 150,
    });

    assert!(matches!(
        result,
        Err(PersistenceError::DomainViolation(
            DomainError::SameEmbarkationAndDestination { .. }
        ))
    ));
}

#[test]
fn test_flight_requires_known_airline_and_airports() {
    let mut persistence = create_test_persistence();
    create_test_reference_data(&mut persistence);

    let result = persistence.create_flight(&NewFlight {
        airline_name: "Ryanair",
        embarkation_code: "LGW",
        destination_code: "RMU",
        number: "FR1234",
        departure: parse_departure("20/11/2026", "10:45").unwrap(),
        duration_minutes: 150,
    });

    assert_eq!(
        result,
        Err(PersistenceError::AirlineNotFoundByName(String::from(
            "Ryanair"
        )))
    );
}

#[test]
fn test_duplicate_passport_number_is_rejected() {
    let mut persistence = create_test_persistence();
    create_test_reference_data(&mut persistence);
    let flight_id: i64 = create_test_flight(&mut persistence);
    create_test_passenger_on_flight(&mut persistence, flight_id, "1234567890");

    let passenger: Passenger = Passenger::new(
        String::from("Pierre Curie"),
        Gender::Male,
        NaiveDate::from_ymd_opt(1968, 5, 15).unwrap(),
        String::from("French"),
        String::from("France"),
        String::from("1234567890"),
    );
    let result = persistence.create_passenger(&passenger);

    assert_eq!(
        result,
        Err(PersistenceError::DuplicatePassport(String::from(
            "1234567890"
        )))
    );
}

#[test]
fn test_passenger_cannot_join_a_flight_twice() {
    let mut persistence = create_test_persistence();
    create_test_reference_data(&mut persistence);
    let flight_id: i64 = create_test_flight(&mut persistence);
    let passenger_id: i64 =
        create_test_passenger_on_flight(&mut persistence, flight_id, "1234567890");

    let result = persistence.add_passenger_to_flight(flight_id, passenger_id);

    assert_eq!(
        result,
        Err(PersistenceError::PassengerAlreadyOnFlight {
            flight_id,
            passenger_id,
        })
    );
}

#[test]
fn test_delete_passenger_vacates_their_seat() {
    let mut persistence = create_test_persistence();
    let airline_id: i64 = create_test_reference_data(&mut persistence);
    let flight_id: i64 = create_test_flight(&mut persistence);
    let passenger_id: i64 =
        create_test_passenger_on_flight(&mut persistence, flight_id, "1234567890");

    let layout_id: i64 = crate::tests::helpers::create_test_layout(
        &mut persistence,
        airline_id,
        "A320",
        "",
        &[(1, "ABCDEF")],
    );
    persistence
        .apply_aircraft_layout(flight_id, layout_id)
        .unwrap();
    persistence
        .allocate_seat(flight_id, passenger_id, "1A")
        .unwrap();

    persistence.delete_passenger(flight_id, passenger_id).unwrap();

    let seats = persistence.list_seats(flight_id).unwrap();
    assert!(seats.iter().all(skybook_domain::SeatAssignment::is_free));
    assert_eq!(
        persistence.get_passenger(passenger_id),
        Err(PersistenceError::PassengerNotFound(passenger_id))
    );
    assert!(
        persistence
            .list_passengers_for_flight(flight_id)
            .unwrap()
            .is_empty()
    );
}
