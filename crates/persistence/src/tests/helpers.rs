// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{NewFlight, Persistence};
use chrono::NaiveDate;
use skybook_domain::{Gender, Passenger, parse_departure};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

/// Creates the reference data a flight needs: one airline and two
/// airports. Returns the airline ID.
pub fn create_test_reference_data(persistence: &mut Persistence) -> i64 {
    let airline_id: i64 = persistence
        .create_airline("EasyJet")
        .unwrap()
        .airline_id
        .unwrap();
    persistence
        .create_airport("LGW", "London Gatwick", "Europe/London")
        .unwrap();
    persistence
        .create_airport("RMU", "Murcia International Airport", "Europe/Madrid")
        .unwrap();
    airline_id
}

/// Creates a flight for the test airline between the test airports.
pub fn create_test_flight(persistence: &mut Persistence) -> i64 {
    let departure = parse_departure("20/11/2026", "10:45").unwrap();
    persistence
        .create_flight(&NewFlight {
            airline_name: "EasyJet",
            embarkation_code: "LGW",
            destination_code: "RMU",
            number: "U28549",
            departure,
            duration_minutes: 150,
        })
        .unwrap()
        .flight_id
        .unwrap()
}

/// Creates a passenger with the given passport number and puts them on
/// the flight.
pub fn create_test_passenger_on_flight(
    persistence: &mut Persistence,
    flight_id: i64,
    passport_number: &str,
) -> i64 {
    let passenger: Passenger = Passenger::new(
        String::from("Marie Curie"),
        Gender::Female,
        NaiveDate::from_ymd_opt(1970, 2, 1).unwrap(),
        String::from("French"),
        String::from("France"),
        String::from(passport_number),
    );
    let passenger_id: i64 = persistence
        .create_passenger(&passenger)
        .unwrap()
        .passenger_id
        .unwrap();
    persistence
        .add_passenger_to_flight(flight_id, passenger_id)
        .unwrap();
    passenger_id
}

/// Creates a layout for the airline with the given rows, each given as
/// (row number, seat letters), all economy class. Returns the layout ID.
pub fn create_test_layout(
    persistence: &mut Persistence,
    airline_id: i64,
    aircraft: &str,
    name: &str,
    rows: &[(u32, &str)],
) -> i64 {
    let layout_id: i64 = persistence
        .create_layout(airline_id, aircraft, name)
        .unwrap()
        .layout_id
        .unwrap();
    for (number, letters) in rows {
        persistence
            .add_row_to_layout(layout_id, *number, "Economy", letters)
            .unwrap();
    }
    layout_id
}
