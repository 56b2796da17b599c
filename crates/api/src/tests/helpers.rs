// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::boarding_cards::{CardData, CardFields, CardGenerator};
use crate::handlers;
use crate::request_response::{CreateFlightRequest, CreatePassengerRequest};
use skybook_persistence::Persistence;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

/// Seeds one airline and two airports. Returns the airline ID.
pub fn seed_reference_data(persistence: &mut Persistence) -> i64 {
    let airline = handlers::create_airline(persistence, "EasyJet").unwrap();
    handlers::create_airport(persistence, "LGW", "London Gatwick", "Europe/London").unwrap();
    handlers::create_airport(
        persistence,
        "RMU",
        "Murcia International Airport",
        "Europe/Madrid",
    )
    .unwrap();
    airline.airline_id
}

/// Creates the standard test flight between the seeded airports.
pub fn seed_flight(persistence: &mut Persistence) -> i64 {
    handlers::create_flight(
        persistence,
        &CreateFlightRequest {
            airline_name: String::from("EasyJet"),
            embarkation_code: String::from("LGW"),
            destination_code: String::from("RMU"),
            number: String::from("U28549"),
            departure_date: String::from("20/11/2026"),
            departure_time: String::from("10:45"),
            duration: String::from("2:30"),
        },
    )
    .unwrap()
    .flight_id
}

/// Creates a passenger with the given name and passport number and puts
/// them on the flight.
pub fn seed_passenger_on_flight(
    persistence: &mut Persistence,
    flight_id: i64,
    name: &str,
    passport_number: &str,
) -> i64 {
    let passenger = handlers::create_passenger(
        persistence,
        &CreatePassengerRequest {
            name: name.to_string(),
            gender: String::from("F"),
            dob: String::from("1970-02-01"),
            nationality: String::from("French"),
            residency: String::from("France"),
            passport_number: passport_number.to_string(),
        },
    )
    .unwrap();
    handlers::add_passenger_to_flight(persistence, flight_id, passenger.passenger_id).unwrap();
    passenger.passenger_id
}

/// Creates a layout with the given (row number, seat letters) rows, all
/// economy class. Returns the layout ID.
pub fn seed_layout(
    persistence: &mut Persistence,
    airline_id: i64,
    aircraft: &str,
    name: &str,
    rows: &[(u32, &str)],
) -> i64 {
    let layout = handlers::create_layout(persistence, airline_id, aircraft, name).unwrap();
    for (number, letters) in rows {
        handlers::add_row_to_layout(persistence, layout.layout_id, *number, "Economy", letters)
            .unwrap();
    }
    layout.layout_id
}

/// Renders cards as one line of text, so tests can assert on both the
/// fields and the written file contents.
pub struct PlainTextCardGenerator;

impl CardGenerator for PlainTextCardGenerator {
    fn generate(&self, fields: &CardFields) -> CardData {
        CardData::Text(format!(
            "{}|{}|{}|{}|{}|{}",
            fields.name,
            fields.seat_number,
            fields.gate,
            fields.departs,
            fields.arrives,
            fields.airline
        ))
    }
}

/// Renders a fixed byte sequence, exercising the binary write path.
pub struct StubBinaryCardGenerator;

impl CardGenerator for StubBinaryCardGenerator {
    fn generate(&self, _fields: &CardFields) -> CardData {
        CardData::Binary(vec![0x25, 0x50, 0x44, 0x46])
    }
}

static DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Returns a unique directory under the system temp directory for one
/// test's card output. Callers remove it when done.
pub fn unique_output_root() -> PathBuf {
    let dir_id: u64 = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("skybook_cards_{}_{dir_id}", std::process::id()))
}
