// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    airlines (airline_id) {
        airline_id -> BigInt,
        name -> Text,
    }
}

diesel::table! {
    airports (airport_id) {
        airport_id -> BigInt,
        code -> Text,
        name -> Text,
        timezone -> Text,
    }
}

diesel::table! {
    aircraft_layouts (layout_id) {
        layout_id -> BigInt,
        airline_id -> BigInt,
        aircraft -> Text,
        name -> Text,
    }
}

diesel::table! {
    row_definitions (row_id) {
        row_id -> BigInt,
        layout_id -> BigInt,
        number -> Integer,
        seating_class -> Text,
        seat_letters -> Text,
    }
}

diesel::table! {
    flights (flight_id) {
        flight_id -> BigInt,
        airline_id -> BigInt,
        embarkation_airport_id -> BigInt,
        destination_airport_id -> BigInt,
        aircraft_layout_id -> Nullable<BigInt>,
        number -> Text,
        departure -> Text,
        duration_minutes -> Integer,
    }
}

diesel::table! {
    passengers (passenger_id) {
        passenger_id -> BigInt,
        name -> Text,
        gender -> Text,
        dob -> Text,
        nationality -> Text,
        residency -> Text,
        passport_number -> Text,
    }
}

diesel::table! {
    flight_passengers (flight_id, passenger_id) {
        flight_id -> BigInt,
        passenger_id -> BigInt,
    }
}

diesel::table! {
    seats (seat_id) {
        seat_id -> BigInt,
        flight_id -> BigInt,
        passenger_id -> Nullable<BigInt>,
        seat_number -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    airlines,
    airports,
    aircraft_layouts,
    row_definitions,
    flights,
    passengers,
    flight_passengers,
    seats,
);
