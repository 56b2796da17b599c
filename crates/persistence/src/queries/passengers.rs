// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use skybook_domain::Passenger;

use crate::data_models::PassengerRow;
use crate::diesel_schema::{flight_passengers, passengers};
use crate::error::PersistenceError;

/// Retrieves a passenger by their canonical ID.
///
/// # Errors
///
/// Returns an error if the passenger does not exist.
pub fn get_passenger(
    conn: &mut SqliteConnection,
    passenger_id: i64,
) -> Result<Passenger, PersistenceError> {
    let result = passengers::table
        .filter(passengers::passenger_id.eq(passenger_id))
        .first::<PassengerRow>(conn);

    match result {
        Ok(row) => row.into_domain(),
        Err(diesel::result::Error::NotFound) => {
            Err(PersistenceError::PassengerNotFound(passenger_id))
        }
        Err(e) => Err(e.into()),
    }
}

/// Lists the passengers associated with a flight, in passenger ID order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_passengers_for_flight(
    conn: &mut SqliteConnection,
    flight_id: i64,
) -> Result<Vec<Passenger>, PersistenceError> {
    let passenger_ids: Vec<i64> = flight_passengers::table
        .filter(flight_passengers::flight_id.eq(flight_id))
        .select(flight_passengers::passenger_id)
        .load::<i64>(conn)?;

    let rows: Vec<PassengerRow> = passengers::table
        .filter(passengers::passenger_id.eq_any(passenger_ids))
        .order(passengers::passenger_id.asc())
        .load::<PassengerRow>(conn)?;

    rows.into_iter().map(PassengerRow::into_domain).collect()
}
