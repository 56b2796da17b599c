// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use skybook_domain::{Passenger, validate_passenger_fields};
use tracing::debug;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::DATE_FORMAT;
use crate::diesel_schema::{flight_passengers, passengers, seats};
use crate::error::{PersistenceError, is_unique_violation};
use crate::queries;

/// Creates a passenger.
///
/// # Errors
///
/// Returns an error if the name or passport number is blank, or a
/// passenger with the passport number already exists.
pub fn create_passenger(
    conn: &mut SqliteConnection,
    passenger: &Passenger,
) -> Result<Passenger, PersistenceError> {
    validate_passenger_fields(&passenger.name, &passenger.passport_number)?;

    conn.transaction(|conn| {
        diesel::insert_into(passengers::table)
            .values((
                passengers::name.eq(&passenger.name),
                passengers::gender.eq(passenger.gender.as_str()),
                passengers::dob.eq(passenger.dob.format(DATE_FORMAT).to_string()),
                passengers::nationality.eq(&passenger.nationality),
                passengers::residency.eq(&passenger.residency),
                passengers::passport_number.eq(&passenger.passport_number),
            ))
            .execute(conn)
            .map_err(|e| {
                if is_unique_violation(&e) {
                    PersistenceError::DuplicatePassport(passenger.passport_number.clone())
                } else {
                    e.into()
                }
            })?;

        let passenger_id: i64 = get_last_insert_rowid(conn)?;
        debug!(passenger_id, "Created passenger");

        let mut created: Passenger = passenger.clone();
        created.passenger_id = Some(passenger_id);
        Ok(created)
    })
}

/// Removes a passenger from a flight and deletes the passenger record.
///
/// The passenger's seat allocations (on any flight) are vacated first so
/// no seat is left pointing at a deleted passenger.
///
/// # Errors
///
/// Returns an error if the flight or passenger does not exist.
pub fn delete_passenger(
    conn: &mut SqliteConnection,
    flight_id: i64,
    passenger_id: i64,
) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        queries::flights::get_flight(conn, flight_id)?;
        queries::passengers::get_passenger(conn, passenger_id)?;

        diesel::delete(
            flight_passengers::table
                .filter(flight_passengers::flight_id.eq(flight_id))
                .filter(flight_passengers::passenger_id.eq(passenger_id)),
        )
        .execute(conn)?;

        diesel::update(seats::table.filter(seats::passenger_id.eq(Some(passenger_id))))
            .set(seats::passenger_id.eq(None::<i64>))
            .execute(conn)?;

        diesel::delete(passengers::table.filter(passengers::passenger_id.eq(passenger_id)))
            .execute(conn)?;

        debug!(flight_id, passenger_id, "Deleted passenger");
        Ok(())
    })
}
