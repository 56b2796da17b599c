// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use skybook_domain::{Airline, validate_airline_name};
use tracing::debug;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::airlines;
use crate::error::{PersistenceError, is_foreign_key_violation, is_unique_violation};
use crate::queries;

/// Creates an airline.
///
/// # Errors
///
/// Returns an error if the name is blank or an airline with the name
/// already exists.
pub fn create_airline(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Airline, PersistenceError> {
    validate_airline_name(name)?;

    conn.transaction(|conn| {
        diesel::insert_into(airlines::table)
            .values(airlines::name.eq(name))
            .execute(conn)
            .map_err(|e| {
                if is_unique_violation(&e) {
                    PersistenceError::DuplicateAirline(name.to_string())
                } else {
                    e.into()
                }
            })?;

        let airline_id: i64 = get_last_insert_rowid(conn)?;
        debug!(airline_id, name, "Created airline");

        Ok(Airline::with_id(airline_id, name.to_string()))
    })
}

/// Deletes an airline. Flights under the airline are cascade-deleted;
/// aircraft layouts block the deletion.
///
/// # Errors
///
/// Returns an error if the airline does not exist or is still referenced
/// by an aircraft layout.
pub fn delete_airline(
    conn: &mut SqliteConnection,
    airline_id: i64,
) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        queries::airlines::get_airline_by_id(conn, airline_id)?;

        diesel::delete(airlines::table.filter(airlines::airline_id.eq(airline_id)))
            .execute(conn)
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    PersistenceError::AirlineInUse(airline_id)
                } else {
                    e.into()
                }
            })?;

        debug!(airline_id, "Deleted airline");
        Ok(())
    })
}
