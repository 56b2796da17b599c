// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use skybook_domain::{Airport, validate_airport_fields};
use tracing::debug;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::airports;
use crate::error::{PersistenceError, is_foreign_key_violation, is_unique_violation};
use crate::queries;

/// Creates an airport.
///
/// The timezone identifier is resolved once here so a bad identifier is
/// rejected at creation rather than surfacing later during local-time
/// conversion.
///
/// # Errors
///
/// Returns an error if:
/// - The code is not 3 letters or the name is blank
/// - The timezone is not a recognized IANA identifier
/// - An airport with the code already exists
pub fn create_airport(
    conn: &mut SqliteConnection,
    code: &str,
    name: &str,
    timezone: &str,
) -> Result<Airport, PersistenceError> {
    validate_airport_fields(code, name)?;

    let airport: Airport = Airport::new(code.to_string(), name.to_string(), timezone.to_string());
    airport.tz()?;

    conn.transaction(|conn| {
        diesel::insert_into(airports::table)
            .values((
                airports::code.eq(code),
                airports::name.eq(name),
                airports::timezone.eq(timezone),
            ))
            .execute(conn)
            .map_err(|e| {
                if is_unique_violation(&e) {
                    PersistenceError::DuplicateAirport(code.to_string())
                } else {
                    e.into()
                }
            })?;

        let airport_id: i64 = get_last_insert_rowid(conn)?;
        debug!(airport_id, code, "Created airport");

        Ok(Airport::with_id(
            airport_id,
            code.to_string(),
            name.to_string(),
            timezone.to_string(),
        ))
    })
}

/// Deletes an airport.
///
/// # Errors
///
/// Returns an error if the airport does not exist or is still referenced
/// by a flight.
pub fn delete_airport(
    conn: &mut SqliteConnection,
    airport_id: i64,
) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        queries::airports::get_airport_by_id(conn, airport_id)?;

        diesel::delete(airports::table.filter(airports::airport_id.eq(airport_id)))
            .execute(conn)
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    PersistenceError::AirportInUse(airport_id)
                } else {
                    e.into()
                }
            })?;

        debug!(airport_id, "Deleted airport");
        Ok(())
    })
}
