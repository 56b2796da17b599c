// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use skybook_domain::Airport;

use crate::diesel_schema::airports;
use crate::error::PersistenceError;

type AirportTuple = (i64, String, String, String);

fn into_airport((airport_id, code, name, timezone): AirportTuple) -> Airport {
    Airport::with_id(airport_id, code, name, timezone)
}

/// Retrieves an airport by its canonical ID.
///
/// # Errors
///
/// Returns an error if the airport does not exist.
pub fn get_airport_by_id(
    conn: &mut SqliteConnection,
    airport_id: i64,
) -> Result<Airport, PersistenceError> {
    let result = airports::table
        .filter(airports::airport_id.eq(airport_id))
        .first::<AirportTuple>(conn);

    match result {
        Ok(row) => Ok(into_airport(row)),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::AirportNotFound(airport_id)),
        Err(e) => Err(e.into()),
    }
}

/// Retrieves an airport by its unique 3-letter IATA code.
///
/// # Errors
///
/// Returns an error if no airport with the code exists.
pub fn get_airport_by_code(
    conn: &mut SqliteConnection,
    code: &str,
) -> Result<Airport, PersistenceError> {
    let result = airports::table
        .filter(airports::code.eq(code))
        .first::<AirportTuple>(conn);

    match result {
        Ok(row) => Ok(into_airport(row)),
        Err(diesel::result::Error::NotFound) => {
            Err(PersistenceError::AirportNotFoundByCode(code.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Lists all airports, ordered by code.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_airports(conn: &mut SqliteConnection) -> Result<Vec<Airport>, PersistenceError> {
    let rows: Vec<AirportTuple> = airports::table
        .order(airports::code.asc())
        .load::<AirportTuple>(conn)?;

    Ok(rows.into_iter().map(into_airport).collect())
}
