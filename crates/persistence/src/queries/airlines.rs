// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use skybook_domain::Airline;

use crate::diesel_schema::airlines;
use crate::error::PersistenceError;

/// Retrieves an airline by its canonical ID.
///
/// # Errors
///
/// Returns an error if the airline does not exist.
pub fn get_airline_by_id(
    conn: &mut SqliteConnection,
    airline_id: i64,
) -> Result<Airline, PersistenceError> {
    let result = airlines::table
        .filter(airlines::airline_id.eq(airline_id))
        .first::<(i64, String)>(conn);

    match result {
        Ok((id, name)) => Ok(Airline::with_id(id, name)),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::AirlineNotFound(airline_id)),
        Err(e) => Err(e.into()),
    }
}

/// Retrieves an airline by its unique name.
///
/// # Errors
///
/// Returns an error if no airline with the name exists.
pub fn get_airline_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Airline, PersistenceError> {
    let result = airlines::table
        .filter(airlines::name.eq(name))
        .first::<(i64, String)>(conn);

    match result {
        Ok((id, found_name)) => Ok(Airline::with_id(id, found_name)),
        Err(diesel::result::Error::NotFound) => {
            Err(PersistenceError::AirlineNotFoundByName(name.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Lists all airlines, ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_airlines(conn: &mut SqliteConnection) -> Result<Vec<Airline>, PersistenceError> {
    let rows: Vec<(i64, String)> = airlines::table
        .order(airlines::name.asc())
        .load::<(i64, String)>(conn)?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| Airline::with_id(id, name))
        .collect())
}
