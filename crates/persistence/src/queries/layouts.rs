// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use skybook_domain::{AircraftLayout, RowDefinition};

use crate::diesel_schema::{aircraft_layouts, flights, row_definitions};
use crate::error::PersistenceError;

type LayoutTuple = (i64, i64, String, String);
type RowTuple = (i64, i64, i32, String, String);

/// Loads a layout's row definitions, in row-number order.
fn load_rows(
    conn: &mut SqliteConnection,
    layout_id: i64,
) -> Result<Vec<RowDefinition>, PersistenceError> {
    let rows: Vec<RowTuple> = row_definitions::table
        .filter(row_definitions::layout_id.eq(layout_id))
        .order(row_definitions::number.asc())
        .load::<RowTuple>(conn)?;

    rows.into_iter()
        .map(|(row_id, _, number, seating_class, seat_letters)| {
            let number: u32 = u32::try_from(number).map_err(|_| {
                PersistenceError::DatabaseError(format!("Negative stored row number {number}"))
            })?;
            let mut row: RowDefinition = RowDefinition::new(number, seating_class, seat_letters);
            row.row_id = Some(row_id);
            Ok(row)
        })
        .collect()
}

fn into_layout(
    conn: &mut SqliteConnection,
    (layout_id, airline_id, aircraft, name): LayoutTuple,
) -> Result<AircraftLayout, PersistenceError> {
    let mut layout: AircraftLayout = AircraftLayout::new(airline_id, aircraft, name);
    layout.layout_id = Some(layout_id);
    layout.rows = load_rows(conn, layout_id)?;
    Ok(layout)
}

/// Retrieves a layout with its row definitions.
///
/// # Errors
///
/// Returns an error if the layout does not exist.
pub fn get_layout(
    conn: &mut SqliteConnection,
    layout_id: i64,
) -> Result<AircraftLayout, PersistenceError> {
    let result = aircraft_layouts::table
        .filter(aircraft_layouts::layout_id.eq(layout_id))
        .first::<LayoutTuple>(conn);

    match result {
        Ok(row) => into_layout(conn, row),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::LayoutNotFound(layout_id)),
        Err(e) => Err(e.into()),
    }
}

/// Lists layouts with their row definitions, ordered by aircraft model and
/// then layout name. When `airline_id` is given, only that airline's
/// layouts are returned.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_layouts(
    conn: &mut SqliteConnection,
    airline_id: Option<i64>,
) -> Result<Vec<AircraftLayout>, PersistenceError> {
    let mut query = aircraft_layouts::table.into_boxed();
    if let Some(airline_id) = airline_id {
        query = query.filter(aircraft_layouts::airline_id.eq(airline_id));
    }

    let headers: Vec<LayoutTuple> = query
        .order((
            aircraft_layouts::aircraft.asc(),
            aircraft_layouts::name.asc(),
        ))
        .load::<LayoutTuple>(conn)?;

    headers
        .into_iter()
        .map(|header| into_layout(conn, header))
        .collect()
}

/// Returns the total seat count of a layout.
///
/// # Errors
///
/// Returns an error if the layout does not exist.
pub fn layout_capacity(
    conn: &mut SqliteConnection,
    layout_id: i64,
) -> Result<usize, PersistenceError> {
    Ok(get_layout(conn, layout_id)?.capacity())
}

/// Counts the flights currently referencing a layout.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_flights_referencing_layout(
    conn: &mut SqliteConnection,
    layout_id: i64,
) -> Result<i64, PersistenceError> {
    Ok(flights::table
        .filter(flights::aircraft_layout_id.eq(Some(layout_id)))
        .count()
        .get_result::<i64>(conn)?)
}
