// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use skybook_domain::{AircraftLayout, DomainError, RowDefinition, validate_row_definition};
use tracing::debug;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{aircraft_layouts, row_definitions};
use crate::error::{
    PersistenceError, is_check_violation, is_foreign_key_violation, is_unique_violation,
};
use crate::queries;

/// Confirms a layout exists without loading its rows.
fn ensure_layout_exists(
    conn: &mut SqliteConnection,
    layout_id: i64,
) -> Result<(), PersistenceError> {
    let found: Option<i64> = aircraft_layouts::table
        .filter(aircraft_layouts::layout_id.eq(layout_id))
        .select(aircraft_layouts::layout_id)
        .first::<i64>(conn)
        .optional()?;

    match found {
        Some(_) => Ok(()),
        None => Err(PersistenceError::LayoutNotFound(layout_id)),
    }
}

/// Backstop translation for the CHECK constraints on row definitions.
///
/// Row mutations validate their fields up front, so this only fires if a
/// caller reaches the database with blank values through some other path.
fn translate_row_integrity_error(err: diesel::result::Error) -> PersistenceError {
    if is_check_violation(&err) {
        return PersistenceError::DomainViolation(DomainError::InvalidSeatingClass(String::from(
            "Seat letters and the seating class cannot be empty",
        )));
    }
    err.into()
}

/// Creates an aircraft layout with no rows.
///
/// # Errors
///
/// Returns an error if the airline does not exist or the airline already
/// has a layout with the same (aircraft, name) identity.
pub fn create_layout(
    conn: &mut SqliteConnection,
    airline_id: i64,
    aircraft: &str,
    name: &str,
) -> Result<AircraftLayout, PersistenceError> {
    conn.transaction(|conn| {
        queries::airlines::get_airline_by_id(conn, airline_id)?;

        diesel::insert_into(aircraft_layouts::table)
            .values((
                aircraft_layouts::airline_id.eq(airline_id),
                aircraft_layouts::aircraft.eq(aircraft),
                aircraft_layouts::name.eq(name),
            ))
            .execute(conn)
            .map_err(|e| {
                if is_unique_violation(&e) {
                    PersistenceError::DuplicateLayout {
                        airline_id,
                        aircraft: aircraft.to_string(),
                        name: name.to_string(),
                    }
                } else {
                    e.into()
                }
            })?;

        let layout_id: i64 = get_last_insert_rowid(conn)?;
        debug!(layout_id, airline_id, aircraft, "Created aircraft layout");

        let mut layout: AircraftLayout =
            AircraftLayout::new(airline_id, aircraft.to_string(), name.to_string());
        layout.layout_id = Some(layout_id);
        Ok(layout)
    })
}

/// Adds a row definition to an existing layout.
///
/// # Errors
///
/// Returns an error if:
/// - The seating class or seat letters are blank
/// - The layout does not exist
/// - The layout already has a row with the number
pub fn add_row_to_layout(
    conn: &mut SqliteConnection,
    layout_id: i64,
    row_number: u32,
    seating_class: &str,
    seat_letters: &str,
) -> Result<RowDefinition, PersistenceError> {
    validate_row_definition(seating_class, seat_letters)?;

    conn.transaction(|conn| {
        ensure_layout_exists(conn, layout_id)?;

        diesel::insert_into(row_definitions::table)
            .values((
                row_definitions::layout_id.eq(layout_id),
                row_definitions::number.eq(i32::try_from(row_number).unwrap_or(i32::MAX)),
                row_definitions::seating_class.eq(seating_class),
                row_definitions::seat_letters.eq(seat_letters),
            ))
            .execute(conn)
            .map_err(|e| {
                if is_unique_violation(&e) {
                    PersistenceError::DuplicateRow {
                        layout_id,
                        row_number,
                    }
                } else {
                    translate_row_integrity_error(e)
                }
            })?;

        let row_id: i64 = get_last_insert_rowid(conn)?;
        debug!(layout_id, row_number, "Added row definition");

        let mut row: RowDefinition = RowDefinition::new(
            row_number,
            seating_class.to_string(),
            seat_letters.to_string(),
        );
        row.row_id = Some(row_id);
        Ok(row)
    })
}

/// Updates a row definition in place.
///
/// # Errors
///
/// Returns an error if:
/// - The seating class or seat letters are blank
/// - The layout or row number does not exist
pub fn update_row_definition(
    conn: &mut SqliteConnection,
    layout_id: i64,
    row_number: u32,
    seating_class: &str,
    seat_letters: &str,
) -> Result<(), PersistenceError> {
    validate_row_definition(seating_class, seat_letters)?;

    conn.transaction(|conn| {
        ensure_layout_exists(conn, layout_id)?;

        let affected: usize = diesel::update(
            row_definitions::table
                .filter(row_definitions::layout_id.eq(layout_id))
                .filter(row_definitions::number.eq(i32::try_from(row_number).unwrap_or(i32::MAX))),
        )
        .set((
            row_definitions::seating_class.eq(seating_class),
            row_definitions::seat_letters.eq(seat_letters),
        ))
        .execute(conn)
        .map_err(translate_row_integrity_error)?;

        if affected == 0 {
            return Err(PersistenceError::RowNotFound {
                layout_id,
                row_number,
            });
        }

        debug!(layout_id, row_number, "Updated row definition");
        Ok(())
    })
}

/// Deletes a row definition.
///
/// # Errors
///
/// Returns an error if the layout or row number does not exist.
pub fn delete_row_from_layout(
    conn: &mut SqliteConnection,
    layout_id: i64,
    row_number: u32,
) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        ensure_layout_exists(conn, layout_id)?;

        let affected: usize = diesel::delete(
            row_definitions::table
                .filter(row_definitions::layout_id.eq(layout_id))
                .filter(row_definitions::number.eq(i32::try_from(row_number).unwrap_or(i32::MAX))),
        )
        .execute(conn)?;

        if affected == 0 {
            return Err(PersistenceError::RowNotFound {
                layout_id,
                row_number,
            });
        }

        debug!(layout_id, row_number, "Deleted row definition");
        Ok(())
    })
}

/// Deletes a layout and its row definitions.
///
/// # Errors
///
/// Returns an error if the layout does not exist or is currently applied
/// to a flight.
pub fn delete_layout(conn: &mut SqliteConnection, layout_id: i64) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        ensure_layout_exists(conn, layout_id)?;

        let referencing_flights: i64 =
            queries::layouts::count_flights_referencing_layout(conn, layout_id)?;
        if referencing_flights > 0 {
            return Err(PersistenceError::LayoutInUse(layout_id));
        }

        diesel::delete(aircraft_layouts::table.filter(aircraft_layouts::layout_id.eq(layout_id)))
            .execute(conn)
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    PersistenceError::LayoutInUse(layout_id)
                } else {
                    e.into()
                }
            })?;

        debug!(layout_id, "Deleted aircraft layout");
        Ok(())
    })
}

/// Creates a layout and all of its rows in one transaction.
///
/// Used by data-exchange imports so a bad row part-way through a file
/// cannot leave a half-imported layout behind.
///
/// # Errors
///
/// Returns an error if any constituent create fails; nothing is persisted
/// in that case.
pub fn import_layout(
    conn: &mut SqliteConnection,
    airline_id: i64,
    aircraft: &str,
    name: &str,
    rows: &[RowDefinition],
) -> Result<AircraftLayout, PersistenceError> {
    for row in rows {
        validate_row_definition(&row.seating_class, &row.seat_letters)?;
    }

    conn.transaction(|conn| {
        let mut layout: AircraftLayout = create_layout(conn, airline_id, aircraft, name)?;
        let layout_id: i64 = layout
            .layout_id
            .ok_or_else(|| PersistenceError::QueryFailed(String::from("Layout ID not assigned")))?;

        for row in rows {
            let created: RowDefinition = add_row_to_layout(
                conn,
                layout_id,
                row.number,
                &row.seating_class,
                &row.seat_letters,
            )?;
            layout.rows.push(created);
        }

        debug!(
            layout_id,
            airline_id,
            row_count = rows.len(),
            "Imported aircraft layout"
        );
        Ok(layout)
    })
}
