// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transactional execution of seating-engine plans.
//!
//! The engine plans are pure; this module is where they become durable.
//! Each operation here is one all-or-nothing transaction: a rejection from
//! the engine, or any storage failure part-way through, rolls back to the
//! flight's prior seat state.

use diesel::SqliteConnection;
use diesel::prelude::*;
use skybook::{ReallocationPlan, SeatMove, SeatingState, plan_reallocation, plan_seat_allocation};
use skybook_domain::AircraftLayout;
use tracing::{debug, info};

use crate::diesel_schema::{flights, seats};
use crate::error::PersistenceError;
use crate::queries;

/// Applies an aircraft layout to a flight, carrying seat allocations
/// across by seat number and re-seating displaced passengers.
///
/// The flight's old seats are deleted and the plan's seats inserted in
/// plan order, so seat rowids preserve the row-major creation order the
/// deterministic re-seating contract depends on.
///
/// # Errors
///
/// Returns an error if:
/// - The flight or layout does not exist
/// - The engine rejects the application (wrong airline, already applied,
///   or not enough seats)
/// - Any statement fails; the transaction rolls back in full
pub fn apply_aircraft_layout(
    conn: &mut SqliteConnection,
    flight_id: i64,
    layout_id: i64,
) -> Result<ReallocationPlan, PersistenceError> {
    conn.transaction(|conn| {
        let state: SeatingState = queries::flights::get_seating_state(conn, flight_id)?;
        let layout: AircraftLayout = queries::layouts::get_layout(conn, layout_id)?;

        let plan: ReallocationPlan = plan_reallocation(&state, &layout)?;

        diesel::delete(seats::table.filter(seats::flight_id.eq(flight_id))).execute(conn)?;

        // One insert per seat, in plan order: monotone rowids are the
        // creation-order contract
        for seat in &plan.seats {
            diesel::insert_into(seats::table)
                .values((
                    seats::flight_id.eq(flight_id),
                    seats::passenger_id.eq(seat.passenger_id),
                    seats::seat_number.eq(seat.seat_number.as_str()),
                ))
                .execute(conn)?;
        }

        diesel::update(flights::table.filter(flights::flight_id.eq(flight_id)))
            .set(flights::aircraft_layout_id.eq(Some(layout_id)))
            .execute(conn)?;

        info!(
            flight_id,
            layout_id,
            seat_count = plan.seats.len(),
            preserved = plan.preserved_count,
            displaced = plan.displaced.len(),
            "Applied aircraft layout"
        );

        Ok(plan)
    })
}

/// Allocates a seat to a passenger, vacating their previous seat if they
/// hold one.
///
/// # Errors
///
/// Returns an error if:
/// - The flight does not exist
/// - The engine rejects the allocation (no layout, passenger not on the
///   flight, seat missing or already held)
/// - Any statement fails; the transaction rolls back in full
pub fn allocate_seat(
    conn: &mut SqliteConnection,
    flight_id: i64,
    passenger_id: i64,
    seat_number: &str,
) -> Result<SeatMove, PersistenceError> {
    conn.transaction(|conn| {
        let state: SeatingState = queries::flights::get_seating_state(conn, flight_id)?;

        let seat_move: SeatMove = plan_seat_allocation(&state, passenger_id, seat_number)?;

        if let Some(vacated_seat) = &seat_move.vacated_seat {
            diesel::update(
                seats::table
                    .filter(seats::flight_id.eq(flight_id))
                    .filter(seats::seat_number.eq(vacated_seat)),
            )
            .set(seats::passenger_id.eq(None::<i64>))
            .execute(conn)?;
        }

        diesel::update(
            seats::table
                .filter(seats::flight_id.eq(flight_id))
                .filter(seats::seat_number.eq(&seat_move.target_seat)),
        )
        .set(seats::passenger_id.eq(Some(passenger_id)))
        .execute(conn)?;

        debug!(
            flight_id,
            passenger_id,
            seat_number,
            vacated = seat_move.vacated_seat.as_deref().unwrap_or("-"),
            "Allocated seat"
        );

        Ok(seat_move)
    })
}
