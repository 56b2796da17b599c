// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// One row of an aircraft layout: a row number, the seating class for the
/// row, and one letter per seat in the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowDefinition {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the row has not been persisted yet.
    pub row_id: Option<i64>,
    /// The row number. Unique within the owning layout.
    pub number: u32,
    /// The seating class for the row, e.g. "Economy".
    pub seating_class: String,
    /// One character per seat in the row, e.g. "ABCDEF".
    pub seat_letters: String,
}

impl RowDefinition {
    /// Creates a new `RowDefinition` without a persisted ID.
    #[must_use]
    pub const fn new(number: u32, seating_class: String, seat_letters: String) -> Self {
        Self {
            row_id: None,
            number,
            seating_class,
            seat_letters,
        }
    }

    /// Returns the number of seats in this row.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seat_letters.chars().count()
    }

    /// Returns the seat numbers this row generates, in letter order,
    /// e.g. "12A", "12B", ... for row 12 with letters "AB...".
    pub fn seat_numbers(&self) -> impl Iterator<Item = String> + '_ {
        let number: u32 = self.number;
        self.seat_letters
            .chars()
            .map(move |letter| format!("{number}{letter}"))
    }
}

/// A named, airline-scoped template for generating a flight's seats.
///
/// Layouts are identified by the (airline, aircraft model, layout name)
/// triple. The name may be empty, but the triple is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AircraftLayout {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the layout has not been persisted yet.
    pub layout_id: Option<i64>,
    /// The owning airline's ID.
    pub airline_id: i64,
    /// The aircraft model, e.g. "A321".
    pub aircraft: String,
    /// The airline-specific layout name, e.g. "Neo". May be empty.
    pub name: String,
    /// The row definitions, in row-number order.
    pub rows: Vec<RowDefinition>,
}

impl AircraftLayout {
    /// Creates a new `AircraftLayout` with no rows and no persisted ID.
    #[must_use]
    pub const fn new(airline_id: i64, aircraft: String, name: String) -> Self {
        Self {
            layout_id: None,
            airline_id,
            aircraft,
            name,
            rows: Vec::new(),
        }
    }

    /// Returns the total seat count across all rows.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.rows.iter().map(RowDefinition::seat_count).sum()
    }

    /// Returns whether the layout already contains a row with the given
    /// number.
    #[must_use]
    pub fn has_row(&self, number: u32) -> bool {
        self.rows.iter().any(|row| row.number == number)
    }

    /// Returns the seat numbers the layout generates, in row order and
    /// letter order within each row. This ordering is the creation order
    /// of seats when the layout is applied to a flight.
    pub fn seat_numbers(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().flat_map(RowDefinition::seat_numbers)
    }
}
