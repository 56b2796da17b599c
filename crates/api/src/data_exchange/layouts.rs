// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV import and preview of aircraft layouts.
//!
//! The file format is one header row followed by one record per aircraft
//! row with three positional columns:
//!
//! | Column | Content                                             |
//! |--------|-----------------------------------------------------|
//! | 0      | The row number                                      |
//! | 1      | The seating class for the row, e.g. Economy         |
//! | 2      | A string of seat letters, one per seat, e.g. ABCDEF |
//!
//! So row 28 with six economy seats lettered A-F is `28,Economy,ABCDEF`.

use std::collections::HashSet;
use std::io::Read;

use csv::StringRecord;
use skybook_domain::RowDefinition;
use skybook_persistence::Persistence;
use tracing::info;

use crate::error::ApiError;
use crate::handlers::into_layout_info;
use crate::request_response::LayoutInfo;

const ROW_NUMBER_COLUMN: usize = 0;
const CLASS_COLUMN: usize = 1;
const SEAT_LETTERS_COLUMN: usize = 2;

/// Validation outcome for one CSV record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvRowStatus {
    /// The record parses and can be imported.
    Valid,
    /// The record has errors and would be rejected by an import.
    Invalid,
}

/// The preview result for one CSV record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRowPreview {
    /// The record's position in the file (1-based, excluding the header).
    pub line: usize,
    /// The parsed row number, if it parsed.
    pub number: Option<u32>,
    /// The seating class, if present and non-blank.
    pub seating_class: Option<String>,
    /// The seat letters, if present and non-blank.
    pub seat_letters: Option<String>,
    /// Whether the record would import.
    pub status: CsvRowStatus,
    /// Zero or more validation errors.
    pub errors: Vec<String>,
}

/// The preview result for a whole layout CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPreview {
    /// Per-record results, in file order.
    pub rows: Vec<LayoutRowPreview>,
    /// Total number of records.
    pub total_rows: usize,
    /// Number of records that would import.
    pub valid_count: usize,
    /// Number of records that would be rejected.
    pub invalid_count: usize,
}

/// Reads one field, treating a missing column and a blank value alike.
fn read_field(record: &StringRecord, column: usize) -> Option<String> {
    record
        .get(column)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Parses one CSV record into a row definition, accumulating every error
/// rather than stopping at the first.
fn parse_layout_record(record: &StringRecord) -> Result<RowDefinition, Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    let number: Option<u32> = match read_field(record, ROW_NUMBER_COLUMN) {
        Some(text) => match text.parse::<u32>() {
            Ok(number) => Some(number),
            Err(_) => {
                errors.push(format!("Row number '{text}' is not a whole number"));
                None
            }
        },
        None => {
            errors.push(String::from("Row number is missing"));
            None
        }
    };

    let seating_class: Option<String> = read_field(record, CLASS_COLUMN);
    if seating_class.is_none() {
        errors.push(String::from("Seating class is missing or blank"));
    }

    let seat_letters: Option<String> = read_field(record, SEAT_LETTERS_COLUMN);
    if seat_letters.is_none() {
        errors.push(String::from("Seat letters are missing or blank"));
    }

    match (number, seating_class, seat_letters) {
        (Some(number), Some(seating_class), Some(seat_letters)) if errors.is_empty() => {
            Ok(RowDefinition::new(number, seating_class, seat_letters))
        }
        _ => Err(errors),
    }
}

/// Imports an aircraft layout from CSV data.
///
/// The layout and all of its rows are created in one transaction, so a bad
/// record part-way through the file leaves nothing behind.
///
/// # Errors
///
/// Returns an error if:
/// - A record fails to parse or has blank fields
/// - The airline does not exist
/// - The layout identity or a row number is already taken
pub fn import_layout_csv<R: Read>(
    persistence: &mut Persistence,
    airline_id: i64,
    aircraft: &str,
    name: &str,
    reader: R,
) -> Result<LayoutInfo, ApiError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut rows: Vec<RowDefinition> = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let line: usize = index + 1;
        let record: StringRecord = record.map_err(|e| ApiError::InvalidInput {
            field: String::from("layout_csv"),
            message: format!("Record {line}: {e}"),
        })?;
        let row: RowDefinition = parse_layout_record(&record).map_err(|errors| {
            ApiError::InvalidInput {
                field: String::from("layout_csv"),
                message: format!("Record {line}: {}", errors.join("; ")),
            }
        })?;
        rows.push(row);
    }

    let layout = persistence.import_layout(airline_id, aircraft, name, &rows)?;
    info!(
        airline_id,
        aircraft,
        row_count = layout.rows.len(),
        "Imported aircraft layout from CSV"
    );
    Ok(into_layout_info(layout))
}

/// Validates CSV layout data without touching the database.
///
/// Every record gets a per-record result, including unreadable ones;
/// duplicate row numbers within the file are flagged on the later
/// occurrence.
#[must_use]
pub fn preview_layout_csv<R: Read>(reader: R) -> LayoutPreview {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<LayoutRowPreview> = Vec::new();
    let mut seen_numbers: HashSet<u32> = HashSet::new();

    for (index, record) in csv_reader.records().enumerate() {
        let line: usize = index + 1;
        let record: StringRecord = match record {
            Ok(record) => record,
            Err(e) => {
                rows.push(LayoutRowPreview {
                    line,
                    number: None,
                    seating_class: None,
                    seat_letters: None,
                    status: CsvRowStatus::Invalid,
                    errors: vec![format!("Unreadable record: {e}")],
                });
                continue;
            }
        };

        let (number, seating_class, seat_letters, mut errors) =
            match parse_layout_record(&record) {
                Ok(row) => (
                    Some(row.number),
                    Some(row.seating_class),
                    Some(row.seat_letters),
                    Vec::new(),
                ),
                Err(errors) => (
                    read_field(&record, ROW_NUMBER_COLUMN).and_then(|text| text.parse().ok()),
                    read_field(&record, CLASS_COLUMN),
                    read_field(&record, SEAT_LETTERS_COLUMN),
                    errors,
                ),
            };

        if let Some(number) = number
            && !seen_numbers.insert(number)
        {
            errors.push(format!("Row number {number} appears more than once"));
        }

        let status: CsvRowStatus = if errors.is_empty() {
            CsvRowStatus::Valid
        } else {
            CsvRowStatus::Invalid
        };
        rows.push(LayoutRowPreview {
            line,
            number,
            seating_class,
            seat_letters,
            status,
            errors,
        });
    }

    let total_rows: usize = rows.len();
    let valid_count: usize = rows
        .iter()
        .filter(|row| row.status == CsvRowStatus::Valid)
        .count();
    LayoutPreview {
        rows,
        total_rows,
        valid_count,
        invalid_count: total_rows - valid_count,
    }
}
