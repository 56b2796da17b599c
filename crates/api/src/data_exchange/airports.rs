// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON import of airport definitions.
//!
//! The file format is a single object keyed by airport code:
//!
//! ```json
//! {
//!     "airports": {
//!         "LGW": { "code": "LGW", "name": "London Gatwick", "tz": "Europe/London" }
//!     }
//! }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use skybook_persistence::Persistence;
use tracing::info;

use crate::error::ApiError;
use crate::handlers::into_airport_info;
use crate::request_response::AirportInfo;

#[derive(Debug, Deserialize)]
struct AirportsFile {
    // BTreeMap keeps the import in code order, independent of the file's
    // key order
    airports: BTreeMap<String, AirportEntry>,
}

#[derive(Debug, Deserialize)]
struct AirportEntry {
    code: String,
    name: String,
    tz: String,
}

/// Imports airport definitions from JSON data, one airport record per
/// entry, in airport-code order.
///
/// # Errors
///
/// Returns an error if the JSON is malformed, an entry has an invalid
/// code, name or timezone, or an airport with an entry's code already
/// exists. Entries imported before a failing one remain.
pub fn import_airports_json(
    persistence: &mut Persistence,
    json_data: &str,
) -> Result<Vec<AirportInfo>, ApiError> {
    let file: AirportsFile =
        serde_json::from_str(json_data).map_err(|e| ApiError::InvalidInput {
            field: String::from("airports_json"),
            message: format!("Malformed airport definition data: {e}"),
        })?;

    let mut imported: Vec<AirportInfo> = Vec::with_capacity(file.airports.len());
    for entry in file.airports.into_values() {
        let airport = persistence.create_airport(&entry.code, &entry.name, &entry.tz)?;
        imported.push(into_airport_info(airport));
    }

    info!(count = imported.len(), "Imported airport definitions");
    Ok(imported)
}
