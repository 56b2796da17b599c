// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_exchange::airports::import_airports_json;
use crate::data_exchange::layouts::{
    CsvRowStatus, LayoutPreview, import_layout_csv, preview_layout_csv,
};
use crate::error::ApiError;
use crate::handlers;
use crate::tests::helpers::{create_test_persistence, seed_reference_data};

#[test]
fn test_layout_csv_import_round_trip() {
    let mut persistence = create_test_persistence();
    let airline_id: i64 = seed_reference_data(&mut persistence);
    let csv_data: &str = "Row,Class,Seats\n1,Business,AB\n2,Economy,ABCDEF\n";

    let layout =
        import_layout_csv(&mut persistence, airline_id, "A320", "Neo", csv_data.as_bytes())
            .unwrap();

    assert_eq!(layout.capacity, 8);
    assert_eq!(layout.rows.len(), 2);
    assert_eq!(layout.rows[0].seating_class, "Business");

    let stored = handlers::get_layout(&mut persistence, layout.layout_id).unwrap();
    assert_eq!(stored.capacity, 8);
}

#[test]
fn test_layout_csv_import_rejects_bad_row_number() {
    let mut persistence = create_test_persistence();
    let airline_id: i64 = seed_reference_data(&mut persistence);
    let csv_data: &str = "Row,Class,Seats\n1,Economy,ABCDEF\nten,Economy,AB\n";

    let result = import_layout_csv(&mut persistence, airline_id, "A320", "", csv_data.as_bytes());

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, message })
            if field == "layout_csv" && message.contains("Record 2")
    ));
}

#[test]
fn test_layout_csv_import_leaves_nothing_behind_on_failure() {
    let mut persistence = create_test_persistence();
    let airline_id: i64 = seed_reference_data(&mut persistence);
    let csv_data: &str = "Row,Class,Seats\n1,Economy,ABCDEF\n1,Economy,AB\n";

    let result = import_layout_csv(&mut persistence, airline_id, "A320", "", csv_data.as_bytes());

    assert!(matches!(
        result,
        Err(ApiError::DuplicateResource { resource_type, .. })
            if resource_type == "Row definition"
    ));
    assert!(handlers::list_layouts(&mut persistence, Some(airline_id))
        .unwrap()
        .is_empty());
}

#[test]
fn test_layout_csv_preview_reports_row_statuses() {
    let csv_data: &str = concat!(
        "Row,Class,Seats\n",
        "1,Economy,ABCDEF\n",
        "ten,Economy,AB\n",
        "3,   ,ABCD\n",
        "1,Business,AB\n",
    );

    let preview: LayoutPreview = preview_layout_csv(csv_data.as_bytes());

    assert_eq!(preview.total_rows, 4);
    assert_eq!(preview.valid_count, 1);
    assert_eq!(preview.invalid_count, 3);

    assert_eq!(preview.rows[0].status, CsvRowStatus::Valid);
    assert_eq!(preview.rows[0].number, Some(1));

    assert_eq!(preview.rows[1].status, CsvRowStatus::Invalid);
    assert!(preview.rows[1].errors[0].contains("not a whole number"));

    assert_eq!(preview.rows[2].status, CsvRowStatus::Invalid);
    assert!(preview.rows[2].errors[0].contains("Seating class"));

    // Row number 1 was already seen on the first record
    assert_eq!(preview.rows[3].status, CsvRowStatus::Invalid);
    assert!(preview.rows[3].errors[0].contains("more than once"));
}

#[test]
fn test_airport_json_import_creates_records() {
    let mut persistence = create_test_persistence();
    let json_data: &str = r#"{
        "airports": {
            "RMU": { "code": "RMU", "name": "Murcia International Airport", "tz": "Europe/Madrid" },
            "LGW": { "code": "LGW", "name": "London Gatwick", "tz": "Europe/London" }
        }
    }"#;

    let imported = import_airports_json(&mut persistence, json_data).unwrap();

    let codes: Vec<&str> = imported.iter().map(|a| a.code.as_str()).collect();
    assert_eq!(codes, vec!["LGW", "RMU"]);

    let gatwick = handlers::get_airport_by_code(&mut persistence, "LGW").unwrap();
    assert_eq!(gatwick.name, "London Gatwick");
    assert_eq!(gatwick.timezone, "Europe/London");
}

#[test]
fn test_airport_json_import_rejects_malformed_data() {
    let mut persistence = create_test_persistence();

    let result = import_airports_json(&mut persistence, "{\"airports\": [1, 2]}");

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "airports_json"
    ));
}

#[test]
fn test_airport_json_import_rejects_duplicate_code() {
    let mut persistence = create_test_persistence();
    handlers::create_airport(&mut persistence, "LGW", "London Gatwick", "Europe/London").unwrap();
    let json_data: &str = r#"{
        "airports": {
            "LGW": { "code": "LGW", "name": "London Gatwick", "tz": "Europe/London" }
        }
    }"#;

    let result = import_airports_json(&mut persistence, json_data);

    assert!(matches!(
        result,
        Err(ApiError::DuplicateResource { resource_type, .. }) if resource_type == "Airport"
    ));
}
