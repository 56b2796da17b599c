// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::boarding_cards::{
    CardBatch, CardGenerationJob, CardGeneratorRegistry, card_file_name, generate_boarding_cards,
    prepare_boarding_cards,
};
use crate::error::ApiError;
use crate::handlers;
use crate::tests::helpers::{
    PlainTextCardGenerator, StubBinaryCardGenerator, create_test_persistence, seed_flight,
    seed_layout, seed_passenger_on_flight, seed_reference_data, unique_output_root,
};
use skybook_domain::parse_departure;
use skybook_persistence::Persistence;
use std::fs;
use std::sync::Arc;

/// Seeds a flight with an applied layout and one seated passenger.
/// Returns the flight ID.
fn seed_seated_flight(persistence: &mut Persistence) -> i64 {
    let airline_id: i64 = seed_reference_data(persistence);
    let flight_id: i64 = seed_flight(persistence);
    let passenger_id: i64 =
        seed_passenger_on_flight(persistence, flight_id, "Marie Curie", "1234567890");
    let layout_id: i64 = seed_layout(persistence, airline_id, "A320", "", &[(1, "ABCDEF")]);
    handlers::apply_aircraft_layout(persistence, flight_id, layout_id).unwrap();
    handlers::allocate_seat(persistence, flight_id, passenger_id, "1A").unwrap();
    flight_id
}

fn text_registry() -> CardGeneratorRegistry {
    let mut registry = CardGeneratorRegistry::new();
    registry.register("txt", Box::new(PlainTextCardGenerator));
    registry
}

#[test]
fn test_registry_lookup_hit_and_miss() {
    let mut registry = CardGeneratorRegistry::new();
    registry.register("txt", Box::new(PlainTextCardGenerator));
    registry.register("pdf", Box::new(StubBinaryCardGenerator));

    assert_eq!(registry.formats(), vec!["pdf", "txt"]);
    assert!(registry.get("txt").is_ok());

    let missing = registry.get("html").unwrap_err();
    assert_eq!(missing.card_format, "html");
}

#[test]
fn test_card_file_name_is_sanitized_and_lowercased() {
    let departure = parse_departure("20/11/2026", "10:45").unwrap();

    let file_name: String = card_file_name("U2 854/9", "1A", departure, "txt");

    assert_eq!(file_name, "u2_854_9_1a_20261120.txt");
}

#[test]
fn test_prepared_cards_carry_local_times() {
    let mut persistence = create_test_persistence();
    let flight_id: i64 = seed_seated_flight(&mut persistence);

    let batch: CardBatch =
        prepare_boarding_cards(&mut persistence, flight_id, "txt", "22A").unwrap();

    assert_eq!(batch.cards.len(), 1);
    let fields = &batch.cards[0].fields;
    assert_eq!(fields.gate, "22A");
    assert_eq!(fields.airline, "EasyJet");
    assert_eq!(fields.embarkation, "LGW");
    assert_eq!(fields.embarkation_name, "London Gatwick");
    assert_eq!(fields.destination, "RMU");
    // London is on GMT in November; Murcia is UTC+1, so a 10:45 UTC
    // departure with a 2:30 duration arrives at 14:15 local
    assert_eq!(fields.departs, "10:45 AM");
    assert_eq!(fields.arrives, "02:15 PM");
    assert_eq!(fields.name, "Marie Curie");
    assert_eq!(fields.seat_number, "1A");
    assert_eq!(batch.cards[0].file_name, "u28549_1a_20261120.txt");
}

#[test]
fn test_blank_gate_is_rejected() {
    let mut persistence = create_test_persistence();
    let flight_id: i64 = seed_seated_flight(&mut persistence);

    let result = prepare_boarding_cards(&mut persistence, flight_id, "txt", "  ");

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "gate"
    ));
}

#[test]
fn test_flight_without_seats_is_rejected() {
    let mut persistence = create_test_persistence();
    seed_reference_data(&mut persistence);
    let flight_id: i64 = seed_flight(&mut persistence);

    let result = prepare_boarding_cards(&mut persistence, flight_id, "txt", "22A");

    assert!(matches!(
        result,
        Err(ApiError::SeatingRuleViolation { rule, .. }) if rule == "no-layout"
    ));
}

#[test]
fn test_unregistered_format_is_rejected() {
    let mut persistence = create_test_persistence();
    let flight_id: i64 = seed_seated_flight(&mut persistence);
    let registry = CardGeneratorRegistry::new();
    let output_root = unique_output_root();

    let result = generate_boarding_cards(
        &mut persistence,
        &registry,
        flight_id,
        "pdf",
        "22A",
        &output_root,
    );

    assert_eq!(
        result,
        Err(ApiError::MissingCardGenerator {
            card_format: String::from("pdf"),
        })
    );
}

#[test]
fn test_generation_writes_one_card_per_occupied_seat() {
    let mut persistence = create_test_persistence();
    let flight_id: i64 = seed_seated_flight(&mut persistence);
    let second: i64 =
        seed_passenger_on_flight(&mut persistence, flight_id, "Ada Lovelace", "2345678901");
    handlers::allocate_seat(&mut persistence, flight_id, second, "1C").unwrap();
    let registry = text_registry();
    let output_root = unique_output_root();

    let written = generate_boarding_cards(
        &mut persistence,
        &registry,
        flight_id,
        "txt",
        "22A",
        &output_root,
    )
    .unwrap();

    // One card per occupied seat; the four free seats produce nothing
    assert_eq!(written.len(), 2);
    assert!(written[0].ends_with("boarding_cards/u28549_1a_20261120.txt"));
    assert!(written[1].ends_with("boarding_cards/u28549_1c_20261120.txt"));

    let first_card: String = fs::read_to_string(&written[0]).unwrap();
    assert_eq!(first_card, "Marie Curie|1A|22A|10:45 AM|02:15 PM|EasyJet");

    fs::remove_dir_all(&output_root).unwrap();
}

#[test]
fn test_generation_writes_binary_formats() {
    let mut persistence = create_test_persistence();
    let flight_id: i64 = seed_seated_flight(&mut persistence);
    let mut registry = CardGeneratorRegistry::new();
    registry.register("pdf", Box::new(StubBinaryCardGenerator));
    let output_root = unique_output_root();

    let written = generate_boarding_cards(
        &mut persistence,
        &registry,
        flight_id,
        "pdf",
        "22A",
        &output_root,
    )
    .unwrap();

    assert_eq!(fs::read(&written[0]).unwrap(), vec![0x25, 0x50, 0x44, 0x46]);

    fs::remove_dir_all(&output_root).unwrap();
}

#[test]
fn test_background_job_writes_cards() {
    let mut persistence = create_test_persistence();
    let flight_id: i64 = seed_seated_flight(&mut persistence);
    let registry = Arc::new(text_registry());
    let output_root = unique_output_root();

    let job = CardGenerationJob::spawn(
        &mut persistence,
        registry,
        flight_id,
        "txt",
        "22A",
        output_root.clone(),
    )
    .unwrap();
    let written = job.join().unwrap();

    assert_eq!(written.len(), 1);
    assert!(written[0].exists());

    fs::remove_dir_all(&output_root).unwrap();
}

#[test]
fn test_background_job_rejects_flight_without_passengers() {
    let mut persistence = create_test_persistence();
    let airline_id: i64 = seed_reference_data(&mut persistence);
    let flight_id: i64 = seed_flight(&mut persistence);
    let layout_id: i64 = seed_layout(&mut persistence, airline_id, "A320", "", &[(1, "ABCDEF")]);
    handlers::apply_aircraft_layout(&mut persistence, flight_id, layout_id).unwrap();
    let registry = Arc::new(text_registry());

    let result = CardGenerationJob::spawn(
        &mut persistence,
        registry,
        flight_id,
        "txt",
        "22A",
        unique_output_root(),
    );

    assert!(matches!(
        result,
        Err(ApiError::SeatingRuleViolation { rule, .. }) if rule == "no-passengers"
    ));
}

#[test]
fn test_background_job_rejects_unregistered_format_before_spawning() {
    let mut persistence = create_test_persistence();
    let flight_id: i64 = seed_seated_flight(&mut persistence);
    let registry = Arc::new(CardGeneratorRegistry::new());

    let result = CardGenerationJob::spawn(
        &mut persistence,
        registry,
        flight_id,
        "pdf",
        "22A",
        unique_output_root(),
    );

    assert!(matches!(
        result,
        Err(ApiError::MissingCardGenerator { card_format }) if card_format == "pdf"
    ));
}
