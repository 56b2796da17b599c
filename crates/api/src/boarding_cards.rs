// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boarding card generation.
//!
//! Card rendering is pluggable: a generator implements [`CardGenerator`]
//! for one output format and is registered against that format's
//! identifier in a [`CardGeneratorRegistry`] at startup. Generation then
//! assembles the card fields for every occupied seat on a flight, renders
//! each card through the registered generator and writes the results under
//! a `boarding_cards` directory.
//!
//! Rendering and writing can run on the caller's thread via
//! [`generate_boarding_cards`] or on a background thread via
//! [`CardGenerationJob`]. The job snapshots everything it needs from the
//! database up front, so the background thread never touches storage.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use chrono::NaiveDateTime;
use skybook_domain::{Airline, Airport, Flight, Passenger, SeatAssignment};
use skybook_persistence::Persistence;
use thiserror::Error;
use tracing::{debug, info};

use crate::error::ApiError;

/// Local-time format used on cards: 12-hour clock with an AM/PM suffix.
const CARD_TIME_FORMAT: &str = "%I:%M %p";

/// The fields a generator receives for one passenger's boarding card.
///
/// All values are display-ready strings; the generator only decides how
/// they are laid out in its output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFields {
    /// The departure gate number.
    pub gate: String,
    /// The name of the airline.
    pub airline: String,
    /// The name of the embarkation airport.
    pub embarkation_name: String,
    /// The 3-letter IATA code of the embarkation airport.
    pub embarkation: String,
    /// The departure time, local to the embarkation airport.
    pub departs: String,
    /// The name of the destination airport.
    pub destination_name: String,
    /// The 3-letter IATA code of the destination airport.
    pub destination: String,
    /// The arrival time, local to the destination airport.
    pub arrives: String,
    /// The passenger's name.
    pub name: String,
    /// The seat number, e.g. "28A".
    pub seat_number: String,
}

/// Rendered card data in the generator's output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardData {
    /// Text output, e.g. html or txt. Written UTF-8 encoded.
    Text(String),
    /// Binary output, e.g. pdf. Written as-is.
    Binary(Vec<u8>),
}

/// Capability implemented by boarding-card format plugins.
///
/// Generators must be shareable with the background generation thread.
pub trait CardGenerator: Send + Sync {
    /// Renders one boarding card from its fields.
    fn generate(&self, fields: &CardFields) -> CardData;
}

/// No generator is registered for the requested card format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Boarding card generator not registered for format '{card_format}'")]
pub struct MissingGeneratorError {
    /// The format that had no registered generator.
    pub card_format: String,
}

impl From<MissingGeneratorError> for ApiError {
    fn from(err: MissingGeneratorError) -> Self {
        Self::MissingCardGenerator {
            card_format: err.card_format,
        }
    }
}

/// Registry mapping a card format identifier to its generator.
///
/// Populated by explicit [`register`](Self::register) calls at startup;
/// there is no automatic discovery.
#[derive(Default)]
pub struct CardGeneratorRegistry {
    generators: HashMap<String, Box<dyn CardGenerator>>,
}

impl CardGeneratorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a generator for a format, replacing any generator
    /// previously registered for it.
    pub fn register(&mut self, card_format: &str, generator: Box<dyn CardGenerator>) {
        debug!(card_format, "Registered boarding card generator");
        self.generators.insert(card_format.to_string(), generator);
    }

    /// Looks up the generator for a format.
    ///
    /// # Errors
    ///
    /// Returns an error if no generator is registered for the format.
    pub fn get(&self, card_format: &str) -> Result<&dyn CardGenerator, MissingGeneratorError> {
        self.generators
            .get(card_format)
            .map(Box::as_ref)
            .ok_or_else(|| MissingGeneratorError {
                card_format: card_format.to_string(),
            })
    }

    /// Returns the registered format identifiers, sorted.
    #[must_use]
    pub fn formats(&self) -> Vec<String> {
        let mut formats: Vec<String> = self.generators.keys().cloned().collect();
        formats.sort();
        formats
    }
}

/// Constructs the file name for one boarding card:
/// `{flight_number}_{seat_number}_{YYYYMMDD}.{format}`, with every
/// non-alphanumeric character replaced by an underscore and the whole name
/// lowercased.
#[must_use]
pub fn card_file_name(
    flight_number: &str,
    seat_number: &str,
    departure: NaiveDateTime,
    card_format: &str,
) -> String {
    let stem: String = format!(
        "{flight_number}_{seat_number}_{}",
        departure.format("%Y%m%d")
    );
    let stem: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}.{card_format}")
}

/// One card ready for rendering: its target file name and its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCard {
    /// The file name the rendered card is written to.
    pub file_name: String,
    /// The fields handed to the generator.
    pub fields: CardFields,
}

/// A flight's boarding cards, snapshotted and ready for rendering.
///
/// A batch is self-contained: rendering and writing it needs no further
/// database access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardBatch {
    /// The requested card format.
    pub card_format: String,
    /// One prepared card per occupied seat, in seat creation order.
    pub cards: Vec<PreparedCard>,
}

/// Assembles the boarding card batch for a flight.
///
/// One card is prepared per occupied seat, in seat creation order.
///
/// # Errors
///
/// Returns an error if:
/// - The gate is blank
/// - The flight does not exist
/// - The flight has no seats
/// - An airport's stored timezone does not resolve
pub fn prepare_boarding_cards(
    persistence: &mut Persistence,
    flight_id: i64,
    card_format: &str,
    gate: &str,
) -> Result<CardBatch, ApiError> {
    if gate.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("gate"),
            message: String::from("Gate must be specified to generate boarding cards"),
        });
    }

    let flight: Flight = persistence.get_flight(flight_id)?;
    let seats: Vec<SeatAssignment> = persistence.list_seats(flight_id)?;
    if seats.is_empty() {
        return Err(ApiError::SeatingRuleViolation {
            rule: String::from("no-layout"),
            message: String::from("Cannot generate boarding cards for a flight with no seats"),
        });
    }

    let passengers: Vec<Passenger> = persistence.list_passengers_for_flight(flight_id)?;
    let airline: Airline = persistence.get_airline_by_id(flight.airline_id)?;
    let embarkation: Airport = persistence.get_airport_by_id(flight.embarkation_airport_id)?;
    let destination: Airport = persistence.get_airport_by_id(flight.destination_airport_id)?;

    let departs: String = flight
        .departs_localtime(&embarkation)?
        .format(CARD_TIME_FORMAT)
        .to_string();
    let arrives: String = flight
        .arrives_localtime(&destination)?
        .format(CARD_TIME_FORMAT)
        .to_string();

    let mut cards: Vec<PreparedCard> = Vec::new();
    for seat in &seats {
        let Some(passenger_id) = seat.passenger_id else {
            continue;
        };
        let passenger: &Passenger = passengers
            .iter()
            .find(|p| p.passenger_id == Some(passenger_id))
            .ok_or_else(|| ApiError::Internal {
                message: format!(
                    "Seat {} references passenger {passenger_id} who is not on the flight",
                    seat.seat_number
                ),
            })?;

        cards.push(PreparedCard {
            file_name: card_file_name(
                &flight.number,
                &seat.seat_number,
                flight.departure,
                card_format,
            ),
            fields: CardFields {
                gate: gate.to_string(),
                airline: airline.name.clone(),
                embarkation_name: embarkation.name.clone(),
                embarkation: embarkation.code.clone(),
                departs: departs.clone(),
                destination_name: destination.name.clone(),
                destination: destination.code.clone(),
                arrives: arrives.clone(),
                name: passenger.name.clone(),
                seat_number: seat.seat_number.clone(),
            },
        });
    }

    Ok(CardBatch {
        card_format: card_format.to_string(),
        cards,
    })
}

/// Renders a batch through the registered generator and writes one file
/// per card under `{output_root}/boarding_cards`, creating the directory
/// on demand. Returns the written paths in card order.
///
/// # Errors
///
/// Returns an error if no generator is registered for the batch's format
/// or a directory or file write fails.
pub fn write_cards(
    batch: &CardBatch,
    registry: &CardGeneratorRegistry,
    output_root: &Path,
) -> Result<Vec<PathBuf>, ApiError> {
    let generator: &dyn CardGenerator = registry.get(&batch.card_format)?;

    let card_folder: PathBuf = output_root.join("boarding_cards");
    fs::create_dir_all(&card_folder).map_err(|e| ApiError::CardWriteFailed {
        message: format!("Cannot create {}: {e}", card_folder.display()),
    })?;

    let mut written: Vec<PathBuf> = Vec::with_capacity(batch.cards.len());
    for card in &batch.cards {
        let path: PathBuf = card_folder.join(&card.file_name);
        let result = match generator.generate(&card.fields) {
            CardData::Text(text) => fs::write(&path, text),
            CardData::Binary(bytes) => fs::write(&path, bytes),
        };
        result.map_err(|e| ApiError::CardWriteFailed {
            message: format!("Cannot write {}: {e}", path.display()),
        })?;
        written.push(path);
    }

    info!(
        card_format = batch.card_format,
        count = written.len(),
        "Wrote boarding cards"
    );
    Ok(written)
}

/// Generates boarding cards for a flight on the calling thread.
///
/// # Errors
///
/// Returns an error if the batch cannot be assembled (see
/// [`prepare_boarding_cards`]), no generator is registered for the format,
/// or writing fails.
pub fn generate_boarding_cards(
    persistence: &mut Persistence,
    registry: &CardGeneratorRegistry,
    flight_id: i64,
    card_format: &str,
    gate: &str,
    output_root: &Path,
) -> Result<Vec<PathBuf>, ApiError> {
    let batch: CardBatch = prepare_boarding_cards(persistence, flight_id, card_format, gate)?;
    write_cards(&batch, registry, output_root)
}

/// A boarding card generation run on a background thread.
///
/// All validation and database access happens in [`spawn`](Self::spawn);
/// the thread only renders and writes the snapshotted batch. The seating
/// workflow fires this after seating is finalized and does not wait on it;
/// callers that need the outcome can [`join`](Self::join).
pub struct CardGenerationJob {
    handle: JoinHandle<Result<Vec<PathBuf>, ApiError>>,
}

impl CardGenerationJob {
    /// Validates the request, snapshots the flight's cards and starts the
    /// background thread.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The flight has no passengers
    /// - The batch cannot be assembled (see [`prepare_boarding_cards`])
    /// - No generator is registered for the format
    pub fn spawn(
        persistence: &mut Persistence,
        registry: Arc<CardGeneratorRegistry>,
        flight_id: i64,
        card_format: &str,
        gate: &str,
        output_root: PathBuf,
    ) -> Result<Self, ApiError> {
        if persistence.list_passengers_for_flight(flight_id)?.is_empty() {
            return Err(ApiError::SeatingRuleViolation {
                rule: String::from("no-passengers"),
                message: String::from(
                    "Cannot generate boarding cards for a flight with no passengers",
                ),
            });
        }

        let batch: CardBatch = prepare_boarding_cards(persistence, flight_id, card_format, gate)?;
        // Surface a missing generator to the caller instead of losing it on
        // the background thread
        registry.get(card_format)?;

        debug!(
            flight_id,
            card_format,
            count = batch.cards.len(),
            "Started boarding card generation"
        );
        let handle: JoinHandle<Result<Vec<PathBuf>, ApiError>> =
            thread::spawn(move || write_cards(&batch, &registry, &output_root));
        Ok(Self { handle })
    }

    /// Waits for the run to finish and returns the written paths.
    ///
    /// # Errors
    ///
    /// Returns an error if writing failed or the thread panicked.
    pub fn join(self) -> Result<Vec<PathBuf>, ApiError> {
        self.handle.join().map_err(|_| ApiError::Internal {
            message: String::from("Boarding card generation thread panicked"),
        })?
    }
}
