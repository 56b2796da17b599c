// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Skybook flight booking system.
//!
//! This crate is the synchronous function-call surface an external web or
//! CLI layer consumes. Handlers take the persistence adapter plus
//! plain-data request values and return plain-data responses; every
//! domain, engine and storage error is translated into [`ApiError`]
//! before it reaches a caller.
//!
//! Beyond the entity and seating handlers, the crate hosts the pluggable
//! boarding-card generation pipeline ([`boarding_cards`]) and the
//! CSV/JSON reference-data imports ([`data_exchange`]).

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

pub mod boarding_cards;
pub mod data_exchange;
pub mod error;
pub mod handlers;
pub mod request_response;

#[cfg(test)]
mod tests;

pub use boarding_cards::{
    CardBatch, CardData, CardFields, CardGenerationJob, CardGenerator, CardGeneratorRegistry,
};
pub use error::ApiError;
