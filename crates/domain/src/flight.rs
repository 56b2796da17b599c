// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Airport;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A numbered flight for an airline on a given date and at a given time.
///
/// Departure times are stored as naive UTC and converted to airport-local
/// time on demand. Related entities are referenced by ID rather than held
/// as an object graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the flight has not been persisted yet.
    pub flight_id: Option<i64>,
    /// The operating airline's ID.
    pub airline_id: i64,
    /// The airport of embarkation.
    pub embarkation_airport_id: i64,
    /// The destination airport.
    pub destination_airport_id: i64,
    /// The aircraft layout currently applied to the flight, if any.
    pub aircraft_layout_id: Option<i64>,
    /// The flight number, e.g. "U28545". Unique per departure date.
    pub number: String,
    /// The departure date and time, in UTC.
    pub departure: NaiveDateTime,
    /// The flight duration, in minutes.
    pub duration_minutes: i64,
}

impl Flight {
    /// Returns the departure date and time as a timezone-aware UTC value.
    #[must_use]
    pub fn departs_utc(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.departure)
    }

    /// Returns the departure date and time converted to local time at the
    /// point of embarkation.
    ///
    /// # Errors
    ///
    /// Returns an error if the airport's stored timezone identifier does
    /// not parse.
    pub fn departs_localtime(&self, embarkation: &Airport) -> Result<DateTime<Tz>, DomainError> {
        let timezone: Tz = embarkation.tz()?;
        Ok(self.departs_utc().with_timezone(&timezone))
    }

    /// Returns the arrival date and time converted to local time at the
    /// destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the airport's stored timezone identifier does
    /// not parse.
    pub fn arrives_localtime(&self, destination: &Airport) -> Result<DateTime<Tz>, DomainError> {
        let timezone: Tz = destination.tz()?;
        let arrives_utc: DateTime<Utc> =
            self.departs_utc() + TimeDelta::minutes(self.duration_minutes);
        Ok(arrives_utc.with_timezone(&timezone))
    }

    /// Returns the flight duration formatted as `H:MM`.
    #[must_use]
    pub fn formatted_duration(&self) -> String {
        let hours: i64 = self.duration_minutes / 60;
        let minutes: i64 = self.duration_minutes % 60;
        format!("{hours}:{minutes:02}")
    }
}

/// Combines a `DD/MM/YYYY` date string and an `HH:MM` time string into a
/// departure date and time.
///
/// # Errors
///
/// Returns an error if either part fails to parse.
pub fn parse_departure(date_string: &str, time_string: &str) -> Result<NaiveDateTime, DomainError> {
    let date: NaiveDate =
        NaiveDate::parse_from_str(date_string, "%d/%m/%Y").map_err(|e| DomainError::DateParseError {
            date_string: date_string.to_string(),
            error: e.to_string(),
        })?;
    let time: NaiveTime =
        NaiveTime::parse_from_str(time_string, "%H:%M").map_err(|e| DomainError::TimeParseError {
            time_string: time_string.to_string(),
            error: e.to_string(),
        })?;
    Ok(date.and_time(time))
}

/// Parses an `HH:MM` duration string into a whole number of minutes.
///
/// # Errors
///
/// Returns an error if the string is not two colon-separated numbers or if
/// the minutes part is 60 or more.
pub fn parse_duration_minutes(duration_string: &str) -> Result<i64, DomainError> {
    let parse_error = |error: &str| DomainError::DurationParseError {
        duration_string: duration_string.to_string(),
        error: error.to_string(),
    };

    let (hours_part, minutes_part) = duration_string
        .split_once(':')
        .ok_or_else(|| parse_error("expected HH:MM"))?;

    let hours: i64 = hours_part
        .parse()
        .map_err(|_| parse_error("hours part is not a number"))?;
    let minutes: i64 = minutes_part
        .parse()
        .map_err(|_| parse_error("minutes part is not a number"))?;

    if hours < 0 || minutes < 0 {
        return Err(parse_error("duration cannot be negative"));
    }
    if minutes >= 60 {
        return Err(parse_error("minutes part must be below 60"));
    }

    Ok(hours * 60 + minutes)
}
