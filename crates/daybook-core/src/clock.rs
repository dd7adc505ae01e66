//! Source of the reference "today" date and date/time parsing helpers.
//!
//! Every date-dependent operation in the core takes the date explicitly;
//! a [`Clock`] is only consulted at the surface (CLI, tests) to produce it.

use chrono::{Local, NaiveDate, NaiveTime};

use crate::error::ValidationError;

/// Provides the current calendar date. Lets tests pin "today".
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(s.to_string()))
}

/// Parse an `HH:MM` time. An empty string means "no time" (all-day).
pub fn parse_time(s: &str) -> Result<Option<NaiveTime>, ValidationError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(s, "%H:%M")
        .map(Some)
        .map_err(|_| ValidationError::InvalidTime(s.to_string()))
}

/// Serde adapter for optional `YYYY-MM-DD` dates that reads `""` as `None`.
pub(crate) mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match d {
            Some(d) => s.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => super::parse_date(s)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
