//! Calendar item types.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::clock::{parse_date, parse_time};
use crate::collection::Record;
use crate::error::ValidationError;
use crate::priority::Priority;

/// Kind of calendar item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Event,
    #[default]
    Task,
    Reminder,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Task => "task",
            Self::Reminder => "reminder",
        }
    }

    /// Tasks and reminders can be checked off; events cannot.
    pub fn is_completable(&self) -> bool {
        matches!(self, Self::Task | Self::Reminder)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "event" => Ok(Self::Event),
            "task" => Ok(Self::Task),
            "reminder" => Ok(Self::Reminder),
            _ => Err(ValidationError::UnknownVariant {
                kind: "item kind",
                value: s.to_string(),
            }),
        }
    }
}

/// An event, task or reminder on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarItem {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// `None` means all-day.
    #[serde(default, with = "hhmm")]
    pub time: Option<NaiveTime>,
    pub kind: ItemKind,
    /// Always `None` for events, `Some(_)` for tasks and reminders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default)]
    pub priority: Priority,
}

impl CalendarItem {
    /// Combined date and time; all-day items sort as midnight.
    pub fn sort_key(&self) -> NaiveDateTime {
        self.date.and_time(self.time.unwrap_or(NaiveTime::MIN))
    }

    pub fn is_completed(&self) -> bool {
        self.completed == Some(true)
    }
}

impl Record for CalendarItem {
    const KIND: &'static str = "calendar item";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Draft for a new calendar item, as submitted from a form.
///
/// `title` and `date` are required; a draft missing either is ignored by the
/// tracker rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCalendarItem {
    #[serde(default)]
    pub title: String,
    #[serde(default, with = "crate::clock::optional_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, with = "hhmm")]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub kind: ItemKind,
    #[serde(default)]
    pub priority: Priority,
}

impl NewCalendarItem {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date: Some(date),
            ..Self::default()
        }
    }

    /// Build a draft from raw form strings. Empty `date` leaves it unset,
    /// empty `time` means all-day.
    pub fn parse(
        title: &str,
        date: &str,
        time: &str,
        kind: &str,
        priority: &str,
    ) -> Result<Self, ValidationError> {
        let date = if date.trim().is_empty() {
            None
        } else {
            Some(parse_date(date)?)
        };
        Ok(Self {
            title: title.to_string(),
            date,
            time: parse_time(time)?,
            kind: kind.parse()?,
            priority: priority.parse()?,
        })
    }

    pub fn at(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Serde adapter writing optional times as `"HH:MM"` and reading `""` as `None`.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match t {
            Some(t) => s.serialize_str(&t.format("%H:%M").to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveTime::parse_from_str(s, "%H:%M")
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
