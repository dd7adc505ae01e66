//! Section selection and derived display views.
//!
//! The active section is an explicit [`Section`] value held by the
//! [`Workspace`](crate::Workspace). Rendering a section yields a
//! [`SectionView`]: everything a display layer needs, already derived
//! (bucketed calendar items, percentages, summaries).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::calendar::{BucketCounts, CalendarItem};
use crate::error::ValidationError;
use crate::goals::Goal;
use crate::habits::Habit;
use crate::journal::JournalEntry;
use crate::progress::ProgressView;
use crate::reading::{Book, ReadingSummary};

/// Top-level tracker sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Habits,
    Reading,
    Goals,
    #[serde(alias = "calendar")]
    Events,
    #[default]
    Journal,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 5] = [
        Section::Habits,
        Section::Reading,
        Section::Goals,
        Section::Events,
        Section::Journal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Habits => "habits",
            Self::Reading => "reading",
            Self::Goals => "goals",
            Self::Events => "events",
            Self::Journal => "journal",
        }
    }

    /// Heading shown above the section.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Habits => "Daily Habits",
            Self::Reading => "Reading Journey",
            Self::Goals => "Life Goals",
            Self::Events => "Events & Tasks",
            Self::Journal => "Daily Journal",
        }
    }

    /// Short label used in navigation.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Habits => "Habits",
            Self::Reading => "Reading",
            Self::Goals => "Goals",
            Self::Events => "Calendar",
            Self::Journal => "Journal",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "habits" => Ok(Self::Habits),
            "reading" => Ok(Self::Reading),
            "goals" => Ok(Self::Goals),
            "events" | "calendar" => Ok(Self::Events),
            "journal" => Ok(Self::Journal),
            _ => Err(ValidationError::UnknownVariant {
                kind: "section",
                value: s.to_string(),
            }),
        }
    }
}

/// Display options applied while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    /// Include past completed calendar items in the events view.
    pub show_settled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalView<'a> {
    #[serde(flatten)]
    pub goal: &'a Goal,
    pub progress: ProgressView,
}

/// Derived view of one section.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "section", rename_all = "lowercase")]
pub enum SectionView<'a> {
    Habits {
        title: &'static str,
        habits: Vec<&'a Habit>,
        progress: ProgressView,
    },
    Reading {
        title: &'static str,
        books: Vec<&'a Book>,
        summary: ReadingSummary,
    },
    Goals {
        title: &'static str,
        goals: Vec<GoalView<'a>>,
    },
    Events {
        title: &'static str,
        counts: BucketCounts,
        today: Vec<&'a CalendarItem>,
        overdue: Vec<&'a CalendarItem>,
        upcoming: Vec<&'a CalendarItem>,
        #[serde(skip_serializing_if = "Option::is_none")]
        settled: Option<Vec<&'a CalendarItem>>,
    },
    Journal {
        title: &'static str,
        date: NaiveDate,
        entry: Cow<'a, JournalEntry>,
        todo_progress: ProgressView,
    },
}

impl SectionView<'_> {
    pub fn section(&self) -> Section {
        match self {
            Self::Habits { .. } => Section::Habits,
            Self::Reading { .. } => Section::Reading,
            Self::Goals { .. } => Section::Goals,
            Self::Events { .. } => Section::Events,
            Self::Journal { .. } => Section::Journal,
        }
    }
}
