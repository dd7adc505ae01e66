//! # Daybook Core Library
//!
//! This library provides the core logic for Daybook, a personal journal with
//! five independent trackers. All state is in memory; the CLI is a thin
//! surface over the same [`Workspace`].
//!
//! ## Architecture
//!
//! - **Trackers**: habits, reading, goals, calendar and journal, each an
//!   insertion-ordered [`Collection`] of id-keyed records
//! - **Calendar classifier**: buckets items into today / overdue / upcoming
//!   (plus past completed items as `settled`) in chronological order
//! - **Progress**: completion ratios rounded to whole percentages
//! - **Intents**: every user action as a serializable [`Intent`] applied to a
//!   [`Workspace`], which renders a [`SectionView`] per [`Section`]
//! - **Config**: TOML preferences (startup section, log level, view options)

pub mod calendar;
pub mod clock;
pub mod collection;
pub mod config;
pub mod error;
pub mod goals;
pub mod habits;
pub mod intent;
pub mod journal;
pub mod priority;
pub mod progress;
pub mod reading;
mod seed;
pub mod view;
pub mod workspace;

pub use calendar::{
    classify, Bucket, BucketCounts, Buckets, CalendarItem, CalendarTracker, ItemKind,
    NewCalendarItem,
};
pub use clock::{parse_date, parse_time, Clock, FixedClock, SystemClock};
pub use collection::{Collection, Record};
pub use config::Config;
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use goals::{Goal, GoalCategory, GoalTracker, Milestone, NewGoal};
pub use habits::{Habit, HabitTracker};
pub use intent::{Applied, Intent};
pub use journal::{Journal, JournalEntry, Mood, Todo};
pub use priority::Priority;
pub use progress::{percent, Progress, ProgressView};
pub use reading::{Book, BookStatus, ReadingSummary, ReadingTracker};
pub use view::{Section, SectionView, ViewOptions};
pub use workspace::Workspace;
