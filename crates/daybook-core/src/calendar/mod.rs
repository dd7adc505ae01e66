//! Events, tasks and reminders.
//!
//! Calendar items are created from a draft, toggled (tasks and reminders
//! only) and never deleted. The display buckets are derived on demand by
//! [`classify`].

mod classify;
mod item;

pub use classify::{classify, Bucket, BucketCounts, Buckets};
pub use item::{CalendarItem, ItemKind, NewCalendarItem};

use chrono::NaiveDate;

use crate::collection::{non_empty, Collection};
use crate::error::Result;

/// Tracker owning every calendar item.
#[derive(Debug, Clone, Default)]
pub struct CalendarTracker {
    items: Collection<CalendarItem>,
}

impl CalendarTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item from a draft. Returns `None` (and changes nothing) when the
    /// title is blank or the date is missing.
    pub fn add(&mut self, draft: NewCalendarItem) -> Option<String> {
        let title = non_empty(&draft.title)?;
        let date = draft.date?;
        let completed = draft.kind.is_completable().then_some(false);
        let id = self.items.insert_with(|id| CalendarItem {
            id,
            title,
            date,
            time: draft.time,
            kind: draft.kind,
            completed,
            priority: draft.priority,
        });
        tracing::debug!(%id, kind = %draft.kind, %date, "calendar item added");
        Some(id)
    }

    /// Flip completion of a task or reminder. Events are left untouched.
    ///
    /// Returns whether anything changed.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        self.items.update(id, |item| {
            if !item.kind.is_completable() {
                tracing::debug!(%id, "ignoring toggle on event");
                return false;
            }
            let done = !item.is_completed();
            item.completed = Some(done);
            tracing::debug!(%id, completed = done, "calendar item toggled");
            true
        })
    }

    pub fn get(&self, id: &str) -> Option<&CalendarItem> {
        self.items.get(id)
    }

    pub fn items(&self) -> &Collection<CalendarItem> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Classify the current items relative to `today`.
    pub fn buckets(&self, today: NaiveDate) -> Buckets<'_> {
        classify(self.items.iter(), today)
    }
}
