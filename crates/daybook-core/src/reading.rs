//! Reading list with per-book progress.
//!
//! A book's status is never set directly; it follows from its progress:
//! 0% is planned, anything in between is reading, 100% is completed and
//! stamps the completion date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::collection::{non_empty, Collection, Record};
use crate::error::{CoreError, Result, ValidationError};

/// Progress a book jumps to when reading starts.
pub const START_PROGRESS: u8 = 5;
/// Increment applied by [`ReadingTracker::advance`].
pub const PROGRESS_STEP: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    Planned,
    Reading,
    Completed,
}

impl BookStatus {
    pub fn for_progress(progress: u8) -> Self {
        match progress {
            0 => Self::Planned,
            100.. => Self::Completed,
            _ => Self::Reading,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
    /// Percent read, 0..=100.
    pub progress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_completed: Option<NaiveDate>,
}

impl Record for Book {
    const KIND: &'static str = "book";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Book counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReadingSummary {
    pub total: usize,
    pub planned: usize,
    pub reading: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ReadingTracker {
    books: Collection<Book>,
}

impl ReadingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a planned book. Both title and author are required.
    pub fn add(&mut self, title: &str, author: &str) -> Option<String> {
        let title = non_empty(title)?;
        let author = non_empty(author)?;
        let id = self.books.insert_with(|id| Book {
            id,
            title,
            author,
            status: BookStatus::Planned,
            progress: 0,
            rating: None,
            date_completed: None,
        });
        tracing::debug!(%id, "book added");
        Some(id)
    }

    /// Set progress (clamped to 100) and derive status and completion date.
    pub fn set_progress(&mut self, id: &str, progress: u8, today: NaiveDate) -> Result<()> {
        let progress = progress.min(100);
        self.books.update(id, |book| {
            book.progress = progress;
            book.status = BookStatus::for_progress(progress);
            book.date_completed = (book.status == BookStatus::Completed).then_some(today);
            tracing::debug!(%id, progress, status = ?book.status, "book progress updated");
        })
    }

    pub fn start(&mut self, id: &str, today: NaiveDate) -> Result<()> {
        self.set_progress(id, START_PROGRESS, today)
    }

    /// Move progress forward by one step, capped at 100.
    pub fn advance(&mut self, id: &str, today: NaiveDate) -> Result<()> {
        let current = self.books.require(id)?.progress;
        self.set_progress(id, current.saturating_add(PROGRESS_STEP), today)
    }

    pub fn finish(&mut self, id: &str, today: NaiveDate) -> Result<()> {
        self.set_progress(id, 100, today)
    }

    /// Rate a completed book from 1 to 5 stars.
    pub fn rate(&mut self, id: &str, stars: u8) -> Result<()> {
        if !(1..=5).contains(&stars) {
            return Err(ValidationError::OutOfRange {
                field: "rating",
                value: i64::from(stars),
                min: 1,
                max: 5,
            }
            .into());
        }
        let book = self.books.require(id)?;
        if book.status != BookStatus::Completed {
            return Err(CoreError::Validation(ValidationError::InvalidState {
                field: "rating",
                message: format!("'{}' is not finished yet", book.title),
            }));
        }
        self.books.update(id, |book| book.rating = Some(stars))
    }

    pub fn get(&self, id: &str) -> Option<&Book> {
        self.books.get(id)
    }

    pub fn books(&self) -> &Collection<Book> {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn summary(&self) -> ReadingSummary {
        self.books.iter().fold(
            ReadingSummary {
                total: self.books.len(),
                ..ReadingSummary::default()
            },
            |mut acc, book| {
                match book.status {
                    BookStatus::Planned => acc.planned += 1,
                    BookStatus::Reading => acc.reading += 1,
                    BookStatus::Completed => acc.completed += 1,
                }
                acc
            },
        )
    }
}
