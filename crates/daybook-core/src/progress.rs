//! Completion-ratio progress shared by habits, goals and journal todos.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Percentage of `done` out of `total`, rounded half-up to the nearest integer.
///
/// A `total` of zero maps to 0%.
pub fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let done = done.min(total) as u64;
    let total = total as u64;
    // round(100 * done / total) without going through floats
    ((200 * done + total) / (2 * total)) as u8
}

/// Count of completed sub-items out of a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(done: usize, total: usize) -> Self {
        Self { done, total }
    }

    /// Build from an iterator of completion flags.
    pub fn from_flags(flags: impl IntoIterator<Item = bool>) -> Self {
        flags.into_iter().fold(Self::default(), |acc, done| Self {
            done: acc.done + usize::from(done),
            total: acc.total + 1,
        })
    }

    pub fn percent(&self) -> u8 {
        percent(self.done, self.total)
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.done >= self.total
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.done, self.total)
    }
}

/// Serializable progress with its derived percentage, for views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressView {
    pub done: usize,
    pub total: usize,
    pub percent: u8,
}

impl From<Progress> for ProgressView {
    fn from(p: Progress) -> Self {
        Self {
            done: p.done,
            total: p.total,
            percent: p.percent(),
        }
    }
}
