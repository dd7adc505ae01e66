//! Daily journal entries, one per date.
//!
//! Reading an entry for a date that has none yields a blank entry without
//! storing it. The first edit on a date creates the entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::collection::{new_id, non_empty, Collection, Record};
use crate::error::{CoreError, Result, ValidationError};
use crate::progress::Progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    #[default]
    Okay,
    Rough,
    Difficult,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Great,
        Mood::Good,
        Mood::Okay,
        Mood::Rough,
        Mood::Difficult,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Great => "great",
            Self::Good => "good",
            Self::Okay => "okay",
            Self::Rough => "rough",
            Self::Difficult => "difficult",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Great => "😄",
            Self::Good => "😊",
            Self::Okay => "😐",
            Self::Rough => "😔",
            Self::Difficult => "😞",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "mood",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl Record for Todo {
    const KIND: &'static str = "todo";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JournalEntry {
    /// Empty until the entry is first stored.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub date: NaiveDate,
    pub mood: Mood,
    pub gratitude: Vec<String>,
    pub reflection: String,
    pub todos: Collection<Todo>,
    pub highlights: Vec<String>,
}

impl JournalEntry {
    /// Blank, unstored entry for `date`.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            id: String::new(),
            date,
            mood: Mood::default(),
            gratitude: Vec::new(),
            reflection: String::new(),
            todos: Collection::new(),
            highlights: Vec::new(),
        }
    }

    pub fn todo_progress(&self) -> Progress {
        Progress::from_flags(self.todos.iter().map(|t| t.completed))
    }
}

/// All journal entries, keyed by date.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: BTreeMap<NaiveDate, JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored entry for `date`, or a blank one if none exists yet.
    pub fn entry(&self, date: NaiveDate) -> Cow<'_, JournalEntry> {
        match self.entries.get(&date) {
            Some(entry) => Cow::Borrowed(entry),
            None => Cow::Owned(JournalEntry::blank(date)),
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<&JournalEntry> {
        self.entries.get(&date)
    }

    /// Entries in date order.
    pub fn entries(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn edit<R>(&mut self, date: NaiveDate, f: impl FnOnce(&mut JournalEntry) -> R) -> R {
        let entry = self.entries.entry(date).or_insert_with(|| {
            tracing::debug!(%date, "journal entry created");
            JournalEntry {
                id: new_id(),
                ..JournalEntry::blank(date)
            }
        });
        f(entry)
    }

    pub fn set_mood(&mut self, date: NaiveDate, mood: Mood) {
        self.edit(date, |entry| entry.mood = mood);
        tracing::debug!(%date, %mood, "mood set");
    }

    /// Replace the reflection text. Empty text is allowed.
    pub fn set_reflection(&mut self, date: NaiveDate, text: &str) {
        self.edit(date, |entry| entry.reflection = text.to_string());
    }

    /// Append a gratitude item. Returns whether it was added.
    pub fn add_gratitude(&mut self, date: NaiveDate, text: &str) -> bool {
        let Some(text) = non_empty(text) else {
            return false;
        };
        self.edit(date, |entry| entry.gratitude.push(text));
        true
    }

    /// Append a highlight. Returns whether it was added.
    pub fn add_highlight(&mut self, date: NaiveDate, text: &str) -> bool {
        let Some(text) = non_empty(text) else {
            return false;
        };
        self.edit(date, |entry| entry.highlights.push(text));
        true
    }

    pub fn add_todo(&mut self, date: NaiveDate, text: &str) -> Option<String> {
        let text = non_empty(text)?;
        let id = self.edit(date, |entry| {
            entry.todos.insert_with(|id| Todo {
                id,
                text,
                completed: false,
            })
        });
        tracing::debug!(%date, todo_id = %id, "todo added");
        Some(id)
    }

    pub fn toggle_todo(&mut self, date: NaiveDate, todo_id: &str) -> Result<()> {
        let entry = self
            .entries
            .get_mut(&date)
            .ok_or_else(|| CoreError::not_found(Todo::KIND, todo_id))?;
        entry.todos.update(todo_id, |todo| {
            todo.completed = !todo.completed;
            tracing::debug!(%date, %todo_id, completed = todo.completed, "todo toggled");
        })
    }

    pub fn todo_progress(&self, date: NaiveDate) -> Progress {
        self.entries
            .get(&date)
            .map(JournalEntry::todo_progress)
            .unwrap_or_default()
    }
}
