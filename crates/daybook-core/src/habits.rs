//! Daily habit checklist with streak counters.

use serde::{Deserialize, Serialize};

use crate::collection::{non_empty, Collection, Record};
use crate::error::Result;
use crate::progress::Progress;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub completed: bool,
    /// Incremented each time the habit is checked off, never decremented.
    pub streak: u32,
}

impl Record for Habit {
    const KIND: &'static str = "habit";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct HabitTracker {
    habits: Collection<Habit>,
}

impl HabitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a habit. Blank names are ignored.
    pub fn add(&mut self, name: &str) -> Option<String> {
        let name = non_empty(name)?;
        let id = self.habits.insert_with(|id| Habit {
            id,
            name,
            completed: false,
            streak: 0,
        });
        tracing::debug!(%id, "habit added");
        Some(id)
    }

    /// Insert a habit with existing state, used when seeding sample data.
    pub(crate) fn add_with_state(&mut self, name: &str, completed: bool, streak: u32) -> Option<String> {
        let id = self.add(name)?;
        if let Some(habit) = self.habits.get_mut(&id) {
            habit.completed = completed;
            habit.streak = streak;
        }
        Some(id)
    }

    /// Flip today's completion. Checking a habit off extends its streak;
    /// unchecking leaves the streak as is.
    pub fn toggle(&mut self, id: &str) -> Result<()> {
        self.habits.update(id, |habit| {
            if !habit.completed {
                habit.streak += 1;
            }
            habit.completed = !habit.completed;
            tracing::debug!(%id, completed = habit.completed, streak = habit.streak, "habit toggled");
        })
    }

    pub fn remove(&mut self, id: &str) -> Option<Habit> {
        let removed = self.habits.remove(id);
        if removed.is_some() {
            tracing::debug!(%id, "habit removed");
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.get(id)
    }

    pub fn habits(&self) -> &Collection<Habit> {
        &self.habits
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Habits completed today out of all habits.
    pub fn progress(&self) -> Progress {
        Progress::from_flags(self.habits.iter().map(|h| h.completed))
    }
}
