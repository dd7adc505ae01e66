use serde::{Deserialize, Serialize};

use crate::calendar::NewCalendarItem;
use crate::goals::NewGoal;
use crate::journal::Mood;
use crate::view::Section;

/// Every user action the workspace accepts.
///
/// Journal intents always edit the entry for the reference date passed to
/// [`Workspace::apply`](crate::Workspace::apply).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    SelectSection {
        section: Section,
    },

    AddHabit {
        name: String,
    },
    ToggleHabit {
        id: String,
    },
    RemoveHabit {
        id: String,
    },

    AddBook {
        title: String,
        author: String,
    },
    StartBook {
        id: String,
    },
    AdvanceBook {
        id: String,
    },
    FinishBook {
        id: String,
    },
    SetBookProgress {
        id: String,
        progress: u8,
    },
    RateBook {
        id: String,
        stars: u8,
    },

    AddGoal {
        goal: NewGoal,
    },
    AddMilestone {
        goal_id: String,
        title: String,
    },
    ToggleMilestone {
        goal_id: String,
        milestone_id: String,
    },
    SetGoalCompleted {
        goal_id: String,
        completed: bool,
    },

    AddCalendarItem {
        item: NewCalendarItem,
    },
    ToggleCalendarItem {
        id: String,
    },

    SetMood {
        mood: Mood,
    },
    SetReflection {
        text: String,
    },
    AddGratitude {
        text: String,
    },
    AddHighlight {
        text: String,
    },
    AddTodo {
        text: String,
    },
    ToggleTodo {
        id: String,
    },
}

impl Intent {
    /// Section whose state this intent touches.
    pub fn section(&self) -> Section {
        match self {
            Intent::SelectSection { section } => *section,
            Intent::AddHabit { .. } | Intent::ToggleHabit { .. } | Intent::RemoveHabit { .. } => {
                Section::Habits
            }
            Intent::AddBook { .. }
            | Intent::StartBook { .. }
            | Intent::AdvanceBook { .. }
            | Intent::FinishBook { .. }
            | Intent::SetBookProgress { .. }
            | Intent::RateBook { .. } => Section::Reading,
            Intent::AddGoal { .. }
            | Intent::AddMilestone { .. }
            | Intent::ToggleMilestone { .. }
            | Intent::SetGoalCompleted { .. } => Section::Goals,
            Intent::AddCalendarItem { .. } | Intent::ToggleCalendarItem { .. } => Section::Events,
            Intent::SetMood { .. }
            | Intent::SetReflection { .. }
            | Intent::AddGratitude { .. }
            | Intent::AddHighlight { .. }
            | Intent::AddTodo { .. }
            | Intent::ToggleTodo { .. } => Section::Journal,
        }
    }
}

/// Result of applying an [`Intent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Applied {
    /// A record was created with this id.
    Created { id: String },
    /// Existing state changed.
    Changed,
    /// Nothing changed (blank required field, toggling an event, removing a
    /// missing habit).
    Ignored,
}

impl Applied {
    pub fn changed_state(&self) -> bool {
        !matches!(self, Applied::Ignored)
    }
}

impl From<Option<String>> for Applied {
    fn from(id: Option<String>) -> Self {
        match id {
            Some(id) => Applied::Created { id },
            None => Applied::Ignored,
        }
    }
}

impl From<bool> for Applied {
    fn from(changed: bool) -> Self {
        if changed {
            Applied::Changed
        } else {
            Applied::Ignored
        }
    }
}
