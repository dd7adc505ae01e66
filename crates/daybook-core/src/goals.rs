//! Long-term goals broken into milestones.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::collection::{non_empty, Collection, Record};
use crate::error::{Result, ValidationError};
use crate::priority::Priority;
use crate::progress::Progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    #[default]
    Personal,
    Career,
    Health,
    Creative,
}

impl GoalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Career => "career",
            Self::Health => "health",
            Self::Creative => "creative",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" => Ok(Self::Personal),
            "career" => Ok(Self::Career),
            "health" => Ok(Self::Health),
            "creative" => Ok(Self::Creative),
            _ => Err(ValidationError::UnknownVariant {
                kind: "goal category",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl Record for Milestone {
    const KIND: &'static str = "milestone";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub milestones: Collection<Milestone>,
    pub completed: bool,
}

impl Goal {
    /// Completed milestones out of all milestones.
    pub fn progress(&self) -> Progress {
        Progress::from_flags(self.milestones.iter().map(|m| m.completed))
    }
}

impl Record for Goal {
    const KIND: &'static str = "goal";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Draft for a new goal. Only the title is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGoal {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: GoalCategory,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, with = "crate::clock::optional_date")]
    pub deadline: Option<NaiveDate>,
}

impl NewGoal {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GoalTracker {
    goals: Collection<Goal>,
}

impl GoalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a goal with no milestones. A blank title is ignored.
    pub fn add(&mut self, draft: NewGoal) -> Option<String> {
        let title = non_empty(&draft.title)?;
        let id = self.goals.insert_with(|id| Goal {
            id,
            title,
            description: draft.description.trim().to_string(),
            category: draft.category,
            priority: draft.priority,
            deadline: draft.deadline,
            milestones: Collection::new(),
            completed: false,
        });
        tracing::debug!(%id, category = %draft.category, "goal added");
        Some(id)
    }

    /// Append a milestone to a goal. A blank title is ignored.
    pub fn add_milestone(&mut self, goal_id: &str, title: &str) -> Result<Option<String>> {
        self.goals.update(goal_id, |goal| {
            let title = non_empty(title)?;
            let id = goal.milestones.insert_with(|id| Milestone {
                id,
                title,
                completed: false,
            });
            tracing::debug!(%goal_id, milestone_id = %id, "milestone added");
            Some(id)
        })
    }

    pub fn toggle_milestone(&mut self, goal_id: &str, milestone_id: &str) -> Result<()> {
        self.goals.update(goal_id, |goal| {
            goal.milestones.update(milestone_id, |m| {
                m.completed = !m.completed;
                tracing::debug!(%goal_id, %milestone_id, completed = m.completed, "milestone toggled");
            })
        })?
    }

    pub fn set_completed(&mut self, goal_id: &str, completed: bool) -> Result<()> {
        self.goals.update(goal_id, |goal| {
            goal.completed = completed;
            tracing::debug!(%goal_id, completed, "goal completion set");
        })
    }

    pub fn progress(&self, goal_id: &str) -> Result<Progress> {
        Ok(self.goals.require(goal_id)?.progress())
    }

    pub fn get(&self, id: &str) -> Option<&Goal> {
        self.goals.get(id)
    }

    pub fn goals(&self) -> &Collection<Goal> {
        &self.goals
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_ignored() {
        let mut goals = GoalTracker::new();
        assert!(goals.add(NewGoal::new("  ")).is_none());
        assert!(goals.is_empty());
    }

    #[test]
    fn goal_without_milestones_is_zero_percent() {
        let mut goals = GoalTracker::new();
        let id = goals.add(NewGoal::new("Learn Spanish")).unwrap();
        assert_eq!(goals.progress(&id).unwrap().percent(), 0);
    }

    #[test]
    fn progress_tracks_milestones() {
        let mut goals = GoalTracker::new();
        let id = goals.add(NewGoal::new("Half marathon")).unwrap();
        let m: Vec<String> = ["5K", "10K", "15K"]
            .iter()
            .map(|t| goals.add_milestone(&id, t).unwrap().unwrap())
            .collect();
        goals.toggle_milestone(&id, &m[0]).unwrap();
        assert_eq!(goals.progress(&id).unwrap().percent(), 33);
        goals.toggle_milestone(&id, &m[2]).unwrap();
        assert_eq!(goals.progress(&id).unwrap().percent(), 67);
        goals.toggle_milestone(&id, &m[2]).unwrap();
        assert_eq!(goals.progress(&id).unwrap(), Progress::new(1, 3));
    }

    #[test]
    fn blank_milestone_is_ignored() {
        let mut goals = GoalTracker::new();
        let id = goals.add(NewGoal::new("g")).unwrap();
        assert_eq!(goals.add_milestone(&id, " ").unwrap(), None);
        assert!(goals.get(&id).unwrap().milestones.is_empty());
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let mut goals = GoalTracker::new();
        assert!(goals.add_milestone("nope", "x").is_err());
        let id = goals.add(NewGoal::new("g")).unwrap();
        assert!(goals.toggle_milestone(&id, "nope").is_err());
        assert!(goals.progress("nope").is_err());
    }

    #[test]
    fn draft_fields_are_kept() {
        let mut goals = GoalTracker::new();
        let id = goals
            .add(NewGoal {
                title: "Paint".into(),
                description: " A mural ".into(),
                category: GoalCategory::Creative,
                priority: Priority::Low,
                deadline: NaiveDate::from_ymd_opt(2025, 1, 1),
            })
            .unwrap();
        let goal = goals.get(&id).unwrap();
        assert_eq!(goal.description, "A mural");
        assert_eq!(goal.category, GoalCategory::Creative);
        assert!(!goal.completed);
        goals.set_completed(&id, true).unwrap();
        assert!(goals.get(&id).unwrap().completed);
    }
}
