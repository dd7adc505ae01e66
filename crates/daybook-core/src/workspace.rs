//! The whole application state: five trackers and the active section.

use chrono::NaiveDate;

use crate::calendar::CalendarTracker;
use crate::config::Config;
use crate::error::Result;
use crate::goals::GoalTracker;
use crate::habits::HabitTracker;
use crate::intent::{Applied, Intent};
use crate::journal::Journal;
use crate::progress::ProgressView;
use crate::reading::ReadingTracker;
use crate::view::{GoalView, Section, SectionView, ViewOptions};

/// In-memory application state. Nothing here outlives the process.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pub habits: HabitTracker,
    pub reading: ReadingTracker,
    pub goals: GoalTracker,
    pub calendar: CalendarTracker,
    pub journal: Journal,
    current: Section,
    options: ViewOptions,
}

impl Workspace {
    /// Empty workspace showing `section`.
    pub fn new(section: Section) -> Self {
        Self {
            current: section,
            ..Self::default()
        }
    }

    /// Empty workspace configured from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_section).with_options(ViewOptions {
            show_settled: config.calendar.show_settled,
        })
    }

    pub fn with_options(mut self, options: ViewOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ViewOptions {
        self.options
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn select(&mut self, section: Section) {
        tracing::debug!(from = %self.current, to = %section, "section selected");
        self.current = section;
    }

    /// Apply one user intent. `today` is the reference date for anything
    /// date-dependent (journal entry, reading completion stamp).
    pub fn apply(&mut self, intent: Intent, today: NaiveDate) -> Result<Applied> {
        let applied = match intent {
            Intent::SelectSection { section } => {
                let changed = self.current != section;
                self.select(section);
                changed.into()
            }

            Intent::AddHabit { name } => self.habits.add(&name).into(),
            Intent::ToggleHabit { id } => {
                self.habits.toggle(&id)?;
                Applied::Changed
            }
            Intent::RemoveHabit { id } => self.habits.remove(&id).is_some().into(),

            Intent::AddBook { title, author } => self.reading.add(&title, &author).into(),
            Intent::StartBook { id } => {
                self.edit_book(&id, |reading| reading.start(&id, today))?
            }
            Intent::AdvanceBook { id } => {
                self.edit_book(&id, |reading| reading.advance(&id, today))?
            }
            Intent::FinishBook { id } => {
                self.edit_book(&id, |reading| reading.finish(&id, today))?
            }
            Intent::SetBookProgress { id, progress } => {
                self.edit_book(&id, |reading| reading.set_progress(&id, progress, today))?
            }
            Intent::RateBook { id, stars } => {
                self.edit_book(&id, |reading| reading.rate(&id, stars))?
            }

            Intent::AddGoal { goal } => self.goals.add(goal).into(),
            Intent::AddMilestone { goal_id, title } => {
                self.goals.add_milestone(&goal_id, &title)?.into()
            }
            Intent::ToggleMilestone {
                goal_id,
                milestone_id,
            } => {
                self.goals.toggle_milestone(&goal_id, &milestone_id)?;
                Applied::Changed
            }
            Intent::SetGoalCompleted { goal_id, completed } => {
                let before = self.goals.get(&goal_id).map(|g| g.completed);
                self.goals.set_completed(&goal_id, completed)?;
                (before != Some(completed)).into()
            }

            Intent::AddCalendarItem { item } => self.calendar.add(item).into(),
            Intent::ToggleCalendarItem { id } => self.calendar.toggle(&id)?.into(),

            Intent::SetMood { mood } => {
                let before = self.journal.get(today).map(|e| e.mood);
                self.journal.set_mood(today, mood);
                (before != Some(mood)).into()
            }
            Intent::SetReflection { text } => {
                let unchanged = self
                    .journal
                    .get(today)
                    .is_some_and(|e| e.reflection == text);
                self.journal.set_reflection(today, &text);
                (!unchanged).into()
            }
            Intent::AddGratitude { text } => self.journal.add_gratitude(today, &text).into(),
            Intent::AddHighlight { text } => self.journal.add_highlight(today, &text).into(),
            Intent::AddTodo { text } => self.journal.add_todo(today, &text).into(),
            Intent::ToggleTodo { id } => {
                self.journal.toggle_todo(today, &id)?;
                Applied::Changed
            }
        };

        if !applied.changed_state() {
            tracing::debug!("intent ignored");
        }
        Ok(applied)
    }

    /// Run a reading-tracker edit and report whether the book changed.
    fn edit_book(
        &mut self,
        id: &str,
        f: impl FnOnce(&mut ReadingTracker) -> Result<()>,
    ) -> Result<Applied> {
        let before = self.reading.get(id).cloned();
        f(&mut self.reading)?;
        Ok((self.reading.get(id) != before.as_ref()).into())
    }

    /// Derived view of the active section.
    pub fn render_current(&self, today: NaiveDate) -> SectionView<'_> {
        self.render(self.current, today)
    }

    /// Derived view of `section`, recomputed from current state.
    pub fn render(&self, section: Section, today: NaiveDate) -> SectionView<'_> {
        let title = section.title();
        match section {
            Section::Habits => SectionView::Habits {
                title,
                habits: self.habits.habits().iter().collect(),
                progress: self.habits.progress().into(),
            },
            Section::Reading => SectionView::Reading {
                title,
                books: self.reading.books().iter().collect(),
                summary: self.reading.summary(),
            },
            Section::Goals => SectionView::Goals {
                title,
                goals: self
                    .goals
                    .goals()
                    .iter()
                    .map(|goal| GoalView {
                        goal,
                        progress: goal.progress().into(),
                    })
                    .collect(),
            },
            Section::Events => {
                let buckets = self.calendar.buckets(today);
                SectionView::Events {
                    title,
                    counts: buckets.counts(),
                    today: buckets.today,
                    overdue: buckets.overdue,
                    upcoming: buckets.upcoming,
                    settled: self.options.show_settled.then_some(buckets.settled),
                }
            }
            Section::Journal => SectionView::Journal {
                title,
                date: today,
                entry: self.journal.entry(today),
                todo_progress: ProgressView::from(self.journal.todo_progress(today)),
            },
        }
    }
}
