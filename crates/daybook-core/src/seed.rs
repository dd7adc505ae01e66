//! Sample data for a first look at every tracker.

use chrono::{Days, NaiveDate, NaiveTime};

use crate::calendar::{ItemKind, NewCalendarItem};
use crate::goals::{GoalCategory, NewGoal};
use crate::journal::Mood;
use crate::priority::Priority;
use crate::view::Section;
use crate::workspace::Workspace;

fn at(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}

impl Workspace {
    /// Workspace pre-filled with sample habits, books, goals, calendar items
    /// and a journal entry for `today`. Calendar dates are relative to `today`.
    pub fn demo(section: Section, today: NaiveDate) -> Self {
        let mut ws = Workspace::new(section);
        let shift_back = |days| today.checked_sub_days(Days::new(days)).unwrap_or(today);
        let yesterday = shift_back(1);
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);

        for (name, completed, streak) in [
            ("Morning meditation", true, 7),
            ("Drink 8 glasses of water", false, 3),
            ("Read for 30 minutes", true, 12),
            ("Exercise", false, 5),
        ] {
            ws.habits.add_with_state(name, completed, streak);
        }

        if let Some(id) = ws.reading.add("The Midnight Library", "Matt Haig") {
            let finished = shift_back(30);
            let _ = ws.reading.finish(&id, finished);
            let _ = ws.reading.rate(&id, 5);
        }
        if let Some(id) = ws.reading.add("Atomic Habits", "James Clear") {
            let _ = ws.reading.set_progress(&id, 65, today);
        }
        ws.reading
            .add("The Seven Husbands of Evelyn Hugo", "Taylor Jenkins Reid");

        seed_goal(
            &mut ws,
            NewGoal {
                title: "Learn Spanish".into(),
                description: "Become conversational in Spanish for my trip to Spain".into(),
                category: GoalCategory::Personal,
                priority: Priority::High,
                deadline: today.checked_add_days(Days::new(120)),
            },
            &[
                ("Complete Duolingo Spanish course", true),
                ("Watch 10 Spanish movies with subtitles", true),
                ("Have 5 conversations with native speakers", false),
                ("Read a Spanish novel", false),
            ],
        );
        seed_goal(
            &mut ws,
            NewGoal {
                title: "Run a Half Marathon".into(),
                description: "Train for and complete a 21K run".into(),
                category: GoalCategory::Health,
                priority: Priority::Medium,
                deadline: today.checked_add_days(Days::new(60)),
            },
            &[
                ("Run 5K without stopping", true),
                ("Run 10K consistently", true),
                ("Complete 15K training run", false),
                ("Register for half marathon", false),
            ],
        );

        let calendar = [
            (
                NewCalendarItem::new("Doctor appointment", tomorrow)
                    .at(at(10))
                    .kind(ItemKind::Event)
                    .priority(Priority::High),
                false,
            ),
            (
                NewCalendarItem::new("Finish quarterly report", today)
                    .at(at(17))
                    .kind(ItemKind::Task)
                    .priority(Priority::High),
                false,
            ),
            (
                NewCalendarItem::new("Call mom", yesterday)
                    .at(at(19))
                    .kind(ItemKind::Reminder),
                true,
            ),
            (
                NewCalendarItem::new("Team meeting", yesterday)
                    .at(at(14))
                    .kind(ItemKind::Event),
                false,
            ),
            (
                NewCalendarItem::new("Buy groceries", yesterday)
                    .kind(ItemKind::Task)
                    .priority(Priority::Low),
                false,
            ),
        ];
        for (draft, done) in calendar {
            if let Some(id) = ws.calendar.add(draft) {
                if done {
                    let _ = ws.calendar.toggle(&id);
                }
            }
        }

        ws.journal.set_mood(today, Mood::Good);
        ws.journal.add_gratitude(today, "Morning coffee");
        ws.journal.add_gratitude(today, "Sunny weather");
        ws.journal.set_reflection(
            today,
            "Today was productive. I managed to complete most of my tasks and felt \
             energized throughout the day. The meditation session this morning really \
             helped set a positive tone.",
        );
        for (text, done) in [
            ("Review quarterly reports", true),
            ("Call dentist for appointment", false),
            ("Plan weekend trip", false),
        ] {
            if let Some(id) = ws.journal.add_todo(today, text) {
                if done {
                    let _ = ws.journal.toggle_todo(today, &id);
                }
            }
        }
        ws.journal.add_highlight(today, "Finished the big project");
        ws.journal
            .add_highlight(today, "Had a great conversation with a friend");

        tracing::debug!(%today, "demo workspace seeded");
        ws
    }
}

fn seed_goal(ws: &mut Workspace, draft: NewGoal, milestones: &[(&str, bool)]) {
    let Some(goal_id) = ws.goals.add(draft) else {
        return;
    };
    for (title, done) in milestones {
        if let Ok(Some(id)) = ws.goals.add_milestone(&goal_id, title) {
            if *done {
                let _ = ws.goals.toggle_milestone(&goal_id, &id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::BookStatus;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 4).unwrap()
    }

    #[test]
    fn demo_fills_every_tracker() {
        let ws = Workspace::demo(Section::Journal, today());
        assert_eq!(ws.habits.len(), 4);
        assert_eq!(ws.reading.len(), 3);
        assert_eq!(ws.goals.len(), 2);
        assert_eq!(ws.calendar.len(), 5);
        assert_eq!(ws.journal.len(), 1);
        assert_eq!(ws.habits.progress().percent(), 50);
    }

    #[test]
    fn demo_calendar_buckets() {
        let ws = Workspace::demo(Section::Events, today());
        let b = ws.calendar.buckets(today());
        let titles = |items: &[&crate::calendar::CalendarItem]| {
            items.iter().map(|i| i.title.clone()).collect::<Vec<_>>()
        };
        assert_eq!(titles(&b.today), vec!["Finish quarterly report"]);
        assert_eq!(titles(&b.overdue), vec!["Buy groceries", "Team meeting"]);
        assert_eq!(titles(&b.upcoming), vec!["Doctor appointment"]);
        assert_eq!(titles(&b.settled), vec!["Call mom"]);
    }

    #[test]
    fn demo_goals_and_books() {
        let ws = Workspace::demo(Section::Goals, today());
        for goal in ws.goals.goals().iter() {
            assert_eq!(goal.progress().percent(), 50);
        }
        let finished = ws
            .reading
            .books()
            .iter()
            .find(|b| b.status == BookStatus::Completed)
            .unwrap();
        assert_eq!(finished.rating, Some(5));
        assert_eq!(finished.date_completed, today().checked_sub_days(Days::new(30)));
    }

    #[test]
    fn demo_at_date_bounds_does_not_panic() {
        for day in [NaiveDate::MIN, NaiveDate::MAX] {
            let ws = Workspace::demo(Section::Events, day);
            let b = ws.calendar.buckets(day);
            let placed = b.today.len() + b.overdue.len() + b.upcoming.len() + b.settled.len();
            assert_eq!(placed, 5);
        }
    }
}
