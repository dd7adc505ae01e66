//! Integration tests driving the workspace through intents.

use chrono::NaiveDate;
use daybook_core::{
    Applied, BookStatus, Intent, ItemKind, NewCalendarItem, NewGoal, Section, SectionView,
    Workspace,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn created(applied: Applied) -> String {
    match applied {
        Applied::Created { id } => id,
        other => panic!("expected a created record, got {other:?}"),
    }
}

#[test]
fn test_events_across_three_days() {
    let mut ws = Workspace::new(Section::Events);
    let today = date("2024-09-04");

    let drafts = vec![
        NewCalendarItem::parse("Call mom", "2024-09-03", "", "reminder", "medium").unwrap(),
        NewCalendarItem::parse("Team meeting", "2024-09-03", "14:00", "task", "medium").unwrap(),
        NewCalendarItem::parse("Report", "2024-09-04", "", "task", "high").unwrap(),
        NewCalendarItem::parse("Doctor", "2024-09-05", "", "event", "high").unwrap(),
    ];
    let ids: Vec<String> = drafts
        .into_iter()
        .map(|item| created(ws.apply(Intent::AddCalendarItem { item }, today).unwrap()))
        .collect();
    ws.apply(
        Intent::ToggleCalendarItem {
            id: ids[0].clone(),
        },
        today,
    )
    .unwrap();

    match ws.render_current(today) {
        SectionView::Events {
            today: t,
            overdue,
            upcoming,
            settled,
            counts,
            ..
        } => {
            assert_eq!(t.len(), 1);
            assert_eq!(t[0].title, "Report");
            assert_eq!(overdue.len(), 1);
            assert_eq!(overdue[0].title, "Team meeting");
            assert_eq!(upcoming.len(), 1);
            assert_eq!(upcoming[0].title, "Doctor");
            assert!(settled.is_none());
            assert_eq!((counts.today, counts.overdue, counts.upcoming), (1, 1, 1));
        }
        other => panic!("unexpected view {other:?}"),
    }
}

#[test]
fn test_toggling_event_is_ignored() {
    let mut ws = Workspace::default();
    let today = date("2024-09-04");
    let id = created(
        ws.apply(
            Intent::AddCalendarItem {
                item: NewCalendarItem::new("Standup", today).kind(ItemKind::Event),
            },
            today,
        )
        .unwrap(),
    );
    assert_eq!(
        ws.apply(Intent::ToggleCalendarItem { id: id.clone() }, today)
            .unwrap(),
        Applied::Ignored
    );
    assert_eq!(ws.calendar.get(&id).unwrap().completed, None);
}

#[test]
fn test_reading_lifecycle() {
    let mut ws = Workspace::new(Section::Reading);
    let today = date("2024-09-04");
    let id = created(
        ws.apply(
            Intent::AddBook {
                title: "Dune".into(),
                author: "Frank Herbert".into(),
            },
            today,
        )
        .unwrap(),
    );

    ws.apply(Intent::StartBook { id: id.clone() }, today).unwrap();
    ws.apply(Intent::AdvanceBook { id: id.clone() }, today).unwrap();
    assert_eq!(ws.reading.get(&id).unwrap().progress, 15);

    ws.apply(
        Intent::SetBookProgress {
            id: id.clone(),
            progress: 100,
        },
        today,
    )
    .unwrap();
    let book = ws.reading.get(&id).unwrap();
    assert_eq!(book.status, BookStatus::Completed);
    assert_eq!(book.date_completed, Some(today));

    ws.apply(
        Intent::RateBook {
            id: id.clone(),
            stars: 4,
        },
        today,
    )
    .unwrap();

    ws.apply(
        Intent::SetBookProgress {
            id: id.clone(),
            progress: 0,
        },
        today,
    )
    .unwrap();
    let book = ws.reading.get(&id).unwrap();
    assert_eq!(book.status, BookStatus::Planned);
    assert_eq!(book.date_completed, None);
}

#[test]
fn test_goal_progress_view() {
    let mut ws = Workspace::new(Section::Goals);
    let today = date("2024-09-04");
    let goal_id = created(
        ws.apply(
            Intent::AddGoal {
                goal: NewGoal::new("Write a novel"),
            },
            today,
        )
        .unwrap(),
    );

    let json = serde_json::to_value(ws.render_current(today)).unwrap();
    assert_eq!(json["goals"][0]["progress"]["percent"], 0);

    let mut milestones = Vec::new();
    for title in ["Outline", "Draft", "Edit"] {
        milestones.push(created(
            ws.apply(
                Intent::AddMilestone {
                    goal_id: goal_id.clone(),
                    title: title.into(),
                },
                today,
            )
            .unwrap(),
        ));
    }
    ws.apply(
        Intent::ToggleMilestone {
            goal_id: goal_id.clone(),
            milestone_id: milestones[1].clone(),
        },
        today,
    )
    .unwrap();

    let json = serde_json::to_value(ws.render_current(today)).unwrap();
    let goal = &json["goals"][0];
    assert_eq!(goal["title"], "Write a novel");
    assert_eq!(goal["milestones"].as_array().unwrap().len(), 3);
    assert_eq!(goal["progress"]["percent"], 33);
    assert_eq!(goal["progress"]["done"], 1);
}

#[test]
fn test_habits_via_json_intents() {
    let mut ws = Workspace::default();
    let today = date("2024-09-04");
    let script = [
        r#"{"type":"select_section","section":"habits"}"#,
        r#"{"type":"add_habit","name":"Stretch"}"#,
        r#"{"type":"add_habit","name":"   "}"#,
        r#"{"type":"add_habit","name":"Journal"}"#,
    ];
    for line in script {
        let intent: Intent = serde_json::from_str(line).unwrap();
        ws.apply(intent, today).unwrap();
    }
    assert_eq!(ws.current(), Section::Habits);
    assert_eq!(ws.habits.len(), 2);

    let id = ws.habits.habits().ids().next().unwrap().to_string();
    ws.apply(Intent::ToggleHabit { id: id.clone() }, today)
        .unwrap();
    let json = serde_json::to_value(ws.render_current(today)).unwrap();
    assert_eq!(json["section"], "habits");
    assert_eq!(json["title"], "Daily Habits");
    assert_eq!(json["progress"]["percent"], 50);
    assert_eq!(json["habits"][0]["streak"], 1);

    assert_eq!(
        ws.apply(Intent::RemoveHabit { id }, today).unwrap(),
        Applied::Changed
    );
    assert_eq!(ws.habits.len(), 1);
}

#[test]
fn test_journal_edits_today_only() {
    let mut ws = Workspace::default();
    let today = date("2024-09-04");
    let todo = created(
        ws.apply(
            Intent::AddTodo {
                text: "Plan trip".into(),
            },
            today,
        )
        .unwrap(),
    );
    ws.apply(Intent::ToggleTodo { id: todo }, today).unwrap();
    ws.apply(
        Intent::AddGratitude {
            text: "Friends".into(),
        },
        today,
    )
    .unwrap();

    let json = serde_json::to_value(ws.render(Section::Journal, today)).unwrap();
    assert_eq!(json["todo_progress"]["percent"], 100);
    assert_eq!(json["entry"]["gratitude"][0], "Friends");

    let json = serde_json::to_value(ws.render(Section::Journal, date("2024-09-05"))).unwrap();
    assert_eq!(json["todo_progress"]["total"], 0);
    assert_eq!(ws.journal.len(), 1);
}

#[test]
fn test_blank_draft_fields_decode_and_are_ignored() {
    let mut ws = Workspace::default();
    let today = date("2024-09-04");
    let lines = [
        r#"{"type":"add_calendar_item","item":{"title":"Dentist","date":"","time":""}}"#,
        r#"{"type":"add_calendar_item","item":{"date":"2024-09-04"}}"#,
        r#"{"type":"add_goal","goal":{"deadline":""}}"#,
    ];
    for line in lines {
        let intent: Intent = serde_json::from_str(line).unwrap();
        assert_eq!(ws.apply(intent, today).unwrap(), Applied::Ignored, "{line}");
    }
    assert!(ws.calendar.is_empty());
    assert!(ws.goals.is_empty());
}

#[test]
fn test_blank_goal_deadline_means_none() {
    let mut ws = Workspace::new(Section::Goals);
    let today = date("2024-09-04");
    let intent: Intent =
        serde_json::from_str(r#"{"type":"add_goal","goal":{"title":"Garden","deadline":""}}"#)
            .unwrap();
    let id = created(ws.apply(intent, today).unwrap());
    assert_eq!(ws.goals.get(&id).unwrap().deadline, None);

    let bad = r#"{"type":"add_calendar_item","item":{"title":"x","date":"tomorrow"}}"#;
    assert!(serde_json::from_str::<Intent>(bad).is_err());
}
