//! Plain-text and JSON rendering of section views.

use daybook_core::{BookStatus, CalendarItem, SectionView};
use std::fmt::Write as _;

pub fn print_view(view: &SectionView<'_>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        print!("{}", render_text(view));
    }
    Ok(())
}

fn check(done: bool) -> &'static str {
    if done {
        "[x]"
    } else {
        "[ ]"
    }
}

fn calendar_line(out: &mut String, item: &CalendarItem) {
    let mark = match item.completed {
        Some(done) => check(done),
        None => "   ",
    };
    let time = item
        .time
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "all-day".into());
    let _ = writeln!(
        out,
        "  {mark} {} {time:<7} {} ({}, {})",
        item.date, item.title, item.kind, item.priority
    );
}

pub fn render_text(view: &SectionView<'_>) -> String {
    let mut out = String::new();
    match view {
        SectionView::Habits {
            title,
            habits,
            progress,
        } => {
            let _ = writeln!(
                out,
                "{title}: {} of {} completed ({}%)",
                progress.done, progress.total, progress.percent
            );
            for habit in habits {
                let _ = writeln!(
                    out,
                    "  {} {} ({} day streak)  {}",
                    check(habit.completed),
                    habit.name,
                    habit.streak,
                    habit.id
                );
            }
        }
        SectionView::Reading {
            title,
            books,
            summary,
        } => {
            let _ = writeln!(
                out,
                "{title}: {} reading, {} completed, {} total",
                summary.reading, summary.completed, summary.total
            );
            for book in books {
                let status = match book.status {
                    BookStatus::Planned => "Planned".to_string(),
                    BookStatus::Reading => format!("Reading {}%", book.progress),
                    BookStatus::Completed => match (book.date_completed, book.rating) {
                        (Some(date), Some(stars)) => format!("Completed {date} {}", "*".repeat(stars.into())),
                        (Some(date), None) => format!("Completed {date}"),
                        _ => "Completed".to_string(),
                    },
                };
                let _ = writeln!(
                    out,
                    "  {} by {} [{status}]  {}",
                    book.title, book.author, book.id
                );
            }
        }
        SectionView::Goals { title, goals } => {
            let _ = writeln!(out, "{title}");
            for goal_view in goals {
                let goal = goal_view.goal;
                let _ = writeln!(
                    out,
                    "  {} {} [{}, {}] {}%  {}",
                    check(goal.completed),
                    goal.title,
                    goal.category,
                    goal.priority,
                    goal_view.progress.percent,
                    goal.id
                );
                if let Some(deadline) = goal.deadline {
                    let _ = writeln!(out, "      due {deadline}");
                }
                for m in goal.milestones.iter() {
                    let _ = writeln!(out, "      {} {}  {}", check(m.completed), m.title, m.id);
                }
            }
        }
        SectionView::Events {
            title,
            counts,
            today,
            overdue,
            upcoming,
            settled,
        } => {
            let _ = writeln!(
                out,
                "{title}: {} today, {} upcoming, {} overdue",
                counts.today, counts.upcoming, counts.overdue
            );
            let groups = [
                ("Today", Some(today)),
                ("Overdue", Some(overdue)),
                ("Upcoming", Some(upcoming)),
                ("Done", settled.as_ref()),
            ];
            for (name, items) in groups {
                let Some(items) = items.filter(|items| !items.is_empty()) else {
                    continue;
                };
                let _ = writeln!(out, "{name}");
                for item in items {
                    calendar_line(&mut out, item);
                }
            }
        }
        SectionView::Journal {
            title,
            date,
            entry,
            todo_progress,
        } => {
            let _ = writeln!(out, "{title} {}", date.format("%A, %B %-d, %Y"));
            let _ = writeln!(out, "Mood: {} {}", entry.mood.emoji(), entry.mood);
            let _ = writeln!(out, "Grateful for:");
            for item in &entry.gratitude {
                let _ = writeln!(out, "  - {item}");
            }
            let _ = writeln!(
                out,
                "Todos ({} of {}):",
                todo_progress.done, todo_progress.total
            );
            for todo in entry.todos.iter() {
                let _ = writeln!(out, "  {} {}  {}", check(todo.completed), todo.text, todo.id);
            }
            let _ = writeln!(out, "Highlights:");
            for item in &entry.highlights {
                let _ = writeln!(out, "  - {item}");
            }
            if !entry.reflection.is_empty() {
                let _ = writeln!(out, "Reflection:\n  {}", entry.reflection);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use daybook_core::{Section, Workspace};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 4).unwrap()
    }

    #[test]
    fn events_text_lists_groups_in_order() {
        let ws = Workspace::demo(Section::Events, today());
        let text = render_text(&ws.render_current(today()));
        assert!(text.starts_with("Events & Tasks: 1 today, 1 upcoming, 2 overdue"));
        let today_at = text.find("Today\n").unwrap();
        let overdue_at = text.find("Overdue\n").unwrap();
        let upcoming_at = text.find("Upcoming\n").unwrap();
        assert!(today_at < overdue_at && overdue_at < upcoming_at);
        assert!(!text.contains("Call mom"));
    }

    #[test]
    fn journal_text_shows_date_and_mood() {
        let ws = Workspace::demo(Section::Journal, today());
        let text = render_text(&ws.render_current(today()));
        assert!(text.starts_with("Daily Journal Wednesday, September 4, 2024"));
        assert!(text.contains("Mood: 😊 good"));
        assert!(text.contains("Todos (1 of 3):"));
    }

    #[test]
    fn habits_text_shows_progress() {
        let ws = Workspace::demo(Section::Habits, today());
        let text = render_text(&ws.render_current(today()));
        assert!(text.starts_with("Daily Habits: 2 of 4 completed (50%)"));
        assert!(text.contains("Morning meditation (7 day streak)"));
    }
}
