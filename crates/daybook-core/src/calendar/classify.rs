//! Temporal classification of calendar items.
//!
//! Items are bucketed relative to a reference date:
//!
//! - `today`: dated on the reference date, completed or not
//! - `overdue`: dated before it and not completed
//! - `upcoming`: dated after it, completed or not
//! - `settled`: dated before it and completed
//!
//! `settled` keeps past completed items visible to callers instead of letting
//! them vanish; surfaces decide whether to show it. Every list is ordered by
//! (date, time) with all-day items at midnight, ties in insertion order.

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

use super::item::CalendarItem;

/// Which list an item lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Today,
    Overdue,
    Upcoming,
    Settled,
}

impl Bucket {
    /// Bucket for a single item relative to `today`.
    pub fn of(item: &CalendarItem, today: NaiveDate) -> Self {
        match item.date.cmp(&today) {
            Ordering::Equal => Bucket::Today,
            Ordering::Greater => Bucket::Upcoming,
            Ordering::Less if item.is_completed() => Bucket::Settled,
            Ordering::Less => Bucket::Overdue,
        }
    }
}

/// Classified and ordered calendar items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Buckets<'a> {
    pub today: Vec<&'a CalendarItem>,
    pub overdue: Vec<&'a CalendarItem>,
    pub upcoming: Vec<&'a CalendarItem>,
    pub settled: Vec<&'a CalendarItem>,
}

/// Item counts per visible bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketCounts {
    pub today: usize,
    pub upcoming: usize,
    pub overdue: usize,
}

impl Buckets<'_> {
    pub fn counts(&self) -> BucketCounts {
        BucketCounts {
            today: self.today.len(),
            upcoming: self.upcoming.len(),
            overdue: self.overdue.len(),
        }
    }
}

/// Classify `items` (in insertion order) relative to `today`.
///
/// Pure and recomputed from scratch on every call.
pub fn classify<'a, I>(items: I, today: NaiveDate) -> Buckets<'a>
where
    I: IntoIterator<Item = &'a CalendarItem>,
{
    let mut sorted: Vec<&CalendarItem> = items.into_iter().collect();
    // sort_by_key is stable, so equal keys keep insertion order
    sorted.sort_by_key(|item| item.sort_key());

    let mut buckets = Buckets::default();
    for item in sorted {
        match Bucket::of(item, today) {
            Bucket::Today => buckets.today.push(item),
            Bucket::Overdue => buckets.overdue.push(item),
            Bucket::Upcoming => buckets.upcoming.push(item),
            Bucket::Settled => buckets.settled.push(item),
        }
    }

    tracing::trace!(
        %today,
        today_count = buckets.today.len(),
        overdue = buckets.overdue.len(),
        upcoming = buckets.upcoming.len(),
        settled = buckets.settled.len(),
        "classified calendar items"
    );
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::item::ItemKind;
    use crate::priority::Priority;
    use chrono::NaiveTime;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn item(id: &str, d: &str, time: Option<&str>, kind: ItemKind, completed: Option<bool>) -> CalendarItem {
        CalendarItem {
            id: id.into(),
            title: id.into(),
            date: date(d),
            time: time.map(|t| NaiveTime::parse_from_str(t, "%H:%M").unwrap()),
            kind,
            completed,
            priority: Priority::Medium,
        }
    }

    fn ids(items: &[&CalendarItem]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_mixed_dates() {
        let items = vec![
            item("a", "2024-09-03", None, ItemKind::Task, Some(true)),
            item("b", "2024-09-03", Some("14:00"), ItemKind::Event, None),
            item("c", "2024-09-04", None, ItemKind::Task, Some(false)),
            item("d", "2024-09-05", None, ItemKind::Task, Some(false)),
        ];
        let b = classify(&items, date("2024-09-04"));
        assert_eq!(ids(&b.today), vec!["c"]);
        assert_eq!(ids(&b.overdue), vec!["b"]);
        assert_eq!(ids(&b.upcoming), vec!["d"]);
        assert_eq!(ids(&b.settled), vec!["a"]);
    }

    #[test]
    fn test_today_sorted_by_time_with_all_day_first() {
        let items = vec![
            item("late", "2024-09-04", Some("17:00"), ItemKind::Task, Some(false)),
            item("allday", "2024-09-04", None, ItemKind::Task, Some(true)),
            item("early", "2024-09-04", Some("08:30"), ItemKind::Event, None),
        ];
        let b = classify(&items, date("2024-09-04"));
        assert_eq!(ids(&b.today), vec!["allday", "early", "late"]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let items = vec![
            item("first", "2024-09-06", Some("10:00"), ItemKind::Task, Some(false)),
            item("second", "2024-09-06", Some("10:00"), ItemKind::Event, None),
            item("midnight", "2024-09-06", Some("00:00"), ItemKind::Task, Some(false)),
            item("allday", "2024-09-06", None, ItemKind::Task, Some(false)),
        ];
        let b = classify(&items, date("2024-09-04"));
        assert_eq!(ids(&b.upcoming), vec!["midnight", "allday", "first", "second"]);
    }

    #[test]
    fn test_overdue_events_never_filtered() {
        let items = vec![item("e", "2024-01-01", None, ItemKind::Event, None)];
        let b = classify(&items, date("2024-09-04"));
        assert_eq!(ids(&b.overdue), vec!["e"]);
        assert!(b.settled.is_empty());
    }

    #[test]
    fn test_completed_upcoming_stays_upcoming() {
        let items = vec![item("r", "2024-10-01", None, ItemKind::Reminder, Some(true))];
        let b = classify(&items, date("2024-09-04"));
        assert_eq!(ids(&b.upcoming), vec!["r"]);
    }

    #[test]
    fn test_overdue_ordered_across_dates() {
        let items = vec![
            item("x", "2024-09-02", Some("09:00"), ItemKind::Task, Some(false)),
            item("y", "2024-08-30", Some("23:00"), ItemKind::Task, Some(false)),
            item("z", "2024-09-02", None, ItemKind::Task, Some(false)),
        ];
        let b = classify(&items, date("2024-09-04"));
        assert_eq!(ids(&b.overdue), vec!["y", "z", "x"]);
        assert_eq!(
            b.counts(),
            BucketCounts {
                today: 0,
                upcoming: 0,
                overdue: 3
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<CalendarItem> = Vec::new();
        let b = classify(&items, date("2024-09-04"));
        assert_eq!(b, Buckets::default());
    }
}
