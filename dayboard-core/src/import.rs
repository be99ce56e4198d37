//! Turning calendar provider events into tasks.
//!
//! Every event becomes a standalone task with a single mirrored subtask,
//! so it shows up both in the task list and in today's timeline.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::task::{Effort, Priority, Subtask, Task};

pub const UNTITLED_EVENT: &str = "(No title)";

/// Event start or end as the provider reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventTime {
    DateTime(DateTime<Utc>),
    /// All-day events only carry a date
    Date(NaiveDate),
}

impl EventTime {
    /// The instant this time refers to; all-day dates start at local midnight.
    pub fn to_zoned<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        match self {
            EventTime::DateTime(dt) => dt.with_timezone(tz),
            EventTime::Date(date) => local_instant(tz, date.and_time(NaiveTime::MIN)),
        }
    }
}

/// A calendar event reduced to what the importer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: Option<String>,
    pub summary: Option<String>,
    pub start: EventTime,
    pub end: EventTime,
}

/// Local day bounds used to query the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// `[00:00:00, 23:59:59]` of the local day containing `now`.
pub fn today_window<Tz: TimeZone>(now: &DateTime<Tz>) -> DayWindow {
    let tz = now.timezone();
    let date = now.date_naive();
    let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);

    DayWindow {
        start: local_instant(&tz, date.and_time(NaiveTime::MIN)).with_timezone(&Utc),
        end: local_instant(&tz, date.and_time(end_of_day)).with_timezone(&Utc),
    }
}

/// Resolve a wall-clock time, taking the earlier instant when it is
/// ambiguous and reading it as UTC when it does not exist in `tz`.
fn local_instant<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    tz.from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&naive))
}

/// <=30 minutes is low, 2 hours or more is high.
pub fn effort_for_duration(hours: f64) -> Effort {
    if hours <= 0.5 {
        Effort::Low
    } else if hours >= 2.0 {
        Effort::High
    } else {
        Effort::Medium
    }
}

/// Map one event; `index` names events that come without an id.
pub fn event_to_task<Tz: TimeZone>(event: &CalendarEvent, index: usize, tz: &Tz) -> Task {
    let id_base = event
        .id
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| format!("gcal-{}", index));
    let title = event
        .summary
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNTITLED_EVENT.to_string());

    let start = event.start.to_zoned(tz);
    let end = event.end.to_zoned(tz);

    let hours = (end.clone() - start.clone()).num_seconds() as f64 / 3600.0;
    let effort = effort_for_duration(hours);
    let scheduled_time = format!("{:02}:{:02}", start.hour(), start.minute());

    Task {
        id: format!("gcal-{}", id_base),
        title: title.clone(),
        completed: false,
        priority: Priority::Medium,
        due_date: start.date_naive(),
        subtasks: vec![Subtask {
            id: format!("{}-0", id_base),
            title: title.clone(),
            completed: false,
            task_title: title,
            scheduled_time: scheduled_time.clone(),
            effort,
        }],
        is_standalone_task: true,
        scheduled_time: Some(scheduled_time),
        effort: Some(effort),
        repeat_pattern: None,
    }
}

pub fn import_events<Tz: TimeZone>(events: &[CalendarEvent], tz: &Tz) -> Vec<Task> {
    events
        .iter()
        .enumerate()
        .map(|(index, event)| event_to_task(event, index, tz))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::New_York;

    fn at(h: u32, m: u32) -> EventTime {
        // 2025-11-09 in New York is UTC-5
        EventTime::DateTime(Utc.with_ymd_and_hms(2025, 11, 9, h + 5, m, 0).unwrap())
    }

    fn event(id: Option<&str>, summary: Option<&str>, start: EventTime, end: EventTime) -> CalendarEvent {
        CalendarEvent {
            id: id.map(String::from),
            summary: summary.map(String::from),
            start,
            end,
        }
    }

    #[test]
    fn test_effort_from_duration() {
        let short = event_to_task(&event(Some("a"), Some("Standup"), at(10, 0), at(10, 20)), 0, &New_York);
        assert_eq!(short.effort, Some(Effort::Low));

        let long = event_to_task(&event(Some("b"), Some("Workshop"), at(10, 0), at(13, 0)), 0, &New_York);
        assert_eq!(long.effort, Some(Effort::High));

        let medium = event_to_task(&event(Some("c"), Some("Review"), at(10, 0), at(11, 0)), 0, &New_York);
        assert_eq!(medium.effort, Some(Effort::Medium));

        assert_eq!(effort_for_duration(0.5), Effort::Low);
        assert_eq!(effort_for_duration(2.0), Effort::High);
    }

    #[test]
    fn test_event_maps_to_standalone_task() {
        let task = event_to_task(&event(Some("abc"), Some("Dentist"), at(14, 5), at(15, 0)), 3, &New_York);

        assert_eq!(task.id, "gcal-abc");
        assert_eq!(task.title, "Dentist");
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.is_standalone_task);
        assert_eq!(task.scheduled_time.as_deref(), Some("14:05"));
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2025, 11, 9).unwrap());

        assert_eq!(task.subtasks.len(), 1);
        let subtask = &task.subtasks[0];
        assert_eq!(subtask.id, "abc-0");
        assert_eq!(subtask.task_title, "Dentist");
        assert_eq!(subtask.scheduled_time, "14:05");
        assert_eq!(Some(subtask.effort), task.effort);
    }

    #[test]
    fn test_missing_id_and_title_fall_back() {
        let tasks = import_events(
            &[
                event(Some("x"), Some("First"), at(9, 0), at(9, 30)),
                event(None, None, at(11, 0), at(12, 0)),
            ],
            &New_York,
        );

        assert_eq!(tasks[1].id, "gcal-gcal-1");
        assert_eq!(tasks[1].title, UNTITLED_EVENT);
        assert_eq!(tasks[1].subtasks[0].id, "gcal-1-0");
    }

    #[test]
    fn test_empty_id_counts_as_missing() {
        let task = event_to_task(&event(Some(""), Some("Call"), at(9, 0), at(9, 30)), 4, &New_York);

        assert_eq!(task.id, "gcal-gcal-4");
        assert_eq!(task.subtasks[0].id, "gcal-4-0");
    }

    #[test]
    fn test_all_day_event_starts_at_local_midnight() {
        let day = NaiveDate::from_ymd_opt(2025, 11, 9).unwrap();
        let task = event_to_task(
            &event(Some("holiday"), Some("Holiday"), EventTime::Date(day), EventTime::Date(day.succ_opt().unwrap())),
            0,
            &New_York,
        );

        assert_eq!(task.scheduled_time.as_deref(), Some("00:00"));
        assert_eq!(task.due_date, day);
        assert_eq!(task.effort, Some(Effort::High));
    }

    #[test]
    fn test_today_window_covers_local_day() {
        let now = New_York.with_ymd_and_hms(2025, 11, 9, 15, 30, 0).unwrap();

        let window = today_window(&now);

        assert_eq!(window.start, Utc.with_ymd_and_hms(2025, 11, 9, 5, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2025, 11, 10, 4, 59, 59).unwrap());
    }

    #[test]
    fn test_due_date_follows_local_day() {
        // 02:00 UTC on the 10th is still the evening of the 9th in New York
        let start = EventTime::DateTime(Utc.with_ymd_and_hms(2025, 11, 10, 2, 0, 0).unwrap());
        let end = EventTime::DateTime(Utc.with_ymd_and_hms(2025, 11, 10, 3, 0, 0).unwrap());

        let task = event_to_task(&event(Some("late"), Some("Late call"), start, end), 0, &New_York);

        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2025, 11, 9).unwrap());
        assert_eq!(task.scheduled_time.as_deref(), Some("21:00"));
    }
}
