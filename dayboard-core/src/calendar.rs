//! Month, week and day calendar views over the task list.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::schedule::leading_hour;
use crate::task::{Subtask, Task};

/// Tasks shown per month cell before collapsing into "+N more".
pub const MONTH_CELL_PREVIEW: usize = 3;

/// First and last hour slot of the day timeline (8 AM to 8 PM).
pub const DAY_FIRST_HOUR: u32 = 8;
pub const DAY_LAST_HOUR: u32 = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
    Day,
}

pub fn tasks_for_date(tasks: &[Task], date: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|t| t.due_date == date).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub tasks: Vec<&'a Task>,
    pub is_today: bool,
}

impl<'a> DayCell<'a> {
    fn new(tasks: &'a [Task], date: NaiveDate, today: NaiveDate) -> Self {
        DayCell {
            date,
            tasks: tasks_for_date(tasks, date),
            is_today: date == today,
        }
    }

    pub fn preview(&self) -> &[&'a Task] {
        &self.tasks[..self.tasks.len().min(MONTH_CELL_PREVIEW)]
    }

    /// Number of tasks hidden behind "+N more".
    pub fn overflow(&self) -> usize {
        self.tasks.len().saturating_sub(MONTH_CELL_PREVIEW)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthView<'a> {
    /// e.g. "November 2025"
    pub title: String,
    /// Empty cells before the 1st (Sunday-first grid)
    pub leading_blanks: u32,
    pub days: Vec<DayCell<'a>>,
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        None => 31,
    }
}

pub fn month_view(tasks: &[Task], anchor: NaiveDate, today: NaiveDate) -> MonthView<'_> {
    let first = first_of_month(anchor);

    let days = first
        .iter_days()
        .take(days_in_month(first) as usize)
        .map(|date| DayCell::new(tasks, date, today))
        .collect();

    MonthView {
        title: first.format("%B %Y").to_string(),
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    }
}

/// Sunday through Saturday of the week containing `selected`.
pub fn week_of(selected: NaiveDate) -> [NaiveDate; 7] {
    let start = selected - Duration::days(i64::from(selected.weekday().num_days_from_sunday()));
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

pub fn week_view(tasks: &[Task], selected: NaiveDate, today: NaiveDate) -> Vec<DayCell<'_>> {
    week_of(selected)
        .into_iter()
        .map(|date| DayCell::new(tasks, date, today))
        .collect()
}

/// A subtask shown in the day timeline with its owning task.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineItem<'a> {
    pub subtask: &'a Subtask,
    pub task: &'a Task,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourSlot<'a> {
    pub hour: u32,
    pub items: Vec<TimelineItem<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayView<'a> {
    pub date: NaiveDate,
    /// One slot per hour from 8 AM to 8 PM; subtasks outside are not slotted
    pub slots: Vec<HourSlot<'a>>,
    pub tasks: Vec<&'a Task>,
}

pub fn day_view(tasks: &[Task], date: NaiveDate) -> DayView<'_> {
    let due = tasks_for_date(tasks, date);

    let mut items: Vec<TimelineItem> = due
        .iter()
        .flat_map(|&task| {
            task.subtasks
                .iter()
                .map(move |subtask| TimelineItem { subtask, task })
        })
        .collect();
    items.sort_by(|a, b| a.subtask.scheduled_time.cmp(&b.subtask.scheduled_time));

    let mut slots: Vec<HourSlot> = (DAY_FIRST_HOUR..=DAY_LAST_HOUR)
        .map(|hour| HourSlot {
            hour,
            items: Vec::new(),
        })
        .collect();

    for item in items {
        let Some(hour) = leading_hour(&item.subtask.scheduled_time) else {
            continue;
        };
        if let Some(slot) = slots.iter_mut().find(|s| s.hour == hour) {
            slot.items.push(item);
        }
    }

    DayView {
        date,
        slots,
        tasks: due,
    }
}

/// Which view is open and where it points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    pub mode: ViewMode,
    /// Anchor of the month view
    pub month: NaiveDate,
    /// Selected day for the week and day views
    pub selected: NaiveDate,
}

impl CalendarCursor {
    pub fn new(today: NaiveDate) -> Self {
        CalendarCursor {
            mode: ViewMode::Month,
            month: today,
            selected: today,
        }
    }

    pub fn previous(&mut self) {
        match self.mode {
            ViewMode::Month => {
                let first = first_of_month(self.month);
                self.month = first.checked_sub_months(Months::new(1)).unwrap_or(first);
            }
            ViewMode::Week => self.selected -= Duration::days(7),
            ViewMode::Day => self.selected -= Duration::days(1),
        }
    }

    pub fn next(&mut self) {
        match self.mode {
            ViewMode::Month => {
                let first = first_of_month(self.month);
                self.month = first.checked_add_months(Months::new(1)).unwrap_or(first);
            }
            ViewMode::Week => self.selected += Duration::days(7),
            ViewMode::Day => self.selected += Duration::days(1),
        }
    }

    /// Drill down: month opens the week, week opens the day.
    pub fn click_date(&mut self, date: NaiveDate) {
        match self.mode {
            ViewMode::Month => {
                self.selected = date;
                self.mode = ViewMode::Week;
            }
            ViewMode::Week => {
                self.selected = date;
                self.mode = ViewMode::Day;
            }
            ViewMode::Day => {}
        }
    }

    pub fn click_week(&mut self, date: NaiveDate) {
        self.selected = date;
        self.mode = ViewMode::Week;
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }
}
