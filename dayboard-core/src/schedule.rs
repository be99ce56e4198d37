//! Today's schedule: every subtask (plus standalone tasks) ordered and
//! split into morning, afternoon and evening.

use serde::Serialize;

use crate::task::{Subtask, SubtaskOrigin, Task};

/// One line of the daily timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    #[serde(flatten)]
    pub subtask: Subtask,
    pub task_id: String,
    pub origin: SubtaskOrigin,
}

impl ScheduleEntry {
    pub fn belongs_to(&self, task_id: &str) -> bool {
        self.task_id == task_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    pub const ALL: [DayPeriod; 3] = [DayPeriod::Morning, DayPeriod::Afternoon, DayPeriod::Evening];

    /// Morning before 12, afternoon 12 through 16, evening from 17.
    ///
    /// Times without a leading hour fall into the evening.
    pub fn for_time(time: &str) -> DayPeriod {
        match leading_hour(time) {
            Some(hour) if hour < 12 => DayPeriod::Morning,
            Some(hour) if hour < 17 => DayPeriod::Afternoon,
            _ => DayPeriod::Evening,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayPeriod::Morning => "Morning (8:00 AM - 12:00 PM)",
            DayPeriod::Afternoon => "Afternoon (12:00 PM - 5:00 PM)",
            DayPeriod::Evening => "Evening (5:00 PM - 8:00 PM)",
        }
    }
}

/// Hour parsed from the leading digits of an `HH:MM` string.
pub(crate) fn leading_hour(time: &str) -> Option<u32> {
    let trimmed = time.trim_start();
    let digits: &str = &trimmed[..trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len())];
    digits.parse().ok()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodGroup {
    pub period: DayPeriod,
    pub label: &'static str,
    pub entries: Vec<ScheduleEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySchedule {
    pub periods: Vec<PeriodGroup>,
    pub completed: usize,
    pub total: usize,
}

impl DailySchedule {
    /// Rounded completion percentage, 0 for an empty day.
    pub fn progress_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }

    pub fn all_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    pub fn entries(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.periods.iter().flat_map(|p| p.entries.iter())
    }
}

/// Flatten tasks into timeline entries, standalone tasks included.
pub fn schedule_entries(tasks: &[Task]) -> Vec<ScheduleEntry> {
    let mut entries = Vec::new();

    for task in tasks {
        entries.extend(task.subtasks.iter().map(|subtask| ScheduleEntry {
            subtask: subtask.clone(),
            task_id: task.id.clone(),
            origin: SubtaskOrigin::Owned,
        }));

        if let Some(subtask) = task.standalone_subtask() {
            entries.push(ScheduleEntry {
                subtask,
                task_id: task.id.clone(),
                origin: SubtaskOrigin::Standalone {
                    task_id: task.id.clone(),
                },
            });
        }
    }

    entries
}

/// Incomplete before complete, then the highlighted task's entries, then
/// by scheduled time.
pub fn sort_entries(entries: &mut [ScheduleEntry], highlighted: Option<&str>) {
    entries.sort_by(|a, b| {
        let highlight_rank = |e: &ScheduleEntry| match highlighted {
            Some(id) if e.belongs_to(id) => 0,
            _ => 1,
        };

        a.subtask
            .completed
            .cmp(&b.subtask.completed)
            .then_with(|| highlight_rank(a).cmp(&highlight_rank(b)))
            .then_with(|| a.subtask.scheduled_time.cmp(&b.subtask.scheduled_time))
    });
}

/// Split already-sorted entries into periods, keeping their order.
pub fn group_by_period(entries: Vec<ScheduleEntry>) -> Vec<PeriodGroup> {
    let mut groups: Vec<PeriodGroup> = DayPeriod::ALL
        .iter()
        .map(|&period| PeriodGroup {
            period,
            label: period.label(),
            entries: Vec::new(),
        })
        .collect();

    for entry in entries {
        let period = DayPeriod::for_time(&entry.subtask.scheduled_time);
        // ALL is in declaration order, so the discriminant is the index
        groups[period as usize].entries.push(entry);
    }

    groups.retain(|g| !g.entries.is_empty());
    groups
}

pub fn build_daily_schedule(tasks: &[Task], highlighted: Option<&str>) -> DailySchedule {
    let mut entries = schedule_entries(tasks);
    let total = entries.len();
    let completed = entries.iter().filter(|e| e.subtask.completed).count();

    sort_entries(&mut entries, highlighted);

    DailySchedule {
        periods: group_by_period(entries),
        completed,
        total,
    }
}
