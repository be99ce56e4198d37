//! Mood-aware ordering of the upcoming task list.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::mood::Mood;
use crate::task::{Effort, Task};

/// Bucket the summed subtask effort weights: <=3 low, <=6 medium, else high.
pub fn total_effort(task: &Task) -> Effort {
    let total: u32 = task.subtasks.iter().map(|s| s.effort.weight()).sum();

    if total <= 3 {
        Effort::Low
    } else if total <= 6 {
        Effort::Medium
    } else {
        Effort::High
    }
}

/// Whole days from `today` until the task is due (negative when overdue).
pub fn days_until_due(task: &Task, today: NaiveDate) -> i64 {
    (task.due_date - today).num_days()
}

/// Incomplete tasks ordered for `mood`, followed by completed tasks in
/// their original order.
pub fn sort_by_mood_and_priority(tasks: &[Task], mood: Mood, today: NaiveDate) -> Vec<Task> {
    let (mut incomplete, completed): (Vec<Task>, Vec<Task>) =
        tasks.iter().cloned().partition(|t| !t.completed);

    incomplete.sort_by(|a, b| compare(a, b, mood, today));
    incomplete.extend(completed);
    incomplete
}

fn compare(a: &Task, b: &Task, mood: Mood, today: NaiveDate) -> Ordering {
    let a_effort = total_effort(a).weight();
    let b_effort = total_effort(b).weight();
    let a_due = days_until_due(a, today);
    let b_due = days_until_due(b, today);
    let by_priority = || b.priority.weight().cmp(&a.priority.weight());

    match mood {
        // Light work first
        Mood::Sad => a_effort
            .cmp(&b_effort)
            .then_with(by_priority)
            .then_with(|| a_due.cmp(&b_due)),
        // Important and hard work first
        Mood::Happy => by_priority()
            .then_with(|| a_due.cmp(&b_due))
            .then_with(|| b_effort.cmp(&a_effort)),
        Mood::Neutral => a_due
            .cmp(&b_due)
            .then_with(by_priority)
            .then_with(|| effort_preference(a_effort).cmp(&effort_preference(b_effort))),
    }
}

/// Medium effort sorts ahead of both low and high.
fn effort_preference(weight: u32) -> i64 {
    if weight == Effort::Medium.weight() {
        -1
    } else {
        i64::from(weight)
    }
}
