//! Building new tasks and subtasks from user input.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{DayboardError, DayboardResult};
use crate::task::{Effort, Priority, RepeatPattern, Subtask, Task};

const DEFAULT_SCHEDULED_TIME: &str = "09:00";

/// Form input for a new task.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub is_standalone_task: bool,
    pub scheduled_time: String,
    pub effort: Effort,
    pub repeat_pattern: RepeatPattern,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, due_date: NaiveDate) -> Self {
        TaskDraft {
            title: title.into(),
            priority: Priority::Medium,
            due_date,
            is_standalone_task: false,
            scheduled_time: DEFAULT_SCHEDULED_TIME.to_string(),
            effort: Effort::Medium,
            repeat_pattern: RepeatPattern::None,
        }
    }

    pub fn build(self) -> DayboardResult<Task> {
        self.build_at(Utc::now())
    }

    /// Build the task with an id derived from `now` (`task-<unix millis>`).
    pub fn build_at(self, now: DateTime<Utc>) -> DayboardResult<Task> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DayboardError::EmptyTitle);
        }

        let standalone = self.is_standalone_task;

        Ok(Task {
            id: format!("task-{}", now.timestamp_millis()),
            title: title.to_string(),
            completed: false,
            priority: self.priority,
            due_date: self.due_date,
            subtasks: Vec::new(),
            is_standalone_task: standalone,
            scheduled_time: standalone.then_some(self.scheduled_time),
            effort: standalone.then_some(self.effort),
            repeat_pattern: match self.repeat_pattern {
                RepeatPattern::None => None,
                pattern => Some(pattern),
            },
        })
    }
}

/// Form input for a new scheduled subtask.
#[derive(Debug, Clone)]
pub struct SubtaskDraft {
    pub title: String,
    pub task_title: String,
    pub scheduled_time: String,
    pub effort: Effort,
}

impl SubtaskDraft {
    pub fn new(title: impl Into<String>, task_title: impl Into<String>) -> Self {
        SubtaskDraft {
            title: title.into(),
            task_title: task_title.into(),
            scheduled_time: DEFAULT_SCHEDULED_TIME.to_string(),
            effort: Effort::Medium,
        }
    }

    pub fn build(self, tasks: &[Task]) -> DayboardResult<Subtask> {
        self.build_at(tasks, Utc::now())
    }

    /// Resolve the owning task by title and build `<taskId>-<unix millis>`.
    pub fn build_at(self, tasks: &[Task], now: DateTime<Utc>) -> DayboardResult<Subtask> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DayboardError::EmptyTitle);
        }

        let task = tasks
            .iter()
            .find(|t| t.title == self.task_title)
            .ok_or_else(|| DayboardError::UnknownTask(self.task_title.clone()))?;

        Ok(Subtask {
            id: format!("{}-{}", task.id, now.timestamp_millis()),
            title: title.to_string(),
            completed: false,
            task_title: self.task_title,
            scheduled_time: self.scheduled_time,
            effort: self.effort,
        })
    }
}
