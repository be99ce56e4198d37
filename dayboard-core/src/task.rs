//! Task and subtask types.
//!
//! The JSON shape (camelCase fields, lowercase enum values) is the one the
//! dashboard frontend reads, so these types are used both in memory and on
//! the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Prefix of the synthetic schedule id given to a standalone task.
pub const STANDALONE_PREFIX: &str = "standalone-";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// high=3 > medium=2 > low=1
    pub fn weight(self) -> u32 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }
}

/// Coarse estimate of the work a subtask (or a whole task) takes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Low,
    #[default]
    Medium,
    High,
}

impl Effort {
    /// low=1, medium=2, high=3
    pub fn weight(self) -> u32 {
        match self {
            Effort::Low => 1,
            Effort::Medium => 2,
            Effort::High => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatPattern {
    Daily,
    Weekly,
    Monthly,
    #[default]
    None,
}

/// A scheduled piece of a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    /// Conventionally `<taskId>-<suffix>`
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    /// Title of the owning task. Subtasks are attached by title, not id.
    pub task_title: String,
    /// `HH:MM`, 24-hour, zero padded
    pub scheduled_time: String,
    pub effort: Effort,
}

/// A top-level to-do item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    pub priority: Priority,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,

    // Standalone tasks show up in the daily timeline as their own entry.
    // When `is_standalone_task` is set both fields below are expected.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_standalone_task: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<Effort>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_pattern: Option<RepeatPattern>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>, due_date: NaiveDate) -> Self {
        Task {
            id: id.into(),
            title: title.into(),
            completed: false,
            priority: Priority::default(),
            due_date,
            subtasks: Vec::new(),
            is_standalone_task: false,
            scheduled_time: None,
            effort: None,
            repeat_pattern: None,
        }
    }

    pub fn completed_subtasks(&self) -> usize {
        self.subtasks.iter().filter(|s| s.completed).count()
    }

    /// The synthetic subtask a standalone task contributes to the timeline.
    ///
    /// Returns `None` unless the task is standalone and carries both a
    /// scheduled time and an effort.
    pub fn standalone_subtask(&self) -> Option<Subtask> {
        if !self.is_standalone_task {
            return None;
        }

        let (Some(time), Some(effort)) = (&self.scheduled_time, self.effort) else {
            return None;
        };

        Some(Subtask {
            id: standalone_subtask_id(&self.id),
            title: self.title.clone(),
            completed: self.completed,
            task_title: self.title.clone(),
            scheduled_time: time.clone(),
            effort,
        })
    }
}

/// `standalone-<taskId>`
pub fn standalone_subtask_id(task_id: &str) -> String {
    format!("{}{}", STANDALONE_PREFIX, task_id)
}

/// Where a schedule entry comes from.
///
/// Carried alongside the entry so ownership never has to be recovered by
/// splitting id strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SubtaskOrigin {
    /// A regular subtask stored in its task's list
    Owned,
    /// The timeline entry of a standalone task
    Standalone {
        #[serde(rename = "taskId")]
        task_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_task_json_uses_frontend_field_names() {
        let mut task = Task::new("1", "Review project proposal", date(2025, 11, 9));
        task.priority = Priority::High;
        task.subtasks.push(Subtask {
            id: "1-1".to_string(),
            title: "Read executive summary".to_string(),
            completed: false,
            task_title: "Review project proposal".to_string(),
            scheduled_time: "09:00".to_string(),
            effort: Effort::Low,
        });

        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["dueDate"], "2025-11-09");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["subtasks"][0]["taskTitle"], "Review project proposal");
        assert_eq!(json["subtasks"][0]["scheduledTime"], "09:00");
        assert_eq!(json["subtasks"][0]["effort"], "low");
        // Optional standalone fields are omitted when unset
        assert!(json.get("isStandaloneTask").is_none());
        assert!(json.get("scheduledTime").is_none());
        assert!(json.get("repeatPattern").is_none());
    }

    #[test]
    fn test_task_parses_minimal_frontend_json() {
        let task: Task = serde_json::from_str(
            r#"{"id":"task-1","title":"Call mom","priority":"low","dueDate":"2025-11-10"}"#,
        )
        .unwrap();

        assert!(!task.completed);
        assert!(task.subtasks.is_empty());
        assert!(!task.is_standalone_task);
        assert_eq!(task.priority, Priority::Low);
    }

    #[test]
    fn test_standalone_subtask_requires_time_and_effort() {
        let mut task = Task::new("7", "Gym", date(2025, 11, 9));
        task.is_standalone_task = true;
        task.scheduled_time = Some("18:00".to_string());
        assert!(task.standalone_subtask().is_none());

        task.effort = Some(Effort::High);
        task.completed = true;
        let entry = task.standalone_subtask().unwrap();
        assert_eq!(entry.id, "standalone-7");
        assert_eq!(entry.task_title, "Gym");
        assert!(entry.completed);
    }

    #[test]
    fn test_origin_serializes_as_tagged_union() {
        let owned = serde_json::to_value(SubtaskOrigin::Owned).unwrap();
        assert_eq!(owned, serde_json::json!({"kind": "owned"}));

        let standalone = serde_json::to_value(SubtaskOrigin::Standalone {
            task_id: "7".to_string(),
        })
        .unwrap();
        assert_eq!(
            standalone,
            serde_json::json!({"kind": "standalone", "taskId": "7"})
        );
    }
}
