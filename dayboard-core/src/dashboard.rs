//! Application state for the dashboard and the actions that change it.

use chrono::NaiveDate;

use crate::mood::Mood;
use crate::ranking::sort_by_mood_and_priority;
use crate::schedule::{DailySchedule, build_daily_schedule};
use crate::store::TaskStore;
use crate::task::{Subtask, Task};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ToggleTask(String),
    ToggleSubtask(String),
    AddTask(Task),
    AddSubtask(Subtask),
    /// Append tasks from a calendar sync
    Import(Vec<Task>),
    SetMood(Mood),
    /// Task hovered in the list, highlighted in the schedule
    Highlight(Option<String>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub store: TaskStore,
    pub mood: Mood,
    pub highlighted_task_id: Option<String>,
}

impl Dashboard {
    pub fn new(tasks: Vec<Task>) -> Self {
        Dashboard {
            store: TaskStore::new(tasks),
            ..Default::default()
        }
    }

    /// Apply `action`, consuming the old state.
    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::ToggleTask(id) => self.store.toggle_task(&id),
            Action::ToggleSubtask(id) => self.store.toggle_subtask(&id),
            Action::AddTask(task) => self.store.add_task(task),
            Action::AddSubtask(subtask) => self.store.add_subtask(subtask),
            Action::Import(tasks) => {
                for task in tasks {
                    self.store.add_task(task);
                }
            }
            Action::SetMood(mood) => self.mood = mood,
            Action::Highlight(id) => self.highlighted_task_id = id,
        }
        self
    }

    /// The task list in display order for `today`.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<Task> {
        sort_by_mood_and_priority(self.store.tasks(), self.mood, today)
    }

    pub fn schedule(&self) -> DailySchedule {
        build_daily_schedule(self.store.tasks(), self.highlighted_task_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Effort, Priority};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 9).unwrap()
    }

    fn subtask(id: &str, task_title: &str, time: &str, effort: Effort) -> Subtask {
        Subtask {
            id: id.to_string(),
            title: id.to_string(),
            completed: false,
            task_title: task_title.to_string(),
            scheduled_time: time.to_string(),
            effort,
        }
    }

    fn dashboard() -> Dashboard {
        let mut proposal = Task::new("1", "Review project proposal", today());
        proposal.priority = Priority::High;
        proposal.subtasks = vec![
            subtask("1-1", "Review project proposal", "09:00", Effort::High),
            subtask("1-2", "Review project proposal", "09:30", Effort::High),
            subtask("1-3", "Review project proposal", "10:00", Effort::High),
        ];

        let mut email = Task::new("6", "Email responses", today());
        email.priority = Priority::Low;
        email.subtasks = vec![subtask("6-1", "Email responses", "14:30", Effort::Low)];

        Dashboard::new(vec![proposal, email])
    }

    #[test]
    fn test_mood_changes_upcoming_order() {
        let state = dashboard().reduce(Action::SetMood(Mood::Sad));
        let order: Vec<String> = state.upcoming(today()).into_iter().map(|t| t.id).collect();
        assert_eq!(order, vec!["6", "1"]);

        let state = state.reduce(Action::SetMood(Mood::Happy));
        let order: Vec<String> = state.upcoming(today()).into_iter().map(|t| t.id).collect();
        assert_eq!(order, vec!["1", "6"]);
    }

    #[test]
    fn test_highlight_reorders_schedule() {
        let state = dashboard().reduce(Action::Highlight(Some("6".to_string())));

        let schedule = state.schedule();
        let first = schedule.entries().next().unwrap();
        assert_eq!(first.subtask.id, "6-1");

        let state = state.reduce(Action::Highlight(None));
        let first_id = state.schedule().entries().next().unwrap().subtask.id.clone();
        assert_eq!(first_id, "1-1");
    }

    #[test]
    fn test_toggling_through_actions() {
        let state = dashboard()
            .reduce(Action::ToggleSubtask("6-1".to_string()))
            .reduce(Action::AddSubtask(subtask("1-4", "Review project proposal", "11:00", Effort::Low)));

        assert!(state.store.get("6").unwrap().completed);
        assert_eq!(state.store.get("1").unwrap().subtasks.len(), 4);
        assert_eq!(state.schedule().completed, 1);

        let state = state.reduce(Action::ToggleTask("6".to_string()));
        assert_eq!(state.store.active_count(), 2);
    }

    #[test]
    fn test_imported_events_join_schedule() {
        use crate::import::{CalendarEvent, EventTime, import_events};
        use chrono::{TimeZone, Utc};

        let start = Utc.with_ymd_and_hms(2025, 11, 9, 15, 0, 0).unwrap();
        let events = vec![CalendarEvent {
            id: Some("abc".to_string()),
            summary: Some("Dentist".to_string()),
            start: EventTime::DateTime(start),
            end: EventTime::DateTime(start + chrono::Duration::minutes(45)),
        }];

        let state = dashboard().reduce(Action::Import(import_events(&events, &Utc)));

        assert_eq!(state.store.tasks().len(), 3);
        let schedule = state.schedule();
        let imported: Vec<&str> = schedule
            .entries()
            .filter(|e| e.task_id == "gcal-abc")
            .map(|e| e.subtask.id.as_str())
            .collect();
        assert_eq!(imported.len(), 2);
        assert!(imported.contains(&"abc-0"));
        assert!(imported.contains(&"standalone-gcal-abc"));
        assert_eq!(schedule.total, 6);
    }
}
