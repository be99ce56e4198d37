//! In-memory task store.

use tracing::debug;

use crate::task::{STANDALONE_PREFIX, Subtask, Task};

/// Owns every task (and through them, every subtask).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        TaskStore { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Flip a task and push the new state down to all of its subtasks.
    pub fn toggle_task(&mut self, id: &str) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };

        task.completed = !task.completed;
        for subtask in &mut task.subtasks {
            subtask.completed = task.completed;
        }
    }

    /// Flip a subtask, or a standalone task by its `standalone-<taskId>` id.
    ///
    /// After flipping a regular subtask the owner's completion becomes the
    /// AND over its subtasks.
    pub fn toggle_subtask(&mut self, id: &str) {
        if let Some(task_id) = id.strip_prefix(STANDALONE_PREFIX)
            && let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id)
        {
            task.completed = !task.completed;
            return;
        }

        for task in &mut self.tasks {
            let Some(subtask) = task.subtasks.iter_mut().find(|s| s.id == id) else {
                continue;
            };

            subtask.completed = !subtask.completed;
            task.completed = task.subtasks.iter().all(|s| s.completed);
            return;
        }
    }

    /// Append a task. Id uniqueness is the caller's concern.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Attach a subtask to the task whose title equals `subtask.task_title`.
    ///
    /// Subtasks naming no existing task are dropped.
    pub fn add_subtask(&mut self, subtask: Subtask) {
        match self
            .tasks
            .iter_mut()
            .find(|t| t.title == subtask.task_title)
        {
            Some(task) => task.subtasks.push(subtask),
            None => debug!(
                subtask = %subtask.id,
                task_title = %subtask.task_title,
                "dropping subtask with no matching task"
            ),
        }
    }
}

impl From<Vec<Task>> for TaskStore {
    fn from(tasks: Vec<Task>) -> Self {
        TaskStore::new(tasks)
    }
}
