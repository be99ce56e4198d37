//! Core logic for dayboard, a personal task dashboard.
//!
//! - `task` and `store` hold tasks and their subtasks
//! - `ranking` orders the task list by mood, priority and due date
//! - `schedule` and `calendar` derive the daily timeline and calendar views
//! - `import` maps calendar provider events into tasks

pub mod calendar;
pub mod dashboard;
pub mod draft;
pub mod error;
pub mod format;
pub mod import;
pub mod mood;
pub mod ranking;
pub mod schedule;
pub mod store;
pub mod task;

pub use dashboard::{Action, Dashboard};
pub use error::{DayboardError, DayboardResult};
pub use import::{CalendarEvent, EventTime};
pub use mood::Mood;
pub use store::TaskStore;
pub use task::*;
