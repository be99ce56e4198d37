//! Error types for dayboard.

use thiserror::Error;

/// Errors raised while turning user input into tasks and subtasks.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DayboardError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("No task titled '{0}'")]
    UnknownTask(String),
}

/// Result type alias for dayboard operations.
pub type DayboardResult<T> = Result<T, DayboardError>;
