//! Task model.

use serde::{Deserialize, Serialize};

use super::TaskId;

/// A to-do item.
///
/// Design:
/// - `completed` is the only flag that flips in place.
/// - Seed-derived tasks always start with `completed = false`, regardless of
///   what the remote record claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

impl Task {
    /// Create a fresh (not completed) task.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}
