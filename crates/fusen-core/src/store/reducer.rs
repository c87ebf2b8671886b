//! Pure reducer: prior collection + action -> next collection.
//!
//! Deterministic and total: every action reduces to a valid next collection,
//! and unknown ids reduce to the unchanged one. Toggle/edit/delete match
//! every entry with the target id, so a collection that holds duplicate ids
//! stays consistent under all transitions.

use crate::domain::{Action, Task};

/// Apply one action to the collection.
pub fn apply(mut tasks: Vec<Task>, action: Action) -> Vec<Task> {
    match action {
        Action::AddTask(task) => {
            tasks.push(task);
            tasks
        }
        Action::DeleteTask(id) => {
            tasks.retain(|t| t.id != id);
            tasks
        }
        Action::ToggleTask(id) => {
            for task in tasks.iter_mut().filter(|t| t.id == id) {
                task.completed = !task.completed;
            }
            tasks
        }
        Action::EditTask { id, title } => {
            for task in tasks.iter_mut().filter(|t| t.id == id) {
                task.title = title.clone();
            }
            tasks
        }
    }
}
