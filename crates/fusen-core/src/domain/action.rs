//! Store actions - 状態遷移の定義
//!
//! Reducer は「前の collection + Action → 次の collection」の純関数。
//! すべての遷移は全域関数で、失敗しない（未知の ID は黙って無視する）。

use super::{Task, TaskId};

/// One store transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a task at the tail. No de-duplication by id.
    AddTask(Task),

    /// Remove every task with this id (no-op if absent).
    DeleteTask(TaskId),

    /// Flip `completed` on every task with this id; other fields unchanged.
    ToggleTask(TaskId),

    /// Replace `title` on every task with this id; `completed` unchanged.
    EditTask { id: TaskId, title: String },
}
