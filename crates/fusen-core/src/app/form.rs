//! Form controller: the staged title and the edit cursor.

use crate::domain::{Action, Task, TaskId};
use crate::error::FusenError;
use crate::ports::IdGenerator;
use crate::store::TaskStore;

/// What a submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Added(TaskId),
    Updated(TaskId),
}

/// FormController は入力フォームの状態を保持
///
/// - staged title（入力中のタイトル）
/// - edit cursor（編集対象の TaskId、編集中のみ Some）
///
/// submit が add と update のどちらになるかは edit cursor で決まる。
/// collection には一切触れない（触れるのは submit 時の dispatch だけ）。
#[derive(Debug, Default)]
pub struct FormController {
    title: String,
    editing: Option<TaskId>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the staged title (the "typing" surface).
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn staged_title(&self) -> &str {
        &self.title
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    /// Start editing: stage the task's current title and remember its id.
    /// Does not touch the store.
    pub fn begin_edit(&mut self, task: &Task) {
        self.editing = Some(task.id);
        self.title = task.title.clone();
    }

    /// Submit the staged title.
    ///
    /// Boundary rule: a title that is empty after trimming is rejected here;
    /// the store itself has no validation and stays total. On success the
    /// cursor and the staged title are both cleared.
    pub async fn submit(
        &mut self,
        store: &TaskStore,
        ids: &dyn IdGenerator,
    ) -> Result<Submission, FusenError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(FusenError::EmptyTitle);
        }

        let submission = if let Some(id) = self.editing.take() {
            store.dispatch(Action::EditTask { id, title }).await;
            Submission::Updated(id)
        } else {
            let id = ids.next_task_id();
            store.dispatch(Action::AddTask(Task::new(id, title))).await;
            Submission::Added(id)
        };
        self.title.clear();
        Ok(submission)
    }
}
