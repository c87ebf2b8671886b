//! In-memory task store.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::{debug, warn};

use super::{TaskCounts, reducer};
use crate::domain::{Action, Task, TaskId};

/// In-memory store state.
struct TaskStoreState {
    /// The task collection (single source of truth), insertion-ordered.
    tasks: Vec<Task>,
}

/// The single mutable state container for the task collection.
///
/// Design:
/// - All mutation is serialized through one async mutex; dispatches apply
///   in lock-acquisition order, whoever the caller is (user input or the
///   seed loader).
/// - Each dispatch applies the pure reducer and then bumps the watch
///   revision, so views only ever observe whole states (no partial update
///   is visible across the rendering boundary).
pub struct TaskStore {
    state: Arc<Mutex<TaskStoreState>>,
    revision: watch::Sender<u64>,
}

impl TaskStore {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            state: Arc::new(Mutex::new(TaskStoreState { tasks: Vec::new() })),
            revision,
        }
    }

    /// Apply one action. Total: never fails, unknown ids are ignored.
    pub async fn dispatch(&self, action: Action) {
        let mut state = self.state.lock().await;

        if let Action::AddTask(task) = &action
            && state.tasks.iter().any(|t| t.id == task.id)
        {
            // Observed behavior is kept: both entries persist.
            warn!(id = %task.id, "add: duplicate task id, keeping both entries");
        }
        debug!(?action, "dispatch");

        state.tasks = reducer::apply(std::mem::take(&mut state.tasks), action);
        drop(state);

        self.revision.send_modify(|rev| *rev += 1);
    }

    /// Snapshot of the collection in insertion order.
    pub async fn snapshot(&self) -> Vec<Task> {
        self.state.lock().await.tasks.clone()
    }

    /// Look up one task by id (first match).
    pub async fn get(&self, id: TaskId) -> Option<Task> {
        let state = self.state.lock().await;
        state.tasks.iter().find(|t| t.id == id).cloned()
    }

    /// Counts by completion for observability.
    pub async fn counts(&self) -> TaskCounts {
        let state = self.state.lock().await;
        let completed = state.tasks.iter().filter(|t| t.completed).count();
        TaskCounts {
            total: state.tasks.len(),
            completed,
            pending: state.tasks.len() - completed,
        }
    }

    /// Subscribe to dispatch notifications (monotonic revision counter).
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, title: &str) -> Task {
        Task::new(TaskId::new(id), title)
    }

    #[tokio::test]
    async fn dispatch_appends_and_snapshots() {
        let store = TaskStore::new();
        store.dispatch(Action::AddTask(task(1, "A"))).await;
        store.dispatch(Action::AddTask(task(2, "B"))).await;

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].title, "A");
        assert_eq!(snapshot[1].title, "B");
    }

    #[tokio::test]
    async fn get_returns_first_match() {
        let store = TaskStore::new();
        store.dispatch(Action::AddTask(task(5, "first"))).await;
        store.dispatch(Action::AddTask(task(5, "second"))).await;

        let found = store.get(TaskId::new(5)).await.unwrap();
        assert_eq!(found.title, "first");
        assert!(store.get(TaskId::new(6)).await.is_none());
    }

    #[tokio::test]
    async fn counts_split_by_completion() {
        let store = TaskStore::new();
        store.dispatch(Action::AddTask(task(1, "A"))).await;
        store.dispatch(Action::AddTask(task(2, "B"))).await;
        store.dispatch(Action::ToggleTask(TaskId::new(1))).await;

        let counts = store.counts().await;
        assert_eq!(counts.total, 2);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.pending, 1);
    }

    #[tokio::test]
    async fn every_dispatch_bumps_the_revision() {
        let store = TaskStore::new();
        let mut revisions = store.subscribe();
        let start = *revisions.borrow();

        store.dispatch(Action::AddTask(task(1, "A"))).await;
        revisions.changed().await.unwrap();
        assert_eq!(*revisions.borrow_and_update(), start + 1);

        // A no-op transition still counts as a dispatch.
        store.dispatch(Action::DeleteTask(TaskId::new(99))).await;
        revisions.changed().await.unwrap();
        assert_eq!(*revisions.borrow_and_update(), start + 2);
    }
}
