//! Application runtime: wiring and lifecycle.

pub mod builder;
pub mod form;
pub mod seed;

pub use builder::AppBuilder;
pub use form::{FormController, Submission};

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::ports::{IdGenerator, SeedSource};
use crate::store::TaskStore;

/// App はアプリケーションのランタイム
///
/// - TaskStore（collection の正本）
/// - IdGenerator（ユーザー作成タスクの ID）
/// - シードローダーの JoinHandle（teardown で abort する）
pub struct App {
    store: Arc<TaskStore>,
    ids: Arc<dyn IdGenerator>,
    seed_source: Option<Arc<dyn SeedSource>>,
    seed_task: Mutex<Option<JoinHandle<()>>>,
    mounted: AtomicBool,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl App {
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    pub(crate) fn new(seed_source: Option<Arc<dyn SeedSource>>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store: Arc::new(TaskStore::new()),
            ids,
            seed_source,
            seed_task: Mutex::new(None),
            mounted: AtomicBool::new(false),
        }
    }

    pub fn store(&self) -> &Arc<TaskStore> {
        &self.store
    }

    pub fn ids(&self) -> &Arc<dyn IdGenerator> {
        &self.ids
    }

    /// Spawn the seed loader. Runs at most once per App lifetime; later
    /// calls are no-ops. Must be called from within a tokio runtime.
    pub fn mount(&self) {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(source) = &self.seed_source {
            let handle = tokio::spawn(seed::run(Arc::clone(&self.store), Arc::clone(source)));
            *self.lock_seed_task() = Some(handle);
        }
    }

    /// Abort the in-flight seed fetch, if any. After this no stale dispatch
    /// can reach the store.
    pub fn shutdown(&self) {
        if let Some(handle) = self.lock_seed_task().take() {
            handle.abort();
        }
    }

    fn lock_seed_task(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        match self.seed_task.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Wait for the seed loader to finish (test hook).
    #[cfg(test)]
    pub(crate) async fn join_seed(&self) {
        let handle = self.lock_seed_task().take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}
