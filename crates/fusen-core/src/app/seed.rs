//! Seed loader: one-shot fetch of the initial task collection.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::Action;
use crate::ports::SeedSource;
use crate::store::TaskStore;

/// Fetch the seed once and feed it into the store.
///
/// Failure contract (deliberate): the error is logged and swallowed. The
/// collection stays as-is and the caller keeps running with whatever it has.
/// No retry, no user-visible error state.
pub async fn run(store: Arc<TaskStore>, source: Arc<dyn SeedSource>) {
    let records = match source.fetch().await {
        Ok(records) => records,
        Err(err) => {
            error!(%err, "seed fetch failed, continuing with current collection");
            return;
        }
    };

    let count = records.len();
    for record in records {
        // One dispatch per record, in response order. Seed and user
        // dispatches interleave in dispatch order only.
        store.dispatch(Action::AddTask(record.into_task())).await;
    }
    info!(count, "seed tasks loaded");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;
    use crate::error::FusenError;
    use crate::ports::SeedRecord;
    use async_trait::async_trait;

    struct FixedSeed(Vec<SeedRecord>);

    #[async_trait]
    impl SeedSource for FixedSeed {
        async fn fetch(&self) -> Result<Vec<SeedRecord>, FusenError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSeed;

    #[async_trait]
    impl SeedSource for FailingSeed {
        async fn fetch(&self) -> Result<Vec<SeedRecord>, FusenError> {
            Err(FusenError::InvalidEndpoint("boom".to_string()))
        }
    }

    fn record(id: i64, title: &str) -> SeedRecord {
        SeedRecord {
            id,
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn seed_records_arrive_in_response_order() {
        let store = Arc::new(TaskStore::new());
        let source = Arc::new(FixedSeed(vec![record(1, "A"), record(2, "B")]));

        run(Arc::clone(&store), source).await;

        let tasks = store.snapshot().await;
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, TaskId::new(1));
        assert_eq!(tasks[0].title, "A");
        assert!(!tasks[0].completed);
        assert_eq!(tasks[1].id, TaskId::new(2));
        assert_eq!(tasks[1].title, "B");
        assert!(!tasks[1].completed);
    }

    #[tokio::test]
    async fn fetch_failure_is_swallowed() {
        let store = Arc::new(TaskStore::new());

        run(Arc::clone(&store), Arc::new(FailingSeed)).await;

        assert!(store.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn seed_interleaves_with_user_tasks_in_dispatch_order() {
        let store = Arc::new(TaskStore::new());
        store
            .dispatch(Action::AddTask(record(100, "user task").into_task()))
            .await;

        run(Arc::clone(&store), Arc::new(FixedSeed(vec![record(1, "A")]))).await;

        let tasks = store.snapshot().await;
        assert_eq!(tasks[0].title, "user task");
        assert_eq!(tasks[1].title, "A");
    }
}
