//! SeedSource port - シード取得の抽象化
//!
//! 本番実装は HTTP（`impls::HttpSeedSource`）。テストはフェイク実装を使う。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Task, TaskId};
use crate::error::FusenError;

/// One record from the remote seed collection.
///
/// Only `id` and `title` matter; anything else the remote sends
/// (e.g. `userId`, its own `completed` flag) is ignored on decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRecord {
    pub id: i64,
    pub title: String,
}

impl SeedRecord {
    /// Map into the local task shape. `completed` is forced to `false`
    /// regardless of any upstream value.
    pub fn into_task(self) -> Task {
        Task::new(TaskId::new(self.id), self.title)
    }
}

/// SeedSource はシードレコード列を一度だけ取得
#[async_trait]
pub trait SeedSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<SeedRecord>, FusenError>;
}
