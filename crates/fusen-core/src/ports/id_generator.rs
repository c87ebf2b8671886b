//! IdGenerator port - ID 生成の抽象化
//!
//! ユーザー作成タスクの ID は「現在時刻のミリ秒タイムスタンプ」。
//! 同一ミリ秒内に連続で作成されても一意性が崩れないよう、
//! 発行済み ID に対する単調増加を保証します。

use std::sync::Mutex;

use crate::domain::TaskId;
use crate::ports::Clock;

/// IdGenerator は新規タスクの ID を生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（seed loader と UI の両方から使える）
pub trait IdGenerator: Send + Sync {
    fn next_task_id(&self) -> TaskId;
}

/// TimestampIds はミリ秒タイムスタンプベースの ID 生成器
///
/// # 単調性
/// - 基本は `now().timestamp_millis()`
/// - 直前に発行した ID 以下になる場合は `last + 1` に繰り上げる
pub struct TimestampIds<C> {
    clock: C,
    last: Mutex<i64>,
}

impl<C: Clock> TimestampIds<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last: Mutex::new(0),
        }
    }
}

impl<C: Clock> IdGenerator for TimestampIds<C> {
    fn next_task_id(&self) -> TaskId {
        let now_ms = self.clock.now().timestamp_millis();
        // An i64 cannot be corrupted by a panic elsewhere; recover from poison.
        let mut last = match self.last.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let id = now_ms.max(*last + 1);
        *last = id;
        TaskId::new(id)
    }
}
