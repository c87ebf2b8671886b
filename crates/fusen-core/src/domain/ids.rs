//! Domain identifiers (strongly-typed IDs).
//!
//! # ID の割り当て
//! - シード由来: リモートが供給する整数 ID をそのまま使う
//! - ユーザー作成: ミリ秒タイムスタンプを ID にする（`ports::IdGenerator` 経由）
//!
//! どちらも i64 に収まるので、newtype 1 つで両方を表現します。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a Task (remote integer id, or a local millisecond timestamp).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_round_trip() {
        let id = TaskId::new(1_700_000_000_123);
        let parsed: TaskId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn serde_is_transparent() {
        // Remote records carry bare integers, so the id must serialize as one.
        let id = TaskId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let back: TaskId = serde_json::from_str("42").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        assert!("abc".parse::<TaskId>().is_err());
    }
}
