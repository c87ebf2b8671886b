//! Ports - 抽象化レイヤー
//!
//! 外部との境界を trait で切り出します。実装を差し替えることで、
//! テストはネットワークにも実時刻にも触れずに済みます。
//!
//! - **Clock**: 現在時刻（SystemClock / FixedClock）
//! - **IdGenerator**: 新規タスクの ID 生成（TimestampIds）
//! - **SeedSource**: シード取得（本番は impls::HttpSeedSource）

pub mod clock;
pub mod id_generator;
pub mod seed_source;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, TimestampIds};
pub use self::seed_source::{SeedRecord, SeedSource};
