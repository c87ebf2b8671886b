//! fusen-core
//!
//! Core building blocks for the Fusen to-do runtime.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, task, action）
//! - **store**: 状態コンテナ（pure reducer + in-memory store）
//! - **ports**: 抽象化レイヤー（Clock, IdGenerator, SeedSource）
//! - **impls**: 実装（HttpSeedSource）
//! - **app**: アプリケーションロジック（builder, seed loader, form controller）
//! - **view**: リスト描画（LabelStyle で表示バリアントを統合）

pub mod app;
pub mod domain;
pub mod error;
pub mod impls;
pub mod ports;
pub mod store;
pub mod view;

pub use error::FusenError;
