//! AppBuilder - アプリケーションの構築とワイヤリング
//!
//! # Fail-fast 設計
//! - build() 時にシードエンドポイントを検証する
//! - 走り出してから落ちるより、構築時に明確なエラーで落とす

use std::sync::Arc;

use crate::error::FusenError;
use crate::impls::HttpSeedSource;
use crate::ports::{IdGenerator, SeedSource, SystemClock, TimestampIds};

use super::App;

enum SeedConfig {
    Endpoint(String),
    Source(Arc<dyn SeedSource>),
}

/// AppBuilder はアプリケーションを構築
///
/// # 使用例
/// ```ignore
/// let app = App::builder()
///     .endpoint("https://example.com/todos")
///     .build()?;
/// app.mount();
/// ```
pub struct AppBuilder {
    seed: Option<SeedConfig>,
    ids: Option<Arc<dyn IdGenerator>>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            seed: None,
            ids: None,
        }
    }

    /// Seed from an HTTP endpoint (GET, JSON array of records).
    /// Without this (or `seed_source`), the app starts empty.
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.seed = Some(SeedConfig::Endpoint(url.into()));
        self
    }

    /// Seed from a custom source (tests plug fakes in here).
    pub fn seed_source(mut self, source: Arc<dyn SeedSource>) -> Self {
        self.seed = Some(SeedConfig::Source(source));
        self
    }

    /// Override the id generator (tests use a FixedClock-backed one).
    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Validate and wire the App.
    pub fn build(self) -> Result<App, FusenError> {
        let seed_source = match self.seed {
            Some(SeedConfig::Endpoint(url)) => {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(FusenError::InvalidEndpoint(url));
                }
                Some(Arc::new(HttpSeedSource::new(url)) as Arc<dyn SeedSource>)
            }
            Some(SeedConfig::Source(source)) => Some(source),
            None => None,
        };

        let ids = self
            .ids
            .unwrap_or_else(|| Arc::new(TimestampIds::new(SystemClock)));

        Ok(App::new(seed_source, ids))
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
