use thiserror::Error;

#[derive(Debug, Error)]
pub enum FusenError {
    #[error("seed fetch failed: {0}")]
    SeedFetch(#[from] reqwest::Error),

    #[error("task title must not be empty")]
    EmptyTitle,

    #[error("invalid seed endpoint: {0}")]
    InvalidEndpoint(String),
}
