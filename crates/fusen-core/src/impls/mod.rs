//! Port implementations.

mod http_seed;

pub use http_seed::HttpSeedSource;
