//! Store module: pure reducer + in-memory state container.

mod counts;
mod memory;
pub mod reducer;

pub use counts::TaskCounts;
pub use memory::TaskStore;
