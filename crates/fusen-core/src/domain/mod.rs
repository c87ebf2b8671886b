//! Domain model (ids, task, actions).

pub mod action;
pub mod ids;
pub mod task;

pub use self::action::Action;
pub use self::ids::TaskId;
pub use self::task::Task;
