//! List view rendering.

mod list;

pub use list::{LabelStyle, render_list};
