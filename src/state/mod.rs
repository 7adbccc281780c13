//! Digit/segment model, name allocation, and undo history.

mod allocator;
mod history;
mod model;
mod types;

pub use allocator::*;
pub use history::*;
pub use model::*;
pub use types::*;
