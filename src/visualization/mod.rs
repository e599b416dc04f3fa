pub mod presenter;
pub mod summary;

pub use presenter::*;
pub use summary::{format_summary, print_summary};
