pub mod header;
pub mod loader;
pub mod validate;

pub use header::*;
pub use loader::*;
pub use validate::*;
