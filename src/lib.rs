pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod visualization;

pub use analysis::GridStats;
pub use config::Config;
pub use data::{load_grid_file, read_grid, GridData, Header};
pub use error::GridFileError;
pub use pipeline::{run, run_and_present, RunSummary};

pub type Result<T> = anyhow::Result<T>;
