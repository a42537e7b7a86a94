pub mod aggregate;
pub mod cache;
pub mod dataset;
pub mod error;
pub mod model;

pub use cache::load_cached;
pub use dataset::{Dataset, UNKNOWN_JOURNAL, load_dataset};
pub use error::{ExitCode, ExplorerError, Result};
pub use model::{ColumnNulls, Paper};
