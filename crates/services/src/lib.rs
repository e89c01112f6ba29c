#![forbid(unsafe_code)]

pub mod error;
pub mod progress_store;
pub mod snapshot;

pub use error::SnapshotError;
pub use progress_store::ProgressStore;
pub use snapshot::{PROGRESS_KEY, ProgressSnapshot, RANGE_KEY};
