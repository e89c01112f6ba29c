//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors raised while loading or saving persisted snapshots.
///
/// `ProgressStore` never propagates these to callers; they are logged and
/// absorbed with default state at the point of access.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SnapshotError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("malformed snapshot: {0}")]
    Decode(#[from] serde_json::Error),
}
