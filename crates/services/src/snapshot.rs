//! Persisted wire shapes for study progress.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use vocab_core::model::{SerialNo, WordState};

/// Key under which the progress snapshot is stored.
pub const PROGRESS_KEY: &str = "vocab_progress";

/// Key under which the vocabulary range is stored.
pub const RANGE_KEY: &str = "vocab_range";

/// Whole-value blob written to the progress key after every mutation.
///
/// Field names match the stored JSON (`states`, `currentIndex`). Missing
/// fields read as their defaults so partially written blobs still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    #[serde(default)]
    pub states: BTreeMap<SerialNo, WordState>,
    #[serde(default)]
    pub current_index: usize,
}
