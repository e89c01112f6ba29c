#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    ProgressSummary, SerialNo, VocabularyRange, Word, WordState, WordStateUpdate, WordStatus,
};
