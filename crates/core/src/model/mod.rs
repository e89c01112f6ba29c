mod ids;
mod progress;
mod range;
mod state;
mod word;

pub use ids::{ParseSerialNoError, SerialNo};
pub use progress::ProgressSummary;
pub use range::VocabularyRange;
pub use state::{WordState, WordStateUpdate, WordStatus};
pub use word::Word;
