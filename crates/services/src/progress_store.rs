use std::collections::BTreeMap;
use std::sync::Arc;

use log::error;
use serde::Serialize;
use serde::de::DeserializeOwned;

use storage::repository::KeyValueStore;
use vocab_core::model::{
    ProgressSummary, SerialNo, VocabularyRange, Word, WordState, WordStateUpdate, WordStatus,
};

use crate::error::SnapshotError;
use crate::snapshot::{PROGRESS_KEY, ProgressSnapshot, RANGE_KEY};

//
// ─── PROGRESS STORE ────────────────────────────────────────────────────────────
//

/// Study-progress state for the vocabulary pool.
///
/// Holds the word list, per-word learning state, the active vocabulary
/// range, and the linear study cursor. Constructed once at startup with
/// [`ProgressStore::load`] and handed to consumers by reference; every
/// state-mutating or cursor-moving operation writes the progress snapshot
/// back to the key-value store.
///
/// Persistence is best-effort: a backend or decode failure is logged and
/// absorbed with default state, never returned to the caller.
pub struct ProgressStore {
    store: Arc<dyn KeyValueStore>,
    words: Vec<Word>,
    states: BTreeMap<SerialNo, WordState>,
    range: VocabularyRange,
    cursor: usize,
}

impl ProgressStore {
    /// Build a store from whatever the key-value backend currently holds.
    ///
    /// The progress and range keys are read independently; malformed or
    /// missing data for one key does not affect recovery of the other.
    pub async fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let snapshot = match read_json::<ProgressSnapshot>(store.as_ref(), PROGRESS_KEY).await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => ProgressSnapshot::default(),
            Err(err) => {
                error!("failed to load progress: {err}");
                ProgressSnapshot::default()
            }
        };

        let range = match read_json::<VocabularyRange>(store.as_ref(), RANGE_KEY).await {
            Ok(Some(range)) => range,
            Ok(None) => VocabularyRange::default(),
            Err(err) => {
                error!("failed to load vocabulary range: {err}");
                VocabularyRange::default()
            }
        };

        Self {
            store,
            words: Vec::new(),
            states: snapshot.states,
            range,
            cursor: snapshot.current_index,
        }
    }

    /// Replace the word list wholesale.
    ///
    /// Serial numbers are taken as-is; uniqueness and ordering are the
    /// caller's responsibility. The cursor is clamped into the new list's
    /// bounds. The first time a non-empty list is observed while the range
    /// upper bound is still unset, the range defaults to the whole list.
    pub fn set_words(&mut self, words: Vec<Word>) {
        self.words = words;
        self.cursor = self.cursor.min(self.words.len().saturating_sub(1));
        if !self.words.is_empty() && self.range.is_unbounded() {
            let len = u32::try_from(self.words.len()).unwrap_or(u32::MAX);
            self.range = VocabularyRange::new(1, len);
        }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn range(&self) -> VocabularyRange {
        self.range
    }

    /// Word under the cursor, if the list is non-empty.
    #[must_use]
    pub fn current_word(&self) -> Option<&Word> {
        self.words.get(self.cursor)
    }

    /// Study state for a word; ids never updated read as the default state.
    #[must_use]
    pub fn word_state(&self, id: SerialNo) -> WordState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    /// Merge a partial update onto a word's state and write through.
    pub async fn update_word_state(&mut self, id: SerialNo, update: WordStateUpdate) {
        let merged = update.apply_to(self.word_state(id));
        self.states.insert(id, merged);
        self.persist_progress().await;
    }

    pub async fn mark_as_learned(&mut self, id: SerialNo) {
        self.update_word_state(id, WordStateUpdate::status(WordStatus::Learned))
            .await;
    }

    pub async fn mark_as_review(&mut self, id: SerialNo) {
        self.update_word_state(id, WordStateUpdate::status(WordStatus::Review))
            .await;
    }

    /// Flip a word's bookmark flag, preserving its status.
    pub async fn toggle_bookmark(&mut self, id: SerialNo) {
        let bookmarked = !self.word_state(id).bookmarked;
        self.update_word_state(id, WordStateUpdate::bookmarked(bookmarked))
            .await;
    }

    /// All words sharing a root, in list order, ignoring the active range.
    #[must_use]
    pub fn words_by_root(&self, root: &str) -> Vec<&Word> {
        self.words.iter().filter(|w| w.root == root).collect()
    }

    //
    // ─── DERIVED VIEWS ─────────────────────────────────────────────────────────
    //

    /// In-range words still marked `new`, in list order.
    #[must_use]
    pub fn new_words(&self) -> Vec<&Word> {
        self.in_range()
            .filter(|w| self.word_state(w.serial_no).status == WordStatus::New)
            .collect()
    }

    /// In-range words marked `learned`, in list order.
    #[must_use]
    pub fn learned_words(&self) -> Vec<&Word> {
        self.in_range()
            .filter(|w| self.word_state(w.serial_no).status == WordStatus::Learned)
            .collect()
    }

    /// In-range words marked for `review`, in list order.
    #[must_use]
    pub fn review_words(&self) -> Vec<&Word> {
        self.in_range()
            .filter(|w| self.word_state(w.serial_no).status == WordStatus::Review)
            .collect()
    }

    /// In-range bookmarked words of any status, in list order.
    #[must_use]
    pub fn bookmarked_words(&self) -> Vec<&Word> {
        self.in_range()
            .filter(|w| self.word_state(w.serial_no).bookmarked)
            .collect()
    }

    /// Progress counts over the active range.
    #[must_use]
    pub fn progress(&self) -> ProgressSummary {
        ProgressSummary {
            total: self.in_range().count(),
            learned: self.learned_words().len(),
            review: self.review_words().len(),
            new: self.new_words().len(),
            bookmarked: self.bookmarked_words().len(),
        }
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────────
    //

    /// Advance the cursor by one; no-op (and no write) at the end.
    ///
    /// The bound is the full word list length, not the active range.
    pub async fn next_word(&mut self) {
        if self.cursor + 1 < self.words.len() {
            self.cursor += 1;
            self.persist_progress().await;
        }
    }

    /// Step the cursor back by one; no-op (and no write) at the start.
    pub async fn prev_word(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.persist_progress().await;
        }
    }

    /// Set the active range verbatim and reset the cursor to the start.
    ///
    /// Bounds are not validated or clamped against the list; an inverted or
    /// out-of-list range simply yields empty derived views.
    pub async fn set_vocabulary_range(&mut self, min: u32, max: u32) {
        self.range = VocabularyRange::new(min, max);
        self.cursor = 0;
        self.persist_range().await;
        self.persist_progress().await;
    }

    fn in_range(&self) -> impl Iterator<Item = &Word> {
        let word_count = self.words.len();
        let range = self.range;
        self.words
            .iter()
            .filter(move |w| range.contains(w.serial_no, word_count))
    }

    fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            states: self.states.clone(),
            current_index: self.cursor,
        }
    }

    async fn persist_progress(&self) {
        if let Err(err) = write_json(self.store.as_ref(), PROGRESS_KEY, &self.snapshot()).await {
            error!("failed to save progress: {err}");
        }
    }

    async fn persist_range(&self) {
        if let Err(err) = write_json(self.store.as_ref(), RANGE_KEY, &self.range).await {
            error!("failed to save vocabulary range: {err}");
        }
    }
}

async fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, SnapshotError> {
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

async fn write_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), SnapshotError> {
    let encoded = serde_json::to_string(value)?;
    store.put(key, &encoded).await?;
    Ok(())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
