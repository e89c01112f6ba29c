use serde::{Deserialize, Serialize};

//
// ─── WORD STATE ────────────────────────────────────────────────────────────────
//

/// Learning status of a single word.
///
/// Every word starts as `New`; any status may transition to any other, and
/// no transition removes a word from tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    #[default]
    New,
    Learned,
    Review,
}

/// Tracked study state for a single word.
///
/// Absent entries read as the default state, so lookups are total.
/// `bookmarked` is an orthogonal overlay on top of the status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordState {
    pub status: WordStatus,
    pub bookmarked: bool,
}

/// Field-wise partial update merged onto a [`WordState`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordStateUpdate {
    pub status: Option<WordStatus>,
    pub bookmarked: Option<bool>,
}

impl WordStateUpdate {
    /// An update that only changes the status.
    #[must_use]
    pub fn status(status: WordStatus) -> Self {
        Self {
            status: Some(status),
            bookmarked: None,
        }
    }

    /// An update that only changes the bookmark flag.
    #[must_use]
    pub fn bookmarked(bookmarked: bool) -> Self {
        Self {
            status: None,
            bookmarked: Some(bookmarked),
        }
    }

    /// Merge this update onto `current`, leaving unset fields untouched.
    #[must_use]
    pub fn apply_to(self, current: WordState) -> WordState {
        WordState {
            status: self.status.unwrap_or(current.status),
            bookmarked: self.bookmarked.unwrap_or(current.bookmarked),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
