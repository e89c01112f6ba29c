use serde::{Deserialize, Serialize};

use crate::model::ids::SerialNo;

/// Inclusive 1-based window of serial numbers considered active for study.
///
/// `max = None` means "through the end of the current word list" and only
/// occurs before the range has ever been set; it resolves against the list
/// length at filter time. Persisted as the two-element array `[min, max]`
/// with `null` standing in for an unset upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, Option<u32>)", into = "(u32, Option<u32>)")]
pub struct VocabularyRange {
    pub min: u32,
    pub max: Option<u32>,
}

impl VocabularyRange {
    /// A range with both bounds fixed. Bounds are taken verbatim; callers
    /// own their validity.
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// The whole vocabulary pool, however long the list turns out to be.
    #[must_use]
    pub fn all() -> Self {
        Self { min: 1, max: None }
    }

    /// True while the upper bound has not been fixed yet.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }

    /// Upper bound with an unset `max` resolved to the current list length.
    #[must_use]
    pub fn resolved_max(&self, word_count: usize) -> u32 {
        self.max
            .unwrap_or_else(|| u32::try_from(word_count).unwrap_or(u32::MAX))
    }

    /// Whether `serial` falls inside the range, given the current list length.
    #[must_use]
    pub fn contains(&self, serial: SerialNo, word_count: usize) -> bool {
        serial.value() >= self.min && serial.value() <= self.resolved_max(word_count)
    }
}

impl Default for VocabularyRange {
    fn default() -> Self {
        Self::all()
    }
}

impl From<(u32, Option<u32>)> for VocabularyRange {
    fn from((min, max): (u32, Option<u32>)) -> Self {
        Self { min, max }
    }
}

impl From<VocabularyRange> for (u32, Option<u32>) {
    fn from(range: VocabularyRange) -> Self {
        (range.min, range.max)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_is_open_ended_from_one() {
        let range = VocabularyRange::default();
        assert_eq!(range.min, 1);
        assert!(range.is_unbounded());
    }

    #[test]
    fn unbounded_max_resolves_to_list_length() {
        let range = VocabularyRange::all();
        assert_eq!(range.resolved_max(25), 25);
        assert!(range.contains(SerialNo::new(25), 25));
        assert!(!range.contains(SerialNo::new(26), 25));
    }

    #[test]
    fn fixed_bounds_ignore_list_length() {
        let range = VocabularyRange::new(2, 9);
        assert!(range.contains(SerialNo::new(2), 3));
        assert!(range.contains(SerialNo::new(9), 3));
        assert!(!range.contains(SerialNo::new(1), 3));
        assert!(!range.contains(SerialNo::new(10), 3));
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let range = VocabularyRange::new(5, 2);
        assert!(!range.contains(SerialNo::new(3), 10));
        assert!(!range.contains(SerialNo::new(5), 10));
    }

    #[test]
    fn serializes_as_two_element_array() {
        assert_eq!(
            serde_json::to_string(&VocabularyRange::new(2, 9)).unwrap(),
            "[2,9]"
        );
        assert_eq!(
            serde_json::to_string(&VocabularyRange::all()).unwrap(),
            "[1,null]"
        );
    }

    #[test]
    fn deserializes_both_bound_shapes() {
        let bounded: VocabularyRange = serde_json::from_str("[2,9]").unwrap();
        assert_eq!(bounded, VocabularyRange::new(2, 9));

        let open: VocabularyRange = serde_json::from_str("[1,null]").unwrap();
        assert_eq!(open, VocabularyRange::all());
    }

    #[test]
    fn rejects_malformed_arrays() {
        assert!(serde_json::from_str::<VocabularyRange>("[1]").is_err());
        assert!(serde_json::from_str::<VocabularyRange>("[1,2,3]").is_err());
        assert!(serde_json::from_str::<VocabularyRange>(r#""all""#).is_err());
    }
}
