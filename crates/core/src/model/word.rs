use serde::{Deserialize, Serialize};

use crate::model::ids::SerialNo;

/// A vocabulary entry as supplied by the word-list source.
///
/// `root` groups related words (a shared stem); `headword` and `meaning` are
/// carried through untouched for consumers. The store never mutates
/// individual words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub serial_no: SerialNo,
    pub root: String,
    pub headword: String,
    pub meaning: String,
}

impl Word {
    #[must_use]
    pub fn new(
        serial_no: SerialNo,
        root: impl Into<String>,
        headword: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            serial_no,
            root: root.into(),
            headword: headword.into(),
            meaning: meaning.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_carries_payload_through() {
        let word = Word::new(SerialNo::new(7), "dak", "yudrik", "to perceive");
        assert_eq!(word.serial_no, SerialNo::new(7));
        assert_eq!(word.root, "dak");
        assert_eq!(word.headword, "yudrik");
        assert_eq!(word.meaning, "to perceive");
    }
}
