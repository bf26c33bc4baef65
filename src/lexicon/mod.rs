// Lexicon — the reference set of known words.
//
// The lexicon is built once and then only read. It is passed into the
// pipeline explicitly (usually behind an `Arc`) so tests can swap in their
// own word lists.

pub mod baseline;

use std::collections::HashSet;

use baseline::BASELINE_WORDS;

/// An immutable set of known words. Membership is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from any list of words. Duplicates collapse.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in Punjabi baseline.
    pub fn baseline() -> Self {
        Self::from_words(BASELINE_WORDS.iter().copied())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
