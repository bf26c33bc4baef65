// Neologism classification — pure set membership against the lexicon.
//
// No normalization, no stemming, no case folding: a word is known only if the
// exact string is in the lexicon.

use serde::Serialize;
use tracing::debug;

use crate::lexicon::Lexicon;

/// Whether a word was found in the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    Known,
    Neologism,
}

/// A word tagged with its class for this analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedWord {
    pub word: String,
    pub class: WordClass,
}

/// Tag each word in order.
pub fn classify_words(words: &[String], lexicon: &Lexicon) -> Vec<ClassifiedWord> {
    words
        .iter()
        .map(|word| ClassifiedWord {
            word: word.clone(),
            class: if lexicon.contains(word) {
                WordClass::Known
            } else {
                WordClass::Neologism
            },
        })
        .collect()
}

/// Split words into (known, neologisms), both in input order.
pub fn classify(words: &[String], lexicon: &Lexicon) -> (Vec<String>, Vec<String>) {
    let (known, neologisms): (Vec<String>, Vec<String>) = words
        .iter()
        .cloned()
        .partition(|word| lexicon.contains(word));

    debug!(
        known = known.len(),
        neologisms = neologisms.len(),
        "Classified words"
    );

    (known, neologisms)
}
