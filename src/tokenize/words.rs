// Word extraction on symbol-free text.
//
// A word is a maximal run of Unicode word characters: letters, combining
// marks, decimal digits, connector punctuation and join controls. Marks have
// to be part of the class or Gurmukhi and Devanagari words would be cut apart
// at every vowel sign. A run still has to contain at least one letter or
// digit, so stray marks, variation selectors and joiners never become words.

use std::sync::LazyLock;

use regex::Regex;

static WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("valid word pattern"));

static LETTER_OR_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]").expect("valid letter pattern"));

/// Extract word tokens in order, dropping purely numeric runs and runs with
/// no letter or digit in them.
///
/// Mixed runs such as "word123" are kept whole; only a token made up
/// entirely of numeric characters is discarded.
pub fn extract_words(text: &str) -> Vec<String> {
    WORD_RUN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|token| !token.trim().is_empty())
        .filter(|token| has_letter_or_digit(token))
        .filter(|token| !is_numeric_token(token))
        .map(str::to_string)
        .collect()
}

/// True when the token carries at least one letter or digit. Combining
/// marks and join controls alone don't count.
pub fn has_letter_or_digit(token: &str) -> bool {
    LETTER_OR_DIGIT.is_match(token)
}

/// True when every character is numeric (ASCII digits, Gurmukhi digits, ...).
pub fn is_numeric_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_numeric)
}
