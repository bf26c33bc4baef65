// Grapheme-aware pictographic symbol detection.
//
// Text is split into extended grapheme clusters first, so multi-codepoint
// sequences stay whole: a thumbs-up with a skin-tone modifier, a ZWJ family,
// a flag made of two regional indicators, or a keycap like "1️⃣" each count as
// a single symbol.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use super::traits::SymbolExtractor;

/// Any one of these code points makes the whole cluster a symbol.
/// U+20E3 is the combining keycap; the digit it encloses is not pictographic
/// on its own.
static PICTOGRAPHIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Extended_Pictographic}\p{Regional_Indicator}\x{20E3}]")
        .expect("valid pictographic pattern")
});

/// Skin-tone modifiers extend whatever precedes them, so a stray one ends up
/// in the same cluster as a space or a letter. Only the modifier part is the
/// symbol in that case.
static SKIN_TONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Emoji_Modifier}+").expect("valid modifier pattern")
});

/// The default extractor: one symbol per pictographic grapheme cluster.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphemeSymbolExtractor;

impl GraphemeSymbolExtractor {
    /// Whether a single grapheme cluster holds a pictographic symbol.
    pub fn is_symbol(grapheme: &str) -> bool {
        Self::symbol_offset(grapheme).is_some()
    }

    /// Byte offset within the cluster where the symbol starts.
    fn symbol_offset(grapheme: &str) -> Option<usize> {
        if PICTOGRAPHIC.is_match(grapheme) {
            return Some(0);
        }
        SKIN_TONE.find(grapheme).map(|m| m.start())
    }
}

impl SymbolExtractor for GraphemeSymbolExtractor {
    fn find_symbols(&self, text: &str) -> Vec<Range<usize>> {
        text.grapheme_indices(true)
            .filter_map(|(start, grapheme)| {
                Self::symbol_offset(grapheme).map(|offset| start + offset..start + grapheme.len())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(text: &str) -> Vec<&str> {
        GraphemeSymbolExtractor
            .find_symbols(text)
            .into_iter()
            .map(|r| &text[r])
            .collect()
    }

    #[test]
    fn test_single_emoji() {
        assert_eq!(symbols("ਘਰ 😊"), vec!["😊"]);
    }

    #[test]
    fn test_skin_tone_is_one_symbol() {
        assert_eq!(symbols("👍🏽ok"), vec!["👍🏽"]);
    }

    #[test]
    fn test_lone_skin_tone_is_a_symbol() {
        assert_eq!(symbols("ok \u{1F3FD} done"), vec!["\u{1F3FD}"]);
        assert_eq!(symbols("a\u{1F3FB}"), vec!["\u{1F3FB}"]);
    }

    #[test]
    fn test_flag_is_one_symbol() {
        assert_eq!(symbols("🇮🇳🇨🇦"), vec!["🇮🇳", "🇨🇦"]);
    }

    #[test]
    fn test_zwj_family_is_one_symbol() {
        assert_eq!(symbols("👨‍👩‍👧"), vec!["👨‍👩‍👧"]);
    }

    #[test]
    fn test_keycap_but_not_bare_digit() {
        assert_eq!(symbols("1️⃣ 2"), vec!["1️⃣"]);
    }

    #[test]
    fn test_plain_text_has_no_symbols() {
        assert!(symbols("ਸਤਿ ਸ਼੍ਰੀ ਅਕਾਲ! hello, 2024").is_empty());
    }
}
