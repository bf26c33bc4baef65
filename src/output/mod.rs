// Output formatting — terminal display of analysis reports.

pub mod terminal;

use unicode_segmentation::UnicodeSegmentation;

/// Shorten a word to at most `max_graphemes` user-perceived characters,
/// appending "..." if it was cut.
///
/// Counting grapheme clusters rather than chars keeps Gurmukhi vowel signs
/// attached to their consonant and never splits an emoji sequence.
pub fn truncate_graphemes(text: &str, max_graphemes: usize) -> String {
    let mut graphemes = text.graphemes(true);
    let kept: String = graphemes.by_ref().take(max_graphemes).collect();
    if graphemes.next().is_some() {
        format!("{kept}...")
    } else {
        kept
    }
}
