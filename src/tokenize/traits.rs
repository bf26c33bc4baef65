// Symbol extractor trait — the swap-ready abstraction.
//
// The tokenizer needs to know where the pictographic symbols are before it
// can pull words out of the remaining text. The default implementation works
// on extended grapheme clusters; tests can plug in a stub that marks
// arbitrary regions instead.

use std::ops::Range;

/// Trait for locating pictographic symbols (emoji and the like) in text.
pub trait SymbolExtractor: Send + Sync {
    /// Return the byte range of every symbol in `text`, in order of
    /// appearance. Ranges must not overlap and must fall on char boundaries.
    fn find_symbols(&self, text: &str) -> Vec<Range<usize>>;
}
