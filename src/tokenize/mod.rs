// Tokenization — split raw text into word tokens and symbol tokens.
//
// Symbols are found first and cut out of the text, then words are pulled
// from what remains. A symbol region acts as a word boundary, so nothing
// inside an emoji sequence can ever surface as a word.

pub mod pictographic;
pub mod traits;
pub mod words;

use tracing::debug;

use pictographic::GraphemeSymbolExtractor;
use traits::SymbolExtractor;

/// The two token streams produced from one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    /// Word tokens in order of appearance
    pub words: Vec<String>,
    /// Pictographic symbols in order of appearance
    pub symbols: Vec<String>,
}

/// Tokenize with the default grapheme-based symbol extractor.
pub fn tokenize(text: &str) -> Tokens {
    tokenize_with(text, &GraphemeSymbolExtractor)
}

/// Tokenize with a caller-supplied symbol extractor.
pub fn tokenize_with(text: &str, extractor: &dyn SymbolExtractor) -> Tokens {
    let mut symbols = Vec::new();
    let mut stripped = String::with_capacity(text.len());
    let mut cursor = 0;

    for range in extractor.find_symbols(text) {
        // Skip empty ranges, ranges that overlap an earlier one, and ranges
        // that split a char.
        if range.is_empty() || range.start < cursor {
            continue;
        }
        let (Some(before), Some(symbol)) = (text.get(cursor..range.start), text.get(range.clone()))
        else {
            continue;
        };
        stripped.push_str(before);
        stripped.push(' ');
        symbols.push(symbol.to_string());
        cursor = range.end;
    }
    stripped.push_str(&text[cursor..]);

    let words = words::extract_words(&stripped);

    debug!(
        words = words.len(),
        symbols = symbols.len(),
        "Tokenized input"
    );

    Tokens { words, symbols }
}
