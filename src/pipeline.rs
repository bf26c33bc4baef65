// Analysis pipeline: text -> tokens -> classified words -> report.
//
// Each call is independent. The lexicon is only read, so one `Analyzer` can
// be shared between threads without locking.

use std::sync::Arc;

use tracing::info;

use crate::aggregate;
use crate::classify::classify;
use crate::error::{AnalysisError, Result};
use crate::lexicon::Lexicon;
use crate::report::Report;
use crate::tokenize::pictographic::GraphemeSymbolExtractor;
use crate::tokenize::tokenize_with;
use crate::tokenize::traits::SymbolExtractor;

/// Inputs larger than this are rejected before tokenization (1 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Analyze text against a lexicon with the default symbol extractor and
/// input cap.
pub fn analyze(text: &str, lexicon: &Lexicon) -> Result<Report> {
    run(
        text,
        lexicon,
        &GraphemeSymbolExtractor,
        DEFAULT_MAX_INPUT_BYTES,
    )
}

/// A configured pipeline: lexicon snapshot, symbol extractor, and input cap.
pub struct Analyzer {
    lexicon: Arc<Lexicon>,
    extractor: Box<dyn SymbolExtractor>,
    max_input_bytes: usize,
}

impl Analyzer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            extractor: Box::new(GraphemeSymbolExtractor),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }

    /// Replace the symbol extractor (e.g. with a stub in tests).
    pub fn with_extractor(mut self, extractor: Box<dyn SymbolExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_max_input_bytes(mut self, max: usize) -> Self {
        self.max_input_bytes = max;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn analyze(&self, text: &str) -> Result<Report> {
        run(
            text,
            &self.lexicon,
            self.extractor.as_ref(),
            self.max_input_bytes,
        )
    }
}

fn run(
    text: &str,
    lexicon: &Lexicon,
    extractor: &dyn SymbolExtractor,
    max_input_bytes: usize,
) -> Result<Report> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    if text.len() > max_input_bytes {
        return Err(AnalysisError::InputTooLarge {
            len: text.len(),
            max: max_input_bytes,
        });
    }

    let tokens = tokenize_with(text, extractor);
    let (known, neologisms) = classify(&tokens.words, lexicon);
    let report = aggregate::aggregate(tokens.words.len(), &neologisms, known.len(), &tokens.symbols)?;

    info!(
        words = report.total_word_count,
        neologisms = report.neologism_count,
        symbols = report.symbol_count,
        divergence = report.divergence_score,
        "Analyzed text"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_blank_rejected() {
        let lexicon = Lexicon::baseline();
        assert_eq!(analyze("", &lexicon), Err(AnalysisError::EmptyInput));
        assert_eq!(analyze(" \n\t ", &lexicon), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn test_input_cap() {
        let analyzer = Analyzer::new(Arc::new(Lexicon::baseline())).with_max_input_bytes(8);
        let err = analyzer.analyze("ਘਰ ਘਰ ਘਰ").unwrap_err();
        assert_eq!(err, AnalysisError::InputTooLarge { len: 20, max: 8 });
        assert!(analyzer.analyze("ਘਰ").is_ok());
    }

    #[test]
    fn test_analyzer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Analyzer>();
        assert_send_sync::<Lexicon>();
    }
}
