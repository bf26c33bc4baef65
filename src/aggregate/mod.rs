// Aggregation — frequency tables and the divergence score.
//
// The divergence score is the share of word tokens that are neologisms,
// expressed as a percentage:
//
//   score = 100 * neologisms / total_words      (0 when there are no words)
//
// Counts are checked for consistency before anything is computed. A
// mismatch means a bug upstream and is reported as an invariant violation
// instead of being clamped into range.

pub mod frequency;

use tracing::error;

use crate::error::{AnalysisError, Result};
use crate::report::Report;
use frequency::FrequencyTable;

/// Percentage of word tokens that are neologisms, in [0, 100].
pub fn divergence_score(neologism_count: usize, total_words: usize) -> Result<f64> {
    if neologism_count > total_words {
        return Err(violation(format!(
            "neologism count {neologism_count} exceeds total word count {total_words}"
        )));
    }
    if total_words == 0 {
        return Ok(0.0);
    }
    Ok(100.0 * neologism_count as f64 / total_words as f64)
}

/// Build a report from classified tokens.
pub fn aggregate(
    total_words: usize,
    neologisms: &[String],
    known_count: usize,
    symbols: &[String],
) -> Result<Report> {
    let divergence_score = divergence_score(neologisms.len(), total_words)?;

    if known_count + neologisms.len() != total_words {
        return Err(violation(format!(
            "known ({known_count}) + neologisms ({}) != total words ({total_words})",
            neologisms.len()
        )));
    }

    Ok(Report {
        total_word_count: total_words,
        neologism_count: neologisms.len(),
        known_count,
        symbol_count: symbols.len(),
        neologism_frequency: FrequencyTable::from_tokens(neologisms),
        symbol_frequency: FrequencyTable::from_tokens(symbols),
        divergence_score,
    })
}

fn violation(detail: String) -> AnalysisError {
    error!(detail = %detail, "Aggregation invariant violated");
    AnalysisError::InvariantViolation(detail)
}
