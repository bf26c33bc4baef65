// Report — the result of one analysis call.
//
// A plain value: built once by the aggregator, owned by the caller, and never
// mutated afterward. Display and export helpers live here so front-ends don't
// have to re-derive ratios or orderings.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::aggregate::frequency::{FrequencyEntry, FrequencyTable};

/// Scores above this percentage are flagged as high divergence.
pub const HIGH_DIVERGENCE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub total_word_count: usize,
    pub neologism_count: usize,
    pub known_count: usize,
    pub symbol_count: usize,
    /// Neologisms by descending frequency
    pub neologism_frequency: FrequencyTable<String>,
    /// Symbols by descending frequency
    pub symbol_frequency: FrequencyTable<String>,
    /// Percentage of words that are neologisms, 0.0 to 100.0
    pub divergence_score: f64,
}

impl Report {
    /// Neologisms as a fraction of all words (0.0 to 1.0).
    pub fn neologism_ratio(&self) -> f64 {
        self.divergence_score / 100.0
    }

    pub fn is_high_divergence(&self) -> bool {
        self.divergence_score > HIGH_DIVERGENCE_THRESHOLD
    }

    /// The `n` most used symbols.
    pub fn top_symbols(&self, n: usize) -> &[FrequencyEntry<String>] {
        self.symbol_frequency.top(n)
    }

    /// Write the neologism table as CSV: a `word,frequency` header, then one
    /// row per neologism by descending frequency. Output is UTF-8.
    pub fn write_neologism_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["word", "frequency"])?;
        for entry in &self.neologism_frequency {
            let count = entry.count.to_string();
            csv.write_record([entry.value.as_str(), count.as_str()])?;
        }
        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        let neo: Vec<String> = ["ਮੀਮ", "ਸੈਲਫੀ", "ਸੈਲਫੀ", "a,b"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        Report {
            total_word_count: 8,
            neologism_count: 4,
            known_count: 4,
            symbol_count: 0,
            neologism_frequency: FrequencyTable::from_tokens(&neo),
            symbol_frequency: FrequencyTable::default(),
            divergence_score: 50.0,
        }
    }

    #[test]
    fn test_csv_export() {
        let mut buf = Vec::new();
        sample().write_neologism_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "word,frequency\nਸੈਲਫੀ,2\nਮੀਮ,1\n\"a,b\",1\n");
    }

    #[test]
    fn test_csv_export_empty_has_header() {
        let report = Report {
            neologism_frequency: FrequencyTable::default(),
            ..sample()
        };
        let mut buf = Vec::new();
        report.write_neologism_csv(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "word,frequency\n");
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let report = sample();
        assert!(!report.is_high_divergence());
        assert!((report.neologism_ratio() - 0.5).abs() < 1e-9);
        let high = Report {
            divergence_score: 50.1,
            ..sample()
        };
        assert!(high.is_high_divergence());
    }
}
