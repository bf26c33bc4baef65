// Lafz: neologism and symbol tracker for Punjabi text
//
// This is the library root. Each module corresponds to one stage of the
// analysis pipeline: text is tokenized, words are classified against the
// lexicon, and the results are aggregated into a report.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod tokenize;

pub use error::AnalysisError;
pub use lexicon::Lexicon;
pub use pipeline::{analyze, Analyzer};
pub use report::Report;
