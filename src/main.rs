use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use lafz::config::Config;
use lafz::{AnalysisError, Analyzer, Lexicon};

/// Lafz: track new Punjabi words and symbol usage.
///
/// Compares text against a baseline lexicon and reports which words are
/// missing from it, which emoji are used, and how far the text diverges.
#[derive(Parser)]
#[command(name = "lafz", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze text for neologisms and symbols
    Analyze {
        /// Text to analyze (reads stdin when neither this nor --file is given)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Export the neologism table as CSV (default path from LAFZ_CSV_PATH)
        #[arg(long, value_name = "PATH", num_args = 0..=1)]
        csv: Option<Option<PathBuf>>,
    },

    /// Show the baseline lexicon size, or look up individual words
    Lexicon {
        /// Words to look up
        words: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lafz=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let analyzer =
        Analyzer::new(Arc::new(Lexicon::baseline())).with_max_input_bytes(config.max_input_bytes);

    match cli.command {
        Commands::Analyze {
            text,
            file,
            json,
            csv,
        } => {
            let input = read_input(text, file)?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("  {spinner} {msg}")
                    .expect("valid template"),
            );
            spinner.set_message("Analyzing linguistic patterns...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            let result = analyzer.analyze(&input);
            spinner.finish_and_clear();

            let report = match result {
                Ok(report) => report,
                Err(AnalysisError::EmptyInput) => {
                    warn!("Empty input, nothing analyzed");
                    println!("{}", "Please enter some text to analyze.".yellow());
                    return Ok(());
                }
                Err(e) => return Err(e).context("Analysis failed"),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                lafz::output::terminal::display_report(&report, config.top_symbols);
            }

            if let Some(path) = csv {
                let path = path.unwrap_or_else(|| config.csv_path.clone());
                let file = std::fs::File::create(&path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                report
                    .write_neologism_csv(file)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!(path = %path.display(), rows = report.neologism_frequency.len(), "Wrote neologism CSV");
                if !json {
                    println!(
                        "\n{}",
                        format!("Neologism report saved to: {}", path.display()).bold()
                    );
                }
            }
        }

        Commands::Lexicon { words } => {
            let lexicon = analyzer.lexicon();
            if words.is_empty() {
                println!("Baseline lexicon: {} words", lexicon.len());
                println!(
                    "{}",
                    "Look up words with: lafz lexicon <WORD>...".dimmed()
                );
                return Ok(());
            }

            let results: Vec<(String, bool)> = words
                .into_iter()
                .map(|w| {
                    let known = lexicon.contains(&w);
                    (w, known)
                })
                .collect();
            lafz::output::terminal::display_lookup(&results);
        }
    }

    Ok(())
}

/// Pick the input source: the positional argument, a file, or stdin.
fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(buf)
}
