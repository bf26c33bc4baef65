// Colored terminal output for analysis reports.
//
// This module handles all terminal-specific formatting: colors, tables,
// bar charts. The main.rs commands delegate here.

use colored::Colorize;

use crate::report::Report;

const BAR_WIDTH: usize = 30;
const MAX_WORD_WIDTH: usize = 24;

/// Display the full report: metrics, neologism table, symbol chart, and
/// divergence bar.
pub fn display_report(report: &Report, top_symbols: usize) {
    display_metrics(report);
    display_neologisms(report);
    display_symbol_chart(report, top_symbols);
    display_divergence(report);
}

/// The four headline numbers.
pub fn display_metrics(report: &Report) {
    println!("\n{}", "=== Analysis Results ===".bold());
    println!();
    println!("  {:<18} {}", "Total words:".dimmed(), report.total_word_count);
    println!(
        "  {:<18} {} ({})",
        "Neologisms found:".dimmed(),
        report.neologism_count,
        format!("{:.1}% ratio", report.divergence_score).red()
    );
    println!("  {:<18} {}", "Symbols used:".dimmed(), report.symbol_count);
    println!("  {:<18} {}", "Known words:".dimmed(), report.known_count);
}

/// Neologisms by descending frequency.
pub fn display_neologisms(report: &Report) {
    println!("\n{}", "=== Potential New Words ===".bold());

    if report.neologism_frequency.is_empty() {
        println!("  No new words detected based on the current standard dictionary.");
        return;
    }

    println!();
    println!("  {:<28} {:>9}", "Word".dimmed(), "Frequency".dimmed());
    println!("  {}", "-".repeat(38).dimmed());
    for entry in &report.neologism_frequency {
        println!(
            "  {:<28} {:>9}",
            super::truncate_graphemes(&entry.value, MAX_WORD_WIDTH),
            entry.count
        );
    }
}

/// Horizontal bars for the most used symbols, scaled to the top count.
pub fn display_symbol_chart(report: &Report, top: usize) {
    println!("\n{}", "=== Top Used Symbols ===".bold());

    let entries = report.top_symbols(top);
    let Some(max_count) = entries.first().map(|e| e.count) else {
        println!("  {}", "No symbols found in the text.".dimmed());
        return;
    };

    println!();
    for entry in entries {
        let filled = (entry.count * BAR_WIDTH).div_ceil(max_count);
        println!(
            "  {}  {} {}",
            entry.value,
            "#".repeat(filled).bright_cyan(),
            entry.count
        );
    }
}

/// Progress bar for the divergence score, with a warning above the
/// high-divergence threshold.
pub fn display_divergence(report: &Report) {
    println!("\n{}", "=== Language Evolution Score ===".bold());
    println!();

    let fraction = report.neologism_ratio().clamp(0.0, 1.0);
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    let bar = format!(
        "[{}{}]",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH.saturating_sub(filled))
    );

    if report.is_high_divergence() {
        println!("  {} {:.1}%", bar.bright_red(), report.divergence_score);
        println!(
            "  {} High divergence ({:.1}%) from standard lexicon.",
            "!!".red().bold(),
            report.divergence_score
        );
    } else {
        println!("  {} {:.1}%", bar.bright_green(), report.divergence_score);
        println!(
            "  This text diverges {:.1}% from the standard lexicon.",
            report.divergence_score
        );
    }
}

/// Show whether each word is in the lexicon.
pub fn display_lookup(results: &[(String, bool)]) {
    for (word, known) in results {
        let tag = if *known {
            "known".green()
        } else {
            "neologism".yellow()
        };
        println!("  {:<28} {}", super::truncate_graphemes(word, MAX_WORD_WIDTH), tag);
    }
}
