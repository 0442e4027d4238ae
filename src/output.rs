// Colored terminal output for document stats and the comparison report.
//
// All terminal-specific formatting lives here; main.rs delegates to these
// display functions. Row formatting is split out as pure string functions so
// tests can check alignment without capturing stdout.

use colored::Colorize;

use crate::compare::{CommonWord, Verdict};
use crate::frequency::FrequencyMap;

/// Display total and unique word counts for one document.
pub fn display_stats(label: &str, freq: &FrequencyMap) {
    println!("\n{}", format!("{label} Statistics:").bold());
    println!("  Total words: {}", freq.total_words());
    println!("  Unique words: {}", freq.unique_words());
}

/// Display the common-word table, or a notice when there is none.
pub fn display_common_words(common: &[CommonWord]) {
    if common.is_empty() {
        println!("\nNo common words found.");
        return;
    }

    println!("\n{}", "Common Words:".bold());
    println!("{}", format_table_header().dimmed());
    println!("{}", "-".repeat(37).dimmed());
    for entry in common {
        println!("{}", format_table_row(entry));
    }
}

/// Display the overlap percentage and verdict, or the undefined-ratio notice.
pub fn display_verdict(percentage: Option<f64>) {
    let Some(pct) = percentage else {
        println!("Cannot calculate plagiarism: no words in essays.");
        return;
    };

    println!("\nPlagiarism Percentage: {pct:.2}%");
    match Verdict::from_percentage(pct) {
        Verdict::Plagiarism => println!("Result: {}", "Plagiarism Detected!".red().bold()),
        Verdict::Clean => println!("Result: {}", "No Plagiarism Detected.".green()),
    }
}

fn format_table_header() -> String {
    format!("{:<15}{:<10}{:<10}", "Word", "Essay 1", "Essay 2")
}

fn format_table_row(entry: &CommonWord) -> String {
    format!(
        "{:<15}{:<10}{:<10}",
        entry.word, entry.count_a, entry.count_b
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_columns_are_fixed_width() {
        let row = format_table_row(&CommonWord {
            word: "the".to_string(),
            count_a: 12,
            count_b: 3,
        });
        assert_eq!(&row[..15], "the            ");
        assert_eq!(&row[15..25], "12        ");
        assert_eq!(&row[25..], "3         ");
    }

    #[test]
    fn header_matches_row_width() {
        let header = format_table_header();
        let row = format_table_row(&CommonWord {
            word: "a".to_string(),
            count_a: 1,
            count_b: 1,
        });
        assert_eq!(header.len(), row.len());
    }
}
