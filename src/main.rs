use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::info;

use crib::compare;
use crib::frequency::FrequencyMap;
use crib::loader;
use crib::lookup;
use crib::output;

/// Crib: lexical overlap detection for plain-text documents.
///
/// Compares two essays for common words, per-word frequency, and a
/// vocabulary-overlap percentage, then opens an interactive word search.
/// The percentage is a naive presence-only heuristic — treat the verdict
/// as a prompt for human review, not proof of copying.
#[derive(Parser)]
#[command(name = "crib", version, about)]
struct Cli {
    /// Path to the first essay
    #[arg(default_value = "essay-1.txt")]
    first: PathBuf,

    /// Path to the second essay
    #[arg(default_value = "essay-2.txt")]
    second: PathBuf,
}

fn main() -> Result<()> {
    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("crib=info")),
        )
        .init();

    let cli = Cli::parse();

    println!("\n==============================");
    println!("     Plagiarism Detector      ");
    println!("==============================");
    println!("Compare two essays for common words and plagiarism percentage.\n");

    let words1 = load_essay(&cli.first);
    let words2 = load_essay(&cli.second);

    // Deliberate early exit, not a failure: without both documents there is
    // nothing to compare.
    if words1.is_empty() || words2.is_empty() {
        println!("Cannot proceed without both essays.");
        return Ok(());
    }

    let freq1 = FrequencyMap::from_tokens(&words1);
    let freq2 = FrequencyMap::from_tokens(&words2);

    output::display_stats("Essay 1", &freq1);
    output::display_stats("Essay 2", &freq2);

    let common = compare::common_words(&freq1, &freq2);
    output::display_common_words(&common);

    println!("\nChecking for plagiarism...");
    let percentage = compare::overlap_percentage(&freq1, &freq2);
    info!(common = common.len(), ?percentage, "comparison complete");
    output::display_verdict(percentage);

    let stdin = io::stdin();
    lookup::run_loop(stdin.lock(), io::stdout(), &freq1, &freq2)?;

    println!("\nThank you for using the Plagiarism Detector!");
    Ok(())
}

/// Load one essay, reporting any problem and degrading to an empty sequence.
fn load_essay(path: &Path) -> Vec<String> {
    match loader::load_document(path) {
        Ok(tokens) => tokens,
        Err(e) => {
            println!("{} {e}.", "Error:".red());
            Vec::new()
        }
    }
}
