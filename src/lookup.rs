// Interactive word lookup over two frequency mappings.
//
// A prompt loop with two states: awaiting input and terminated. The decision
// logic is a pure function over one input line so it can be tested without a
// terminal; `run_loop` is the thin I/O shell around it.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::frequency::FrequencyMap;

/// Case-insensitive input that ends the lookup loop.
pub const QUIT_SENTINEL: &str = "q";

/// Result of evaluating one line of user input.
#[derive(Debug, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The quit sentinel; the loop terminates.
    Quit,
    /// Blank input; rejected, the loop continues.
    EmptyInput,
    /// The word appears in at least one document.
    Found { count_a: u32, count_b: u32 },
    /// Zero occurrences in both documents.
    NotFound,
}

/// Evaluate one trimmed-as-needed line of input against both mappings.
pub fn evaluate(input: &str, a: &FrequencyMap, b: &FrequencyMap) -> LookupOutcome {
    let trimmed = input.trim();

    if trimmed.eq_ignore_ascii_case(QUIT_SENTINEL) {
        return LookupOutcome::Quit;
    }
    if trimmed.is_empty() {
        return LookupOutcome::EmptyInput;
    }

    let word = trimmed.to_lowercase();
    let count_a = a.count(&word);
    let count_b = b.count(&word);

    if count_a == 0 && count_b == 0 {
        LookupOutcome::NotFound
    } else {
        LookupOutcome::Found { count_a, count_b }
    }
}

/// Run the prompt loop until the quit sentinel or EOF.
///
/// Generic over reader and writer so tests can drive it with in-memory
/// buffers instead of a terminal.
pub fn run_loop<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    a: &FrequencyMap,
    b: &FrequencyMap,
) -> io::Result<()> {
    writeln!(writer, "\n--- Word Search ---")?;
    writeln!(
        writer,
        "Type a word to see its count in both essays, or '{QUIT_SENTINEL}' to quit."
    )?;

    let mut line = String::new();
    loop {
        write!(writer, "Enter word to search: ")?;
        writer.flush()?;

        line.clear();
        // EOF on a closed pipe ends the loop the same way the sentinel does
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match evaluate(input, a, b) {
            LookupOutcome::Quit => {
                writeln!(writer, "Exiting word search.")?;
                break;
            }
            LookupOutcome::EmptyInput => {
                writeln!(writer, "{} empty input. Please enter a word.", "Error:".red())?;
            }
            LookupOutcome::NotFound => {
                writeln!(writer, "'{input}' not found in either essay.")?;
            }
            LookupOutcome::Found { count_a, count_b } => {
                writeln!(
                    writer,
                    "The word '{input}' appears {count_a} time(s) in Essay 1 \
                     and {count_b} time(s) in Essay 2."
                )?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::tokenize;

    fn freq(text: &str) -> FrequencyMap {
        FrequencyMap::from_tokens(&tokenize(text))
    }

    #[test]
    fn quit_sentinel_is_case_insensitive() {
        let a = freq("a");
        let b = freq("b");
        assert_eq!(evaluate("q", &a, &b), LookupOutcome::Quit);
        assert_eq!(evaluate("Q", &a, &b), LookupOutcome::Quit);
        assert_eq!(evaluate("  q  ", &a, &b), LookupOutcome::Quit);
    }

    #[test]
    fn empty_input_is_rejected() {
        let a = freq("a");
        let b = freq("b");
        assert_eq!(evaluate("", &a, &b), LookupOutcome::EmptyInput);
        assert_eq!(evaluate("   ", &a, &b), LookupOutcome::EmptyInput);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let a = freq("rust rust");
        let b = freq("python");
        assert_eq!(
            evaluate("RUST", &a, &b),
            LookupOutcome::Found {
                count_a: 2,
                count_b: 0
            }
        );
    }

    #[test]
    fn word_only_in_second_document_reports_both_counts() {
        let a = freq("alpha beta");
        let b = freq("gamma gamma gamma");
        assert_eq!(
            evaluate("gamma", &a, &b),
            LookupOutcome::Found {
                count_a: 0,
                count_b: 3
            }
        );
    }

    #[test]
    fn absent_word_is_not_found() {
        let a = freq("alpha");
        let b = freq("beta");
        assert_eq!(evaluate("gamma", &a, &b), LookupOutcome::NotFound);
    }

    #[test]
    fn loop_survives_empty_input_and_exits_on_sentinel() {
        colored::control::set_override(false);

        let a = freq("the cat sat");
        let b = freq("the dog ran ran ran");

        let input = b"\ncat\nran\nmissing\nQ\n" as &[u8];
        let mut output = Vec::new();
        run_loop(input, &mut output, &a, &b).unwrap();

        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Error: empty input. Please enter a word."));
        assert!(out.contains("appears 1 time(s) in Essay 1 and 0 time(s) in Essay 2"));
        assert!(out.contains("appears 0 time(s) in Essay 1 and 3 time(s) in Essay 2"));
        assert!(out.contains("'missing' not found in either essay."));
        assert!(out.contains("Exiting word search."));

        // Empty input must not have ended the loop early: five prompts issued
        assert_eq!(out.matches("Enter word to search: ").count(), 5);
    }

    #[test]
    fn loop_terminates_on_eof() {
        let a = freq("a");
        let b = freq("b");

        let input = b"a\n" as &[u8];
        let mut output = Vec::new();
        run_loop(input, &mut output, &a, &b).unwrap();

        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("appears 1 time(s)"));
    }
}
