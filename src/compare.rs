// Vocabulary comparison between two documents.
//
// The overlap percentage is plain Jaccard over vocabularies:
//
//   100 * |intersection| / |union|
//
// Word presence only — frequency does not weight the score. This is a
// vocabulary-overlap heuristic, not a real plagiarism detector: it is blind
// to word order, phrase structure, and how often a shared word is used, so
// two essays on the same topic can trip it without any copying.

use crate::frequency::FrequencyMap;

/// Overlap at or above this percentage is flagged as plagiarism.
pub const PLAGIARISM_THRESHOLD: f64 = 50.0;

/// A word present in both documents, with its count in each.
#[derive(Debug, PartialEq, Eq)]
pub struct CommonWord {
    pub word: String,
    pub count_a: u32,
    pub count_b: u32,
}

/// Verdict derived from the overlap percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Plagiarism,
    Clean,
}

impl Verdict {
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= PLAGIARISM_THRESHOLD {
            Verdict::Plagiarism
        } else {
            Verdict::Clean
        }
    }
}

/// Words common to both documents, sorted lexicographically ascending.
pub fn common_words(a: &FrequencyMap, b: &FrequencyMap) -> Vec<CommonWord> {
    let vocab_b = b.vocabulary();

    let mut common: Vec<CommonWord> = a
        .vocabulary()
        .into_iter()
        .filter(|w| vocab_b.contains(w))
        .map(|w| CommonWord {
            word: w.to_string(),
            count_a: a.count(w),
            count_b: b.count(w),
        })
        .collect();

    common.sort_by(|x, y| x.word.cmp(&y.word));
    common
}

/// Vocabulary overlap as a percentage, or `None` when both vocabularies are
/// empty and the ratio is undefined.
pub fn overlap_percentage(a: &FrequencyMap, b: &FrequencyMap) -> Option<f64> {
    let vocab_a = a.vocabulary();
    let vocab_b = b.vocabulary();

    let union = vocab_a.union(&vocab_b).count();
    if union == 0 {
        return None;
    }

    let intersection = vocab_a.intersection(&vocab_b).count();
    Some(100.0 * intersection as f64 / union as f64)
}
