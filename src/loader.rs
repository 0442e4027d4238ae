// Document loading and normalization.
//
// A document is read in full as UTF-8 text, stripped of ASCII punctuation,
// lowercased, and split on whitespace. Token order follows source order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Why a document could not produce tokens.
///
/// Callers recover from every variant by degrading to an empty token
/// sequence; none of these abort the run on their own.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is empty", .0.display())]
    Empty(PathBuf),

    #[error("could not read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read a document and return its normalized token sequence.
pub fn load_document(path: &Path) -> Result<Vec<String>, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    if text.trim().is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    let tokens = tokenize(&text);
    debug!(path = %path.display(), tokens = tokens.len(), "loaded document");
    Ok(tokens)
}

/// Normalize text into words: strip ASCII punctuation anywhere in the text,
/// lowercase, split on whitespace, drop blank tokens.
///
/// Punctuation is removed rather than treated as a separator, so "don't"
/// becomes "dont" and "well-known" becomes "wellknown".
pub fn tokenize(text: &str) -> Vec<String> {
    let stripped: String = text
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    stripped
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
