//! Error types for the word search pipeline, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (W001-W007) for documentation lookup:
//!
//! - W001: `EmptyGrid` (Grid input has no rows or no columns)
//! - W002: `MalformedPuzzle` (Puzzle text could not be split into grid and words)
//! - W003: `WordsNotFound` (Words missing from the grid under the `error` policy)
//! - W004: `InvalidPolicy` (Unknown not-found policy name)
//! - W005: `InvalidDirection` (Unknown direction name)
//! - W006: `SentinelInWord` (A search word contains the padding sentinel)
//! - W007: `Unsupported` (Explicitly unimplemented option requested)
//!
//! # Examples
//!
//! ```
//! use wordseek::errors::PuzzleError;
//! use wordseek::grid::Grid;
//!
//! match Grid::new(Vec::<String>::new()) {
//!     Err(e) => {
//!         println!("Error: {e}");
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {help}");
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use std::io;

/// Unified error type for grid construction, puzzle reading, and searching.
///
/// This consolidates the different failure sources in the pipeline so that
/// callers only need to handle a single `Result<_, PuzzleError>`.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// Grid construction received no rows, or rows with no characters,
    /// so the grid has no defined width.
    #[error("grid is empty (no rows or no columns)")]
    EmptyGrid,

    /// Puzzle text could not be split into a grid block and a word list.
    #[error("malformed puzzle: {reason}")]
    MalformedPuzzle { reason: String },

    /// One or more words were not found anywhere in the grid, under the
    /// `error` not-found policy. Names every unmatched word.
    #[error("could not find words: {}", words.join(", "))]
    WordsNotFound { words: Vec<String> },

    /// A not-found policy name did not parse. Only reachable from string
    /// boundaries (the CLI); library callers pass the closed enum directly.
    #[error("invalid not-found policy: {input:?}")]
    InvalidPolicy { input: String },

    /// A direction name did not parse. Only reachable from string boundaries.
    #[error("invalid direction: {input:?}")]
    InvalidDirection { input: String },

    /// A search word contains the reserved padding sentinel, which can never
    /// legitimately match grid content.
    #[error("word {word:?} contains the reserved padding sentinel")]
    SentinelInWord { word: String },

    /// An explicitly unimplemented option was requested. These fail loudly
    /// rather than silently producing wrong results.
    #[error("unsupported feature: {feature}")]
    Unsupported { feature: &'static str },
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::EmptyGrid => "W001",
            PuzzleError::MalformedPuzzle { .. } => "W002",
            PuzzleError::WordsNotFound { .. } => "W003",
            PuzzleError::InvalidPolicy { .. } => "W004",
            PuzzleError::InvalidDirection { .. } => "W005",
            PuzzleError::SentinelInWord { .. } => "W006",
            PuzzleError::Unsupported { .. } => "W007",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PuzzleError::EmptyGrid => "Grid input has no rows or no columns",
            PuzzleError::MalformedPuzzle { .. } => "Puzzle text could not be split into grid and words",
            PuzzleError::WordsNotFound { .. } => "Words missing from the grid under the error policy",
            PuzzleError::InvalidPolicy { .. } => "Unknown not-found policy name",
            PuzzleError::InvalidDirection { .. } => "Unknown direction name",
            PuzzleError::SentinelInWord { .. } => "A search word contains the padding sentinel",
            PuzzleError::Unsupported { .. } => "Explicitly unimplemented option requested",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::EmptyGrid => Some("Provide at least one non-empty row of grid characters"),
            PuzzleError::MalformedPuzzle { .. } => {
                Some("Puzzle text needs a grid block, then a blank line, then the word list")
            }
            PuzzleError::WordsNotFound { .. } => {
                Some("Re-run with the 'keep' or 'ignore' not-found policy to tolerate missing words")
            }
            PuzzleError::InvalidPolicy { .. } => Some("Valid policies: 'error', 'keep', 'ignore'"),
            PuzzleError::InvalidDirection { .. } => {
                Some("Valid directions: right, bottom, left, top, bottomright, bottomleft, topright, topleft")
            }
            PuzzleError::SentinelInWord { .. } => {
                Some("Words must use the same alphabet as the grid content; NUL is reserved for padding")
            }
            PuzzleError::Unsupported { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

impl From<PuzzleError> for io::Error {
    fn from(pe: PuzzleError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_of_each() -> Vec<PuzzleError> {
        vec![
            PuzzleError::EmptyGrid,
            PuzzleError::MalformedPuzzle { reason: "no blank line".to_string() },
            PuzzleError::WordsNotFound { words: vec!["ham".to_string()] },
            PuzzleError::InvalidPolicy { input: "maybe".to_string() },
            PuzzleError::InvalidDirection { input: "northwest".to_string() },
            PuzzleError::SentinelInWord { word: "a\0b".to_string() },
            PuzzleError::Unsupported { feature: "spacing detection" },
        ]
    }

    /// Test that all `PuzzleError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in one_of_each() {
            let code = err.code();
            assert!(code.starts_with('W'), "Error code '{code}' should start with 'W'");
            assert!(codes.insert(code), "Duplicate error code found: {code}");
        }
        assert_eq!(codes.len(), 7);
    }

    #[test]
    fn test_words_not_found_names_every_word() {
        let err = PuzzleError::WordsNotFound {
            words: vec!["ham".to_string(), "spam".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("ham"));
        assert!(msg.contains("spam"));
    }

    /// Test that display_detailed properly formats errors
    #[test]
    fn test_display_detailed_includes_code_and_help() {
        for err in one_of_each() {
            let detailed = err.display_detailed();
            assert!(
                detailed.contains(err.code()),
                "Detailed display should include error code"
            );
            assert!(
                detailed.contains(&err.to_string()),
                "Detailed display should include base error message"
            );
            if let Some(help) = err.help() {
                assert!(
                    detailed.contains(help),
                    "Detailed display should include help text when available"
                );
            }
        }
    }

    #[test]
    fn test_io_error_conversion_preserves_message() {
        let io_err: io::Error = PuzzleError::EmptyGrid.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
        assert!(io_err.to_string().contains("empty"));
    }
}
