//! `reader` — Split raw puzzle text into a grid and a word list.
//!
//! A puzzle file holds the rectangular search field first, then a blank
//! line, then whitespace-delimited words to search for. Splitting happens on
//! the *last* blank line so grid rows themselves may contain blank-looking
//! padding. This is pure preprocessing; solving lives in [`crate::solver`].

use crate::errors::PuzzleError;
use crate::grid::{Grid, Spacing};

/// Parse a puzzle text block into its grid and word list.
///
/// `horizontal_spacing` and `vertical_spacing` are forwarded to
/// [`Grid::from_string`] for grids that were pretty-printed with separator
/// characters or lines. Spaces in the grid block become padding.
///
/// # Errors
///
/// Returns [`PuzzleError::MalformedPuzzle`] if the text has no blank-line
/// separator, plus any error from grid construction.
pub fn read_puzzle(
    text: &str,
    horizontal_spacing: Spacing,
    vertical_spacing: Spacing,
) -> Result<(Grid, Vec<String>), PuzzleError> {
    let (field_text, word_text) =
        text.trim_end_matches('\n').rsplit_once("\n\n").ok_or_else(|| {
            PuzzleError::MalformedPuzzle {
                reason: "no blank line separating the grid from the word list".to_string(),
            }
        })?;
    let grid = Grid::from_string(field_text, horizontal_spacing, vertical_spacing, " ")?;
    let words = word_text.split_whitespace().map(String::from).collect();
    Ok((grid, words))
}
