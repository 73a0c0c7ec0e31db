//! The search engine: scan words against a grid's directional line families.
//!
//! # Error Handling
//!
//! The solver reports failures through [`PuzzleError`]:
//!
//! - W003: `WordsNotFound` (missing words under [`NotFoundPolicy::Error`])
//! - W006: `SentinelInWord` (a word contains the reserved padding sentinel)
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use wordseek::grid::Grid;
//! use wordseek::solver::{self, NotFoundPolicy};
//!
//! let grid = Grid::new(["GHU", "BRQ", "HJI"])?;
//! let solution = solver::solve(&grid, &["BRQ", "JR"], None, NotFoundPolicy::Error)?;
//!
//! println!("{}", solution.mask_string('X', ' '));
//! println!("{}", solution.remaining_text());
//! # Ok::<(), wordseek::errors::PuzzleError>(())
//! ```
//!
//! ## Tolerating Missing Words
//!
//! ```
//! use wordseek::grid::Grid;
//! use wordseek::solver::{self, NotFoundPolicy};
//!
//! let grid = Grid::new(["GHU", "BRQ", "HJI"])?;
//! let finds = solver::find_words(&grid, &["HAM"], None, NotFoundPolicy::Keep)?;
//! assert_eq!(finds["HAM"], None);
//! # Ok::<(), wordseek::errors::PuzzleError>(())
//! ```

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use log::debug;

use crate::direction::{Direction, SEARCH_ORDER};
use crate::errors::PuzzleError;
use crate::grid::{Grid, PAD};
use crate::solution::{Solution, WordPosition};

/// What to do with words that were not found anywhere in the grid.
///
/// A closed set, checked at compile time; parsing a policy name (and its
/// invalid-value error) only exists at the CLI boundary via [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotFoundPolicy {
    /// Fail the search, naming every unmatched word.
    #[default]
    Error,
    /// Keep unmatched words in the output, mapped to an explicit `None`.
    Keep,
    /// Silently drop unmatched words from the output.
    Ignore,
}

impl FromStr for NotFoundPolicy {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(NotFoundPolicy::Error),
            "keep" => Ok(NotFoundPolicy::Keep),
            "ignore" => Ok(NotFoundPolicy::Ignore),
            _ => Err(PuzzleError::InvalidPolicy { input: s.to_string() }),
        }
    }
}

/// Leftmost occurrence of `needle` in `haystack`, as a character offset.
fn find_in_line(haystack: &[char], needle: &[char]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

/// Locate each distinct word in the grid, first match wins.
///
/// Directions are scanned in the order given (default: all eight in
/// [`SEARCH_ORDER`]); within a direction, lines in index order; within a
/// line, the leftmost occurrence. A word found in a line leaves the
/// remaining pool before the next line is scanned, so a word appearing in
/// several places always resolves to the same position. Duplicate input
/// words collapse to one search. A cell may belong to multiple found words.
///
/// # Errors
///
/// Returns [`PuzzleError::SentinelInWord`] if a word contains the padding
/// sentinel, and [`PuzzleError::WordsNotFound`] for unmatched words under
/// [`NotFoundPolicy::Error`].
pub fn find_words<S: AsRef<str>>(
    grid: &Grid,
    words: &[S],
    allowed_directions: Option<&[Direction]>,
    not_found: NotFoundPolicy,
) -> Result<HashMap<String, Option<WordPosition>>, PuzzleError> {
    // Collapse duplicates while keeping first-seen order, and enforce that
    // the padding sentinel stays disjoint from the word alphabet.
    let mut seen = HashSet::new();
    let mut remaining: Vec<(String, Vec<char>)> = Vec::new();
    for word in words {
        let word = word.as_ref();
        if word.contains(PAD) {
            return Err(PuzzleError::SentinelInWord { word: word.to_string() });
        }
        if seen.insert(word.to_string()) {
            remaining.push((word.to_string(), word.chars().collect()));
        }
    }

    let directions = allowed_directions.unwrap_or(&SEARCH_ORDER);
    let lines = grid.search_lines();
    let mut finds: HashMap<String, Option<WordPosition>> = HashMap::new();

    for &direction in directions {
        for (line_index, line) in lines.family(direction).iter().enumerate() {
            let mut found_here = Vec::new();
            for (word, chars) in &remaining {
                if chars.is_empty() {
                    continue;
                }
                if let Some(offset) = find_in_line(line, chars) {
                    let (row, column) = lines.regularize(direction, line_index, offset);
                    debug!("found {word:?} at ({row}, {column}) going {direction}");
                    finds.insert(word.clone(), Some(WordPosition { row, column, direction }));
                    found_here.push(word.clone());
                }
            }
            if !found_here.is_empty() {
                remaining.retain(|(word, _)| !found_here.contains(word));
            }
        }
    }

    if !remaining.is_empty() {
        match not_found {
            NotFoundPolicy::Error => {
                let mut words: Vec<String> = remaining.into_iter().map(|(w, _)| w).collect();
                words.sort();
                return Err(PuzzleError::WordsNotFound { words });
            }
            NotFoundPolicy::Keep => {
                for (word, _) in remaining {
                    finds.insert(word, None);
                }
            }
            NotFoundPolicy::Ignore => {
                debug!("ignoring {} unmatched words", remaining.len());
            }
        }
    }

    Ok(finds)
}

/// Run [`find_words`] and wrap the result in a [`Solution`] for the mask and
/// remaining-text views.
///
/// # Errors
///
/// Same failure modes as [`find_words`].
pub fn solve<'a, S: AsRef<str>>(
    grid: &'a Grid,
    words: &[S],
    allowed_directions: Option<&[Direction]>,
    not_found: NotFoundPolicy,
) -> Result<Solution<'a>, PuzzleError> {
    let finds = find_words(grid, words, allowed_directions, not_found)?;
    Ok(Solution::new(grid, finds))
}
