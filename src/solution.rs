//! `solution` — Found-word positions and the derived mask views.
//!
//! A [`Solution`] pairs the grid a search ran against with the word →
//! position-or-absent mapping the search produced. Everything else is
//! derived on demand: the boolean occupancy mask, the "remaining text" of
//! uncovered cells, and a printable mask rendering.

use std::collections::HashMap;

use crate::direction::Direction;
use crate::grid::Grid;

/// Default character for rendering found-word cells: U+2588 FULL BLOCK.
pub const DEFAULT_MASK_CHAR: char = '\u{2588}';

/// Where a found word starts and which way it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPosition {
    /// Row of the word's first character.
    pub row: usize,
    /// Column of the word's first character.
    pub column: usize,
    /// Direction the word is read in.
    pub direction: Direction,
}

impl WordPosition {
    /// The `length` cells a word occupies, starting at this position and
    /// stepping by the direction's unit delta, start cell included.
    #[must_use]
    pub fn cells(&self, length: usize) -> Vec<(usize, usize)> {
        let (dr, dc) = self.direction.delta();
        (0..length as isize)
            .map(|k| {
                (
                    (self.row as isize + k * dr) as usize,
                    (self.column as isize + k * dc) as usize,
                )
            })
            .collect()
    }
}

/// The outcome of one search: the grid searched plus each word's position.
///
/// `None` positions only occur under the keep-absent not-found policy.
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<'a> {
    grid: &'a Grid,
    word_positions: HashMap<String, Option<WordPosition>>,
}

impl<'a> Solution<'a> {
    pub(crate) fn new(grid: &'a Grid, word_positions: HashMap<String, Option<WordPosition>>) -> Self {
        Self { grid, word_positions }
    }

    /// The word → position-or-absent mapping.
    #[must_use]
    pub fn word_positions(&self) -> &HashMap<String, Option<WordPosition>> {
        &self.word_positions
    }

    /// Position of one word, if it was searched for and found.
    #[must_use]
    pub fn position(&self, word: &str) -> Option<WordPosition> {
        self.word_positions.get(word).copied().flatten()
    }

    /// Boolean occupancy grid, same dimensions as the source grid: `true`
    /// where any found word's cells lie.
    ///
    /// Cells covered by several words are simply marked once; recomputing
    /// the mask always yields the same result.
    #[must_use]
    pub fn array_mask(&self) -> Vec<Vec<bool>> {
        let mut mask = vec![vec![false; self.grid.width()]; self.grid.height()];
        for (word, position) in &self.word_positions {
            if let Some(position) = position {
                for (row, col) in position.cells(word.chars().count()) {
                    mask[row][col] = true;
                }
            }
        }
        mask
    }

    /// Row-major concatenation of the grid characters not covered by any
    /// found word.
    #[must_use]
    pub fn remaining_text(&self) -> String {
        self.grid
            .rows()
            .iter()
            .zip(self.array_mask())
            .flat_map(|(row, mask_row)| {
                row.iter()
                    .zip(mask_row)
                    .filter(|(_, masked)| !masked)
                    .map(|(&c, _)| c)
            })
            .collect()
    }

    /// Newline-joined rendering of the occupancy mask: `found_char` for
    /// covered cells, `remaining_char` for the rest. Dimensions match the
    /// grid exactly.
    #[must_use]
    pub fn mask_string(&self, found_char: char, remaining_char: char) -> String {
        self.array_mask()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&found| if found { found_char } else { remaining_char })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(row: usize, column: usize, direction: Direction) -> Option<WordPosition> {
        Some(WordPosition { row, column, direction })
    }

    #[test]
    fn test_cells_step_by_direction_delta() {
        let pos = WordPosition { row: 2, column: 1, direction: Direction::Top };
        assert_eq!(pos.cells(3), [(2, 1), (1, 1), (0, 1)]);
        let pos = WordPosition { row: 0, column: 0, direction: Direction::BottomRight };
        assert_eq!(pos.cells(2), [(0, 0), (1, 1)]);
        let pos = WordPosition { row: 1, column: 2, direction: Direction::Left };
        assert_eq!(pos.cells(1), [(1, 2)]);
    }

    #[test]
    fn test_array_mask_marks_overlapping_words_once() {
        let grid = Grid::new(["abc", "def", "ghi"]).unwrap();
        let positions = HashMap::from([
            ("abc".to_string(), position(0, 0, Direction::Right)),
            ("adg".to_string(), position(0, 0, Direction::Bottom)),
        ]);
        let solution = Solution::new(&grid, positions);
        let mask = solution.array_mask();
        assert_eq!(mask[0], [true, true, true]);
        assert_eq!(mask[1], [true, false, false]);
        assert_eq!(mask[2], [true, false, false]);
        // Idempotent: derived state, not stored state.
        assert_eq!(solution.array_mask(), mask);
    }

    #[test]
    fn test_absent_words_mark_nothing() {
        let grid = Grid::new(["ab", "cd"]).unwrap();
        let positions = HashMap::from([("zz".to_string(), None)]);
        let solution = Solution::new(&grid, positions);
        assert_eq!(solution.array_mask(), [[false, false], [false, false]]);
        assert_eq!(solution.remaining_text(), "abcd");
    }

    #[test]
    fn test_mask_string_dimensions_match_grid() {
        let grid = Grid::new(["abc", "def"]).unwrap();
        let positions = HashMap::from([("be".to_string(), position(0, 1, Direction::Bottom))]);
        let solution = Solution::new(&grid, positions);
        assert_eq!(solution.mask_string('X', '.'), ".X.\n.X.");
        assert_eq!(
            solution.mask_string(DEFAULT_MASK_CHAR, ' '),
            " \u{2588} \n \u{2588} "
        );
    }

    #[test]
    fn test_remaining_text_is_row_major() {
        let grid = Grid::new(["abc", "def", "ghi"]).unwrap();
        let positions = HashMap::from([("ceg".to_string(), position(0, 2, Direction::BottomLeft))]);
        let solution = Solution::new(&grid, positions);
        assert_eq!(solution.remaining_text(), "abdfhi");
    }

    #[test]
    fn test_remaining_text_keeps_unmasked_padding() {
        let grid = Grid::new(["ab", "c"]).unwrap();
        let positions = HashMap::from([("ab".to_string(), position(0, 0, Direction::Right))]);
        let solution = Solution::new(&grid, positions);
        assert_eq!(solution.remaining_text(), "c\0");
    }
}
