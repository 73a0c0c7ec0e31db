//! `lines` — The eight directional line families and their inverse mapping.
//!
//! For each [`Direction`] we derive a family of "lines": flat character
//! sequences such that finding a word as a forward contiguous substring of a
//! line is equivalent to finding it in the grid reading in that compass
//! direction. Rows serve RIGHT, reversed rows LEFT, columns BOTTOM, reversed
//! columns TOP; the two diagonal orientations each get `width + height - 1`
//! lines, with the reversed copies serving the opposite diagonal directions.
//!
//! [`SearchLines::regularize`] is the exact left inverse: it maps a match
//! offset within a line back to the grid coordinate of the match's first
//! character.

use crate::direction::Direction;
use crate::grid::Grid;

fn reversed(lines: &[Vec<char>]) -> Vec<Vec<char>> {
    lines
        .iter()
        .map(|line| line.iter().rev().copied().collect())
        .collect()
}

/// The memoized per-direction line families for one grid, plus the grid
/// dimensions needed to invert match offsets back to coordinates.
#[derive(Debug)]
pub(crate) struct SearchLines {
    width: usize,
    height: usize,
    // Indexed by Direction::index(), i.e. search order.
    families: [Vec<Vec<char>>; 8],
}

impl SearchLines {
    /// Derive all eight families from the grid. Pure function of the grid's
    /// immutable content, computed once per grid.
    pub(crate) fn build(grid: &Grid) -> Self {
        let (width, height) = (grid.width(), grid.height());
        let rows = grid.rows().to_vec();

        let columns: Vec<Vec<char>> = (0..width)
            .map(|j| (0..height).map(|i| rows[i][j]).collect())
            .collect();

        let n_diagonals = width + height - 1;
        let mut bottomright = Vec::with_capacity(n_diagonals);
        let mut topright = Vec::with_capacity(n_diagonals);
        for diag in 0..n_diagonals {
            let len = diagonal_length(width, height, diag);
            let (bi, bj) = bottomright_start(width, diag);
            let (ti, tj) = topright_start(height, diag);
            bottomright.push((0..len).map(|k| rows[bi + k][bj + k]).collect::<Vec<_>>());
            topright.push((0..len).map(|k| rows[ti - k][tj + k]).collect::<Vec<_>>());
        }

        let families = [
            rows.clone(),           // Right
            columns.clone(),        // Bottom
            reversed(&rows),        // Left
            reversed(&columns),     // Top
            bottomright.clone(),    // BottomRight
            reversed(&topright),    // BottomLeft
            topright,               // TopRight
            reversed(&bottomright), // TopLeft
        ];

        Self { width, height, families }
    }

    /// The lines for one direction, in line-index order.
    pub(crate) fn family(&self, direction: Direction) -> &[Vec<char>] {
        &self.families[direction.index()]
    }

    /// Map a match back to grid coordinates: given the direction, the index
    /// of the line within its family, and the match's start offset in that
    /// line, return the `(row, column)` of the match's first character.
    ///
    /// Directions whose lines are built by reversal index from the far end;
    /// diagonal directions offset from the diagonal's start cell.
    pub(crate) fn regularize(
        &self,
        direction: Direction,
        line_index: usize,
        offset: usize,
    ) -> (usize, usize) {
        match direction {
            Direction::Right => (line_index, offset),
            Direction::Left => (line_index, self.width - offset - 1),
            Direction::Bottom => (offset, line_index),
            Direction::Top => (self.height - offset - 1, line_index),
            Direction::BottomRight => {
                let (i0, j0) = bottomright_start(self.width, line_index);
                (i0 + offset, j0 + offset)
            }
            Direction::TopLeft => {
                let (i0, j0) = bottomright_start(self.width, line_index);
                let len = diagonal_length(self.width, self.height, line_index);
                (i0 + len - offset - 1, j0 + len - offset - 1)
            }
            Direction::TopRight => {
                let (i0, j0) = topright_start(self.height, line_index);
                (i0 - offset, j0 + offset)
            }
            Direction::BottomLeft => {
                let (i0, j0) = topright_start(self.height, line_index);
                let len = diagonal_length(self.width, self.height, line_index);
                (i0 + offset + 1 - len, j0 + len - offset - 1)
            }
        }
    }
}

/// Start cell of ↘ diagonal `diag` (0 is the top-right corner, the last is
/// the bottom-left corner). The diagonal's cells share `column - row`.
fn bottomright_start(width: usize, diag: usize) -> (usize, usize) {
    let d = width as isize - 1 - diag as isize;
    let i0 = (-d).max(0) as usize;
    let j0 = (i0 as isize + d) as usize;
    (i0, j0)
}

/// Start cell of ↗ diagonal `diag` (0 is the top-left corner, the last is
/// the bottom-right corner). The diagonal's cells share `row + column` and it
/// is read by decreasing row / increasing column.
fn topright_start(height: usize, diag: usize) -> (usize, usize) {
    let i0 = diag.min(height - 1);
    let j0 = diag - i0;
    (i0, j0)
}

/// Cell count of diagonal `diag`. The two diagonal orientations are mirror
/// images, so the count is shared.
fn diagonal_length(width: usize, height: usize, diag: usize) -> usize {
    let i0 = bottomright_start(width, diag).0;
    (height - i0).min(diag + 1 - i0)
}
