//! `grid` — The rectangular search field a puzzle is solved against.
//!
//! A [`Grid`] owns the padded character rectangle and hands out the
//! per-direction line families (see [`crate::lines`]) used for substring
//! search. Construction pads ragged rows on the right with a NUL sentinel so
//! every row has the same width; the sentinel is reserved and never matches
//! real word content.

use std::sync::OnceLock;

use crate::errors::PuzzleError;
use crate::lines::SearchLines;

/// The padding sentinel. Reserved: grids substitute it for configured "empty"
/// characters and search words may not contain it.
pub const PAD: char = '\0';

/// Horizontal or vertical spacing of a grid rendered as text.
///
/// `Exact(n)` means `n` meaningless characters (or lines) separate each two
/// real ones; `Exact(0)` is an unspaced grid. `Detect` asks for automatic
/// detection, which is explicitly unimplemented and fails loudly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    /// A fixed, known amount of spacing. `Exact(0)` means none.
    Exact(usize),
    /// Auto-detect spacing (unsupported).
    Detect,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Exact(0)
    }
}

impl Spacing {
    fn thin<T: Clone>(self, items: &[T], feature: &'static str) -> Result<Vec<T>, PuzzleError> {
        match self {
            Spacing::Exact(0) => Ok(items.to_vec()),
            Spacing::Exact(n) => Ok(items.iter().cloned().step_by(n + 1).collect()),
            Spacing::Detect => Err(PuzzleError::Unsupported { feature }),
        }
    }
}

/// A rectangular character field, `height` rows by `width` columns.
///
/// Immutable after construction. Every row is padded to exactly `width`
/// characters with [`PAD`]. The eight directional line families are computed
/// lazily on first search and memoized for the grid's lifetime; the cache is
/// a `OnceLock`, so concurrent first searches are safe (both racers compute
/// the same pure function of immutable data and exactly one value wins).
#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<Vec<char>>,
    lines: OnceLock<SearchLines>,
}

impl PartialEq for Grid {
    /// Structural equality on padded row content only; the memoization cache
    /// does not participate.
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl Eq for Grid {}

impl Grid {
    /// Construct a grid from an ordered sequence of rows.
    ///
    /// Rows of unequal length are padded on the right with [`PAD`] to the
    /// maximum row length.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::EmptyGrid`] if the sequence is empty or every
    /// row has zero characters, since the grid would have no defined width.
    pub fn new<I, S>(rows: I) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();
        Self::from_char_rows(rows)
    }

    pub(crate) fn from_char_rows(mut rows: Vec<Vec<char>>) -> Result<Self, PuzzleError> {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Err(PuzzleError::EmptyGrid);
        }
        for row in &mut rows {
            row.resize(width, PAD);
        }
        let height = rows.len();
        Ok(Self {
            width,
            height,
            rows,
            lines: OnceLock::new(),
        })
    }

    /// Construct a grid from a text block, mapping `empty_characters` to the
    /// padding sentinel and optionally compressing fixed spacing.
    ///
    /// With `Spacing::Exact(h)` horizontally, only every `(h + 1)`-th
    /// character of each line is kept; with `Spacing::Exact(v)` vertically,
    /// only every `(v + 1)`-th line. This is pure preprocessing for grids
    /// that were pretty-printed with separators, not solving.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Unsupported`] for `Spacing::Detect` and
    /// [`PuzzleError::EmptyGrid`] if nothing remains after compression.
    pub fn from_string(
        field: &str,
        horizontal_spacing: Spacing,
        vertical_spacing: Spacing,
        empty_characters: &str,
    ) -> Result<Self, PuzzleError> {
        let lines: Vec<Vec<char>> = field
            .split('\n')
            .map(|line| {
                line.chars()
                    .map(|c| if empty_characters.contains(c) { PAD } else { c })
                    .collect()
            })
            .collect();
        let lines: Vec<Vec<char>> = lines
            .iter()
            .map(|line| horizontal_spacing.thin(line, "horizontal spacing detection"))
            .collect::<Result<_, _>>()?;
        let lines = vertical_spacing.thin(&lines, "vertical spacing detection")?;
        Self::from_char_rows(lines)
    }

    /// Number of columns (after padding).
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Character at `(row, column)`. Callers stay in bounds; positions
    /// produced by a search always are.
    #[must_use]
    pub fn at(&self, row: usize, column: usize) -> char {
        self.rows[row][column]
    }

    pub(crate) fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Render the grid back to a newline-joined string, substituting
    /// `empty_char` for the padding sentinel.
    ///
    /// Inverse of construction modulo the empty-character substitution.
    #[must_use]
    pub fn as_text(&self, empty_char: char) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&c| if c == PAD { empty_char } else { c })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The memoized per-direction line families.
    pub(crate) fn search_lines(&self) -> &SearchLines {
        self.lines.get_or_init(|| SearchLines::build(self))
    }
}
