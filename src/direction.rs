//! The eight compass directions a word can run in, and their unit steps.

use std::fmt;
use std::str::FromStr;

use crate::errors::PuzzleError;

/// One of the eight linear directions a word may be read in.
///
/// Each direction maps to a unit `(row delta, column delta)` step via
/// [`Direction::delta`]; a word of length `L` starting at some cell occupies
/// the `L` cells reached by stepping `L - 1` times from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Right,
    /// Top to bottom along a column.
    Bottom,
    /// Right to left along a row.
    Left,
    /// Bottom to top along a column.
    Top,
    /// Diagonally down-right (↘).
    BottomRight,
    /// Diagonally down-left (↙).
    BottomLeft,
    /// Diagonally up-right (↗).
    TopRight,
    /// Diagonally up-left (↖).
    TopLeft,
}

/// The fixed order directions are scanned in during a search.
///
/// First-match-wins semantics depend on this order being stable: a word
/// appearing in several places always resolves to the same position.
pub const SEARCH_ORDER: [Direction; 8] = [
    Direction::Right,
    Direction::Bottom,
    Direction::Left,
    Direction::Top,
    Direction::BottomRight,
    Direction::BottomLeft,
    Direction::TopRight,
    Direction::TopLeft,
];

impl Direction {
    /// Unit `(row delta, column delta)` step for this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Bottom => (1, 0),
            Direction::Top => (-1, 0),
            Direction::BottomRight => (1, 1),
            Direction::BottomLeft => (1, -1),
            Direction::TopRight => (-1, 1),
            Direction::TopLeft => (-1, -1),
        }
    }

    /// Stable index of this direction within [`SEARCH_ORDER`].
    ///
    /// Used to index the per-direction line families.
    pub(crate) const fn index(self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::Bottom => 1,
            Direction::Left => 2,
            Direction::Top => 3,
            Direction::BottomRight => 4,
            Direction::BottomLeft => 5,
            Direction::TopRight => 6,
            Direction::TopLeft => 7,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
            Direction::Top => "top",
            Direction::BottomRight => "bottomright",
            Direction::BottomLeft => "bottomleft",
            Direction::TopRight => "topright",
            Direction::TopLeft => "topleft",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = PuzzleError;

    /// Parse a direction name, case-insensitively.
    ///
    /// This exists only at configuration boundaries (the CLI); library code
    /// passes `Direction` values directly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        SEARCH_ORDER
            .iter()
            .copied()
            .find(|d| d.name() == lowered)
            .ok_or_else(|| PuzzleError::InvalidDirection { input: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_deltas_are_unit_steps() {
        for dir in SEARCH_ORDER {
            let (dr, dc) = dir.delta();
            assert!(dr.abs() <= 1 && dc.abs() <= 1);
            assert!((dr, dc) != (0, 0), "{dir} has a zero step");
        }
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let pairs = [
            (Direction::Right, Direction::Left),
            (Direction::Bottom, Direction::Top),
            (Direction::BottomRight, Direction::TopLeft),
            (Direction::BottomLeft, Direction::TopRight),
        ];
        for (a, b) in pairs {
            let (ar, ac) = a.delta();
            let (br, bc) = b.delta();
            assert_eq!((ar + br, ac + bc), (0, 0));
        }
    }

    #[test]
    fn test_search_order_covers_all_directions_once() {
        let unique: HashSet<Direction> = SEARCH_ORDER.into_iter().collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn test_search_order_indexes_are_positional() {
        for (i, dir) in SEARCH_ORDER.into_iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }

    #[test]
    fn test_from_str_roundtrip() {
        for dir in SEARCH_ORDER {
            assert_eq!(dir.to_string().parse::<Direction>().unwrap(), dir);
        }
        assert_eq!("TopLeft".parse::<Direction>().unwrap(), Direction::TopLeft);
        assert_eq!("RIGHT".parse::<Direction>().unwrap(), Direction::Right);
    }

    #[test]
    fn test_from_str_rejects_unknown_names() {
        let err = "northwest".parse::<Direction>().unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidDirection { .. }));
    }
}
