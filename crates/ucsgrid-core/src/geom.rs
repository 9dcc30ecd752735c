//! Geometry primitives: [`Cell`] and [`Range`].
//!
//! Coordinates are `(row, col)`. Rows grow downward, columns grow to the
//! right, and both orderings below are row-major.

use std::fmt;
use std::ops::Add;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid coordinate `(row, col)`.
///
/// Cells compare lexicographically by row, then column. The search engine
/// relies on this ordering to break ties between frontier entries of equal
/// cost.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Cell,
    pub max: Cell,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(r0: i32, c0: i32, r1: i32, c1: i32) -> Self {
        Self {
            min: Cell::new(r0.min(r1), c0.min(c1)),
            max: Cell::new(r0.max(r1), c0.max(c1)),
        }
    }

    /// Range `[(0, 0), (rows, cols))`.
    #[inline]
    pub fn with_size(rows: i32, cols: i32) -> Self {
        Self::new(0, 0, rows, cols)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn cols(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows() as usize) * (self.cols() as usize)
    }

    /// Whether the range has zero area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `c` is inside the half-open range.
    #[inline]
    pub fn contains(self, c: Cell) -> bool {
        c.row >= self.min.row && c.row < self.max.row && c.col >= self.min.col && c.col < self.max.col
    }

    /// Row-major iterator over every cell in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Cell;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Cell,
}

impl Iterator for RangeIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.cur.row >= self.range.max.row || self.range.is_empty() {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.range.max.col {
            self.cur.col = self.range.min.col;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.row >= self.range.max.row {
            return (0, Some(0));
        }
        let w = self.range.cols() as usize;
        let remaining_in_row = (self.range.max.col - self.cur.col) as usize;
        let remaining_rows = (self.range.max.row - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}
