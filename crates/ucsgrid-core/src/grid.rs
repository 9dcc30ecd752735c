//! A rectangular free/blocked grid.
//!
//! [`Grid`] is the static map a search runs over. It is always non-empty and
//! rectangular: both invariants are checked at construction, so code holding
//! a `Grid` never has to revalidate its shape.

use std::fmt;
use std::str::FromStr;

use crate::geom::{Cell, Range};

/// Traversability of a single grid cell.
///
/// Maps to the `0` (free) / `1` (blocked) integer encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Free,
    Blocked,
}

impl Tile {
    /// Whether the tile can be walked on.
    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, Tile::Free)
    }
}

impl From<Tile> for u8 {
    fn from(t: Tile) -> Self {
        match t {
            Tile::Free => 0,
            Tile::Blocked => 1,
        }
    }
}

impl TryFrom<u8> for Tile {
    type Error = u8;

    fn try_from(v: u8) -> Result<Self, u8> {
        match v {
            0 => Ok(Tile::Free),
            1 => Ok(Tile::Blocked),
            other => Err(other),
        }
    }
}

/// A non-empty rectangular grid of [`Tile`]s stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Tile>,
    rows: i32,
    cols: i32,
}

impl Grid {
    /// Build a grid from rows of `0`/`1` values.
    ///
    /// Fails if there are no rows, the first row is empty, rows differ in
    /// length, or a value is neither `0` nor `1`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.is_empty() || cols == 0 {
            return Err(GridError::Empty);
        }
        if rows
            .len()
            .checked_mul(cols)
            .is_none_or(|n| n > i32::MAX as usize)
        {
            return Err(GridError::TooLarge {
                rows: i32::try_from(rows.len()).unwrap_or(i32::MAX),
                cols: i32::try_from(cols).unwrap_or(i32::MAX),
            });
        }
        let mut tiles = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &v) in row.iter().enumerate() {
                let tile = Tile::try_from(v).map_err(|value| GridError::InvalidValue {
                    cell: Cell::new(r as i32, c as i32),
                    value,
                })?;
                tiles.push(tile);
            }
        }
        Ok(Self {
            tiles,
            rows: rows.len() as i32,
            cols: cols as i32,
        })
    }

    /// Create an all-free grid of the given dimensions.
    ///
    /// Fails if either dimension is not positive, or if `rows * cols` does
    /// not fit in an `i32`.
    pub fn open(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::Empty);
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })?;
        Ok(Self {
            tiles: vec![Tile::Free; len as usize],
            rows,
            cols,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// The range of valid coordinates, `[(0, 0), (rows, cols))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::with_size(self.rows, self.cols)
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.bounds().contains(c)
    }

    #[inline]
    fn index(&self, c: Cell) -> usize {
        (c.row * self.cols + c.col) as usize
    }

    /// The tile at `c`, or `None` if out of bounds.
    pub fn at(&self, c: Cell) -> Option<Tile> {
        if !self.contains(c) {
            return None;
        }
        Some(self.tiles[self.index(c)])
    }

    /// Whether `c` is inside the grid and free.
    #[inline]
    pub fn is_free(&self, c: Cell) -> bool {
        self.at(c).is_some_and(Tile::is_free)
    }

    /// Set the tile at `c`. Does nothing if out of bounds.
    pub fn set(&mut self, c: Cell, tile: Tile) {
        if !self.contains(c) {
            return;
        }
        let i = self.index(c);
        self.tiles[i] = tile;
    }

    /// Number of free cells.
    pub fn free_cells(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_free()).count()
    }

    /// Row-major iterator over `(Cell, Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Tile)> + '_ {
        self.bounds().iter().zip(self.tiles.iter().copied())
    }
}

/// Parses the ASCII maze format: one line per row, `.` or `0` for free
/// cells, `#` or `1` for walls. Surrounding blank lines are ignored.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (r, line) in s.trim().lines().enumerate() {
            let mut row = Vec::new();
            for (c, ch) in line.trim_end().chars().enumerate() {
                let v: u8 = match ch {
                    '.' | '0' => 0,
                    '#' | '1' => 1,
                    _ => {
                        return Err(GridError::InvalidChar {
                            cell: Cell::new(r as i32, c as i32),
                            ch,
                        });
                    }
                };
                row.push(v);
            }
            rows.push(row);
        }
        Grid::from_rows(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.tiles.chunks(self.cols as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for t in row {
                f.write_str(if t.is_free() { "." } else { "#" })?;
            }
        }
        Ok(())
    }
}

/// Errors raised when a grid is not a valid non-empty rectangle of 0/1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Zero rows or zero columns.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A value other than `0` or `1`.
    InvalidValue { cell: Cell, value: u8 },
    /// A character outside the maze alphabet.
    InvalidChar { cell: Cell, ch: char },
    /// `rows * cols` overflows the coordinate type.
    TooLarge { rows: i32, cols: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no rows or no columns"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} columns, expected {expected}"
            ),
            Self::InvalidValue { cell, value } => {
                write!(f, "grid: invalid value {value} at {cell} (expected 0 or 1)")
            }
            Self::InvalidChar { cell, ch } => {
                write!(f, "grid: invalid character '{ch}' at {cell}")
            }
            Self::TooLarge { rows, cols } => {
                write!(f, "grid: {rows}x{cols} has too many cells")
            }
        }
    }
}

impl std::error::Error for GridError {}
