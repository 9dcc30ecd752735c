use ucsgrid_core::{Cell, Grid};

use crate::traits::Pather;

/// Cardinal step offsets in expansion order: +column, -column, +row, -row.
///
/// The order decides which of several equal-cost paths is returned, so it
/// is part of the search's observable behaviour.
pub const CARDINAL: [Cell; 4] = [
    Cell::new(0, 1),
    Cell::new(0, -1),
    Cell::new(1, 0),
    Cell::new(-1, 0),
];

/// Append the 4-directional neighbors of `c` in [`CARDINAL`] order, keeping
/// only those for which `keep` returns `true`.
pub fn cardinal(c: Cell, keep: impl Fn(Cell) -> bool, buf: &mut Vec<Cell>) {
    for d in CARDINAL {
        let n = c + d;
        if keep(n) {
            buf.push(n);
        }
    }
}

/// A grid's neighbors are its in-bounds free cardinal cells. Whether `c`
/// itself is free does not matter.
impl Pather for Grid {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        cardinal(c, |n| self.is_free(n), buf);
    }
}
