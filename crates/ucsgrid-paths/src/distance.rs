use ucsgrid_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// On an obstacle-free grid this is the optimal uniform-cost path length.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
