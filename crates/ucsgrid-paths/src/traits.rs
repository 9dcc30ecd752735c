use ucsgrid_core::Cell;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the cells reachable in one step from `c` into `buf`, in the
    /// order they should be expanded. The caller clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}
