use std::cmp::Ordering;

use ucsgrid_core::{Cell, Range};

/// Sentinel cost meaning "not yet discovered".
pub(crate) const UNREACHABLE: i32 = i32::MAX;

const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-cell bookkeeping
// ---------------------------------------------------------------------------

/// Cost-table and predecessor-table entry for one cell.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: NO_PARENT,
        }
    }
}

/// Frontier entry, ordered for use in a `BinaryHeap`.
///
/// Smaller cost pops first; equal costs pop in row-major cell order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cell: Cell,
    pub(crate) g: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .g
            .cmp(&self.g)
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// Flat cost and predecessor tables covering a range of cells.
///
/// One is built per search and dropped when the search returns.
pub(crate) struct SearchSpace {
    rng: Range,
    width: usize,
    pub(crate) nodes: Vec<Node>,
}

impl SearchSpace {
    pub(crate) fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.cols().max(0) as usize,
            nodes: vec![Node::default(); rng.len()],
        }
    }

    /// Convert a `Cell` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, c: Cell) -> Option<usize> {
        if !self.rng.contains(c) {
            return None;
        }
        let row = (c.row - self.rng.min.row) as usize;
        let col = (c.col - self.rng.min.col) as usize;
        Some(row * self.width + col)
    }

    /// Convert a flat index back to a `Cell`.
    #[inline]
    pub(crate) fn cell(&self, idx: usize) -> Cell {
        let row = (idx / self.width) as i32 + self.rng.min.row;
        let col = (idx % self.width) as i32 + self.rng.min.col;
        Cell::new(row, col)
    }

    /// Walk predecessors from `idx` back to the root and return the cells
    /// in root-to-`idx` order.
    pub(crate) fn path_to(&self, idx: usize) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut ci = idx;
        while ci != NO_PARENT {
            path.push(self.cell(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}
