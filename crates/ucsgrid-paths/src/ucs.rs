use std::collections::BinaryHeap;

use ucsgrid_core::{Cell, Grid, Range};

use crate::error::{Endpoint, SearchError};
use crate::space::{NodeRef, SearchSpace};
use crate::traits::Pather;

/// Cost of every step between adjacent cells.
pub const STEP_COST: i32 = 1;

/// Result of a search that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum SearchOutcome {
    /// The goal was reached. `path` runs from start to goal inclusive.
    Found {
        path: Vec<Cell>,
        cost: i32,
        expanded: usize,
    },
    /// The frontier emptied before the goal was popped.
    NotFound { expanded: usize },
}

impl SearchOutcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Cell]> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::NotFound { .. } => None,
        }
    }

    /// Total path cost; 0 when no path was found.
    pub fn cost(&self) -> i32 {
        match self {
            Self::Found { cost, .. } => *cost,
            Self::NotFound { .. } => 0,
        }
    }

    /// Number of frontier pops performed.
    pub fn expanded(&self) -> usize {
        match self {
            Self::Found { expanded, .. } | Self::NotFound { expanded } => *expanded,
        }
    }

    /// Whether the goal was reached.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Consume the outcome, returning the path if one was found.
    pub fn into_path(self) -> Option<Vec<Cell>> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::NotFound { .. } => None,
        }
    }
}

/// Find a minimum-cost path from `start` to `goal` on `grid`.
///
/// Moves are 4-directional with uniform cost [`STEP_COST`]. Blocked cells are
/// never entered, but a blocked `start` is still expanded from and a blocked
/// `goal` simply yields [`SearchOutcome::NotFound`] (unless it equals
/// `start`).
///
/// Among equal-cost paths the one returned is fixed: the frontier pops by
/// cost, then by cell in row-major order, and neighbors are generated in
/// [`CARDINAL`](crate::CARDINAL) order.
///
/// # Errors
///
/// [`SearchError::OutOfBounds`] if `start` or `goal` is outside the grid.
pub fn search(grid: &Grid, start: Cell, goal: Cell) -> Result<SearchOutcome, SearchError> {
    uniform_cost(grid, grid.bounds(), start, goal)
}

/// Like [`search`], but takes the grid as raw rows of `0`/`1` values.
///
/// # Errors
///
/// [`SearchError::InvalidGrid`] if the rows are empty, ragged, or contain
/// values other than 0/1; otherwise as [`search`].
pub fn search_rows<R: AsRef<[u8]>>(
    rows: &[R],
    start: Cell,
    goal: Cell,
) -> Result<SearchOutcome, SearchError> {
    let grid = Grid::from_rows(rows)?;
    search(&grid, start, goal)
}

/// Uniform-cost search over any [`Pather`] restricted to `bounds`.
///
/// Neighbors reported outside `bounds` are ignored. Every frontier pop counts
/// as one expansion.
///
/// # Errors
///
/// [`SearchError::OutOfBounds`] if `start` or `goal` is outside `bounds`.
pub fn uniform_cost<P: Pather>(
    pather: &P,
    bounds: Range,
    start: Cell,
    goal: Cell,
) -> Result<SearchOutcome, SearchError> {
    let mut space = SearchSpace::new(bounds);
    let out_of_bounds = |endpoint, cell| SearchError::OutOfBounds {
        endpoint,
        cell,
        bounds,
    };
    let start_idx = space
        .idx(start)
        .ok_or_else(|| out_of_bounds(Endpoint::Start, start))?;
    space
        .idx(goal)
        .ok_or_else(|| out_of_bounds(Endpoint::Goal, goal))?;

    log::debug!("ucs: {start} -> {goal} over {bounds}");

    space.nodes[start_idx].g = 0;
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    open.push(NodeRef {
        idx: start_idx,
        cell: start,
        g: 0,
    });

    let mut expanded = 0;
    let mut nbuf: Vec<Cell> = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        expanded += 1;
        log::trace!("ucs: expand {} at cost {}", current.cell, current.g);

        if current.cell == goal {
            let path = space.path_to(current.idx);
            log::debug!(
                "ucs: found path of cost {} after {expanded} expansions",
                current.g
            );
            return Ok(SearchOutcome::Found {
                path,
                cost: current.g,
                expanded,
            });
        }

        nbuf.clear();
        pather.neighbors(current.cell, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = space.idx(np) else {
                continue;
            };
            let tentative = current.g + STEP_COST;
            let n = &mut space.nodes[ni];
            if tentative >= n.g {
                continue;
            }
            n.g = tentative;
            n.parent = current.idx;
            open.push(NodeRef {
                idx: ni,
                cell: np,
                g: tentative,
            });
        }
    }

    log::debug!("ucs: goal {goal} unreachable after {expanded} expansions");
    Ok(SearchOutcome::NotFound { expanded })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(v: &[(i32, i32)]) -> Vec<Cell> {
        v.iter().map(|&c| Cell::from(c)).collect()
    }

    fn maze(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn routes_around_center_wall() {
        let g = maze(
            "\
...
.#.
...",
        );
        let out = search(&g, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert_eq!(
            out,
            SearchOutcome::Found {
                path: cells(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]),
                cost: 4,
                expanded: 8,
            }
        );
    }

    #[test]
    fn start_equals_goal() {
        let g = maze("..\n..\n..");
        let out = search(&g, Cell::new(1, 0), Cell::new(1, 0)).unwrap();
        assert_eq!(out.path(), Some(&[Cell::new(1, 0)][..]));
        assert_eq!(out.cost(), 0);
        assert_eq!(out.expanded(), 1);
    }

    #[test]
    fn walled_off_goal_counts_reachable_cells() {
        let g = maze(
            "\
...
.##
.#.",
        );
        let out = search(&g, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert_eq!(out, SearchOutcome::NotFound { expanded: 5 });
        assert_eq!(out.cost(), 0);
        assert!(out.path().is_none());
    }

    #[test]
    fn single_row_wall() {
        let out = search_rows(&[[0u8, 1, 0]], Cell::new(0, 0), Cell::new(0, 2)).unwrap();
        assert!(!out.is_found());
        assert_eq!(out.expanded(), 1);
    }

    #[test]
    fn open_grid_tie_break_is_fixed() {
        let g = Grid::open(3, 3).unwrap();
        let out = search(&g, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert_eq!(
            out,
            SearchOutcome::Found {
                path: cells(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]),
                cost: 4,
                expanded: 9,
            }
        );
    }

    #[test]
    fn blocked_goal_is_not_found() {
        let g = maze("..#");
        let out = search(&g, Cell::new(0, 0), Cell::new(0, 2)).unwrap();
        assert_eq!(out, SearchOutcome::NotFound { expanded: 2 });
    }

    #[test]
    fn blocked_start_still_expands() {
        let g = maze("#..");
        let out = search(&g, Cell::new(0, 0), Cell::new(0, 2)).unwrap();
        assert_eq!(out.cost(), 2);
        assert_eq!(out.into_path(), Some(cells(&[(0, 0), (0, 1), (0, 2)])));
    }

    #[test]
    fn out_of_bounds_endpoints_rejected() {
        let g = Grid::open(2, 2).unwrap();
        assert_eq!(
            search(&g, Cell::new(-1, 0), Cell::new(1, 1)),
            Err(SearchError::OutOfBounds {
                endpoint: Endpoint::Start,
                cell: Cell::new(-1, 0),
                bounds: g.bounds(),
            })
        );
        let err = search(&g, Cell::new(0, 0), Cell::new(0, 2)).unwrap_err();
        assert!(matches!(
            err,
            SearchError::OutOfBounds {
                endpoint: Endpoint::Goal,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "goal (0, 2) is outside the grid [(0, 0)-(2, 2))"
        );
    }

    #[test]
    fn invalid_rows_rejected() {
        let ragged = vec![vec![0u8, 0], vec![0]];
        let err = search_rows(&ragged, Cell::new(0, 0), Cell::new(0, 1)).unwrap_err();
        assert!(matches!(err, SearchError::InvalidGrid(_)));
        assert!(std::error::Error::source(&err).is_some());

        let empty: [[u8; 0]; 0] = [];
        assert!(matches!(
            search_rows(&empty, Cell::new(0, 0), Cell::new(0, 0)),
            Err(SearchError::InvalidGrid(ucsgrid_core::GridError::Empty))
        ));
    }

    #[test]
    fn custom_pather_respects_bounds() {
        // Everything is walkable; bounds alone limit the search.
        struct Open;
        impl Pather for Open {
            fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
                crate::neighbors::cardinal(c, |_| true, buf);
            }
        }
        let bounds = Range::new(1, 1, 3, 4);
        let out = uniform_cost(&Open, bounds, Cell::new(1, 1), Cell::new(2, 3)).unwrap();
        assert_eq!(out.cost(), 3);
        assert_eq!(
            out.path(),
            Some(&cells(&[(1, 1), (1, 2), (1, 3), (2, 3)])[..])
        );
        assert!(uniform_cost(&Open, bounds, Cell::new(0, 0), Cell::new(2, 3)).is_err());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_json_shape() {
        let found = SearchOutcome::Found {
            path: vec![Cell::new(0, 0), Cell::new(0, 1)],
            cost: 1,
            expanded: 2,
        };
        let json = serde_json::to_value(&found).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["cost"], 1);
        assert_eq!(json["path"][1]["col"], 1);

        let missing = SearchOutcome::NotFound { expanded: 3 };
        let json = serde_json::to_string(&missing).unwrap();
        assert_eq!(json, r#"{"status":"not_found","expanded":3}"#);
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, missing);
    }
}
