//! Uniform-cost shortest-path search on free/blocked grids.
//!
//! [`search`] runs a Dijkstra-style best-first search from a start cell to a
//! single goal cell, moving 4-directionally at a uniform step cost of 1. It
//! returns a [`SearchOutcome`] holding the optimal path, its cost, and the
//! number of frontier pops ("expansions") performed.
//!
//! ```
//! use ucsgrid_core::{Cell, Grid};
//! use ucsgrid_paths::search;
//!
//! let grid: Grid = "...\n.#.\n...".parse().unwrap();
//! let out = search(&grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
//! assert_eq!(out.cost(), 4);
//! assert_eq!(out.path().map(<[Cell]>::len), Some(5));
//! ```
//!
//! Ties between equal-cost frontier entries are broken by cell coordinate
//! (row, then column), and neighbors are generated in the fixed
//! [`CARDINAL`] order, so results are reproducible.
//!
//! Everything a search allocates (frontier, cost and predecessor tables) is
//! owned by that call; there is no shared state between searches.

mod distance;
mod error;
mod neighbors;
mod space;
mod traits;
mod ucs;

pub use distance::manhattan;
pub use error::{Endpoint, SearchError};
pub use neighbors::{CARDINAL, cardinal};
pub use traits::Pather;
pub use ucs::{STEP_COST, SearchOutcome, search, search_rows, uniform_cost};
