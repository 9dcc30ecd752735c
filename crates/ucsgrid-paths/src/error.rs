use std::fmt;

use ucsgrid_core::{Cell, GridError, Range};

/// Which end of a search an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Goal => "goal",
        })
    }
}

/// Errors that prevent a search from running.
///
/// An unreachable goal is not an error; see
/// [`SearchOutcome::NotFound`](crate::SearchOutcome::NotFound).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The grid is empty, ragged, or holds values other than 0/1.
    InvalidGrid(GridError),
    /// The start or goal lies outside the searchable range.
    OutOfBounds {
        endpoint: Endpoint,
        cell: Cell,
        bounds: Range,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid(e) => write!(f, "invalid grid: {e}"),
            Self::OutOfBounds {
                endpoint,
                cell,
                bounds,
            } => write!(f, "{endpoint} {cell} is outside the grid {bounds}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGrid(e) => Some(e),
            Self::OutOfBounds { .. } => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::InvalidGrid(e)
    }
}
