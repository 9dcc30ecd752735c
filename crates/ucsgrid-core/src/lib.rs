//! **ucsgrid-core** — core types for grid pathfinding.
//!
//! This crate provides the coordinate and map types shared across the
//! *ucsgrid* workspace: [`Cell`] coordinates, half-open [`Range`]s, and the
//! validated free/blocked [`Grid`].

pub mod geom;
pub mod grid;

pub use geom::{Cell, Range};
pub use grid::{Grid, GridError, Tile};
