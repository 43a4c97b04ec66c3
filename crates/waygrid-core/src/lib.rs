//! **waygrid-core** — geometry primitives for tile-map pathfinding.
//!
//! This crate provides the coordinate types shared across the *waygrid*
//! ecosystem: [`Coord`] row/column tile coordinates, [`GridSize`]
//! origin-anchored rectangular bounds with row-major iteration, and
//! [`WorldPos`] continuous host-space positions.

pub mod geom;

pub use geom::{Coord, GridSize, GridSizeIter, WorldPos};
