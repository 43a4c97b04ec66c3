//! Shortest-path search for 4-connected tile grids.
//!
//! This crate implements **A\*** over a unit-cost, cardinally connected grid
//! ([`NodeArena::astar_path`]). Search state lives in a [`NodeArena`]: a flat
//! arena of per-coordinate nodes with index-based parent links, lazily
//! invalidated between queries by a generation counter so that repeated
//! queries incur no allocations after warm-up and never observe each other's
//! costs.
//!
//! Grid topology is supplied by the caller through the trait seam:
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`AstarPather`] : [`Pather`] | admissible heuristic |
//!
//! Every edge costs one step; use [`manhattan`] as the heuristic for
//! cardinal movement and optimal paths are guaranteed.

mod arena;
mod astar;
mod distance;
mod neighbors;
mod traits;

pub use arena::NodeArena;
pub use distance::manhattan;
pub use neighbors::Neighbors;
pub use traits::{AstarPather, Pather};
