//! Tile map model and path queries for grid mini-games.
//!
//! A [`TileMap`] owns a fixed rectangular arrangement of [`Tile`]s, each
//! either open or an obstacle and bound to an opaque [`TileHandle`] standing
//! in for a host-owned object. Maps are generated once, randomly via
//! [`TileMap::generate`] or from a fixed ASCII layout via
//! [`TileMap::from_rows`], and are immutable thereafter; regeneration
//! rebuilds the whole map.
//!
//! Path queries go through [`TileMap::find_path_to`], which resolves the
//! querying agent's nearest tile and a target handle, snapshots the map's
//! traversability, and runs A* from `waygrid-paths`. The outcome is a
//! [`PathQuery`]: an ordered handle sequence on success, or an explicit
//! no-path signal callers must branch on.

mod map;
mod query;
mod tile;

pub use map::{LayoutError, MapConfig, MapError, TileMap, Traversability};
pub use query::{OpenTilePather, PathQuery};
pub use tile::{Tile, TileHandle, TileKind};
