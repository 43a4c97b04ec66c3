//! Host-facing path queries.

use waygrid_core::{Coord, WorldPos};
use waygrid_paths::{AstarPather, NodeArena, Pather, manhattan};

use crate::map::{MapError, TileMap, Traversability};
use crate::tile::TileHandle;

/// Outcome of a path query.
///
/// `NoPath` is an explicit signal, not an error: the map and endpoints were
/// valid but obstacles disconnect them, and the host decides how to react.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathQuery {
    /// Ordered tile handles from the agent's tile to the target, inclusive.
    Found(Vec<TileHandle>),
    /// The open set was exhausted without reaching the target.
    NoPath,
}

/// Pather over a traversability snapshot: cardinal movement onto open tiles.
pub struct OpenTilePather<'a> {
    grid: &'a Traversability,
}

impl<'a> OpenTilePather<'a> {
    /// Create a pather over the given snapshot.
    pub fn new(grid: &'a Traversability) -> Self {
        Self { grid }
    }
}

impl Pather for OpenTilePather<'_> {
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        for n in c.neighbors_4() {
            if self.grid.passable(n) {
                buf.push(n);
            }
        }
    }
}

impl AstarPather for OpenTilePather<'_> {
    fn estimate(&self, from: Coord, to: Coord) -> i32 {
        manhattan(from, to)
    }
}

impl TileMap {
    /// Find a path from the agent's nearest tile to the tile bound to
    /// `target`, as an ordered handle sequence.
    ///
    /// Composes the full query: nearest-tile resolution for the agent,
    /// handle lookup for the target, a traversability snapshot, A* search,
    /// and mapping the resulting coordinates back to handles. Endpoints
    /// resolving to obstacle tiles are rejected as
    /// [`MapError::BlockedEndpoint`] before the search runs.
    ///
    /// The arena is resized to this map if needed and may be reused across
    /// queries and maps.
    pub fn find_path_to(
        &self,
        agent: WorldPos,
        target: TileHandle,
        arena: &mut NodeArena,
    ) -> Result<PathQuery, MapError> {
        let start = self.nearest_tile(agent);
        let goal = self.tile_by_handle(target)?;
        log::debug!("path query: start {start}, goal {goal}");

        let grid = self.traversability();
        for endpoint in [start, goal] {
            if !grid.passable(endpoint) {
                return Err(MapError::BlockedEndpoint(endpoint));
            }
        }

        if arena.size() != self.size() {
            arena.resize(self.size());
        }
        let pather = OpenTilePather::new(&grid);
        match arena.astar_path(&pather, start, goal) {
            Some(path) => {
                log::debug!("path found: {} tiles", path.len());
                let mut handles = Vec::with_capacity(path.len());
                for c in &path {
                    handles.push(self.handle_at(*c)?);
                }
                Ok(PathQuery::Found(handles))
            }
            None => {
                log::debug!("no path to {goal}");
                Ok(PathQuery::NoPath)
            }
        }
    }
}
