use waygrid_core::Coord;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `c` into `buf`. The caller clears `buf` before calling.
    ///
    /// Blocked tiles are excluded here; the search never sees them.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

/// Pather with an admissible heuristic for A*. Every edge costs one step.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the steps from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Coord, to: Coord) -> i32;
}
