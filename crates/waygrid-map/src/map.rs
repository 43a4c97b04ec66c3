//! Map state, generation and lookups.

use std::fmt;

use rand::Rng;
use rand::RngExt;
use waygrid_core::{Coord, GridSize, WorldPos};

use crate::tile::{Tile, TileHandle, TileKind};

/// Parameters for random map generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapConfig {
    pub rows: i32,
    pub cols: i32,
    /// Probability in `[0, 1]` that a tile is an obstacle.
    pub obstacle_chance: f64,
    /// Spawn tile, always forced open regardless of the draw.
    pub spawn: Coord,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            rows: 11,
            cols: 5,
            obstacle_chance: 0.2,
            spawn: Coord::ZERO,
        }
    }
}

/// Binary traversability snapshot of a map, consumed by the search.
///
/// Derived from tile kinds once per query; never mutated by the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversability {
    size: GridSize,
    blocked: Vec<bool>,
}

impl Traversability {
    /// The grid size the snapshot covers.
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Whether `c` is in bounds and open.
    #[inline]
    pub fn passable(&self, c: Coord) -> bool {
        self.size.index_of(c).is_some_and(|i| !self.blocked[i])
    }
}

/// Errors from map lookups and path queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// Coordinate outside the map bounds.
    OutOfBounds(Coord),
    /// Handle not registered with this map.
    UnknownHandle(TileHandle),
    /// A path endpoint resolved to an obstacle tile.
    BlockedEndpoint(Coord),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(c) => write!(f, "coordinate {c} is out of bounds"),
            Self::UnknownHandle(h) => write!(f, "handle {h} is not part of this map"),
            Self::BlockedEndpoint(c) => write!(f, "endpoint {c} is an obstacle"),
        }
    }
}

impl std::error::Error for MapError {}

/// Errors that can occur when parsing an ASCII map layout.
#[derive(Debug, Clone)]
pub enum LayoutError {
    /// Rows are missing or have inconsistent widths.
    InconsistentSize(String),
    /// A character other than `'.'` or `'#'` was found.
    InvalidTile { ch: char, coord: Coord },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "layout: inconsistent size:\n{s}"),
            Self::InvalidTile { ch, coord } => {
                write!(f, "layout contains invalid tile \u{201c}{ch}\u{201d} at {coord}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// A fixed rectangular tile map.
///
/// Created once; tile kinds and handles are immutable for the map's
/// lifetime. Regeneration discards and rebuilds the whole map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    size: GridSize,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Generate a map with a random obstacle layout.
    ///
    /// Each tile draws uniformly in `[0, 1)` and becomes an obstacle when
    /// the draw falls below `config.obstacle_chance`; the spawn tile is
    /// forced open regardless of its draw. Every tile is bound to a fresh
    /// unique handle.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions are non-positive or the spawn coordinate is
    /// out of bounds; both are caller contract violations.
    pub fn generate(config: &MapConfig, rng: &mut impl Rng) -> Self {
        assert!(
            config.rows > 0 && config.cols > 0,
            "map dimensions must be positive, got {}x{}",
            config.rows,
            config.cols
        );
        let size = GridSize::new(config.rows, config.cols);
        assert!(
            size.contains(config.spawn),
            "spawn {} outside {} map",
            config.spawn,
            size
        );

        let mut tiles = Vec::with_capacity(size.len());
        for (id, coord) in size.iter().enumerate() {
            let draw: f64 = rng.random();
            let mut kind = if draw < config.obstacle_chance {
                TileKind::Obstacle
            } else {
                TileKind::Open
            };
            if coord == config.spawn {
                kind = TileKind::Open;
            }
            tiles.push(Tile {
                kind,
                coord,
                handle: TileHandle::new(id as u64),
                world_pos: WorldPos::from(coord),
            });
        }
        Self { size, tiles }
    }

    /// Build a map from a fixed ASCII layout: `'.'` open, `'#'` obstacle.
    ///
    /// Every row must have the same width.
    pub fn from_rows(rows: &[&str]) -> Result<Self, LayoutError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(LayoutError::InconsistentSize(String::from("empty layout")));
        }
        let size = GridSize::new(rows.len() as i32, rows[0].len() as i32);
        let mut tiles = Vec::with_capacity(size.len());
        let mut id = 0u64;
        for (r, row) in rows.iter().enumerate() {
            if row.chars().count() != size.cols as usize {
                return Err(LayoutError::InconsistentSize(rows.join("\n")));
            }
            for (c, ch) in row.chars().enumerate() {
                let coord = Coord::new(r as i32, c as i32);
                let kind = match ch {
                    '.' => TileKind::Open,
                    '#' => TileKind::Obstacle,
                    _ => return Err(LayoutError::InvalidTile { ch, coord }),
                };
                tiles.push(Tile {
                    kind,
                    coord,
                    handle: TileHandle::new(id),
                    world_pos: WorldPos::from(coord),
                });
                id += 1;
            }
        }
        Ok(Self { size, tiles })
    }

    /// The map dimensions.
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// All tiles in row-major order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The tile at `c`, or `None` if out of bounds.
    #[inline]
    pub fn tile_at(&self, c: Coord) -> Option<&Tile> {
        self.size.index_of(c).map(|i| &self.tiles[i])
    }

    /// Project tile kinds into a binary traversability snapshot.
    pub fn traversability(&self) -> Traversability {
        Traversability {
            size: self.size,
            blocked: self.tiles.iter().map(|t| !t.kind.passable()).collect(),
        }
    }

    /// The coordinate of the tile closest to `pos` in host space.
    ///
    /// Linear scan minimizing Euclidean distance. Ties keep the first tile
    /// in row-major order: deterministic, but not a geometric guarantee.
    pub fn nearest_tile(&self, pos: WorldPos) -> Coord {
        let mut best = &self.tiles[0];
        let mut best_dist = pos.distance_sq(best.world_pos);
        for tile in &self.tiles[1..] {
            let dist = pos.distance_sq(tile.world_pos);
            if dist < best_dist {
                best_dist = dist;
                best = tile;
            }
        }
        best.coord
    }

    /// The coordinate of the tile bound to `handle`.
    pub fn tile_by_handle(&self, handle: TileHandle) -> Result<Coord, MapError> {
        self.tiles
            .iter()
            .find(|t| t.handle == handle)
            .map(|t| t.coord)
            .ok_or(MapError::UnknownHandle(handle))
    }

    /// The handle of the tile at `c`.
    pub fn handle_at(&self, c: Coord) -> Result<TileHandle, MapError> {
        self.tile_at(c)
            .map(|t| t.handle)
            .ok_or(MapError::OutOfBounds(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn generate_forces_spawn_open() {
        let config = MapConfig {
            rows: 4,
            cols: 3,
            obstacle_chance: 1.0,
            spawn: Coord::new(2, 1),
        };
        let map = TileMap::generate(&config, &mut StdRng::seed_from_u64(7));
        for tile in map.tiles() {
            let expect = if tile.coord == config.spawn {
                TileKind::Open
            } else {
                TileKind::Obstacle
            };
            assert_eq!(tile.kind, expect, "at {}", tile.coord);
        }
    }

    #[test]
    fn generate_zero_chance_is_all_open() {
        let config = MapConfig {
            obstacle_chance: 0.0,
            ..MapConfig::default()
        };
        let map = TileMap::generate(&config, &mut StdRng::seed_from_u64(7));
        assert_eq!(map.size(), GridSize::new(11, 5));
        assert!(map.tiles().iter().all(|t| t.kind == TileKind::Open));
    }

    #[test]
    fn generate_assigns_unique_handles() {
        let map = TileMap::generate(&MapConfig::default(), &mut StdRng::seed_from_u64(3));
        let handles: HashSet<_> = map.tiles().iter().map(|t| t.handle).collect();
        assert_eq!(handles.len(), map.size().len());
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn generate_rejects_non_positive_dimensions() {
        let config = MapConfig {
            rows: 0,
            ..MapConfig::default()
        };
        TileMap::generate(&config, &mut StdRng::seed_from_u64(0));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn generate_rejects_out_of_bounds_spawn() {
        let config = MapConfig {
            spawn: Coord::new(11, 0),
            ..MapConfig::default()
        };
        TileMap::generate(&config, &mut StdRng::seed_from_u64(0));
    }

    #[test]
    fn from_rows_parses_kinds() {
        let map = TileMap::from_rows(&[".#", ".."]).unwrap();
        assert_eq!(map.tile_at(Coord::new(0, 1)).unwrap().kind, TileKind::Obstacle);
        assert_eq!(map.tile_at(Coord::new(1, 0)).unwrap().kind, TileKind::Open);
    }

    #[test]
    fn from_rows_rejects_bad_layouts() {
        assert!(matches!(
            TileMap::from_rows(&[]),
            Err(LayoutError::InconsistentSize(_))
        ));
        assert!(matches!(
            TileMap::from_rows(&["..", "..."]),
            Err(LayoutError::InconsistentSize(_))
        ));
        assert!(matches!(
            TileMap::from_rows(&[".x"]),
            Err(LayoutError::InvalidTile { ch: 'x', .. })
        ));
    }

    #[test]
    fn traversability_projects_kinds() {
        let map = TileMap::from_rows(&[".#.", "..#"]).unwrap();
        let grid = map.traversability();
        assert!(grid.passable(Coord::new(0, 0)));
        assert!(!grid.passable(Coord::new(0, 1)));
        assert!(!grid.passable(Coord::new(1, 2)));
        // Out of bounds is never passable.
        assert!(!grid.passable(Coord::new(2, 0)));
    }

    #[test]
    fn nearest_tile_snaps_to_closest() {
        let map = TileMap::from_rows(&["...", "...", "..."]).unwrap();
        assert_eq!(map.nearest_tile(WorldPos::new(1.1, 1.9)), Coord::new(2, 1));
        // Positions far outside the map still snap to the border.
        assert_eq!(map.nearest_tile(WorldPos::new(-5.0, -5.0)), Coord::new(0, 0));
        assert_eq!(map.nearest_tile(WorldPos::new(10.0, 10.0)), Coord::new(2, 2));
    }

    #[test]
    fn nearest_tile_ties_keep_row_major_order() {
        let map = TileMap::from_rows(&["..", ".."]).unwrap();
        // Equidistant from all four tiles: the first row-major tile wins.
        assert_eq!(map.nearest_tile(WorldPos::new(0.5, 0.5)), Coord::new(0, 0));
    }

    #[test]
    fn handle_lookups_round_trip() {
        let map = TileMap::from_rows(&["..", ".."]).unwrap();
        let c = Coord::new(1, 1);
        let handle = map.handle_at(c).unwrap();
        assert_eq!(map.tile_by_handle(handle), Ok(c));
    }

    #[test]
    fn lookups_report_misses() {
        let map = TileMap::from_rows(&["..", ".."]).unwrap();
        let oob = Coord::new(5, 0);
        assert_eq!(map.handle_at(oob), Err(MapError::OutOfBounds(oob)));
        let stranger = TileHandle::new(99);
        assert_eq!(
            map.tile_by_handle(stranger),
            Err(MapError::UnknownHandle(stranger))
        );
    }
}
