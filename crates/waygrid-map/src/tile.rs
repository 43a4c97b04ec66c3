//! Tile data: [`TileKind`], [`TileHandle`] and [`Tile`].

use std::fmt;

use waygrid_core::{Coord, WorldPos};

/// Kind of a map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    /// Traversable ground.
    #[default]
    Open,
    /// Blocked; the search never enters it.
    Obstacle,
}

impl TileKind {
    /// Whether an agent can stand on this tile.
    #[inline]
    pub fn passable(self) -> bool {
        matches!(self, TileKind::Open)
    }
}

/// Opaque identifier tying a tile to a host-owned object.
///
/// Handles are unique within a map and carry no host state; the host keeps
/// its own handle-to-object association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileHandle(u64);

impl TileHandle {
    #[inline]
    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw handle value, for host-side bookkeeping.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile#{}", self.0)
    }
}

/// A single map tile.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub kind: TileKind,
    pub coord: Coord,
    pub handle: TileHandle,
    /// Host-space position of the tile, used for nearest-tile resolution.
    pub world_pos: WorldPos,
}
