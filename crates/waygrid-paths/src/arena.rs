use waygrid_core::{Coord, GridSize};

// ---------------------------------------------------------------------------
// Internal search node
// ---------------------------------------------------------------------------

/// Per-coordinate A* state. `f = g + estimate`, recomputed at relax time.
/// `parent` is a flat index into the arena (`usize::MAX` = none), assigned
/// only when `g` strictly improves, so parent chains stay acyclic.
#[derive(Clone)]
pub(crate) struct SearchNode {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node arena, ordered for use in `BinaryHeap`.
///
/// Frontier ties on `f` break toward the lower heuristic (closer to the
/// goal), then the lower flat index, making path choice deterministic.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) h: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// NodeArena
// ---------------------------------------------------------------------------

/// Arena of A* search nodes for a grid of a given size.
///
/// Owns the per-coordinate node array and scratch buffers so that repeated
/// queries incur no allocations after the first use. A generation counter
/// lazily invalidates every node between queries: a query never observes
/// costs or parent links left over from a previous one.
pub struct NodeArena {
    pub(crate) size: GridSize,
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Coord>,
}

impl NodeArena {
    /// Create a new arena for a grid of the given size.
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            nodes: vec![SearchNode::default(); size.len()],
            generation: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the grid size, reallocating the node array as needed.
    ///
    /// If the new size fits within existing capacity the nodes are kept and
    /// only the generation counter is bumped, so stale entries are ignored.
    pub fn resize(&mut self, size: GridSize) {
        let new_len = size.len();
        self.size = size;
        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }
        self.nodes.clear();
        self.nodes.resize(new_len, SearchNode::default());
        self.generation = 0;
    }

    /// The grid size the arena is dimensioned for.
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        self.size.index_of(c)
    }

    /// Coordinate at flat index `idx`.
    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        self.size.coord_of(idx)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NodeArena {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.size.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NodeArena {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let size = GridSize::deserialize(deserializer)?;
        Ok(NodeArena::new(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_smaller_preserves_capacity() {
        let mut arena = NodeArena::new(GridSize::new(20, 20));
        let original_cap = arena.nodes.len(); // 400

        arena.resize(GridSize::new(5, 5));
        assert_eq!(arena.size(), GridSize::new(5, 5));
        assert_eq!(arena.nodes.len(), original_cap);
        // Generation bumped so stale entries are ignored.
        assert!(arena.generation > 0);
    }

    #[test]
    fn resize_larger_reallocates() {
        let mut arena = NodeArena::new(GridSize::new(5, 5));
        let old_cap = arena.nodes.len(); // 25

        arena.resize(GridSize::new(20, 20));
        assert_eq!(arena.size(), GridSize::new(20, 20));
        assert!(arena.nodes.len() > old_cap);
        assert_eq!(arena.nodes.len(), 400);
    }

    #[test]
    fn node_ref_orders_by_f_then_h_then_idx() {
        use std::collections::BinaryHeap;
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 9, f: 5, h: 3 });
        heap.push(NodeRef { idx: 1, f: 5, h: 1 });
        heap.push(NodeRef { idx: 4, f: 2, h: 2 });
        heap.push(NodeRef { idx: 2, f: 5, h: 1 });

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![4, 1, 2, 9]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn arena_round_trip_keeps_size_only() {
        let arena = NodeArena::new(GridSize::new(11, 5));
        let json = serde_json::to_string(&arena).unwrap();
        let back: NodeArena = serde_json::from_str(&json).unwrap();
        assert_eq!(back.size(), GridSize::new(11, 5));
        // Search state is freshly initialized, not serialized.
        assert_eq!(back.generation, 0);
        assert_eq!(back.nodes.len(), 55);
    }
}
