use std::collections::BinaryHeap;

use waygrid_core::Coord;

use crate::NodeArena;
use crate::arena::NodeRef;
use crate::traits::AstarPather;

impl NodeArena {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Every edge costs one step. Returns the full path (including both
    /// endpoints) or `None` if no path exists within the grid. `from == to`
    /// yields the single-element path `[from]`.
    ///
    /// Coordinates outside the arena's grid are unreachable, so an
    /// out-of-bounds endpoint yields `None`.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Coord,
        to: Coord,
    ) -> Option<Vec<Coord>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        // Initialise the start node.
        let start_h = pather.estimate(from, to);
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = start_h;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: start_h,
            h: start_h,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_coord = self.coord(ci);

            nbuf.clear();
            pather.neighbors(current_coord, &mut nbuf);

            for &nc in nbuf.iter() {
                let Some(ni) = self.idx(nc) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already visited this generation.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                let h = pather.estimate(nc, to);
                n.g = tentative_g;
                n.f = tentative_g + h;
                n.parent = ci;
                n.open = true;

                open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    h,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Reconstruct the path by following parent links, then reverse.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.coord(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}
