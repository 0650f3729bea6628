use std::collections::VecDeque;

use warren_core::{Coord, GridGraph};

use crate::searcher::{PathNode, UNREACHABLE};

impl crate::Searcher {
    /// Compute a multi-source breadth-first distance map over the carved
    /// edges.
    ///
    /// Each step has cost 1. Expansion stops when the distance exceeds
    /// `max_dist`. Returns a slice of all reached nodes. Since every carved
    /// edge is unit-cost, the map is an independent shortest-distance
    /// oracle.
    pub fn bfs_map(
        &mut self,
        graph: &GridGraph,
        sources: &[Coord],
        max_dist: i32,
    ) -> &[PathNode] {
        self.grow(graph.len());

        // Reset.
        for v in self.bfs_map.iter_mut() {
            *v = UNREACHABLE;
        }
        self.bfs_results.clear();

        let mut queue: VecDeque<usize> = std::mem::take(&mut self.bfs_queue).into();

        for &src in sources {
            if let Some(si) = graph.index(src) {
                if self.bfs_map[si] != UNREACHABLE {
                    continue;
                }
                self.bfs_map[si] = 0;
                queue.push_back(si);
                self.bfs_results.push(PathNode { pos: src, cost: 0 });
            }
        }

        while let Some(ci) = queue.pop_front() {
            let current_dist = self.bfs_map[ci];

            for &ni in graph.neighbors(ci) {
                if self.bfs_map[ni] != UNREACHABLE {
                    continue;
                }
                let nd = current_dist + 1;
                if nd > max_dist {
                    continue;
                }
                self.bfs_map[ni] = nd;
                queue.push_back(ni);
                self.bfs_results.push(PathNode {
                    pos: graph.coord(ni),
                    cost: nd,
                });
            }
        }

        self.bfs_queue = queue.into();
        &self.bfs_results
    }

    /// Query the BFS distance at a specific coordinate.
    ///
    /// Returns [`UNREACHABLE`] if the coordinate is outside the grid or was
    /// not reached by the last [`bfs_map`](Self::bfs_map) call.
    pub fn bfs_at(&self, graph: &GridGraph, coord: Coord) -> i32 {
        match graph.index(coord) {
            Some(i) if i < self.bfs_map.len() => self.bfs_map[i],
            _ => UNREACHABLE,
        }
    }
}
