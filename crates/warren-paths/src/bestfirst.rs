use std::collections::BinaryHeap;

use warren_core::{Coord, GridGraph};

use crate::distance::manhattan;
use crate::searcher::{HeapRef, SearchResult, UNREACHABLE};
use crate::variant::SearchKind;

impl crate::Searcher {
    /// Run one best-first search from `start` to `goal`.
    ///
    /// The same expansion loop serves every [`SearchKind`]; the variant only
    /// chooses the frontier ranking key and whether the Manhattan heuristic
    /// is computed. Edges are unit-cost (the only edges that exist are the
    /// ones the generator carved). Frontier ties are broken by ascending
    /// node index, so identical queries on an unmodified graph return
    /// identical results.
    ///
    /// Returns the start..=goal path, or an empty path if the frontier was
    /// exhausted first. Coordinates outside the grid yield an empty result.
    pub fn run(
        &mut self,
        kind: SearchKind,
        graph: &GridGraph,
        start: Coord,
        goal: Coord,
    ) -> SearchResult {
        let mut result = SearchResult::default();
        let (Some(start_idx), Some(goal_idx)) = (graph.index(start), graph.index(goal)) else {
            return result;
        };

        if start_idx == goal_idx {
            result.path.push(start);
            return result;
        }

        self.grow(graph.len());

        // Bump generation to lazily reset every node's search fields.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        // Initialise the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.cost = 0;
            node.heuristic = if kind.uses_heuristic() {
                manhattan(start, goal)
            } else {
                0
            };
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<HeapRef> = BinaryHeap::new();
        open.push(HeapRef {
            idx: start_idx,
            key: kind.priority(0, self.nodes[start_idx].heuristic),
        });

        let mut found = false;
        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                found = true;
                break;
            }

            self.nodes[ci].open = false;
            let current_cost = self.nodes[ci].cost;
            result.expanded.push(graph.coord(ci));

            for &ni in graph.neighbors(ci) {
                let candidate = current_cost + 1;
                let h = if kind.uses_heuristic() {
                    manhattan(graph.coord(ni), goal)
                } else {
                    0
                };

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if !n.open {
                        // Already expanded.
                        continue;
                    }
                    if candidate >= n.cost {
                        // No improvement. Greedy tracks cost identically but
                        // ranks by heuristic alone, so this gate behaves the
                        // same for all variants.
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.cost = UNREACHABLE;
                }

                n.cost = candidate;
                n.heuristic = h;
                n.parent = ci;
                n.open = true;

                open.push(HeapRef {
                    idx: ni,
                    key: kind.priority(candidate, h),
                });
            }
        }

        if found {
            // Reconstruct by following parents backward from the goal.
            let mut ci = goal_idx;
            while ci != usize::MAX {
                result.path.push(graph.coord(ci));
                ci = self.nodes[ci].parent;
            }
            result.path.reverse();
        }
        result
    }
}
