//! The two-phase maze generation procedure.
//!
//! Phase 1 ([`carve_tree`]) produces a perfect maze: a uniform-random
//! depth-first spanning tree with exactly `V - 1` edges. Phase 2
//! ([`braid`]) adds loop edges, which is what gives the three search
//! variants genuinely different answers — loops create multiple shortest
//! paths and deny the greedy strategy a unique best route.

use rand::Rng;
use rand::RngExt;
use warren_core::GridGraph;

/// Carve a randomized depth-first spanning tree into `graph`.
///
/// Walks from node 0 with an explicit backtracking stack: at each step one
/// unvisited grid-adjacent neighbor is drawn uniformly at random, connected
/// with [`GridGraph::add_edge`], and made current; dead ends pop the stack.
/// Every node joins the growing tree exactly once, so the carve terminates
/// with the graph connected. The visited set and stack are local to the
/// call and carry no meaning afterwards.
///
/// Returns the number of edges carved, which is always `V - 1`.
pub fn carve_tree<R: Rng>(graph: &mut GridGraph, rng: &mut R) -> usize {
    if graph.is_empty() {
        return 0;
    }

    let mut visited = vec![false; graph.len()];
    let mut stack: Vec<usize> = Vec::new();
    let mut current = 0usize;
    let mut carved = 0usize;
    visited[current] = true;

    loop {
        if let Some(next) = draw_unvisited(graph, &visited, current, rng) {
            visited[next] = true;
            graph.add_edge(current, next);
            carved += 1;
            stack.push(current);
            current = next;
        } else if let Some(prev) = stack.pop() {
            current = prev;
        } else {
            break;
        }
    }

    debug_assert_eq!(carved + 1, graph.len(), "carve must span the grid");
    carved
}

/// Add loop edges ("braiding") to a carved maze.
///
/// Visits every node in row-major order and draws one grid-adjacent
/// neighbor uniformly at random among all four candidates; the edge is
/// added only when the pair is not already graph-adjacent. The draw is a
/// single one per node — kept even when it lands on an existing neighbor —
/// which matches the carve's one-draw-per-visit statistics and keeps the
/// loop density moderate.
///
/// Returns the number of loop edges added (possibly 0).
pub fn braid<R: Rng>(graph: &mut GridGraph, rng: &mut R) -> usize {
    let mut added = 0usize;

    for node in 0..graph.len() {
        let mut candidates = [0usize; 4];
        let mut n = 0;
        for c in graph.coord(node).neighbors4() {
            if let Some(i) = graph.index(c) {
                candidates[n] = i;
                n += 1;
            }
        }
        if n == 0 {
            continue;
        }
        let pick = candidates[rng.random_range(0..n)];
        if !graph.are_neighbors(node, pick) {
            graph.add_edge(node, pick);
            added += 1;
        }
    }

    added
}

/// Generate a complete maze: spanning-tree carve, then braiding.
///
/// Mutates `graph` in place; meant to be called once per freshly built
/// graph. After this the topology is treated as immutable by searches.
pub fn generate<R: Rng>(graph: &mut GridGraph, rng: &mut R) {
    let carved = carve_tree(graph, rng);
    let loops = braid(graph, rng);
    log::debug!("generated maze: {carved} tree edges, {loops} loop edges");
}

fn draw_unvisited<R: Rng>(
    graph: &GridGraph,
    visited: &[bool],
    node: usize,
    rng: &mut R,
) -> Option<usize> {
    let mut candidates = [0usize; 4];
    let mut n = 0;
    for c in graph.coord(node).neighbors4() {
        if let Some(i) = graph.index(c) {
            if !visited[i] {
                candidates[n] = i;
                n += 1;
            }
        }
    }
    if n == 0 {
        None
    } else {
        Some(candidates[rng.random_range(0..n)])
    }
}
