//! Pipeline-level properties over generated mazes: the optimality and
//! determinism guarantees hold on every maze the generator produces, not
//! just on hand-built graphs.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use warren_core::{Coord, GridGraph};
use warren_maze::generate;
use warren_paths::{SearchKind, Searcher, UNREACHABLE};

const ROWS: i32 = 8;
const COLS: i32 = 10;
const SEEDS: u64 = 5;

fn generated_maze(seed: u64) -> GridGraph {
    let mut g = GridGraph::new(ROWS, COLS);
    let mut rng = SmallRng::seed_from_u64(seed);
    generate(&mut g, &mut rng);
    g
}

#[test]
fn every_generated_maze_is_fully_reachable() {
    for seed in 0..SEEDS {
        let g = generated_maze(seed);
        let mut s = Searcher::new(g.len());
        let reached = s.bfs_map(&g, &[Coord::new(0, 0)], i32::MAX).len();
        assert_eq!(reached, g.len(), "seed {seed}");
    }
}

#[test]
fn dijkstra_matches_bfs_oracle() {
    let start = Coord::new(0, 0);
    for seed in 0..SEEDS {
        let g = generated_maze(seed);
        let mut s = Searcher::new(g.len());
        s.bfs_map(&g, &[start], i32::MAX);
        let oracle: Vec<i32> = (0..g.len()).map(|i| s.bfs_at(&g, g.coord(i))).collect();

        for i in 0..g.len() {
            let goal = g.coord(i);
            let r = s.run(SearchKind::Dijkstra, &g, start, goal);
            assert_ne!(oracle[i], UNREACHABLE, "seed {seed} goal {goal}");
            assert!(r.is_found(), "seed {seed} goal {goal}");
            assert_eq!(
                r.edge_count() as i32,
                oracle[i],
                "seed {seed} goal {goal}"
            );
        }
    }
}

#[test]
fn astar_matches_dijkstra_everywhere() {
    let start = Coord::new(ROWS - 1, 0);
    for seed in 0..SEEDS {
        let g = generated_maze(seed);
        let mut s = Searcher::new(g.len());
        for i in 0..g.len() {
            let goal = g.coord(i);
            let dijkstra = s.run(SearchKind::Dijkstra, &g, start, goal);
            let astar = s.run(SearchKind::AStar, &g, start, goal);
            assert_eq!(
                astar.edge_count(),
                dijkstra.edge_count(),
                "seed {seed} goal {goal}"
            );
        }
    }
}

#[test]
fn greedy_is_never_shorter_than_dijkstra() {
    let start = Coord::new(0, COLS - 1);
    for seed in 0..SEEDS {
        let g = generated_maze(seed);
        let mut s = Searcher::new(g.len());
        for i in 0..g.len() {
            let goal = g.coord(i);
            let dijkstra = s.run(SearchKind::Dijkstra, &g, start, goal);
            let greedy = s.run(SearchKind::Greedy, &g, start, goal);
            assert!(greedy.is_found(), "seed {seed} goal {goal}");
            assert!(
                greedy.edge_count() >= dijkstra.edge_count(),
                "seed {seed} goal {goal}"
            );
        }
    }
}

#[test]
fn repeat_queries_on_unmodified_maze_are_identical() {
    let start = Coord::new(0, 0);
    let goal = Coord::new(ROWS - 1, COLS - 1);
    for seed in 0..SEEDS {
        let g = generated_maze(seed);
        let mut s = Searcher::new(g.len());
        for kind in SearchKind::ALL {
            let a = s.run(kind, &g, start, goal);
            let b = s.run(kind, &g, start, goal);
            assert_eq!(a, b, "seed {seed} {kind:?}");
        }
    }
}
