//! The goal binding and replan cadence.

use warren_core::{Coord, GridGraph};
use warren_paths::{SearchKind, SearchResult, Searcher};

/// The three plans stored by the latest replan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanSet {
    pub astar: SearchResult,
    pub dijkstra: SearchResult,
    pub greedy: SearchResult,
}

impl PlanSet {
    /// The stored plan for one variant.
    pub fn get(&self, kind: SearchKind) -> &SearchResult {
        match kind {
            SearchKind::AStar => &self.astar,
            SearchKind::Dijkstra => &self.dijkstra,
            SearchKind::Greedy => &self.greedy,
        }
    }
}

/// Holds the current goal and re-runs all three search variants on a fixed
/// cadence.
///
/// The controller only owns timing and goal identity. Searches run
/// synchronously inside [`tick`](Self::tick) — a tick either runs zero or
/// three full searches, so grid size must stay small enough that three
/// re-searches fit the host's tick budget.
pub struct GoalController {
    goal: Coord,
    interval: u32,
    ticks: u32,
    plans: Option<PlanSet>,
}

impl GoalController {
    /// Create a controller targeting `goal`, replanning every `interval`
    /// ticks (clamped to at least 1). The first tick always replans.
    pub fn new(goal: Coord, interval: u32) -> Self {
        Self {
            goal,
            interval: interval.max(1),
            ticks: 0,
            plans: None,
        }
    }

    /// The current goal binding.
    #[inline]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Rebind the goal.
    ///
    /// Takes effect at the next scheduled replan; it never triggers an
    /// out-of-cadence run, and the stored plans keep their previous goal
    /// until then.
    pub fn retarget(&mut self, goal: Coord) {
        self.goal = goal;
    }

    /// The plans from the latest replan, or `None` before the first one.
    pub fn plans(&self) -> Option<&PlanSet> {
        self.plans.as_ref()
    }

    /// The latest stored plan for one variant.
    pub fn plan(&self, kind: SearchKind) -> Option<&SearchResult> {
        self.plans.as_ref().map(|p| p.get(kind))
    }

    /// Advance the cadence by one tick.
    ///
    /// On scheduled ticks, runs all three variants against the same
    /// (start, goal) pair, replaces the stored [`PlanSet`] and returns
    /// `true`; otherwise only advances the counter and returns `false`.
    pub fn tick(&mut self, searcher: &mut Searcher, graph: &GridGraph, start: Coord) -> bool {
        let due = self.ticks == 0;
        self.ticks = (self.ticks + 1) % self.interval;
        if !due {
            return false;
        }

        let astar = searcher.run(SearchKind::AStar, graph, start, self.goal);
        let dijkstra = searcher.run(SearchKind::Dijkstra, graph, start, self.goal);
        let greedy = searcher.run(SearchKind::Greedy, graph, start, self.goal);
        log::debug!(
            "replanned {start} -> {}: astar={} dijkstra={} greedy={} edges",
            self.goal,
            astar.edge_count(),
            dijkstra.edge_count(),
            greedy.edge_count(),
        );
        self.plans = Some(PlanSet {
            astar,
            dijkstra,
            greedy,
        });
        true
    }
}
