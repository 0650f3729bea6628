//! The closed set of search variants.

/// Which best-first search variant to run.
///
/// All three variants share one expansion loop; a variant only decides how
/// frontier entries are ranked and whether the Manhattan heuristic is
/// computed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchKind {
    /// Rank by `cost + heuristic`. Optimal: Manhattan distance is
    /// admissible and consistent on a unit-cost grid without diagonals.
    AStar,
    /// Rank by accumulated cost alone. Optimal by uniform-cost expansion.
    Dijkstra,
    /// Rank by heuristic alone. Not guaranteed optimal: accumulated cost is
    /// tracked but never ranks, so a loop edge the heuristic undervalues can
    /// yield a longer path than the other two variants.
    Greedy,
}

impl SearchKind {
    /// All variants, in the order hosts conventionally display them.
    pub const ALL: [SearchKind; 3] = [SearchKind::AStar, SearchKind::Dijkstra, SearchKind::Greedy];

    /// The frontier ranking key for a node with the given search fields.
    #[inline]
    pub fn priority(self, cost: i32, heuristic: i32) -> i32 {
        match self {
            SearchKind::AStar => cost + heuristic,
            SearchKind::Dijkstra => cost,
            SearchKind::Greedy => heuristic,
        }
    }

    /// Whether this variant computes the Manhattan heuristic.
    #[inline]
    pub fn uses_heuristic(self) -> bool {
        !matches!(self, SearchKind::Dijkstra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_keys() {
        assert_eq!(SearchKind::AStar.priority(3, 4), 7);
        assert_eq!(SearchKind::Dijkstra.priority(3, 4), 3);
        assert_eq!(SearchKind::Greedy.priority(3, 4), 4);
    }

    #[test]
    fn heuristic_usage() {
        assert!(SearchKind::AStar.uses_heuristic());
        assert!(!SearchKind::Dijkstra.uses_heuristic());
        assert!(SearchKind::Greedy.uses_heuristic());
    }
}
