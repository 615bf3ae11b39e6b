//! The generic search state machine.

use wayfarer_core::{Path, SearchStats};

use crate::{AStar, DepthFirst, Frontier, GraphProblem, MultiplePathPruning, Strategy};

/// Depth-first searcher over problem `P`.
pub type DepthFirstSearcher<P> = Searcher<P, DepthFirst>;
/// A* searcher over problem `P`.
pub type AStarSearcher<P> = Searcher<P, AStar>;
/// A* searcher with multiple-path pruning over problem `P`.
pub type MppSearcher<P> = Searcher<P, MultiplePathPruning>;

/// Best-first search over a [`GraphProblem`], ordered by a [`Strategy`].
///
/// The frontier is seeded with the start node on construction. Each call to
/// [`Searcher::search`] runs until a goal is popped or the frontier is
/// exhausted; frontier state persists between calls, so calling again
/// resumes the loop and yields the next solution in frontier order.
///
/// # Examples
/// ```
/// use wayfarer_core::{Arc, Node};
/// use wayfarer_search::{ExplicitGraphProblem, MppSearcher};
///
/// let [a, b, c] = [1, 2, 3].map(Node::unplaced);
/// let problem = ExplicitGraphProblem::new(
///     a,
///     [c],
///     [Arc::new(a, c, 5.0)?, Arc::new(a, b, 1.0)?, Arc::new(b, c, 1.0)?],
/// );
/// let mut searcher = MppSearcher::new(problem);
/// let path = searcher.search().expect("c is reachable");
/// assert_eq!(path.cost(), 2.0);
/// assert_eq!(path.to_node_vec(), vec![a, b, c]);
/// # Ok::<(), wayfarer_core::ArcError>(())
/// ```
#[derive(Debug)]
pub struct Searcher<P, S: Strategy> {
    problem: P,
    strategy: S,
    frontier: S::Frontier,
    expanded: usize,
    solution: Option<Path>,
}

impl<P: GraphProblem, S: Strategy> Searcher<P, S> {
    /// Create a searcher with the strategy's default state.
    #[must_use]
    pub fn new(problem: P) -> Self {
        Self::with_strategy(problem, S::default())
    }

    /// Create a searcher with an explicit strategy value.
    #[must_use]
    pub fn with_strategy(problem: P, strategy: S) -> Self {
        let mut frontier = S::Frontier::default();
        let start = Path::start(problem.start());
        frontier.add(start.clone(), S::priority(&problem, &start));
        Self {
            problem,
            strategy,
            frontier,
            expanded: 0,
            solution: None,
        }
    }

    /// Run until the next solution is found.
    ///
    /// Returns `None` once the frontier is exhausted; that is a normal
    /// outcome rather than a failure.
    pub fn search(&mut self) -> Option<Path> {
        while let Some(path) = self.frontier.pop() {
            if !self.strategy.admit(&path) {
                log::trace!("pruned path ending at {}", path.end());
                continue;
            }
            self.expanded += 1;
            if self.problem.is_goal(&path.end()) {
                log::debug!(
                    "found path {path} with cost {} after {} expansions ({} on frontier)",
                    path.cost(),
                    self.expanded,
                    self.frontier.len()
                );
                self.solution = Some(path.clone());
                return Some(path);
            }
            self.expand(&path);
        }
        log::debug!("frontier exhausted after {} expansions", self.expanded);
        None
    }

    /// Iterate over successive solutions until the frontier is exhausted.
    pub fn solutions(&mut self) -> impl Iterator<Item = Path> + '_ {
        std::iter::from_fn(move || self.search())
    }

    fn expand(&mut self, path: &Path) {
        let mut arcs = self.problem.neighbors(&path.end());
        if S::REVERSE_SUCCESSORS {
            arcs.reverse();
        }
        for arc in arcs {
            let successor = path.extend(arc);
            if self.strategy.accepts(&successor) {
                let priority = S::priority(&self.problem, &successor);
                self.frontier.add(successor, priority);
            }
        }
    }

    /// Expansion and frontier counters as of now.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            expanded: self.expanded,
            frontier_len: self.frontier.len(),
        }
    }

    /// The most recent solution, if any.
    #[must_use]
    pub const fn solution(&self) -> Option<&Path> {
        self.solution.as_ref()
    }

    /// The problem being searched.
    #[must_use]
    pub const fn problem(&self) -> &P {
        &self.problem
    }

    /// The strategy state, e.g. the explored set under pruning.
    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// The open set as it stands.
    #[must_use]
    pub const fn frontier(&self) -> &S::Frontier {
        &self.frontier
    }

    /// Consume the searcher, returning its problem.
    #[must_use]
    pub fn into_problem(self) -> P {
        self.problem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExplicitGraphProblem;
    use rstest::{fixture, rstest};
    use wayfarer_core::{Arc, Node};

    fn arc(from: u64, to: u64, cost: f64) -> Arc {
        Arc::new(Node::unplaced(from), Node::unplaced(to), cost).expect("valid arc")
    }

    fn ids(path: &Path) -> Vec<u64> {
        path.to_node_vec().iter().map(|node| node.id).collect()
    }

    /// Two routes from 1 to 4: `1 -> 2 -> 4` costs 10 and is listed first,
    /// `1 -> 3 -> 4` costs 3.
    #[fixture]
    fn diamond() -> ExplicitGraphProblem {
        ExplicitGraphProblem::new(
            Node::unplaced(1),
            [Node::unplaced(4)],
            [
                arc(1, 2, 5.0),
                arc(1, 3, 1.0),
                arc(2, 4, 5.0),
                arc(3, 4, 2.0),
            ],
        )
    }

    #[rstest]
    fn depth_first_follows_first_listed_neighbour(diamond: ExplicitGraphProblem) {
        let mut searcher = DepthFirstSearcher::new(diamond);
        let path = searcher.search().expect("goal reachable");
        assert_eq!(ids(&path), vec![1, 2, 4]);
        assert_eq!(searcher.solution().map(Path::cost), Some(10.0));
    }

    #[rstest]
    fn depth_first_resumes_to_next_solution(diamond: ExplicitGraphProblem) {
        let mut searcher = DepthFirstSearcher::new(diamond);
        let costs: Vec<f64> = searcher.solutions().map(|path| path.cost()).collect();
        assert_eq!(costs, vec![10.0, 3.0]);
        assert!(searcher.search().is_none());
    }

    #[rstest]
    fn astar_returns_cheapest_route(diamond: ExplicitGraphProblem) {
        let mut searcher = AStarSearcher::new(diamond);
        let path = searcher.search().expect("goal reachable");
        assert_eq!(ids(&path), vec![1, 3, 4]);
        assert_eq!(path.cost(), 3.0);
    }

    #[rstest]
    fn mpp_yields_one_solution_per_goal(diamond: ExplicitGraphProblem) {
        let mut searcher = MppSearcher::new(diamond);
        assert_eq!(searcher.search().map(|path| path.cost()), Some(3.0));
        assert!(searcher.search().is_none());
    }

    #[rstest]
    fn mpp_counts_only_unpruned_pops() {
        // Both 2 and 3 reach 4; the second path into 4 is pruned.
        let problem = ExplicitGraphProblem::new(
            Node::unplaced(1),
            [Node::unplaced(9)],
            [
                arc(1, 2, 1.0),
                arc(1, 3, 1.0),
                arc(2, 4, 1.0),
                arc(3, 4, 1.0),
            ],
        );
        let mut searcher = MppSearcher::new(problem);
        assert!(searcher.search().is_none());
        let stats = searcher.stats();
        assert_eq!(stats.expanded, 4);
        assert_eq!(stats.frontier_len, 0);
        assert_eq!(searcher.strategy().explored().len(), 4);
    }

    #[rstest]
    fn start_goal_is_found_immediately() {
        let start = Node::unplaced(7);
        let problem = ExplicitGraphProblem::new(start, [start], []);
        let mut searcher = AStarSearcher::new(problem);
        let path = searcher.search().expect("start is a goal");
        assert!(path.is_empty());
        assert_eq!(searcher.stats().expanded, 1);
    }

    #[rstest]
    fn unreachable_goal_exhausts_frontier() {
        let problem = ExplicitGraphProblem::new(
            Node::unplaced(1),
            [Node::unplaced(3)],
            [arc(1, 2, 1.0)],
        );
        let mut searcher = MppSearcher::new(problem);
        assert!(searcher.search().is_none());
        assert!(searcher.solution().is_none());
        assert_eq!(searcher.stats().expanded, 2);
    }

    #[rstest]
    fn heuristic_steers_astar_towards_goal() {
        // Uniform costs; only the heuristic prefers the branch through 3.
        let problem = ExplicitGraphProblem::new(
            Node::unplaced(1),
            [Node::unplaced(4)],
            [
                arc(1, 2, 1.0),
                arc(1, 3, 1.0),
                arc(2, 5, 1.0),
                arc(3, 4, 1.0),
            ],
        )
        .with_heuristic(Node::unplaced(2), 5.0)
        .with_heuristic(Node::unplaced(3), 1.0);
        let mut searcher = AStarSearcher::new(problem);
        let path = searcher.search().expect("goal reachable");
        assert_eq!(ids(&path), vec![1, 3, 4]);
        assert_eq!(searcher.stats().expanded, 3);
    }

    #[rstest]
    fn long_line_route_is_found_and_released() {
        const LENGTH: u64 = 100_000;
        let problem = ExplicitGraphProblem::new(
            Node::unplaced(0),
            [Node::unplaced(LENGTH)],
            (0..LENGTH).map(|id| arc(id, id + 1, 1.0)),
        );
        let mut searcher = MppSearcher::new(problem);
        let path = searcher.search().expect("end of the line is reachable");
        assert_eq!(path.len(), 100_000);
        assert_eq!(path.cost(), 100_000.0);
        drop(path);
        drop(searcher);
    }
}
