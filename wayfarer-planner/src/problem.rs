//! Search problem for routing one tour leg.

use std::collections::HashMap;

use wayfarer_core::{Arc, Cost, GraphProvider, Node};
use wayfarer_search::GraphProblem;

use crate::DistanceOracle;

/// Route from one stop to the next over a graph provider.
///
/// Arc costs come from the provider's edges. The heuristic is the oracle's
/// shortest distance to the goal, which is admissible and consistent for
/// those edges. Neighbour queries are cached for the lifetime of the
/// problem.
#[derive(Debug)]
pub struct PointToPointProblem<'a, G: ?Sized> {
    graph: &'a G,
    oracle: &'a DistanceOracle,
    from: Node,
    to: Node,
    cache: HashMap<Node, Vec<Arc>>,
}

impl<'a, G: GraphProvider + ?Sized> PointToPointProblem<'a, G> {
    /// Create a problem routing `from` to `to`.
    #[must_use]
    pub fn new(graph: &'a G, oracle: &'a DistanceOracle, from: Node, to: Node) -> Self {
        log::debug!("routing from {from} to {to}");
        Self {
            graph,
            oracle,
            from,
            to,
            cache: HashMap::new(),
        }
    }

    /// Number of nodes whose neighbours have been queried.
    #[must_use]
    pub fn cached_nodes(&self) -> usize {
        self.cache.len()
    }

    fn outgoing(&self, node: &Node) -> Vec<Arc> {
        self.graph
            .neighbors(node)
            .into_iter()
            .filter_map(|(neighbor, cost)| {
                if neighbor == *node {
                    log::warn!("ignoring self-loop at {node}");
                    return None;
                }
                Arc::new(*node, neighbor, cost)
                    .inspect_err(|err| log::warn!("skipping edge: {err}"))
                    .ok()
            })
            .collect()
    }
}

impl<G: GraphProvider + ?Sized> GraphProblem for PointToPointProblem<'_, G> {
    fn start(&self) -> Node {
        self.from
    }

    fn is_goal(&self, node: &Node) -> bool {
        *node == self.to
    }

    fn neighbors(&mut self, node: &Node) -> Vec<Arc> {
        if let Some(arcs) = self.cache.get(node) {
            return arcs.clone();
        }
        let arcs = self.outgoing(node);
        self.cache.insert(*node, arcs.clone());
        arcs
    }

    fn heuristic(&self, node: &Node) -> Cost {
        self.oracle.distance(node, &self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use wayfarer_core::test_support::{square, square_graph};
    use wayfarer_core::MemoryGraph;

    /// Counts provider neighbour queries.
    struct Counting<'a> {
        inner: &'a MemoryGraph,
        queries: Cell<usize>,
    }

    impl GraphProvider for Counting<'_> {
        fn all_nodes(&self) -> Vec<Node> {
            self.inner.all_nodes()
        }

        fn neighbors(&self, node: &Node) -> Vec<(Node, Cost)> {
            self.queries.set(self.queries.get() + 1);
            self.inner.neighbors(node)
        }

        fn distance(&self, from: &Node, to: &Node) -> Cost {
            self.inner.distance(from, to)
        }
    }

    #[rstest]
    fn neighbours_are_cached_per_problem() {
        let graph = square_graph();
        let counting = Counting {
            inner: &graph,
            queries: Cell::new(0),
        };
        let oracle = DistanceOracle::build(&graph);
        let a = Node::unplaced(square::A);
        let mut problem =
            PointToPointProblem::new(&counting, &oracle, a, Node::unplaced(square::C));
        let first = problem.neighbors(&a);
        let second = problem.neighbors(&a);
        assert_eq!(first, second);
        assert_eq!(counting.queries.get(), 1);
        assert_eq!(problem.cached_nodes(), 1);
    }

    #[rstest]
    fn heuristic_is_oracle_distance_to_goal() {
        let graph = square_graph();
        let oracle = DistanceOracle::build(&graph);
        let problem = PointToPointProblem::new(
            &graph,
            &oracle,
            Node::unplaced(square::A),
            Node::unplaced(square::C),
        );
        assert_eq!(problem.heuristic(&Node::unplaced(square::A)), 3.0);
        assert_eq!(problem.heuristic(&Node::unplaced(square::C)), 0.0);
        assert!(problem.is_goal(&Node::unplaced(square::C)));
        assert_eq!(problem.start(), Node::unplaced(square::A));
    }

    #[rstest]
    fn arcs_carry_edge_costs() {
        let graph = square_graph();
        let oracle = DistanceOracle::build(&graph);
        let a = Node::unplaced(square::A);
        let mut problem = PointToPointProblem::new(&graph, &oracle, a, Node::unplaced(square::C));
        let direct = problem
            .neighbors(&a)
            .into_iter()
            .find(|arc| arc.to_node().id == square::C)
            .expect("A has a direct edge to C");
        // The edge keeps its own cost even though A-B-C is shorter.
        assert_eq!(direct.cost(), 4.0);
    }
}
