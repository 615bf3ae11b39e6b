//! The capability interface a searcher drives.

use std::collections::{HashMap, HashSet};

use wayfarer_core::{Arc, Cost, Node};

/// A graph search problem: where to start, when to stop and how to move.
///
/// `neighbors` takes `&mut self` so implementations may cache provider
/// queries for the lifetime of one problem instance.
pub trait GraphProblem {
    /// The node every search begins from.
    fn start(&self) -> Node;

    /// Whether `node` satisfies the goal predicate.
    fn is_goal(&self, node: &Node) -> bool;

    /// Outgoing arcs of `node` in enumeration order. Dead ends yield an
    /// empty vector.
    fn neighbors(&mut self, node: &Node) -> Vec<Arc>;

    /// Estimated remaining cost from `node` to the nearest goal.
    ///
    /// Defaults to zero, which turns A* into uniform-cost search.
    fn heuristic(&self, _node: &Node) -> Cost {
        0.0
    }
}

impl<P: GraphProblem + ?Sized> GraphProblem for &mut P {
    fn start(&self) -> Node {
        (**self).start()
    }

    fn is_goal(&self, node: &Node) -> bool {
        (**self).is_goal(node)
    }

    fn neighbors(&mut self, node: &Node) -> Vec<Arc> {
        (**self).neighbors(node)
    }

    fn heuristic(&self, node: &Node) -> Cost {
        (**self).heuristic(node)
    }
}

/// A problem over an explicitly listed set of arcs.
///
/// Arcs leaving a node are enumerated in the order they were supplied.
/// Nodes without a recorded heuristic estimate use zero.
///
/// # Examples
/// ```
/// use wayfarer_core::{Arc, Node};
/// use wayfarer_search::{ExplicitGraphProblem, GraphProblem};
///
/// let a = Node::unplaced(1);
/// let b = Node::unplaced(2);
/// let mut problem = ExplicitGraphProblem::new(a, [b], [Arc::new(a, b, 1.0)?])
///     .with_heuristic(a, 1.0);
/// assert_eq!(problem.neighbors(&a).len(), 1);
/// assert!(problem.is_goal(&b));
/// assert_eq!(problem.heuristic(&a), 1.0);
/// assert_eq!(problem.heuristic(&b), 0.0);
/// # Ok::<(), wayfarer_core::ArcError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExplicitGraphProblem {
    start: Node,
    goals: HashSet<Node>,
    outgoing: HashMap<Node, Vec<Arc>>,
    estimates: HashMap<Node, Cost>,
}

impl ExplicitGraphProblem {
    /// Build a problem from a start node, its goal nodes and every arc.
    #[must_use]
    pub fn new(
        start: Node,
        goals: impl IntoIterator<Item = Node>,
        arcs: impl IntoIterator<Item = Arc>,
    ) -> Self {
        let mut outgoing: HashMap<Node, Vec<Arc>> = HashMap::new();
        for arc in arcs {
            outgoing.entry(arc.from_node()).or_default().push(arc);
        }
        Self {
            start,
            goals: goals.into_iter().collect(),
            outgoing,
            estimates: HashMap::new(),
        }
    }

    /// Record a heuristic estimate for `node`.
    #[must_use]
    pub fn with_heuristic(mut self, node: Node, estimate: Cost) -> Self {
        self.estimates.insert(node, estimate);
        self
    }
}

impl GraphProblem for ExplicitGraphProblem {
    fn start(&self) -> Node {
        self.start
    }

    fn is_goal(&self, node: &Node) -> bool {
        self.goals.contains(node)
    }

    fn neighbors(&mut self, node: &Node) -> Vec<Arc> {
        self.outgoing.get(node).cloned().unwrap_or_default()
    }

    fn heuristic(&self, node: &Node) -> Cost {
        self.estimates.get(node).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn arcs_keep_supplied_order() {
        let [a, b, c] = [1, 2, 3].map(Node::unplaced);
        let arcs = vec![
            Arc::new(a, c, 2.0).expect("valid arc"),
            Arc::new(a, b, 1.0).expect("valid arc"),
        ];
        let mut problem = ExplicitGraphProblem::new(a, [c], arcs);
        let targets: Vec<u64> = problem
            .neighbors(&a)
            .iter()
            .map(|arc| arc.to_node().id)
            .collect();
        assert_eq!(targets, vec![3, 2]);
        assert!(problem.neighbors(&c).is_empty());
    }

    #[rstest]
    fn default_heuristic_is_zero() {
        struct Bare;
        impl GraphProblem for Bare {
            fn start(&self) -> Node {
                Node::unplaced(0)
            }
            fn is_goal(&self, _node: &Node) -> bool {
                false
            }
            fn neighbors(&mut self, _node: &Node) -> Vec<Arc> {
                Vec::new()
            }
        }
        assert_eq!(Bare.heuristic(&Node::unplaced(9)), 0.0);
    }
}
