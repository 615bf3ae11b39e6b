//! Frontier-ordering strategies plugged into [`Searcher`](crate::Searcher).
//!
//! A strategy picks the frontier discipline, assigns each path a priority
//! and decides whether popped paths and fresh successors take part in the
//! search. [`DepthFirst`] and [`AStar`] accept everything;
//! [`MultiplePathPruning`] finalises each node at most once.

use std::collections::HashSet;

use wayfarer_core::{Cost, Node, Path};

use crate::{Frontier, GraphProblem, PriorityFrontier, StackFrontier};

/// How a [`Searcher`](crate::Searcher) orders and filters its open set.
pub trait Strategy: Default {
    /// The frontier discipline used by this strategy.
    type Frontier: Frontier;

    /// Whether successors are pushed in reverse enumeration order, so the
    /// first listed neighbour is explored first under stack semantics.
    const REVERSE_SUCCESSORS: bool;

    /// Frontier priority of `path`.
    fn priority<P: GraphProblem + ?Sized>(problem: &P, path: &Path) -> Cost;

    /// Decide whether a popped path is considered at all. Returning `false`
    /// discards it without counting an expansion.
    fn admit(&mut self, _path: &Path) -> bool {
        true
    }

    /// Decide whether a freshly built successor enters the frontier.
    fn accepts(&self, _successor: &Path) -> bool {
        true
    }
}

/// Stack-ordered depth-first search.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirst;

impl Strategy for DepthFirst {
    type Frontier = StackFrontier;
    const REVERSE_SUCCESSORS: bool = true;

    // The stack ignores priorities; the path cost is stored so
    // `Frontier::count` stays meaningful.
    fn priority<P: GraphProblem + ?Sized>(_problem: &P, path: &Path) -> Cost {
        path.cost()
    }
}

/// Best-first search ordered by `cost + heuristic(end)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl Strategy for AStar {
    type Frontier = PriorityFrontier;
    const REVERSE_SUCCESSORS: bool = true;

    fn priority<P: GraphProblem + ?Sized>(problem: &P, path: &Path) -> Cost {
        estimated_total(problem, path)
    }
}

/// A* with an explored set: each node is expanded at most once per
/// searcher.
///
/// Once a node is explored no later path ending there is expanded or added
/// to the frontier. Repeated `search` calls therefore yield at most one
/// solution per goal node and only explore branches that remain open.
#[derive(Debug, Default, Clone)]
pub struct MultiplePathPruning {
    explored: HashSet<Node>,
}

impl MultiplePathPruning {
    /// Nodes finalised so far.
    #[must_use]
    pub const fn explored(&self) -> &HashSet<Node> {
        &self.explored
    }
}

impl Strategy for MultiplePathPruning {
    type Frontier = PriorityFrontier;
    const REVERSE_SUCCESSORS: bool = false;

    fn priority<P: GraphProblem + ?Sized>(problem: &P, path: &Path) -> Cost {
        estimated_total(problem, path)
    }

    fn admit(&mut self, path: &Path) -> bool {
        self.explored.insert(path.end())
    }

    fn accepts(&self, successor: &Path) -> bool {
        !self.explored.contains(&successor.end())
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "A* priority is path cost plus the heuristic estimate"
)]
fn estimated_total<P: GraphProblem + ?Sized>(problem: &P, path: &Path) -> Cost {
    path.cost() + problem.heuristic(&path.end())
}
