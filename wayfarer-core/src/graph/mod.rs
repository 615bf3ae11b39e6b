//! Read-only access to the road graph.
//!
//! The [`GraphProvider`] trait is the seam between the planning engine and
//! whatever backend materialises the map. Planning only ever asks three
//! questions: which nodes exist, which nodes are directly reachable from a
//! node, and how far apart two directly connected nodes are.

mod memory;

pub use memory::{GraphBuilder, GraphError, MemoryGraph};
#[cfg(feature = "serde")]
pub use memory::{EdgeRecord, GraphDocument, NodeRecord};

use crate::{Cost, Node};

/// Which edges of the source map a graph exposes.
///
/// Affects only graph construction; search and planning are mode-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GraphMode {
    /// Every edge, traversable in both directions.
    Pedestrian,
    /// Drivable edges only, honouring one-way restrictions.
    #[default]
    Vehicle,
}

/// Read-only graph queries used by the planner.
///
/// # Examples
///
/// ```rust
/// use wayfarer_core::{Cost, GraphProvider, Node};
///
/// struct Line;
///
/// impl GraphProvider for Line {
///     fn all_nodes(&self) -> Vec<Node> {
///         vec![Node::unplaced(1), Node::unplaced(2)]
///     }
///
///     fn neighbors(&self, node: &Node) -> Vec<(Node, Cost)> {
///         if node.id == 1 {
///             vec![(Node::unplaced(2), 10.0)]
///         } else {
///             Vec::new()
///         }
///     }
///
///     fn distance(&self, from: &Node, to: &Node) -> Cost {
///         match (from.id, to.id) {
///             (a, b) if a == b => 0.0,
///             (1, 2) => 10.0,
///             _ => f64::INFINITY,
///         }
///     }
/// }
///
/// assert_eq!(Line.neighbors(&Node::unplaced(1)).len(), 1);
/// assert!(Line.distance(&Node::unplaced(2), &Node::unplaced(1)).is_infinite());
/// ```
pub trait GraphProvider {
    /// Every node known to the graph, in a stable order.
    fn all_nodes(&self) -> Vec<Node>;

    /// Directly reachable nodes with their edge costs.
    ///
    /// Returns an empty vector for dead ends and unknown nodes.
    fn neighbors(&self, node: &Node) -> Vec<(Node, Cost)>;

    /// Direct distance from `from` to `to`.
    ///
    /// Implementations return `0.0` when `from == to` and
    /// [`f64::INFINITY`] when no direct edge exists.
    fn distance(&self, from: &Node, to: &Node) -> Cost;
}

impl<G: GraphProvider + ?Sized> GraphProvider for &G {
    fn all_nodes(&self) -> Vec<Node> {
        (**self).all_nodes()
    }

    fn neighbors(&self, node: &Node) -> Vec<(Node, Cost)> {
        (**self).neighbors(node)
    }

    fn distance(&self, from: &Node, to: &Node) -> Cost {
        (**self).distance(from, to)
    }
}
