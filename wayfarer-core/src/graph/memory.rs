//! In-memory adjacency-list graph.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use geo::Coord;
use log::{debug, warn};
use thiserror::Error;

use super::{GraphMode, GraphProvider};
use crate::{Arc, ArcError, Cost, Node};

/// Errors returned while assembling a [`MemoryGraph`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Two nodes were declared with the same identifier.
    #[error("node {id} is declared more than once")]
    DuplicateNode { id: u64 },
    /// An edge referenced a node that was never declared.
    #[error("edge {from} -> {to} references unknown node {id}")]
    UnknownNode { from: u64, to: u64, id: u64 },
    /// An edge carried an invalid cost.
    #[error(transparent)]
    InvalidEdge(#[from] ArcError),
}

#[derive(Debug, Clone, Copy)]
struct EdgeSpec {
    from: u64,
    to: u64,
    cost: Cost,
    drivable: bool,
    oneway: bool,
}

/// Incremental constructor for [`MemoryGraph`].
///
/// # Examples
/// ```
/// use wayfarer_core::{GraphMode, GraphProvider, MemoryGraph};
///
/// let graph = MemoryGraph::builder(GraphMode::Vehicle)
///     .node(1, 52.50, 13.40)
///     .node(2, 52.51, 13.41)
///     .node(3, 52.52, 13.42)
///     .edge(1, 2, 120.0)
///     .one_way(2, 3, 80.0)
///     .footpath(1, 3, 10.0)
///     .build()?;
///
/// assert_eq!(graph.all_nodes().len(), 3);
/// // The footpath is hidden from vehicles.
/// assert!(graph.distance(&graph.node(1).unwrap(), &graph.node(3).unwrap()).is_infinite());
/// # Ok::<(), wayfarer_core::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    mode: GraphMode,
    nodes: Vec<Node>,
    edges: Vec<EdgeSpec>,
}

impl GraphBuilder {
    /// Declare a node at the given latitude and longitude.
    #[must_use]
    pub fn node(mut self, id: u64, lat: f64, lon: f64) -> Self {
        self.nodes.push(Node::new(id, Coord { x: lon, y: lat }));
        self
    }

    /// Declare a drivable, two-way edge.
    #[must_use]
    pub fn edge(self, from: u64, to: u64, cost: Cost) -> Self {
        self.push_edge(EdgeSpec {
            from,
            to,
            cost,
            drivable: true,
            oneway: false,
        })
    }

    /// Declare a drivable edge that vehicles may only travel `from -> to`.
    #[must_use]
    pub fn one_way(self, from: u64, to: u64, cost: Cost) -> Self {
        self.push_edge(EdgeSpec {
            from,
            to,
            cost,
            drivable: true,
            oneway: true,
        })
    }

    /// Declare an edge open to pedestrians only.
    #[must_use]
    pub fn footpath(self, from: u64, to: u64, cost: Cost) -> Self {
        self.push_edge(EdgeSpec {
            from,
            to,
            cost,
            drivable: false,
            oneway: false,
        })
    }

    fn push_edge(mut self, edge: EdgeSpec) -> Self {
        self.edges.push(edge);
        self
    }

    /// Validate the declarations and assemble the graph.
    pub fn build(self) -> Result<MemoryGraph, GraphError> {
        let mut index = HashMap::with_capacity(self.nodes.len());
        for (position, node) in self.nodes.iter().enumerate() {
            match index.entry(node.id) {
                Entry::Occupied(_) => return Err(GraphError::DuplicateNode { id: node.id }),
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }

        let mut graph = MemoryGraph {
            adjacency: vec![Vec::new(); self.nodes.len()],
            nodes: self.nodes,
            index,
        };
        for edge in &self.edges {
            graph.insert_edge(edge, self.mode)?;
        }
        debug!(
            "Built {:?} graph with {} nodes and {} edge declarations",
            self.mode,
            graph.nodes.len(),
            self.edges.len()
        );
        Ok(graph)
    }
}

/// A fully materialised graph held in memory.
///
/// Node order follows declaration order; neighbour order follows edge
/// declaration order. Self-loops are discarded while building.
#[derive(Debug, Clone, Default)]
pub struct MemoryGraph {
    nodes: Vec<Node>,
    index: HashMap<u64, usize>,
    adjacency: Vec<Vec<(usize, Cost)>>,
}

impl MemoryGraph {
    /// Start building a graph for `mode`.
    pub const fn builder(mode: GraphMode) -> GraphBuilder {
        GraphBuilder {
            mode,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Look up a node by identifier.
    pub fn node(&self, id: u64) -> Option<Node> {
        self.index
            .get(&id)
            .and_then(|&position| self.nodes.get(position))
            .copied()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn position(&self, from: u64, to: u64, id: u64) -> Result<usize, GraphError> {
        self.index
            .get(&id)
            .copied()
            .ok_or(GraphError::UnknownNode { from, to, id })
    }

    fn insert_edge(&mut self, edge: &EdgeSpec, mode: GraphMode) -> Result<(), GraphError> {
        let from = self.position(edge.from, edge.to, edge.from)?;
        let to = self.position(edge.from, edge.to, edge.to)?;
        let (Some(&from_node), Some(&to_node)) = (self.nodes.get(from), self.nodes.get(to)) else {
            return Ok(());
        };
        // Validates the cost with the same rules as search arcs.
        Arc::new(from_node, to_node, edge.cost)?;

        if from == to {
            warn!("Dropped self-loop on node {}", edge.from);
            return Ok(());
        }

        let (forward, backward) = match mode {
            GraphMode::Pedestrian => (true, true),
            GraphMode::Vehicle if !edge.drivable => (false, false),
            GraphMode::Vehicle => (true, !edge.oneway),
        };
        if forward && let Some(row) = self.adjacency.get_mut(from) {
            row.push((to, edge.cost));
        }
        if backward && let Some(row) = self.adjacency.get_mut(to) {
            row.push((from, edge.cost));
        }
        Ok(())
    }
}

impl GraphProvider for MemoryGraph {
    fn all_nodes(&self) -> Vec<Node> {
        self.nodes.clone()
    }

    fn neighbors(&self, node: &Node) -> Vec<(Node, Cost)> {
        let Some(row) = self
            .index
            .get(&node.id)
            .and_then(|&position| self.adjacency.get(position))
        else {
            return Vec::new();
        };
        row.iter()
            .filter_map(|&(position, cost)| self.nodes.get(position).map(|n| (*n, cost)))
            .collect()
    }

    fn distance(&self, from: &Node, to: &Node) -> Cost {
        if from == to {
            return 0.0;
        }
        self.neighbors(from)
            .into_iter()
            .filter(|(neighbor, _)| neighbor == to)
            .map(|(_, cost)| cost)
            .fold(f64::INFINITY, f64::min)
    }
}

#[cfg(feature = "serde")]
mod document {
    use serde::{Deserialize, Serialize};

    use super::{GraphError, MemoryGraph};
    use crate::GraphMode;

    /// Serialised node declaration.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct NodeRecord {
        pub id: u64,
        pub lat: f64,
        pub lon: f64,
    }

    /// Serialised edge declaration.
    ///
    /// Edges default to drivable and two-way.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct EdgeRecord {
        pub from: u64,
        pub to: u64,
        pub cost: f64,
        #[serde(default = "default_drivable")]
        pub drivable: bool,
        #[serde(default)]
        pub oneway: bool,
    }

    const fn default_drivable() -> bool {
        true
    }

    /// A graph as stored on disk.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::{GraphDocument, GraphMode, GraphProvider, MemoryGraph};
    ///
    /// let json = r#"{
    ///     "nodes": [{"id": 1, "lat": 0.0, "lon": 0.0}, {"id": 2, "lat": 0.0, "lon": 0.1}],
    ///     "edges": [{"from": 1, "to": 2, "cost": 5.0, "oneway": true}]
    /// }"#;
    /// let document: GraphDocument = serde_json::from_str(json).expect("valid json");
    /// let graph = MemoryGraph::from_document(&document, GraphMode::Vehicle)?;
    /// assert_eq!(graph.neighbors(&graph.node(1).unwrap()).len(), 1);
    /// assert!(graph.neighbors(&graph.node(2).unwrap()).is_empty());
    /// # Ok::<(), wayfarer_core::GraphError>(())
    /// ```
    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct GraphDocument {
        pub nodes: Vec<NodeRecord>,
        #[serde(default)]
        pub edges: Vec<EdgeRecord>,
    }

    impl MemoryGraph {
        /// Assemble a graph from a decoded document.
        pub fn from_document(
            document: &GraphDocument,
            mode: GraphMode,
        ) -> Result<Self, GraphError> {
            let with_nodes = document
                .nodes
                .iter()
                .fold(Self::builder(mode), |builder, node| {
                    builder.node(node.id, node.lat, node.lon)
                });
            document
                .edges
                .iter()
                .fold(with_nodes, |builder, edge| {
                    match (edge.drivable, edge.oneway) {
                        (false, _) => builder.footpath(edge.from, edge.to, edge.cost),
                        (true, true) => builder.one_way(edge.from, edge.to, edge.cost),
                        (true, false) => builder.edge(edge.from, edge.to, edge.cost),
                    }
                })
                .build()
        }
    }
}

#[cfg(feature = "serde")]
pub use document::{EdgeRecord, GraphDocument, NodeRecord};
