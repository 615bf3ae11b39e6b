//! All-pairs shortest distances by Floyd-Warshall closure.

use std::collections::HashMap;

use wayfarer_core::{Cost, GraphProvider, Node};

/// Complete pairwise shortest-distance matrix over a graph.
///
/// Built once per planning session in `O(n³)` time and `O(n²)` memory, then
/// queried read-only by the tour orderer, the node sampler and as the A*
/// heuristic. Unreachable pairs hold [`f64::INFINITY`].
///
/// # Examples
/// ```
/// use wayfarer_core::test_support::{square, square_graph};
/// use wayfarer_core::Node;
/// use wayfarer_planner::DistanceOracle;
///
/// let oracle = DistanceOracle::build(&square_graph());
/// let a = Node::unplaced(square::A);
/// let c = Node::unplaced(square::C);
/// // A-B-C (1 + 2) beats the direct A-C edge (4).
/// assert_eq!(oracle.distance(&a, &c), 3.0);
/// assert_eq!(oracle.distance(&a, &a), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceOracle {
    nodes: Vec<Node>,
    index: HashMap<Node, usize>,
    rows: Vec<Vec<Cost>>,
}

impl DistanceOracle {
    /// Seed the matrix with direct edge distances and close it.
    #[must_use]
    pub fn build<G: GraphProvider + ?Sized>(graph: &G) -> Self {
        let nodes = graph.all_nodes();
        let index: HashMap<Node, usize> = nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (*node, position))
            .collect();
        let mut rows: Vec<Vec<Cost>> = (0..nodes.len())
            .map(|row| {
                (0..nodes.len())
                    .map(|column| if row == column { 0.0 } else { f64::INFINITY })
                    .collect()
            })
            .collect();

        for (from, row) in nodes.iter().zip(rows.iter_mut()) {
            for (neighbor, edge_cost) in graph.neighbors(from) {
                if neighbor == *from {
                    continue;
                }
                let Some(cell) = index.get(&neighbor).and_then(|&column| row.get_mut(column))
                else {
                    log::warn!("neighbour {neighbor} of {from} is not a known node; ignoring");
                    continue;
                };
                let direct = graph.distance(from, &neighbor);
                let seed = if direct.is_finite() && direct >= 0.0 {
                    direct
                } else {
                    log::warn!(
                        "graph reports no direct distance from {from} to {neighbor}; \
                         using edge cost {edge_cost}"
                    );
                    edge_cost
                };
                *cell = cell.min(seed);
            }
        }

        close(&mut rows);
        log::debug!("distance matrix built over {} nodes", nodes.len());
        Self { nodes, index, rows }
    }

    /// Shortest distance from `from` to `to`.
    ///
    /// Returns [`f64::INFINITY`] when no route exists or either node is
    /// unknown.
    #[must_use]
    pub fn distance(&self, from: &Node, to: &Node) -> Cost {
        self.index
            .get(from)
            .zip(self.index.get(to))
            .and_then(|(&row, &column)| self.rows.get(row)?.get(column).copied())
            .unwrap_or(f64::INFINITY)
    }

    /// Whether `a` and `b` can reach each other in both directions.
    #[must_use]
    pub fn is_connected(&self, a: &Node, b: &Node) -> bool {
        self.distance(a, b).is_finite() && self.distance(b, a).is_finite()
    }

    /// Every node covered by the matrix, in graph order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the matrix covers no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Relax every pair through each intermediate node in turn.
///
/// Row `k` is unchanged while `k` is the intermediate, so a copy of it can
/// be read while the other rows are updated.
#[expect(
    clippy::float_arithmetic,
    reason = "path relaxation sums edge distances"
)]
fn close(rows: &mut [Vec<Cost>]) {
    for k in 0..rows.len() {
        let Some(via_row) = rows.get(k).cloned() else {
            continue;
        };
        for row in rows.iter_mut() {
            let Some(to_k) = row.get(k).copied() else {
                continue;
            };
            if to_k.is_infinite() {
                continue;
            }
            for (cell, from_k) in row.iter_mut().zip(&via_row) {
                let candidate = to_k + from_k;
                if candidate < *cell {
                    *cell = candidate;
                }
            }
        }
    }
}
