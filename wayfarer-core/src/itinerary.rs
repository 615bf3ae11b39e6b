//! Planning outputs: chosen POIs, the ordered tour and the routed legs.

use crate::{Cost, Node, Path};

/// Subset of candidate POIs chosen under the time and money budgets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    /// Indices into the candidate list, ascending.
    pub indices: Vec<usize>,
    pub total_interest: u64,
    pub total_time: u64,
    pub total_cost: u64,
}

impl Selection {
    /// Number of chosen items.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// A closed visiting order; the first stop is the start and the tour
/// returns there after the last stop.
///
/// # Examples
/// ```
/// use wayfarer_core::{Node, Tour};
///
/// let tour = Tour::new(vec![Node::unplaced(1), Node::unplaced(2), Node::unplaced(3)], 9.0);
/// let legs: Vec<(u64, u64)> = tour.legs().map(|(a, b)| (a.id, b.id)).collect();
/// assert_eq!(legs, vec![(1, 2), (2, 3), (3, 1)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    stops: Vec<Node>,
    cost: Cost,
}

impl Tour {
    pub const fn new(stops: Vec<Node>, cost: Cost) -> Self {
        Self { stops, cost }
    }

    pub fn stops(&self) -> &[Node] {
        &self.stops
    }

    /// Total closed-loop cost, including the return to the start.
    pub const fn cost(&self) -> Cost {
        self.cost
    }

    pub fn start(&self) -> Option<Node> {
        self.stops.first().copied()
    }

    /// Every consecutive pair of stops followed by the closing pair back to
    /// the start. A single-stop tour yields one start-to-start leg.
    pub fn legs(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        let closing = match (self.stops.last(), self.stops.first()) {
            (Some(last), Some(first)) => Some((*last, *first)),
            _ => None,
        };
        self.stops
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => Some((*from, *to)),
                _ => None,
            })
            .chain(closing)
    }
}

/// Concrete node sequence between two tour stops.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Nodes in travel order, origin first.
    pub nodes: Vec<Node>,
    pub cost: Cost,
}

impl From<&Path> for Route {
    fn from(path: &Path) -> Self {
        Self {
            nodes: path.to_node_vec(),
            cost: path.cost(),
        }
    }
}

/// Counters reported by a searcher after a `search` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Paths taken off the frontier and expanded (or accepted as solutions).
    pub expanded: usize,
    /// Paths still waiting on the frontier.
    pub frontier_len: usize,
}

/// One routed leg of the tour.
///
/// `route` is `None` when the search exhausted its frontier without
/// reaching `to`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub from: Node,
    pub to: Node,
    pub route: Option<Route>,
    pub stats: SearchStats,
}

/// Result of a planning session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    pub selection: Selection,
    pub tour: Tour,
    pub segments: Vec<Segment>,
}

impl Itinerary {
    /// Sum of the costs of every routed segment.
    pub fn routed_cost(&self) -> Cost {
        self.segments
            .iter()
            .filter_map(|segment| segment.route.as_ref())
            .map(|route| route.cost)
            .sum()
    }

    /// Whether every segment was routed.
    pub fn is_complete(&self) -> bool {
        self.segments.iter().all(|segment| segment.route.is_some())
    }
}
