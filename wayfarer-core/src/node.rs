//! Graph nodes: opaque identifiers with a geographic position.

use std::fmt;
use std::hash::{Hash, Hasher};

use geo::Coord;

/// A location in the road graph.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. Equality
/// and hashing consider the identifier only, so two nodes carrying the same
/// id but slightly different coordinates are the same graph vertex.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::Node;
///
/// let a = Node::new(7, Coord { x: 13.4, y: 52.5 });
/// let b = Node::new(7, Coord { x: 0.0, y: 0.0 });
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: u64,
    pub location: Coord<f64>,
}

impl Node {
    /// Construct a node from an identifier and location.
    pub const fn new(id: u64, location: Coord<f64>) -> Self {
        Self { id, location }
    }

    /// Construct a node at the origin, for graphs without geometry.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::Node;
    ///
    /// let node = Node::unplaced(3);
    /// assert_eq!(node.location.x, 0.0);
    /// ```
    pub const fn unplaced(id: u64) -> Self {
        Self::new(id, Coord { x: 0.0, y: 0.0 })
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identity_ignores_location() {
        let a = Node::new(1, Coord { x: 1.0, y: 2.0 });
        let b = Node::new(1, Coord { x: 3.0, y: 4.0 });
        let set: HashSet<Node> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn distinct_ids_differ() {
        assert_ne!(Node::unplaced(1), Node::unplaced(2));
    }
}
