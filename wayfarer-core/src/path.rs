//! Persistent search paths.
//!
//! A [`Path`] is either a bare start node or a prior path extended by one
//! [`Arc`]. Extensions share their prefix through reference counting, so many
//! frontier entries branching from a common ancestor hold a single copy of
//! that ancestor. Paths never change after construction.

use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

use crate::{Arc, Cost, Node};

#[derive(Debug)]
enum Link {
    Start(Node),
    // `prefix` is only `None` while the link is being dropped.
    Extend {
        prefix: Option<Path>,
        arc: Arc,
        cost: Cost,
    },
}

impl Link {
    fn take_prefix(&mut self) -> Option<Path> {
        match self {
            Self::Start(_) => None,
            Self::Extend { prefix, .. } => prefix.take(),
        }
    }
}

// Unlinks uniquely owned prefixes one at a time so dropping a long chain
// does not recurse once per arc.
impl Drop for Link {
    fn drop(&mut self) {
        let mut next = self.take_prefix();
        while let Some(path) = next {
            next = Rc::try_unwrap(path.link)
                .ok()
                .and_then(|mut link| link.take_prefix());
        }
    }
}

/// An immutable route expressed as a backward chain of arcs.
///
/// Cloning a path is cheap: only the reference count changes.
///
/// # Examples
/// ```
/// use wayfarer_core::{Arc, Node, Path};
///
/// let a = Node::unplaced(1);
/// let b = Node::unplaced(2);
/// let c = Node::unplaced(3);
/// let path = Path::start(a)
///     .extend(Arc::new(a, b, 2.0).expect("valid arc"))
///     .extend(Arc::new(b, c, 3.0).expect("valid arc"));
///
/// assert_eq!(path.end(), c);
/// assert_eq!(path.cost(), 5.0);
/// assert_eq!(path.nodes().collect::<Vec<_>>(), vec![c, b, a]);
/// ```
#[derive(Debug, Clone)]
pub struct Path {
    link: Rc<Link>,
}

impl Path {
    /// A zero-cost path consisting of `node` alone.
    pub fn start(node: Node) -> Self {
        Self {
            link: Rc::new(Link::Start(node)),
        }
    }

    /// Extend this path by `arc`, returning a new path that shares `self`.
    ///
    /// `arc` must leave from [`Path::end`].
    pub fn extend(&self, arc: Arc) -> Self {
        debug_assert_eq!(
            arc.from_node(),
            self.end(),
            "arc must leave from the end of the path"
        );
        let cost = self.cost() + arc.cost();
        Self {
            link: Rc::new(Link::Extend {
                prefix: Some(self.clone()),
                arc,
                cost,
            }),
        }
    }

    /// The terminal node.
    pub fn end(&self) -> Node {
        match self.link.as_ref() {
            Link::Start(node) => *node,
            Link::Extend { arc, .. } => arc.to_node(),
        }
    }

    /// Cumulative cost of every arc along the path.
    pub fn cost(&self) -> Cost {
        match self.link.as_ref() {
            Link::Start(_) => 0.0,
            Link::Extend { cost, .. } => *cost,
        }
    }

    /// The final arc, or `None` for a bare start node.
    pub fn arc(&self) -> Option<&Arc> {
        match self.link.as_ref() {
            Link::Start(_) => None,
            Link::Extend { arc, .. } => Some(arc),
        }
    }

    /// The path this one extends, or `None` for a bare start node.
    pub fn prefix(&self) -> Option<&Self> {
        match self.link.as_ref() {
            Link::Start(_) => None,
            Link::Extend { prefix, .. } => prefix.as_ref(),
        }
    }

    /// The first node of the path.
    pub fn start_node(&self) -> Node {
        let mut current = self;
        while let Some(prefix) = current.prefix() {
            current = prefix;
        }
        current.end()
    }

    /// Nodes from the end of the path back to its start.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            current: Some(self),
        }
    }

    /// Nodes before the end node, from the end backwards.
    pub fn initial_nodes(&self) -> Nodes<'_> {
        Nodes {
            current: self.prefix(),
        }
    }

    /// Arcs from the end of the path back to its start.
    pub fn arcs(&self) -> impl Iterator<Item = &Arc> {
        let mut current = Some(self);
        std::iter::from_fn(move || {
            let path = current?;
            current = path.prefix();
            path.arc()
        })
    }

    /// Number of arcs in the path.
    pub fn len(&self) -> usize {
        self.arcs().count()
    }

    /// Whether the path is a bare start node.
    pub fn is_empty(&self) -> bool {
        self.arc().is_none()
    }

    /// Nodes in travel order, start first.
    pub fn to_node_vec(&self) -> Vec<Node> {
        let mut nodes: Vec<Node> = self.nodes().collect();
        nodes.reverse();
        nodes
    }
}

/// Iterator over the nodes of a [`Path`], last node first.
///
/// Created by [`Path::nodes`] and [`Path::initial_nodes`].
#[derive(Debug, Clone)]
pub struct Nodes<'a> {
    current: Option<&'a Path>,
}

impl Iterator for Nodes<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.current?;
        self.current = path.prefix();
        Some(path.end())
    }
}

impl FusedIterator for Nodes<'_> {}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut arcs: Vec<&Arc> = self.arcs().collect();
        arcs.reverse();
        write!(f, "{}", self.start_node())?;
        for arc in arcs {
            match arc.action() {
                Some(action) => write!(f, " --{action}--> {}", arc.to_node())?,
                None => write!(f, " --> {}", arc.to_node())?,
            }
        }
        Ok(())
    }
}
