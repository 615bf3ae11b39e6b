//! Open sets of paths awaiting expansion.
//!
//! Two disciplines are provided: [`StackFrontier`] (last in, first out) for
//! depth-first search, and [`PriorityFrontier`] (lowest priority first) for
//! A* and multiple-path pruning.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use wayfarer_core::{Cost, Path};

/// A pluggable open set.
pub trait Frontier: Default {
    /// Whether no paths remain.
    fn is_empty(&self) -> bool;

    /// Number of paths held.
    fn len(&self) -> usize;

    /// Insert `path` with `priority`. Stack disciplines ignore the priority
    /// for ordering.
    fn add(&mut self, path: Path, priority: Cost);

    /// Remove and return the next path, or `None` when empty.
    fn pop(&mut self) -> Option<Path>;

    /// Number of entries added with exactly `priority`.
    fn count(&self, priority: Cost) -> usize;

    /// Snapshot view of the held paths in unspecified order.
    ///
    /// Each call starts a fresh iteration.
    fn iter(&self) -> Box<dyn Iterator<Item = &Path> + '_>;
}

/// Last-in, first-out frontier for depth-first search.
///
/// # Examples
/// ```
/// use wayfarer_core::{Node, Path};
/// use wayfarer_search::{Frontier, StackFrontier};
///
/// let mut frontier = StackFrontier::default();
/// frontier.add(Path::start(Node::unplaced(1)), 0.0);
/// frontier.add(Path::start(Node::unplaced(2)), 0.0);
/// assert_eq!(frontier.pop().map(|p| p.end().id), Some(2));
/// ```
#[derive(Debug, Default, Clone)]
pub struct StackFrontier {
    entries: Vec<(Path, Cost)>,
}

impl Frontier for StackFrontier {
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn add(&mut self, path: Path, priority: Cost) {
        self.entries.push((path, priority));
    }

    fn pop(&mut self) -> Option<Path> {
        self.entries.pop().map(|(path, _)| path)
    }

    #[expect(
        clippy::float_cmp,
        reason = "priorities are compared for exact diagnostic equality"
    )]
    fn count(&self, priority: Cost) -> usize {
        self.entries.iter().filter(|(_, p)| *p == priority).count()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Path> + '_> {
        Box::new(self.entries.iter().map(|(path, _)| path))
    }
}

#[derive(Debug, Clone)]
struct Entry {
    priority: Cost,
    sequence: u64,
    path: Path,
}

impl Ord for Entry {
    // `BinaryHeap` pops the greatest entry: the lowest priority wins, and
    // among equal priorities the most recently added entry wins.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-priority frontier keyed by `(priority, insertion order)`.
///
/// Ties resolve towards the most recently added path.
///
/// # Examples
/// ```
/// use wayfarer_core::{Node, Path};
/// use wayfarer_search::{Frontier, PriorityFrontier};
///
/// let mut frontier = PriorityFrontier::default();
/// frontier.add(Path::start(Node::unplaced(1)), 5.0);
/// frontier.add(Path::start(Node::unplaced(2)), 1.0);
/// frontier.add(Path::start(Node::unplaced(3)), 1.0);
/// assert_eq!(frontier.count(1.0), 2);
/// let order: Vec<u64> = std::iter::from_fn(|| frontier.pop()).map(|p| p.end().id).collect();
/// assert_eq!(order, vec![3, 2, 1]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    added: u64,
}

impl Frontier for PriorityFrontier {
    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn add(&mut self, path: Path, priority: Cost) {
        self.added += 1;
        self.heap.push(Entry {
            priority,
            sequence: self.added,
            path,
        });
    }

    fn pop(&mut self) -> Option<Path> {
        self.heap.pop().map(|entry| entry.path)
    }

    #[expect(
        clippy::float_cmp,
        reason = "priorities are compared for exact diagnostic equality"
    )]
    fn count(&self, priority: Cost) -> usize {
        self.heap
            .iter()
            .filter(|entry| entry.priority == priority)
            .count()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Path> + '_> {
        Box::new(self.heap.iter().map(|entry| &entry.path))
    }
}
