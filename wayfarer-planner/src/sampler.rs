//! Bounded random sampling of mutually reachable stops.

use rand::Rng;
use rand::seq::SliceRandom;
use wayfarer_core::{Node, PlanError};

use crate::DistanceOracle;

/// Draws distinct nodes that can all reach one another.
///
/// Each attempt draws nodes one at a time and starts over as soon as a draw
/// repeats an earlier node or cannot reach it in both directions. After
/// `max_attempts` failed attempts sampling gives up.
#[derive(Debug, Clone, Copy)]
pub struct NodeSampler<'a> {
    oracle: &'a DistanceOracle,
    max_attempts: usize,
}

impl<'a> NodeSampler<'a> {
    /// Create a sampler over the nodes covered by `oracle`.
    #[must_use]
    pub const fn new(oracle: &'a DistanceOracle, max_attempts: usize) -> Self {
        Self {
            oracle,
            max_attempts,
        }
    }

    /// Draw `count` distinct, mutually reachable nodes. The first node
    /// drawn is the tour start.
    ///
    /// # Errors
    /// Returns [`PlanError::EmptyGraph`] when there are no nodes and
    /// [`PlanError::InsufficientConnectivity`] when no valid set was found
    /// within the attempt bound, or when `count` exceeds the node count.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Node>, PlanError> {
        let nodes = self.oracle.nodes();
        if nodes.is_empty() {
            return Err(PlanError::EmptyGraph);
        }
        let insufficient = |attempts| PlanError::InsufficientConnectivity {
            required: count,
            available: nodes.len(),
            attempts,
        };
        if count > nodes.len() {
            return Err(insufficient(0));
        }

        for attempt in 1..=self.max_attempts {
            if let Some(chosen) = self.attempt(nodes, count, rng) {
                log::debug!(
                    "sampled {count} stops after {attempt} attempt(s): {}",
                    chosen
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                return Ok(chosen);
            }
        }
        log::warn!(
            "no {count} mutually reachable nodes found in {} attempts",
            self.max_attempts
        );
        Err(insufficient(self.max_attempts))
    }

    fn attempt<R: Rng + ?Sized>(
        &self,
        nodes: &[Node],
        count: usize,
        rng: &mut R,
    ) -> Option<Vec<Node>> {
        let mut chosen: Vec<Node> = Vec::with_capacity(count);
        while chosen.len() < count {
            let candidate = *nodes.choose(rng)?;
            let clashes = chosen
                .iter()
                .any(|earlier| *earlier == candidate || !self.oracle.is_connected(earlier, &candidate));
            if clashes {
                return None;
            }
            chosen.push(candidate);
        }
        Some(chosen)
    }
}
