//! Exact closed-tour ordering by exhaustive permutation search.

use itertools::Itertools;
use wayfarer_core::{Cost, Node, Tour, TourError};

use crate::DistanceOracle;

/// Orders waypoints into the cheapest closed loop from a fixed start.
///
/// Every permutation of the waypoints is evaluated, so cost grows
/// factorially with the waypoint count. Among equally cheap orders the one
/// enumerated last wins. Orders whose loop crosses an unreachable pair are
/// never chosen.
///
/// # Examples
/// ```
/// use wayfarer_core::test_support::{square, square_graph};
/// use wayfarer_core::Node;
/// use wayfarer_planner::{DistanceOracle, TourOrderer};
///
/// let oracle = DistanceOracle::build(&square_graph());
/// let [a, b, c, d] = [square::A, square::B, square::C, square::D].map(Node::unplaced);
/// let tour = TourOrderer::new(&oracle).order(a, &[c, d, b])?;
/// assert_eq!(tour.cost(), 7.0);
/// assert_eq!(tour.start(), Some(a));
/// # Ok::<(), wayfarer_core::TourError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TourOrderer<'a> {
    oracle: &'a DistanceOracle,
}

impl<'a> TourOrderer<'a> {
    /// Create an orderer weighing legs by `oracle` distances.
    #[must_use]
    pub const fn new(oracle: &'a DistanceOracle) -> Self {
        Self { oracle }
    }

    /// Find the cheapest visiting order of `waypoints` starting and ending
    /// at `start`.
    ///
    /// With no waypoints the tour is `start` alone at zero cost.
    ///
    /// # Errors
    /// Returns [`TourError::Unreachable`] when every order includes a leg
    /// with no route.
    pub fn order(&self, start: Node, waypoints: &[Node]) -> Result<Tour, TourError> {
        let mut best: Option<(Vec<Node>, Cost)> = None;
        for order in waypoints.iter().copied().permutations(waypoints.len()) {
            let cost = self.cycle_cost(start, &order);
            if !cost.is_finite() {
                continue;
            }
            if best.as_ref().is_none_or(|(_, minimum)| cost <= *minimum) {
                best = Some((order, cost));
            }
        }
        let Some((order, cost)) = best else {
            return Err(TourError::Unreachable {
                stops: waypoints.len() + 1,
            });
        };
        let stops: Vec<Node> = std::iter::once(start).chain(order).collect();
        log::debug!(
            "best tour {} costs {cost}",
            stops.iter().map(ToString::to_string).join(" -> ")
        );
        Ok(Tour::new(stops, cost))
    }

    /// Cost of `start -> order... -> start`.
    #[expect(clippy::float_arithmetic, reason = "tour cost sums leg distances")]
    #[must_use]
    pub fn cycle_cost(&self, start: Node, order: &[Node]) -> Cost {
        let mut cost = 0.0;
        let mut previous = start;
        for stop in order {
            cost += self.oracle.distance(&previous, stop);
            previous = *stop;
        }
        cost + self.oracle.distance(&previous, &start)
    }
}
