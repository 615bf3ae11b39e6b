use thiserror::Error;

use crate::{Itinerary, Node};

/// Parameters for one planning session.
///
/// The request captures the visitor's time budget in minutes, their money
/// budget and a random seed for deterministic node sampling.
///
/// # Examples
/// ```rust
/// use wayfarer_core::PlanRequest;
///
/// let request = PlanRequest {
///     time_budget: 300,
///     money_budget: 100,
///     seed: 1,
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Time budget in minutes.
    pub time_budget: u32,
    /// Money budget.
    pub money_budget: u32,
    /// Seed for reproducible stochastic components.
    pub seed: u64,
}

impl PlanRequest {
    /// Reject requests that cannot produce a meaningful itinerary.
    pub const fn validate(&self) -> Result<(), PlanError> {
        if self.time_budget == 0 {
            return Err(PlanError::InvalidRequest);
        }
        Ok(())
    }
}

/// Errors returned by the tour orderer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// No visiting order forms a closed loop with finite cost.
    #[error("no closed tour through {stops} stops has a finite cost")]
    Unreachable { stops: usize },
}

/// Errors returned by [`Planner::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Request parameters were invalid, e.g. a zero time budget.
    #[error("invalid request")]
    InvalidRequest,
    /// The graph has no nodes to visit.
    #[error("graph contains no nodes")]
    EmptyGraph,
    /// Sampling could not find enough distinct, mutually reachable nodes.
    #[error(
        "could not find {required} distinct mutually reachable nodes among {available} \
         after {attempts} attempts"
    )]
    InsufficientConnectivity {
        required: usize,
        available: usize,
        attempts: usize,
    },
    /// The sampled stops could not be ordered into a closed tour.
    #[error(transparent)]
    Tour(#[from] TourError),
    /// A tour leg had no route and the planner runs in strict mode.
    #[error("no route from node {from} to node {to}")]
    MissingRoute { from: Node, to: Node },
}

/// Plan an itinerary satisfying the caller's budgets.
///
/// Implementations should return [`PlanError::InvalidRequest`] for invalid
/// parameters rather than panicking.
pub trait Planner {
    /// Plan a session, producing an itinerary or an error.
    fn plan(&self, request: &PlanRequest) -> Result<Itinerary, PlanError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Selection, Tour};
    use rstest::rstest;

    struct DummyPlanner;

    impl Planner for DummyPlanner {
        fn plan(&self, request: &PlanRequest) -> Result<Itinerary, PlanError> {
            request.validate()?;
            Ok(Itinerary {
                selection: Selection::default(),
                tour: Tour::new(Vec::new(), 0.0),
                segments: Vec::new(),
            })
        }
    }

    #[rstest]
    #[case(300, true)]
    #[case(1, true)]
    #[case(0, false)]
    fn planner_validates_time_budget(#[case] time_budget: u32, #[case] should_succeed: bool) {
        let request = PlanRequest {
            time_budget,
            money_budget: 0,
            seed: 0,
        };
        assert_eq!(DummyPlanner.plan(&request).is_ok(), should_succeed);
    }

    #[rstest]
    fn connectivity_error_reports_counts() {
        let err = PlanError::InsufficientConnectivity {
            required: 4,
            available: 3,
            attempts: 10,
        };
        assert_eq!(
            err.to_string(),
            "could not find 4 distinct mutually reachable nodes among 3 after 10 attempts"
        );
    }
}
