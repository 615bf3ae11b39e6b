//! Itinerary planning for Wayfarer.
//!
//! [`ItineraryPlanner`] implements [`Planner`](wayfarer_core::Planner) as a
//! fixed pipeline:
//!
//! 1. [`PoiSelector`] picks the most interesting POIs that fit the time and
//!    money budgets, which fixes the number of stops.
//! 2. [`NodeSampler`] draws that many distinct, mutually reachable nodes
//!    plus a start, using the [`DistanceOracle`] to test reachability.
//! 3. [`TourOrderer`] finds the cheapest closed visiting order.
//! 4. Each leg, including the return to the start, is routed by a pruning
//!    A* search over a [`PointToPointProblem`].
//!
//! The distance oracle is the dominant cost at `O(n³)` and is computed once
//! per planner.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod oracle;
mod planner;
mod problem;
mod sampler;
mod selector;
mod tour;

pub use oracle::DistanceOracle;
pub use planner::{ItineraryPlanner, PlannerConfig};
pub use problem::PointToPointProblem;
pub use sampler::NodeSampler;
pub use selector::PoiSelector;
pub use tour::TourOrderer;
