//! Facade crate for the Wayfarer itinerary engine.
//!
//! This crate re-exports the core domain types and the search toolkit, and
//! exposes the itinerary planner behind the `planner` feature.

#![forbid(unsafe_code)]

pub use wayfarer_core::{
    Arc, ArcError, Cost, GraphBuilder, GraphError, GraphMode, GraphProvider, Itinerary,
    MemoryGraph, Node, Path, PlanError, PlanRequest, Planner, PoiItem, PoiSource, Route,
    SearchStats, Segment, Selection, SyntheticPoiSource, Tour, TourError,
};

#[cfg(feature = "serde")]
pub use wayfarer_core::{EdgeRecord, GraphDocument, NodeRecord};

pub use wayfarer_search::{
    AStar, AStarSearcher, DepthFirst, DepthFirstSearcher, ExplicitGraphProblem, Frontier,
    GraphProblem, MppSearcher, MultiplePathPruning, PriorityFrontier, Searcher, StackFrontier,
    Strategy,
};

#[cfg(feature = "planner")]
pub use wayfarer_planner::{
    DistanceOracle, ItineraryPlanner, NodeSampler, PlannerConfig, PoiSelector,
    PointToPointProblem, TourOrderer,
};
