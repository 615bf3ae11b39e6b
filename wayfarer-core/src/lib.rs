//! Core domain types for the Wayfarer itinerary engine.
//!
//! These types are shared by the search and planning crates: graph nodes,
//! validated arcs, persistent paths, the [`GraphProvider`] seam, POI
//! candidates and the itinerary returned by a [`Planner`].
//!
//! Constructors that can receive invalid input return `Result` so bad data
//! is rejected before it reaches a search.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod arc;
pub mod graph;
mod itinerary;
mod node;
mod path;
mod planner;
mod poi;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use arc::{Arc, ArcError, Cost};
pub use graph::{GraphBuilder, GraphError, GraphMode, GraphProvider, MemoryGraph};
#[cfg(feature = "serde")]
pub use graph::{EdgeRecord, GraphDocument, NodeRecord};
pub use itinerary::{Itinerary, Route, SearchStats, Segment, Selection, Tour};
pub use node::Node;
pub use path::{Nodes, Path};
pub use planner::{PlanError, PlanRequest, Planner, TourError};
pub use poi::{
    INTEREST_RANGE, MONEY_COST_RANGE, PoiItem, PoiSource, SyntheticPoiSource, TIME_COST_RANGE,
};
