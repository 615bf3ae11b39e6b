//! Generic best-first graph search for Wayfarer.
//!
//! A [`Searcher`] drives any [`GraphProblem`] and is parameterised by a
//! [`Strategy`] that chooses the [`Frontier`] discipline:
//!
//! - [`DepthFirst`] pushes onto a [`StackFrontier`] in reverse neighbour
//!   order, so the first listed neighbour is explored first.
//! - [`AStar`] orders a [`PriorityFrontier`] by `cost + heuristic(end)`.
//! - [`MultiplePathPruning`] adds an explored set to A* so each node is
//!   expanded at most once.
//!
//! An exhausted frontier is reported as `None`; it is never an error.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod frontier;
mod problem;
mod searcher;
mod strategy;

pub use frontier::{Frontier, PriorityFrontier, StackFrontier};
pub use problem::{ExplicitGraphProblem, GraphProblem};
pub use searcher::{AStarSearcher, DepthFirstSearcher, MppSearcher, Searcher};
pub use strategy::{AStar, DepthFirst, MultiplePathPruning, Strategy};
