//! `ItineraryPlanner`: select, sample, order, then route every leg.

use std::cell::OnceCell;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wayfarer_core::{
    GraphProvider, Itinerary, Node, PlanError, PlanRequest, Planner, PoiSource, Route, Segment,
};
use wayfarer_search::MppSearcher;

use crate::{DistanceOracle, NodeSampler, PoiSelector, PointToPointProblem, TourOrderer};

/// Configuration for [`ItineraryPlanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Upper bound on stop-sampling attempts before giving up.
    pub max_sampling_attempts: usize,
    /// Fail the whole plan when a leg has no route instead of recording
    /// the gap.
    pub strict_routes: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_sampling_attempts: 1000,
            strict_routes: false,
        }
    }
}

/// Plans closed multi-stop itineraries over a road graph.
///
/// The distance matrix is computed on first use and reused by every later
/// call to [`Planner::plan`].
///
/// # Examples
/// ```
/// use wayfarer_core::test_support::square_graph;
/// use wayfarer_core::{PlanRequest, Planner, PoiItem};
/// use wayfarer_planner::ItineraryPlanner;
///
/// let items = vec![PoiItem::new(50, 60, 10), PoiItem::new(40, 60, 10)];
/// let planner = ItineraryPlanner::new(square_graph(), items);
/// let itinerary = planner.plan(&PlanRequest {
///     time_budget: 300,
///     money_budget: 100,
///     seed: 1,
/// })?;
/// assert_eq!(itinerary.tour.stops().len(), 3);
/// assert_eq!(itinerary.segments.len(), 3);
/// assert!(itinerary.is_complete());
/// # Ok::<(), wayfarer_core::PlanError>(())
/// ```
#[derive(Debug)]
pub struct ItineraryPlanner<G, S> {
    graph: G,
    source: S,
    config: PlannerConfig,
    oracle: OnceCell<DistanceOracle>,
}

impl<G, S> ItineraryPlanner<G, S>
where
    G: GraphProvider,
    S: PoiSource,
{
    /// Construct a planner using default configuration.
    #[must_use]
    pub fn new(graph: G, source: S) -> Self {
        Self::with_config(graph, source, PlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(graph: G, source: S, config: PlannerConfig) -> Self {
        Self {
            graph,
            source,
            config,
            oracle: OnceCell::new(),
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// The graph being planned over.
    #[must_use]
    pub const fn graph(&self) -> &G {
        &self.graph
    }

    /// The all-pairs distance matrix, built on first access.
    #[must_use]
    pub fn oracle(&self) -> &DistanceOracle {
        self.oracle.get_or_init(|| {
            log::info!("building distance matrix");
            DistanceOracle::build(&self.graph)
        })
    }

    fn route_leg(&self, from: Node, to: Node) -> Result<Segment, PlanError> {
        let problem = PointToPointProblem::new(&self.graph, self.oracle(), from, to);
        let mut searcher = MppSearcher::new(problem);
        let path = searcher.search();
        let stats = searcher.stats();
        log::debug!(
            "leg {from} -> {to}: {} expanded, {} left on frontier",
            stats.expanded,
            stats.frontier_len
        );
        let route = match path {
            Some(found) => Some(Route::from(&found)),
            None if self.config.strict_routes => {
                return Err(PlanError::MissingRoute { from, to });
            }
            None => {
                log::warn!("no route from {from} to {to}; leaving the leg unrouted");
                None
            }
        };
        Ok(Segment {
            from,
            to,
            route,
            stats,
        })
    }
}

impl<G, S> Planner for ItineraryPlanner<G, S>
where
    G: GraphProvider,
    S: PoiSource,
{
    fn plan(&self, request: &PlanRequest) -> Result<Itinerary, PlanError> {
        request.validate()?;

        let mut selector = PoiSelector::from_source(&self.source);
        let selection = selector.solve(request.time_budget, request.money_budget);

        let oracle = self.oracle();
        if oracle.is_empty() {
            return Err(PlanError::EmptyGraph);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
        let sampled = NodeSampler::new(oracle, self.config.max_sampling_attempts)
            .sample(selection.len() + 1, &mut rng)?;
        let Some((start, waypoints)) = sampled.split_first() else {
            return Err(PlanError::EmptyGraph);
        };

        let tour = TourOrderer::new(oracle).order(*start, waypoints)?;
        let segments = tour
            .legs()
            .map(|(from, to)| self.route_leg(from, to))
            .collect::<Result<Vec<_>, _>>()?;

        let itinerary = Itinerary {
            selection,
            tour,
            segments,
        };
        log::info!(
            "planned {} stops with tour cost {} and routed cost {}",
            itinerary.tour.stops().len(),
            itinerary.tour.cost(),
            itinerary.routed_cost()
        );
        Ok(itinerary)
    }
}
