//! Behavioural tests for the searcher family using rstest-bdd.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wayfarer_core::test_support::{grid_graph, split_graph, square, square_graph};
use wayfarer_core::{Arc, GraphMode, GraphProvider, MemoryGraph, Node, Path};
use wayfarer_search::{AStar, DepthFirst, GraphProblem, MultiplePathPruning, Searcher, Strategy};

/// Point-to-point problem over a graph provider that counts expansions.
struct CountingProblem<'a> {
    graph: &'a MemoryGraph,
    start: Node,
    goal: Node,
    expansions: HashMap<u64, usize>,
}

impl GraphProblem for CountingProblem<'_> {
    fn start(&self) -> Node {
        self.start
    }

    fn is_goal(&self, node: &Node) -> bool {
        *node == self.goal
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn neighbors(&mut self, node: &Node) -> Vec<Arc> {
        *self.expansions.entry(node.id).or_default() += 1;
        self.graph
            .neighbors(node)
            .into_iter()
            .map(|(to, cost)| Arc::new(*node, to, cost).expect("graph costs are valid"))
            .collect()
    }
}

#[derive(Default)]
struct SearchWorld {
    graph: RefCell<Option<MemoryGraph>>,
    endpoints: Cell<(u64, u64)>,
    route: RefCell<Option<Path>>,
    expansions: RefCell<HashMap<u64, usize>>,
    frontier_len: Cell<usize>,
}

impl SearchWorld {
    fn load(&self, graph: MemoryGraph, from: u64, to: u64) {
        self.graph.replace(Some(graph));
        self.endpoints.set((from, to));
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn run<S: Strategy>(&self) {
        let graph_ref = self.graph.borrow();
        let graph = graph_ref.as_ref().expect("graph should be loaded");
        let (from, to) = self.endpoints.get();
        let problem = CountingProblem {
            graph,
            start: graph.node(from).expect("known start"),
            goal: graph.node(to).expect("known goal"),
            expansions: HashMap::new(),
        };
        let mut searcher: Searcher<CountingProblem<'_>, S> = Searcher::new(problem);
        self.route.replace(searcher.search());
        self.frontier_len.set(searcher.stats().frontier_len);
        self.expansions.replace(searcher.into_problem().expansions);
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn route(&self) -> Path {
        self.route.borrow().clone().expect("a route should be found")
    }

    fn assert_visits(&self, expected: &[u64]) {
        let ids: Vec<u64> = self.route().to_node_vec().iter().map(|n| n.id).collect();
        assert_eq!(ids, expected);
    }
}

#[fixture]
fn world() -> SearchWorld {
    SearchWorld::default()
}

#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn diamond() -> MemoryGraph {
    MemoryGraph::builder(GraphMode::Vehicle)
        .node(1, 0.0, 0.0)
        .node(2, 0.001, 0.0)
        .node(3, -0.001, 0.0)
        .node(4, 0.0, 0.001)
        .one_way(1, 2, 1.0)
        .one_way(1, 3, 1.0)
        .one_way(2, 4, 5.0)
        .one_way(3, 4, 1.0)
        .build()
        .expect("diamond is valid")
}

#[given("a one-way diamond with a cheap lower branch")]
fn given_diamond(world: &SearchWorld) {
    world.load(diamond(), 1, 4);
}

#[given("the square reference graph searched from D to A")]
fn given_square(world: &SearchWorld) {
    world.load(square_graph(), square::D, square::A);
}

#[given("a five by five grid searched corner to corner")]
fn given_grid(world: &SearchWorld) {
    world.load(grid_graph(5, 5), 1, 25);
}

#[given("two disconnected components searched across the gap")]
fn given_split(world: &SearchWorld) {
    world.load(split_graph(), 1, 3);
}

#[when("a depth-first search runs")]
fn when_depth_first(world: &SearchWorld) {
    world.run::<DepthFirst>();
}

#[when("an A-star search runs")]
fn when_astar(world: &SearchWorld) {
    world.run::<AStar>();
}

#[when("a pruned A-star search runs")]
fn when_pruned(world: &SearchWorld) {
    world.run::<MultiplePathPruning>();
}

#[then("the route visits nodes 1, 2 and 4")]
fn then_upper_branch(world: &SearchWorld) {
    world.assert_visits(&[1, 2, 4]);
}

#[then("the route visits nodes 1, 3 and 4")]
fn then_lower_branch(world: &SearchWorld) {
    world.assert_visits(&[1, 3, 4]);
}

#[then("the route visits nodes 4 and 1")]
fn then_direct_edge(world: &SearchWorld) {
    world.assert_visits(&[square::D, square::A]);
}

#[then("the route costs 6")]
fn then_costs_six(world: &SearchWorld) {
    assert_eq!(world.route().cost(), 6.0);
}

#[then("the route costs 2")]
fn then_costs_two(world: &SearchWorld) {
    assert_eq!(world.route().cost(), 2.0);
}

#[then("the route costs 3")]
fn then_costs_three(world: &SearchWorld) {
    assert_eq!(world.route().cost(), 3.0);
}

#[then("the route costs 8")]
fn then_costs_eight(world: &SearchWorld) {
    assert_eq!(world.route().cost(), 8.0);
}

#[then("no node was expanded twice")]
fn then_single_expansions(world: &SearchWorld) {
    let expansions = world.expansions.borrow();
    assert!(!expansions.is_empty());
    assert!(expansions.values().all(|count| *count == 1));
}

#[then("no route is found")]
fn then_no_route(world: &SearchWorld) {
    assert!(world.route.borrow().is_none());
}

#[then("the frontier is empty")]
fn then_frontier_empty(world: &SearchWorld) {
    assert_eq!(world.frontier_len.get(), 0);
    assert_eq!(world.expansions.borrow().len(), 2);
}

#[scenario(path = "tests/features/searcher.feature", index = 0)]
fn depth_first_returns_first_route(world: SearchWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/searcher.feature", index = 1)]
fn astar_returns_cheapest_route(world: SearchWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/searcher.feature", index = 2)]
fn pruned_search_uses_direct_edge(world: SearchWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/searcher.feature", index = 3)]
fn pruned_search_expands_once(world: SearchWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/searcher.feature", index = 4)]
fn unreachable_goal_exhausts(world: SearchWorld) {
    let _ = world;
}
