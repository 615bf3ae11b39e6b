//! Property-based tests for the planning components.
//!
//! # Invariants tested
//!
//! - **Selector optimality:** `calculate(0, T, B)` equals the brute-force
//!   best subset, and the reconstructed subset fits both budgets with that
//!   interest.
//! - **Oracle closure:** the diagonal is zero and the triangle inequality
//!   holds for every triple.
//! - **Tour optimality:** the ordered tour costs the same as the cheapest
//!   brute-force cycle.

use proptest::prelude::*;
use wayfarer_core::{GraphMode, MemoryGraph, Node, PoiItem};
use wayfarer_planner::{DistanceOracle, PoiSelector, TourOrderer};

fn item_strategy() -> impl Strategy<Value = PoiItem> {
    (0_u32..=100, 30_u32..=180, 0_u32..=35)
        .prop_map(|(interest, time, cost)| PoiItem::new(interest, time, cost))
}

fn brute_force(items: &[PoiItem], time: u32, budget: u32) -> u64 {
    (0_u32..(1 << items.len()))
        .filter_map(|mask| {
            let chosen = items
                .iter()
                .enumerate()
                .filter(|(index, _)| mask & (1 << index) != 0)
                .map(|(_, item)| item);
            let (mut interest, mut spent_time, mut spent_money) = (0_u64, 0_u64, 0_u64);
            for item in chosen {
                interest += u64::from(item.interest);
                spent_time += u64::from(item.time_cost);
                spent_money += u64::from(item.money_cost);
            }
            (spent_time <= u64::from(time) && spent_money <= u64::from(budget)).then_some(interest)
        })
        .max()
        .unwrap_or(0)
}

fn graph_strategy(max_nodes: u64) -> impl Strategy<Value = (u64, Vec<(u64, u64, u16)>)> {
    (2_u64..=max_nodes).prop_flat_map(|nodes| {
        let edge = (1..=nodes, 1..=nodes, 0_u16..100);
        (Just(nodes), prop::collection::vec(edge, 0..20))
    })
}

fn build_graph(nodes: u64, edges: &[(u64, u64, u16)], mode: GraphMode) -> MemoryGraph {
    let mut builder = MemoryGraph::builder(mode);
    for id in 1..=nodes {
        builder = builder.node(id, 0.0, 0.0);
    }
    for &(from, to, cost) in edges {
        builder = builder.one_way(from, to, f64::from(cost));
    }
    builder.build().expect("generated graph is valid")
}

fn complete_graph(weights: &[u16], nodes: u64) -> MemoryGraph {
    let mut builder = MemoryGraph::builder(GraphMode::Vehicle);
    for id in 1..=nodes {
        builder = builder.node(id, 0.0, 0.0);
    }
    let mut weights = weights.iter().cycle();
    for from in 1..=nodes {
        for to in (from + 1)..=nodes {
            let cost = weights.next().copied().unwrap_or(1);
            builder = builder.edge(from, to, f64::from(cost));
        }
    }
    builder.build().expect("generated graph is valid")
}

fn permutations(items: &[Node]) -> Vec<Vec<Node>> {
    if items.is_empty() {
        return vec![Vec::new()];
    }
    let mut all = Vec::new();
    for (position, item) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(position);
        for mut tail in permutations(&rest) {
            tail.insert(0, *item);
            all.push(tail);
        }
    }
    all
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn selector_matches_brute_force(
        items in prop::collection::vec(item_strategy(), 0..=15),
        time in 0_u32..=400,
        budget in 0_u32..=100,
    ) {
        let expected = brute_force(&items, time, budget);
        let mut selector = PoiSelector::new(items.clone());
        prop_assert_eq!(selector.calculate(0, time, budget), expected);

        let selection = selector.solve(time, budget);
        prop_assert_eq!(selection.total_interest, expected);
        prop_assert!(selection.total_time <= u64::from(time));
        prop_assert!(selection.total_cost <= u64::from(budget));
        prop_assert!(selection.indices.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn oracle_satisfies_triangle_inequality((nodes, edges) in graph_strategy(8)) {
        let graph = build_graph(nodes, &edges, GraphMode::Vehicle);
        let oracle = DistanceOracle::build(&graph);
        let all: Vec<Node> = (1..=nodes).map(Node::unplaced).collect();
        for a in &all {
            prop_assert_eq!(oracle.distance(a, a), 0.0);
            for b in &all {
                for c in &all {
                    let direct = oracle.distance(a, c);
                    let detour = oracle.distance(a, b) + oracle.distance(b, c);
                    prop_assert!(direct <= detour);
                }
            }
        }
    }

    #[test]
    fn tour_matches_brute_force(
        nodes in 2_u64..=6,
        weights in prop::collection::vec(1_u16..50, 15),
    ) {
        let graph = complete_graph(&weights, nodes);
        let oracle = DistanceOracle::build(&graph);
        let orderer = TourOrderer::new(&oracle);
        let start = Node::unplaced(1);
        let waypoints: Vec<Node> = (2..=nodes).map(Node::unplaced).collect();

        let tour = orderer.order(start, &waypoints).expect("complete graph is connected");
        let best = permutations(&waypoints)
            .iter()
            .map(|order| orderer.cycle_cost(start, order))
            .fold(f64::INFINITY, f64::min);
        prop_assert_eq!(tour.cost(), best);
        prop_assert_eq!(tour.stops().len(), waypoints.len() + 1);
        prop_assert_eq!(tour.start(), Some(start));
    }
}
