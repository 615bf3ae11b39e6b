//! Graph fixtures shared by unit, behaviour and property tests.
//!
//! Gated behind the `test-support` feature (and `cfg(test)`).

use crate::{GraphMode, MemoryGraph};

/// Identifiers of the four-node reference graph.
pub mod square {
    pub const A: u64 = 1;
    pub const B: u64 = 2;
    pub const C: u64 = 3;
    pub const D: u64 = 4;
}

/// Four nodes with undirected distances `A-B = 1`, `B-C = 2`, `C-D = 1`,
/// `D-A = 3`, `A-C = 4` and `B-D = 4`.
///
/// The cheapest closed tour is `A -> B -> C -> D -> A` with cost 7.
///
/// # Panics
/// Never; the fixture is statically valid.
#[expect(clippy::expect_used, reason = "fixture data is statically valid")]
pub fn square_graph() -> MemoryGraph {
    use square::{A, B, C, D};
    MemoryGraph::builder(GraphMode::Vehicle)
        .node(A, 0.0, 0.0)
        .node(B, 0.0, 0.001)
        .node(C, 0.001, 0.001)
        .node(D, 0.001, 0.0)
        .edge(A, B, 1.0)
        .edge(B, C, 2.0)
        .edge(C, D, 1.0)
        .edge(D, A, 3.0)
        .edge(A, C, 4.0)
        .edge(B, D, 4.0)
        .build()
        .expect("square fixture is valid")
}

/// A `width x height` lattice with unit-cost, two-way edges between
/// horizontal and vertical neighbours.
///
/// Node `(column, row)` has id `row * width + column + 1`.
///
/// # Panics
/// Never; generated ids are unique and every edge cost is `1.0`.
#[expect(clippy::expect_used, reason = "generated fixture is valid by construction")]
pub fn grid_graph(width: u64, height: u64) -> MemoryGraph {
    let id = |column: u64, row: u64| row * width + column + 1;
    let mut builder = MemoryGraph::builder(GraphMode::Vehicle);
    for row in 0..height {
        for column in 0..width {
            builder = builder.node(id(column, row), row as f64 * 0.001, column as f64 * 0.001);
        }
    }
    for row in 0..height {
        for column in 0..width {
            if column + 1 < width {
                builder = builder.edge(id(column, row), id(column + 1, row), 1.0);
            }
            if row + 1 < height {
                builder = builder.edge(id(column, row), id(column, row + 1), 1.0);
            }
        }
    }
    builder.build().expect("grid fixture is valid")
}

/// Two disjoint two-node components: `1 <-> 2` and `3 <-> 4`.
///
/// # Panics
/// Never; the fixture is statically valid.
#[expect(clippy::expect_used, reason = "fixture data is statically valid")]
pub fn split_graph() -> MemoryGraph {
    MemoryGraph::builder(GraphMode::Vehicle)
        .node(1, 0.0, 0.0)
        .node(2, 0.0, 0.001)
        .node(3, 1.0, 1.0)
        .node(4, 1.0, 1.001)
        .edge(1, 2, 1.0)
        .edge(3, 4, 1.0)
        .build()
        .expect("split fixture is valid")
}
