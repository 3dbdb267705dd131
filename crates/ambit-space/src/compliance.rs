//! Contract compliance test helpers.
//!
//! These functions verify that a backend satisfies the invariants the
//! capability traits promise. Reused across backend test modules
//! (BoxSpace, AdjacencyGraph, LatticeGraph).

use crate::direction::get_direction;
use crate::graph::GraphSpace;
use crate::lattice::LatticeGraph;
use crate::metric::{euclidean_distance, manhattan_distance};
use crate::nearby::nearby_positions;
use crate::space::Space;
use ambit_core::Position;
use indexmap::IndexSet;
use smallvec::smallvec;

const EPS: f64 = 1e-9;

/// Assert metric laws for both distances over all position pairs:
/// non-negativity, `d(a, a) == 0`, symmetry, and the triangle inequality.
pub fn assert_metric_laws(space: &dyn Space, positions: &[Position]) {
    let metrics: [fn(&Position, &Position, &dyn Space) -> Result<f64, ambit_core::SpaceError>;
        2] = [
        |a, b, s| euclidean_distance(a, b, s),
        |a, b, s| manhattan_distance(a, b, s),
    ];
    for dist in metrics {
        for a in positions {
            let daa = dist(a, a, space).unwrap();
            assert!(daa.abs() < EPS, "d({a:?}, {a:?}) = {daa}, expected 0");
            for b in positions {
                let dab = dist(a, b, space).unwrap();
                let dba = dist(b, a, space).unwrap();
                assert!(dab >= 0.0, "d({a:?}, {b:?}) = {dab} is negative");
                assert!(
                    (dab - dba).abs() < EPS,
                    "d({a:?}, {b:?}) = {dab} != d({b:?}, {a:?}) = {dba}"
                );
                for c in positions {
                    let dac = dist(a, c, space).unwrap();
                    let dbc = dist(b, c, space).unwrap();
                    assert!(
                        dac <= dab + dbc + EPS,
                        "triangle inequality violated: d({a:?},{c:?})={dac} > \
                         d({a:?},{b:?})={dab} + d({b:?},{c:?})={dbc}"
                    );
                }
            }
        }
    }
}

/// Assert that displacements from [`get_direction`] reach their target:
/// modulo the extent on periodic dimensions (never by more than half of
/// it), exactly on non-periodic ones.
pub fn assert_direction_consistent(space: &dyn Space, positions: &[Position]) {
    let size = space.size();
    let mask = space.periodicity();
    for from in positions {
        for to in positions {
            let v = get_direction(from, to, space).unwrap();
            for i in 0..space.ndim() {
                if mask[i] {
                    let drift = (from[i] + v[i] - to[i]).rem_euclid(size[i]);
                    assert!(
                        drift < EPS || (size[i] - drift) < EPS,
                        "direction {v:?} from {from:?} misses {to:?} on dim {i}"
                    );
                    assert!(
                        v[i].abs() <= size[i] / 2.0 + EPS,
                        "direction {v:?} exceeds half the extent on dim {i}"
                    );
                } else {
                    assert!(
                        (from[i] + v[i] - to[i]).abs() < EPS,
                        "direction {v:?} from {from:?} misses {to:?} on dim {i}"
                    );
                }
            }
        }
    }
}

/// Run both metric compliance suites on a space.
pub fn run_metric_compliance(space: &dyn Space, positions: &[Position]) {
    assert_metric_laws(space, positions);
    assert_direction_consistent(space, positions);
}

/// Assert the neighborhood-expansion contract for every vertex up to
/// `max_radius`: radius 1 reproduces the one-hop query verbatim, each
/// radius's result is a prefix of the next, later levels never re-discover
/// the start or a level-1 vertex, and results stay within the graph.
pub fn run_graph_compliance(graph: &dyn GraphSpace, max_radius: u32) {
    let n = graph.vertex_count();
    for v in 0..n {
        let one_hop = graph.neighbours(v).unwrap().into_vec();
        assert_eq!(
            nearby_positions(v, graph, 1).unwrap(),
            one_hop,
            "radius-1 expansion of {v} differs from the one-hop query"
        );
        for radius in 1..max_radius {
            let inner = nearby_positions(v, graph, radius).unwrap();
            let outer = nearby_positions(v, graph, radius + 1).unwrap();
            assert!(outer.len() <= n);
            assert_eq!(
                &outer[..inner.len()],
                &inner[..],
                "radius-{radius} expansion of {v} is not a prefix of radius-{}",
                radius + 1
            );
            // Levels past the first are deduplicated at discovery time.
            let mut seen: IndexSet<usize> = one_hop.iter().copied().collect();
            seen.insert(v);
            for &w in &outer[one_hop.len()..] {
                assert!(
                    seen.insert(w),
                    "vertex {w} re-discovered while expanding {v}"
                );
            }
        }
    }
}

/// Every cell position of a lattice, row-major.
pub fn lattice_positions(lattice: &LatticeGraph) -> Vec<Position> {
    let mut out = Vec::with_capacity(lattice.cell_count());
    for r in 0..lattice.rows() {
        for c in 0..lattice.cols() {
            out.push(smallvec![f64::from(r), f64::from(c)]);
        }
    }
    out
}
