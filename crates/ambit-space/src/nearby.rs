//! Bounded breadth-first neighborhood expansion over graph spaces.

use crate::graph::GraphSpace;
use ambit_core::SpaceError;
use indexmap::IndexSet;
use std::ops::Range;

/// Number of vertices in a graph space.
pub fn vertex_count<G: GraphSpace + ?Sized>(graph: &G) -> usize {
    graph.vertex_count()
}

/// Number of edges in a graph space.
pub fn edge_count<G: GraphSpace + ?Sized>(graph: &G) -> usize {
    graph.edge_count()
}

/// All positions of a graph space, lazily, in vertex order.
pub fn all_positions<G: GraphSpace + ?Sized>(graph: &G) -> Range<usize> {
    0..graph.vertex_count()
}

/// Vertices reachable within `radius` hops of `position`, excluding
/// `position` itself, without duplicates.
///
/// Output order is strict level-by-level breadth-first discovery order:
/// within a level, frontier vertices are expanded in the order they were
/// discovered, and each one's neighbours land in the one-hop query's
/// order. For `radius == 1` the one-hop result is returned verbatim. The
/// expansion stops early once a level discovers nothing new or every
/// vertex has been found; the early exits never change the result.
///
/// # Errors
///
/// [`SpaceError::InvalidRadius`] if `radius < 1`;
/// [`SpaceError::VertexOutOfBounds`] if `position` is not a valid vertex,
/// surfaced by the one-hop query.
///
/// # Examples
///
/// ```
/// use ambit_space::{nearby_positions, AdjacencyGraph};
///
/// // Path graph 0 - 1 - 2 - 3 - 4, expanded two hops out from the middle.
/// let g = AdjacencyGraph::undirected(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
/// assert_eq!(nearby_positions(2, &g, 2).unwrap(), vec![1, 3, 0, 4]);
/// ```
pub fn nearby_positions<G>(position: usize, graph: &G, radius: u32) -> Result<Vec<usize>, SpaceError>
where
    G: GraphSpace + ?Sized,
{
    if radius < 1 {
        return Err(SpaceError::InvalidRadius { radius });
    }
    let mut nearby: Vec<usize> = graph.neighbours(position)?.into_vec();
    if radius == 1 {
        return Ok(nearby);
    }

    let total = graph.vertex_count();
    let mut visited: IndexSet<usize> = IndexSet::with_capacity(nearby.len() + 1);
    visited.insert(position);
    visited.extend(nearby.iter().copied());

    // Count of vertices already expanded; everything past it is frontier.
    let mut expanded = 0;
    for _ in 1..radius {
        let frontier = expanded..nearby.len();
        if frontier.is_empty() {
            break;
        }
        expanded = nearby.len();
        if expanded == total {
            break;
        }
        for i in frontier {
            for w in graph.neighbours(nearby[i])? {
                if visited.insert(w) {
                    nearby.push(w);
                }
            }
        }
    }
    Ok(nearby)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::AdjacencyGraph;
    use proptest::prelude::*;

    fn path5() -> AdjacencyGraph {
        AdjacencyGraph::undirected(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap()
    }

    // ── Worked examples ─────────────────────────────────────────

    #[test]
    fn path_graph_expands_level_by_level() {
        // Level 1 from the middle: {1, 3}; level 2: 1→0 and 3→4.
        let g = path5();
        assert_eq!(nearby_positions(2, &g, 2).unwrap(), vec![1, 3, 0, 4]);
    }

    #[test]
    fn radius_one_is_the_one_hop_query_verbatim() {
        let g = path5();
        for v in all_positions(&g) {
            assert_eq!(
                nearby_positions(v, &g, 1).unwrap(),
                g.neighbours(v).unwrap().into_vec(),
            );
        }
    }

    #[test]
    fn saturation_stops_growth() {
        let g = path5();
        let full = nearby_positions(2, &g, 4).unwrap();
        assert_eq!(full, vec![1, 3, 0, 4]);
        // Far beyond the diameter: same answer.
        assert_eq!(nearby_positions(2, &g, 1000).unwrap(), full);
    }

    #[test]
    fn expansion_stays_inside_the_component() {
        // Two components: a triangle and an isolated edge.
        let g = AdjacencyGraph::undirected(5, &[(0, 1), (1, 2), (2, 0), (3, 4)]).unwrap();
        assert_eq!(nearby_positions(0, &g, 10).unwrap(), vec![1, 2]);
        assert_eq!(nearby_positions(3, &g, 10).unwrap(), vec![4]);
    }

    #[test]
    fn isolated_vertex_has_an_empty_neighborhood() {
        let g = AdjacencyGraph::new(3).unwrap();
        assert_eq!(nearby_positions(1, &g, 5).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn directed_arcs_expand_one_way_only() {
        // 0 → 1 → 2: nothing reaches back.
        let g = AdjacencyGraph::directed(3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(nearby_positions(0, &g, 2).unwrap(), vec![1, 2]);
        assert_eq!(nearby_positions(2, &g, 2).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn already_visited_vertices_are_not_re_discovered() {
        // Cycle of 4: level 2 from 0 finds only the opposite corner once.
        let g = AdjacencyGraph::undirected(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        assert_eq!(nearby_positions(0, &g, 2).unwrap(), vec![1, 3, 2]);
    }

    // ── Error tests ─────────────────────────────────────────────

    #[test]
    fn zero_radius_is_rejected() {
        let g = path5();
        assert_eq!(
            nearby_positions(2, &g, 0),
            Err(SpaceError::InvalidRadius { radius: 0 })
        );
    }

    #[test]
    fn invalid_start_vertex_is_rejected() {
        let g = path5();
        assert_eq!(
            nearby_positions(9, &g, 1),
            Err(SpaceError::VertexOutOfBounds {
                vertex: 9,
                vertex_count: 5,
            })
        );
    }

    // ── Query helpers ───────────────────────────────────────────

    #[test]
    fn counts_and_positions_delegate_to_the_graph() {
        let g = path5();
        assert_eq!(vertex_count(&g), 5);
        assert_eq!(edge_count(&g), 4);
        assert_eq!(all_positions(&g).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    // ── Property tests ──────────────────────────────────────────

    /// A random simple undirected graph as (vertex count, edge list).
    fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
        (2usize..12).prop_flat_map(|n| {
            let edges = prop::collection::vec((0..n, 0..n), 0..30).prop_map(|raw| {
                // Canonicalize so no vertex pair appears twice.
                let mut edges: Vec<(usize, usize)> = raw
                    .into_iter()
                    .map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
                    .collect();
                edges.sort_unstable();
                edges.dedup();
                edges
            });
            (Just(n), edges)
        })
    }

    proptest! {
        /// Each radius's result is a prefix of the next radius's result,
        /// and no vertex ever appears twice.
        #[test]
        fn expansion_is_monotone_and_duplicate_free(
            (n, edges) in arb_graph(),
            start in 0usize..12,
            radius in 1u32..6,
        ) {
            let start = start % n;
            let g = AdjacencyGraph::undirected(n, &edges).unwrap();

            let inner = nearby_positions(start, &g, radius).unwrap();
            let outer = nearby_positions(start, &g, radius + 1).unwrap();
            prop_assert_eq!(&outer[..inner.len()], &inner[..]);

            let unique: IndexSet<usize> = outer.iter().copied().collect();
            prop_assert_eq!(unique.len(), outer.len());
            prop_assert!(outer.len() <= n);
        }

        /// A large enough radius finds exactly the start's component.
        #[test]
        fn saturated_expansion_is_a_fixed_point(
            (n, edges) in arb_graph(),
            start in 0usize..12,
        ) {
            let start = start % n;
            let g = AdjacencyGraph::undirected(n, &edges).unwrap();
            let all = nearby_positions(start, &g, n as u32 + 1).unwrap();
            let again = nearby_positions(start, &g, n as u32 + 2).unwrap();
            prop_assert_eq!(all, again);
        }
    }
}
