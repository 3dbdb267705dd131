//! The [`GraphSpace`] capability trait.

use ambit_core::SpaceError;
use smallvec::SmallVec;

/// Capability interface for graph-based spaces.
///
/// Neighborhood expansion depends only on this trait: a vertex count, an
/// edge count, and an ordered one-hop query. Plain graph backends and
/// map/graph hybrids implement it alike; the expander never sees the
/// concrete topology.
///
/// Vertices are indexed `0..vertex_count()` contiguously, and a vertex's
/// index is its position value for agents in the space.
///
/// # Ordering
///
/// [`neighbours`](Self::neighbours) must return coordinates in a
/// deterministic, backend-defined order: it decides the tie-break order of
/// breadth-first expansion, and
/// [`nearby_positions`](crate::nearby_positions) preserves it verbatim at
/// radius 1. The `SmallVec<[usize; 8]>` keeps common degrees off the heap.
pub trait GraphSpace {
    /// Number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Number of edges in the graph.
    fn edge_count(&self) -> usize;

    /// Ordered one-hop neighbours of `vertex`.
    ///
    /// Returns `Err(SpaceError::VertexOutOfBounds)` if `vertex` is not a
    /// valid index.
    fn neighbours(&self, vertex: usize) -> Result<SmallVec<[usize; 8]>, SpaceError>;
}
