//! Adjacency-list graph backend.

use crate::graph::GraphSpace;
use ambit_core::SpaceError;
use smallvec::SmallVec;

/// A graph stored as per-vertex adjacency lists.
///
/// The reference [`GraphSpace`] backend. Neighbour lists keep insertion
/// order, which is the deterministic one-hop order that
/// [`nearby_positions`](crate::nearby_positions) preserves. Edges may be
/// inserted undirected ([`add_edge`](Self::add_edge)) or as one-way arcs
/// ([`add_arc`](Self::add_arc)); self-loops are permitted.
///
/// # Examples
///
/// ```
/// use ambit_space::{AdjacencyGraph, GraphSpace};
///
/// let g = AdjacencyGraph::undirected(3, &[(0, 1), (1, 2)]).unwrap();
/// assert_eq!(g.vertex_count(), 3);
/// assert_eq!(g.edge_count(), 2);
/// assert_eq!(g.neighbours(1).unwrap().as_slice(), &[0, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<usize>>,
    edges: usize,
}

impl AdjacencyGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `vertex_count == 0`.
    pub fn new(vertex_count: usize) -> Result<Self, SpaceError> {
        if vertex_count == 0 {
            return Err(SpaceError::EmptySpace);
        }
        Ok(Self {
            adjacency: vec![Vec::new(); vertex_count],
            edges: 0,
        })
    }

    /// Create a graph from undirected edges.
    pub fn undirected(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self, SpaceError> {
        let mut graph = Self::new(vertex_count)?;
        for &(a, b) in edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Create a graph from directed arcs.
    pub fn directed(vertex_count: usize, arcs: &[(usize, usize)]) -> Result<Self, SpaceError> {
        let mut graph = Self::new(vertex_count)?;
        for &(from, to) in arcs {
            graph.add_arc(from, to)?;
        }
        Ok(graph)
    }

    /// Insert an undirected edge between `a` and `b`.
    ///
    /// Appends each endpoint to the other's neighbour list (a self-loop
    /// appears once). Counts as one edge.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<(), SpaceError> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        self.adjacency[a].push(b);
        if a != b {
            self.adjacency[b].push(a);
        }
        self.edges += 1;
        Ok(())
    }

    /// Insert a directed arc from `from` to `to`. Counts as one edge.
    pub fn add_arc(&mut self, from: usize, to: usize) -> Result<(), SpaceError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.adjacency[from].push(to);
        self.edges += 1;
        Ok(())
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), SpaceError> {
        if vertex >= self.adjacency.len() {
            return Err(SpaceError::VertexOutOfBounds {
                vertex,
                vertex_count: self.adjacency.len(),
            });
        }
        Ok(())
    }
}

impl GraphSpace for AdjacencyGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn neighbours(&self, vertex: usize) -> Result<SmallVec<[usize; 8]>, SpaceError> {
        self.check_vertex(vertex)?;
        Ok(SmallVec::from_slice(&self.adjacency[vertex]))
    }
}
