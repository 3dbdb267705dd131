//! 2D lattice exposed both as a metric space and as a graph.

use crate::graph::GraphSpace;
use crate::space::Space;
use ambit_core::SpaceError;
use smallvec::SmallVec;

/// A 4-connected two-dimensional lattice with optional wraparound.
///
/// The map/graph hybrid: cells carry `[row, col]` metric positions, so the
/// distance and direction functions apply through [`Space`], while the
/// same cells are graph vertices in row-major order
/// (`vertex = row * cols + col`), so neighborhood expansion applies
/// through [`GraphSpace`]. Both views share one topology.
///
/// Neighbours are enumerated north, south, west, east. With `wrap` the
/// lattice is a torus and every cell has four neighbours; without it,
/// cells at the boundary have fewer.
///
/// # Examples
///
/// ```
/// use ambit_space::{nearby_positions, euclidean_distance, LatticeGraph, GraphSpace};
///
/// let lat = LatticeGraph::new(4, 4, true).unwrap();
/// assert_eq!(lat.vertex_count(), 16);
///
/// // Corner to corner is one diagonal step on the torus.
/// let d = euclidean_distance(&[0.0, 0.0], &[3.0, 3.0], &lat).unwrap();
/// assert!((d - 2.0_f64.sqrt()).abs() < 1e-12);
///
/// // One hop from the origin wraps on both axes.
/// assert_eq!(nearby_positions(0, &lat, 1).unwrap(), vec![12, 4, 3, 1]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeGraph {
    rows: u32,
    cols: u32,
    wrap: bool,
    size: [f64; 2],
    periodic: [bool; 2],
    edges: usize,
}

impl LatticeGraph {
    /// Create a `rows x cols` lattice; `wrap` makes both axes periodic.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0.
    pub fn new(rows: u32, cols: u32, wrap: bool) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        let mut lattice = Self {
            rows,
            cols,
            wrap,
            size: [f64::from(rows), f64::from(cols)],
            periodic: [wrap, wrap],
            edges: 0,
        };
        // Undirected degree sum counts every edge twice.
        let degree_sum: usize = (0..lattice.cell_count())
            .map(|v| lattice.neighbour_list(v).len())
            .sum();
        lattice.edges = degree_sum / 2;
        Ok(lattice)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `true` if the lattice wraps on both axes.
    pub fn is_wrapped(&self) -> bool {
        self.wrap
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Row-major vertex index of `(row, col)`, if in bounds.
    pub fn vertex_at(&self, row: u32, col: u32) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row as usize * self.cols as usize + col as usize)
        } else {
            None
        }
    }

    /// `(row, col)` of a vertex index, if in bounds.
    pub fn coords_of(&self, vertex: usize) -> Option<(u32, u32)> {
        if vertex < self.cell_count() {
            let cols = self.cols as usize;
            Some(((vertex / cols) as u32, (vertex % cols) as u32))
        } else {
            None
        }
    }

    /// Neighbours of a vertex in north, south, west, east order.
    fn neighbour_list(&self, vertex: usize) -> SmallVec<[usize; 8]> {
        let cols = self.cols as i64;
        let rows = self.rows as i64;
        let r = vertex as i64 / cols;
        let c = vertex as i64 % cols;
        let offsets: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        let mut result = SmallVec::new();
        for (dr, dc) in offsets {
            let nr = resolve_axis(r + dr, rows, self.wrap);
            let nc = resolve_axis(c + dc, cols, self.wrap);
            if let (Some(nr), Some(nc)) = (nr, nc) {
                result.push((nr * cols + nc) as usize);
            }
        }
        result
    }
}

/// Resolve a single axis value: in-bounds passes, out-of-bounds wraps or
/// is omitted.
fn resolve_axis(value: i64, len: i64, wrap: bool) -> Option<i64> {
    if (0..len).contains(&value) {
        Some(value)
    } else if wrap {
        Some(value.rem_euclid(len))
    } else {
        None
    }
}

impl Space for LatticeGraph {
    fn ndim(&self) -> usize {
        2
    }

    fn size(&self) -> &[f64] {
        &self.size
    }

    fn periodicity(&self) -> &[bool] {
        &self.periodic
    }
}

impl GraphSpace for LatticeGraph {
    fn vertex_count(&self) -> usize {
        self.cell_count()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn neighbours(&self, vertex: usize) -> Result<SmallVec<[usize; 8]>, SpaceError> {
        if vertex >= self.cell_count() {
            return Err(SpaceError::VertexOutOfBounds {
                vertex,
                vertex_count: self.cell_count(),
            });
        }
        Ok(self.neighbour_list(vertex))
    }
}
