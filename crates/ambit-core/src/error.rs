//! Error types for spatial-metric operations.

use std::fmt;

/// Errors arising from space construction or spatial queries.
///
/// All failures are reported synchronously to the immediate caller. The
/// operations here are deterministic pure functions, so nothing is retried
/// or recovered internally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// A position's length disagrees with the space's dimensionality, or a
    /// descriptor was built from size/periodicity vectors of unequal length.
    DimensionMismatch {
        /// Expected number of dimensions.
        expected: usize,
        /// Number of dimensions actually supplied.
        actual: usize,
    },
    /// A neighborhood expansion was requested with `radius < 1`.
    InvalidRadius {
        /// The offending radius.
        radius: u32,
    },
    /// A vertex id is outside `[0, vertex_count)`.
    VertexOutOfBounds {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A periodic dimension declares a size of zero or less, so the wrap
    /// computation degenerates. Rejected at descriptor construction and
    /// re-detected at call time rather than silently producing NaN.
    DegeneratePeriodicSize {
        /// Index of the offending dimension.
        dim: usize,
    },
    /// Attempted to construct a space with zero extent.
    EmptySpace,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            Self::InvalidRadius { radius } => {
                write!(f, "neighborhood radius must be at least 1, got {radius}")
            }
            Self::VertexOutOfBounds {
                vertex,
                vertex_count,
            } => {
                write!(f, "vertex {vertex} out of bounds: [0, {vertex_count})")
            }
            Self::DegeneratePeriodicSize { dim } => {
                write!(f, "periodic dimension {dim} has degenerate size")
            }
            Self::EmptySpace => write!(f, "space must have at least one dimension or cell"),
        }
    }
}

impl std::error::Error for SpaceError {}
