//! The [`Position`] coordinate type and the [`Located`] capability.

use smallvec::SmallVec;

/// A position in simulation space.
///
/// Uses `SmallVec<[f64; 4]>` to avoid heap allocation for spaces up to
/// 4 dimensions, which covers grid and continuous spaces in practice.
/// Higher-dimensional spaces spill to the heap transparently.
///
/// Grid spaces carry integer coordinates as integral `f64` values; graph
/// spaces identify positions by `usize` vertex index instead and do not
/// use this type.
pub type Position = SmallVec<[f64; 4]>;

/// Capability for anything that has a position.
///
/// Metric entry points accept either a raw position or an agent-like
/// entity; both resolve through this trait once at the call boundary, so
/// the per-dimension math never cares which it was given.
///
/// Raw position shapes (`Position`, slices, arrays, `Vec<f64>`) implement
/// it by identity. Agent types implement it by exposing their position
/// field:
///
/// ```
/// use ambit_core::{Located, Position};
///
/// struct Walker {
///     position: Position,
///     heading: f64,
/// }
///
/// impl Located for Walker {
///     fn position(&self) -> &[f64] {
///         &self.position
///     }
/// }
/// ```
pub trait Located {
    /// The entity's current position as a coordinate slice.
    fn position(&self) -> &[f64];
}

impl Located for Position {
    fn position(&self) -> &[f64] {
        self
    }
}

impl Located for [f64] {
    fn position(&self) -> &[f64] {
        self
    }
}

impl<const N: usize> Located for [f64; N] {
    fn position(&self) -> &[f64] {
        self
    }
}

impl Located for Vec<f64> {
    fn position(&self) -> &[f64] {
        self
    }
}
