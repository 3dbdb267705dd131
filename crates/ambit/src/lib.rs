//! Ambit: spatial-metric primitives for agent-based simulations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Ambit sub-crates. For most users, adding `ambit` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ambit::prelude::*;
//!
//! // A 2D world that wraps horizontally but not vertically.
//! let space = BoxSpace::new(vec![20.0, 10.0], vec![true, false]).unwrap();
//!
//! // Distances and directions respect the seam on the wrapped axis.
//! let d = euclidean_distance(&[1.0, 5.0], &[19.0, 5.0], &space).unwrap();
//! assert_eq!(d, 2.0);
//! let v = get_direction(&[1.0, 5.0], &[19.0, 5.0], &space).unwrap();
//! assert_eq!(v.as_slice(), &[-2.0, 0.0]);
//!
//! // Graph-based worlds answer neighborhood queries instead.
//! let g = AdjacencyGraph::undirected(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
//! assert_eq!(nearby_positions(1, &g, 2).unwrap(), vec![0, 2, 3]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ambit-core` | `Position`, the `Located` capability, error types |
//! | [`space`] | `ambit-space` | Capability traits, metric functions, backends |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and capability traits (`ambit-core`).
///
/// Contains the [`types::Position`] coordinate type, the
/// [`types::Located`] capability, and [`types::SpaceError`].
pub use ambit_core as types;

/// Capability traits, metric functions, and backends (`ambit-space`).
///
/// Provides the [`space::Space`] and [`space::GraphSpace`] traits, the
/// distance/direction/neighborhood functions, and the reference backends
/// [`space::BoxSpace`], [`space::AdjacencyGraph`], and
/// [`space::LatticeGraph`].
pub use ambit_space as space;

/// Common imports for typical Ambit usage.
///
/// ```rust
/// use ambit::prelude::*;
/// ```
pub mod prelude {
    pub use ambit_core::{Located, Position, SpaceError};

    pub use ambit_space::{
        all_positions, edge_count, euclidean_distance, get_direction, manhattan_distance,
        nearby_positions, normalize_position, space_size, vertex_count, AdjacencyGraph, BoxSpace,
        GraphSpace, LatticeGraph, Space,
    };
}
