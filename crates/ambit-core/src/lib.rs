//! Core types and capability traits for Ambit spatial metrics.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental abstractions shared across the Ambit workspace: the
//! [`Position`] coordinate type, the [`Located`] capability for anything
//! that carries a position, and the [`SpaceError`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod position;

pub use error::SpaceError;
pub use position::{Located, Position};
