//! Crystal lattice geometry library
//!
//! This library turns crystallographic lattice parameters into Cartesian geometry:
//! lattice basis vectors, unit-cell wireframes, atom positions, and a bounding-box
//! driven camera framing for an external renderer.

pub mod config;
pub mod error;
pub mod geometries;
pub mod lattice;
pub mod structure;

pub use error::{Degeneracy, LatticeError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
