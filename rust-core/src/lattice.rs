//! Lattice module: lattice parameters, Cartesian basis vectors, and basis atoms.
//!
//! Quick reference
//! - Types: [`LatticeParameters`], [`LatticeVectors`], [`VectorConvention`], [`CrystalSystem`]
//! - Solving: [`solve`], [`general_vectors`], [`hexagonal_vectors`]
//! - Basis: [`BasisAtom`], [`CartesianAtom`], [`AtomKind`], [`RenderCategory`], [`expand`]
//! - Basis builders: [`corners`], [`body_center`], [`face_centers`]
//!
//! See submodules for full details: [`lattice_parameters`], [`lattice_vectors`], [`lattice_types`], [`basis`].

// ======================== MODULE DECLARATIONS ========================
pub mod basis;
pub mod lattice_parameters;
pub mod lattice_types;
pub mod lattice_vectors;

// Test modules
mod _tests_basis;
mod _tests_lattice_parameters;

// ======================== RE-EXPORTED PUBLIC API (curated) ========================
#[doc(inline)]
pub use lattice_parameters::LatticeParameters;

#[doc(inline)]
pub use lattice_vectors::LatticeVectors;

pub use lattice_types::{CrystalSystem, identify_crystal_system};

pub use lattice_vectors::{VectorConvention, general_vectors, hexagonal_vectors, solve};

pub use basis::{
    AtomKind, BasisAtom, CartesianAtom, RenderCategory, body_center, corners, expand,
    face_centers,
};

/// A convenience prelude for importing common lattice items.
pub mod prelude {
    #[doc(no_inline)]
    pub use super::{AtomKind, BasisAtom, LatticeParameters, LatticeVectors, solve};
}
