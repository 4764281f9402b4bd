//! Error types for lattice geometry.

use thiserror::Error;

/// Why a set of lattice parameters does not describe a realizable cell.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Degeneracy {
    /// `sin(gamma)` vanishes, so `b` is parallel to `a`.
    #[error("sin(gamma) = {sin_gamma:e} is too close to zero")]
    CollinearAxes {
        /// The offending value of `sin(gamma)`.
        sin_gamma: f64,
    },

    /// The squared height of `c` above the ab-plane is not positive.
    #[error("height term {height_squared:e} under the square root is not positive")]
    NonPositiveHeight {
        /// The value that would have been passed to `sqrt`.
        height_squared: f64,
    },
}

/// Errors produced by the lattice geometry core.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum LatticeError {
    /// The lattice parameters are geometrically degenerate.
    #[error("invalid lattice: {0}")]
    InvalidLattice(#[from] Degeneracy),

    /// A single lattice parameter is outside its domain.
    #[error("lattice parameter {name} is out of range, got {value}")]
    InvalidParameter {
        /// Parameter name (`a`, `b`, `c`, `alpha`, `beta` or `gamma`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// No preset is registered under the requested key.
    #[error("unknown preset: {0:?}")]
    UnknownPreset(String),

    /// A bounding box was requested for an empty point set.
    #[error("cannot fit an empty set of geometry points")]
    EmptyGeometry,
}

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, LatticeError>;
