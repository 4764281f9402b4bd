use serde::{Deserialize, Serialize};

use crate::config::{HEXAGONAL_ANGLE_TOLERANCE, LATTICE_TOLERANCE};
use crate::error::{LatticeError, Result};
use crate::lattice::lattice_types::{CrystalSystem, identify_crystal_system};
use crate::lattice::lattice_vectors::VectorConvention;

/// Edge lengths and inter-axial angles of a parallelepiped unit cell.
///
/// Angles are in degrees: `alpha` between b and c, `beta` between a and c,
/// `gamma` between a and b.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeParameters {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl LatticeParameters {
    /// Construct validated lattice parameters.
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        let params = Self {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        };
        params.validate()?;
        Ok(params)
    }

    /// Cell with all angles at 90°.
    pub fn orthogonal(a: f64, b: f64, c: f64) -> Self {
        Self {
            a,
            b,
            c,
            alpha: 90.0,
            beta: 90.0,
            gamma: 90.0,
        }
    }

    /// Conventional hexagonal cell (α = β = 90°, γ = 120°).
    pub fn hexagonal(a: f64, c: f64) -> Self {
        Self {
            a,
            b: a,
            c,
            alpha: 90.0,
            beta: 90.0,
            gamma: 120.0,
        }
    }

    /// Check every parameter against its domain.
    ///
    /// Lengths must be finite and positive, angles finite and strictly inside (0, 180).
    /// This does not detect combinations of angles that are individually valid but
    /// jointly unrealizable; [`crate::lattice::solve`] reports those.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("a", self.a), ("b", self.b), ("c", self.c)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LatticeError::InvalidParameter { name, value });
            }
        }
        for (name, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
        ] {
            if !value.is_finite() || value <= 0.0 || value >= 180.0 {
                return Err(LatticeError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }

    /// Pick the numerical path used to build the basis vectors.
    pub fn convention(&self) -> VectorConvention {
        let near = |angle: f64, target: f64| (angle - target).abs() <= HEXAGONAL_ANGLE_TOLERANCE;
        if near(self.alpha, 90.0) && near(self.beta, 90.0) && near(self.gamma, 120.0) {
            VectorConvention::HexagonalConvention
        } else {
            VectorConvention::General
        }
    }

    /// Classify the cell into one of the seven crystal systems.
    pub fn crystal_system(&self) -> CrystalSystem {
        identify_crystal_system(self, LATTICE_TOLERANCE)
    }
}
