use log::debug;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::{ANGLE_SNAP_TOLERANCE, SIN_GAMMA_TOLERANCE};
use crate::error::{Degeneracy, Result};
use crate::lattice::lattice_parameters::LatticeParameters;

/// Numerical path used to turn lattice parameters into basis vectors.
///
/// Both variants describe the same geometry for a hexagonal cell; the
/// hexagonal variant writes `c` straight along z instead of going through
/// the general square-root expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VectorConvention {
    General,
    HexagonalConvention,
}

/// Cartesian images of the three crystallographic axes.
///
/// `v1` lies along x, `v2` in the xy-plane, `v3` completes the cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeVectors {
    pub v1: Vector3<f64>,
    pub v2: Vector3<f64>,
    pub v3: Vector3<f64>,
}

impl LatticeVectors {
    pub fn new(v1: Vector3<f64>, v2: Vector3<f64>, v3: Vector3<f64>) -> Self {
        Self { v1, v2, v3 }
    }

    /// Basis matrix with `v1, v2, v3` as columns.
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::from_columns(&[self.v1, self.v2, self.v3])
    }

    /// Convert fractional (u,v,w) coords → cartesian.
    pub fn frac_to_cart(&self, v_frac: Vector3<f64>) -> Vector3<f64> {
        self.v1 * v_frac.x + self.v2 * v_frac.y + self.v3 * v_frac.z
    }

    /// Signed unit cell volume = v1 · (v2 × v3).
    pub fn cell_volume(&self) -> f64 {
        self.v1.dot(&self.v2.cross(&self.v3))
    }

    /// Edge lengths |v1|, |v2|, |v3|.
    pub fn lengths(&self) -> (f64, f64, f64) {
        (self.v1.norm(), self.v2.norm(), self.v3.norm())
    }

    /// Recover α, β, γ in degrees.
    pub fn angles_degrees(&self) -> (f64, f64, f64) {
        let angle = |p: &Vector3<f64>, q: &Vector3<f64>| {
            (p.dot(q) / (p.norm() * q.norm())).clamp(-1.0, 1.0).acos().to_degrees()
        };
        (
            angle(&self.v2, &self.v3),
            angle(&self.v1, &self.v3),
            angle(&self.v1, &self.v2),
        )
    }

    /// The eight cell corners: 0, v1, v2, v3, v1+v2, v1+v3, v2+v3, v1+v2+v3.
    pub fn corners(&self) -> [Vector3<f64>; 8] {
        let (v1, v2, v3) = (self.v1, self.v2, self.v3);
        [
            Vector3::zeros(),
            v1,
            v2,
            v3,
            v1 + v2,
            v1 + v3,
            v2 + v3,
            v1 + v2 + v3,
        ]
    }
}

/// Solve lattice parameters into Cartesian basis vectors.
///
/// Fails with [`crate::LatticeError::InvalidParameter`] for out-of-range inputs and
/// [`crate::LatticeError::InvalidLattice`] when the angles cannot close a cell.
pub fn solve(params: &LatticeParameters) -> Result<LatticeVectors> {
    params.validate()?;

    let convention = params.convention();
    let vectors = match convention {
        VectorConvention::HexagonalConvention => hexagonal_vectors(params),
        VectorConvention::General => general_vectors(params)?,
    };

    debug!(
        "Solved lattice a={} b={} c={} α={} β={} γ={} via {:?}",
        params.a, params.b, params.c, params.alpha, params.beta, params.gamma, convention
    );
    Ok(vectors)
}

/// Standard crystallographic construction for arbitrary angles.
pub fn general_vectors(params: &LatticeParameters) -> Result<LatticeVectors> {
    let cos_alpha = snap_to_zero(params.alpha.to_radians().cos());
    let cos_beta = snap_to_zero(params.beta.to_radians().cos());
    let gamma = params.gamma.to_radians();
    let (sin_gamma, cos_gamma) = gamma.sin_cos();

    if sin_gamma.abs() < SIN_GAMMA_TOLERANCE {
        return Err(Degeneracy::CollinearAxes { sin_gamma }.into());
    }

    let cy = (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
    let height_squared = 1.0 - cos_beta.powi(2) - cy.powi(2);
    // Written negated so that NaN is rejected too
    if !(height_squared > 0.0) {
        return Err(Degeneracy::NonPositiveHeight { height_squared }.into());
    }

    let v1 = Vector3::new(params.a, 0.0, 0.0);
    let v2 = Vector3::new(params.b * cos_gamma, params.b * sin_gamma, 0.0);
    let v3 = Vector3::new(
        params.c * cos_beta,
        params.c * cy,
        params.c * height_squared.sqrt(),
    );

    Ok(LatticeVectors { v1, v2, v3 })
}

/// Direct construction for α = β = 90°, γ = 120°.
///
/// The angles in `params` are not consulted; callers select this path through
/// [`LatticeParameters::convention`].
pub fn hexagonal_vectors(params: &LatticeParameters) -> LatticeVectors {
    let (sin_120, cos_120) = 120.0_f64.to_radians().sin_cos();
    LatticeVectors {
        v1: Vector3::new(params.a, 0.0, 0.0),
        v2: Vector3::new(params.b * cos_120, params.b * sin_120, 0.0),
        v3: Vector3::new(0.0, 0.0, params.c),
    }
}

fn snap_to_zero(value: f64) -> f64 {
    if value.abs() < ANGLE_SNAP_TOLERANCE {
        0.0
    } else {
        value
    }
}
