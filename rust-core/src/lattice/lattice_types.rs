use serde::{Deserialize, Serialize};

use crate::lattice::lattice_parameters::LatticeParameters;

/// The seven 3D crystal systems.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CrystalSystem {
    Triclinic,
    Monoclinic,
    Orthorhombic,
    Tetragonal,
    Trigonal,
    Hexagonal,
    Cubic,
}

/// Identify the crystal system from lattice parameters (angles in degrees).
pub fn identify_crystal_system(params: &LatticeParameters, tol: f64) -> CrystalSystem {
    // Check length relationships
    let a_eq_b = approx_equal(params.a, params.b, tol);
    let b_eq_c = approx_equal(params.b, params.c, tol);
    let all_equal = a_eq_b && b_eq_c;

    // Check angle relationships
    let alpha_90 = is_right_angle(params.alpha, tol);
    let beta_90 = is_right_angle(params.beta, tol);
    let gamma_90 = is_right_angle(params.gamma, tol);
    let all_90 = alpha_90 && beta_90 && gamma_90;
    let gamma_120 = is_120_degrees(params.gamma, tol);
    let angles_equal = approx_equal(params.alpha, params.beta, tol)
        && approx_equal(params.beta, params.gamma, tol);

    match (all_equal, a_eq_b, all_90) {
        // Cubic: a = b = c, α = β = γ = 90°
        (true, _, true) => CrystalSystem::Cubic,

        // Trigonal (rhombohedral setting): a = b = c, α = β = γ ≠ 90°
        (true, _, false) if angles_equal => CrystalSystem::Trigonal,

        // Tetragonal: a = b ≠ c, α = β = γ = 90°
        (false, true, true) => CrystalSystem::Tetragonal,

        // Orthorhombic: a ≠ b, α = β = γ = 90°
        (false, false, true) => CrystalSystem::Orthorhombic,

        // Hexagonal: a = b, α = β = 90°, γ = 120°
        (_, true, false) if alpha_90 && beta_90 && gamma_120 => CrystalSystem::Hexagonal,

        // Monoclinic: α = γ = 90° ≠ β
        (_, _, false) if alpha_90 && gamma_90 => CrystalSystem::Monoclinic,

        _ => CrystalSystem::Triclinic,
    }
}

/// Check if two values are approximately equal within tolerance
pub fn approx_equal(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

/// Check if an angle in degrees is approximately 90°
pub fn is_right_angle(angle: f64, tol: f64) -> bool {
    approx_equal(angle, 90.0, tol)
}

/// Check if an angle in degrees is approximately 120°
pub fn is_120_degrees(angle: f64, tol: f64) -> bool {
    approx_equal(angle, 120.0, tol)
}
