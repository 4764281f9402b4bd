#[cfg(test)]
mod _tests_lattice_parameters {
    use super::super::lattice_parameters::LatticeParameters;
    use super::super::lattice_types::{CrystalSystem, identify_crystal_system};
    use crate::error::LatticeError;

    const TOL: f64 = 1e-10;

    #[test]
    fn test_new_accepts_valid_parameters() {
        let params = LatticeParameters::new(3.0, 4.0, 5.0, 70.0, 80.0, 90.0).unwrap();
        assert_eq!(params.beta, 80.0);
    }

    #[test]
    fn test_new_rejects_each_parameter() {
        let cases = [
            (LatticeParameters::new(-1.0, 1.0, 1.0, 90.0, 90.0, 90.0), "a"),
            (LatticeParameters::new(1.0, 0.0, 1.0, 90.0, 90.0, 90.0), "b"),
            (LatticeParameters::new(1.0, 1.0, f64::INFINITY, 90.0, 90.0, 90.0), "c"),
            (LatticeParameters::new(1.0, 1.0, 1.0, 0.0, 90.0, 90.0), "alpha"),
            (LatticeParameters::new(1.0, 1.0, 1.0, 90.0, 200.0, 90.0), "beta"),
            (LatticeParameters::new(1.0, 1.0, 1.0, 90.0, 90.0, 180.0), "gamma"),
        ];
        for (result, expected_name) in cases {
            match result {
                Err(LatticeError::InvalidParameter { name, .. }) => assert_eq!(name, expected_name),
                other => panic!("expected InvalidParameter for {}, got {:?}", expected_name, other),
            }
        }
    }

    #[test]
    fn test_crystal_systems() {
        let p = |a, b, c, alpha, beta, gamma| LatticeParameters {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        };
        let cases = [
            (p(3.0, 3.0, 3.0, 90.0, 90.0, 90.0), CrystalSystem::Cubic),
            (p(3.0, 3.0, 4.0, 90.0, 90.0, 90.0), CrystalSystem::Tetragonal),
            (p(3.0, 4.0, 5.0, 90.0, 90.0, 90.0), CrystalSystem::Orthorhombic),
            (p(3.0, 3.0, 3.0, 80.0, 80.0, 80.0), CrystalSystem::Trigonal),
            (p(3.0, 4.0, 5.0, 90.0, 110.0, 90.0), CrystalSystem::Monoclinic),
            (p(3.0, 4.0, 5.0, 70.0, 80.0, 90.0), CrystalSystem::Triclinic),
            (p(3.0, 3.0, 5.0, 90.0, 90.0, 120.0), CrystalSystem::Hexagonal),
        ];
        for (params, expected) in cases {
            assert_eq!(identify_crystal_system(&params, TOL), expected, "{:?}", params);
            assert_eq!(params.crystal_system(), expected);
        }
    }
}
