//! End-to-end checks of the preset → geometry pipeline through the public API.

use approx::assert_relative_eq;
use crystal_lattice::LatticeError;
use crystal_lattice::config::{DEFAULT_CAMERA_PADDING, ViewerConfig};
use crystal_lattice::geometries::{OrthographicFrustum, fit};
use crystal_lattice::lattice::{AtomKind, LatticeParameters, VectorConvention, solve};
use crystal_lattice::structure::{CellShape, PresetCatalog, ViewerSession, build_preset};

#[test]
fn every_preset_produces_consistent_geometry() {
    for preset in PresetCatalog::global() {
        let structure = build_preset(preset.key, CellShape::Parallelepiped, DEFAULT_CAMERA_PADDING)
            .unwrap_or_else(|err| panic!("{} failed: {}", preset.key, err));

        // The fit stored with the structure matches a fresh fit over its points
        let refit = fit(structure.geometry_points()).unwrap();
        assert_relative_eq!(refit.framing_scale, structure.fit.framing_scale, epsilon = 1e-12);
        assert_eq!(refit.center, structure.fit.center);

        // Lattice points come first and every corner of the cell carries one
        let corner_count = structure
            .atoms
            .iter()
            .filter(|atom| atom.kind == AtomKind::Corner)
            .count();
        assert_eq!(corner_count, 8, "{}", preset.key);
        assert!(structure.vectors.cell_volume() > 0.0, "{}", preset.key);
    }
}

#[test]
fn hexagonal_presets_use_the_hexagonal_convention() {
    let catalog = PresetCatalog::global();
    for key in ["hexagonal", "hcp"] {
        let preset = catalog.lookup(key).unwrap();
        assert_eq!(preset.lattice.convention(), VectorConvention::HexagonalConvention);
    }
    assert_eq!(
        catalog.lookup("sc").unwrap().lattice.convention(),
        VectorConvention::General
    );
}

#[test]
fn degenerate_lattice_surfaces_immediately() {
    let params = LatticeParameters {
        a: 1.0,
        b: 1.0,
        c: 1.0,
        alpha: 150.0,
        beta: 150.0,
        gamma: 150.0,
    };
    assert!(matches!(solve(&params), Err(LatticeError::InvalidLattice(_))));
}

#[test]
fn session_survives_stale_selection() {
    let mut session = ViewerSession::new(ViewerConfig::default());
    session.select("triclinic").unwrap();

    let err = session.select("quasicrystal").unwrap_err();
    assert!(matches!(err, LatticeError::UnknownPreset(ref key) if key == "quasicrystal"));
    assert_eq!(session.current_key(), Some("triclinic"));

    let frustum: OrthographicFrustum = session.frustum(1.0).unwrap();
    assert!(frustum.height() > 0.0);
}
