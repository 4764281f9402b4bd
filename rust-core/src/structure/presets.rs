use std::sync::LazyLock;

use serde::Serialize;

use crate::config::DEFAULT_ATOM_RADIUS;
use crate::error::{LatticeError, Result};
use crate::lattice::{
    AtomKind, BasisAtom, LatticeParameters, body_center, corners, face_centers,
};

static CATALOG: LazyLock<PresetCatalog> = LazyLock::new(PresetCatalog::builtin);

/// A named lattice configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructurePreset {
    pub key: &'static str,
    pub name: &'static str,
    pub lattice: LatticeParameters,
    pub basis: Vec<BasisAtom>,
    pub atom_radius: f64,
}

/// Read-only registry of presets, in display order.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    presets: Vec<StructurePreset>,
}

impl PresetCatalog {
    /// The process-wide catalog of built-in presets.
    pub fn global() -> &'static PresetCatalog {
        &CATALOG
    }

    pub fn lookup(&self, key: &str) -> Result<&StructurePreset> {
        self.presets
            .iter()
            .find(|preset| preset.key == key)
            .ok_or_else(|| LatticeError::UnknownPreset(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.presets.iter().any(|preset| preset.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.presets.iter().map(|preset| preset.key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StructurePreset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    fn builtin() -> Self {
        let preset = |key, name, lattice, basis| StructurePreset {
            key,
            name,
            lattice,
            basis,
            atom_radius: DEFAULT_ATOM_RADIUS,
        };
        let corner_atoms = || corners(AtomKind::Corner);

        let mut bcc = corner_atoms();
        bcc.extend(body_center(AtomKind::BodyCenter));

        let mut fcc = corner_atoms();
        fcc.extend(face_centers(AtomKind::FaceCenter));

        let mut hcp = corner_atoms();
        hcp.extend([
            BasisAtom::new(1.0 / 3.0, 2.0 / 3.0, 0.5, AtomKind::InterstitialHcp),
            BasisAtom::new(2.0 / 3.0, 1.0 / 3.0, 0.5, AtomKind::InterstitialHcp),
        ]);

        let cell = |a, b, c, alpha, beta, gamma| LatticeParameters {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        };

        let presets = vec![
            preset(
                "sc",
                "Simple Cubic",
                LatticeParameters::orthogonal(3.0, 3.0, 3.0),
                corner_atoms(),
            ),
            preset(
                "tetragonal",
                "Tetragonal",
                LatticeParameters::orthogonal(3.0, 3.0, 4.0),
                corner_atoms(),
            ),
            preset(
                "orthorhombic",
                "Orthorhombic",
                LatticeParameters::orthogonal(3.0, 4.0, 5.0),
                corner_atoms(),
            ),
            preset(
                "rhombohedral",
                "Rhombohedral",
                cell(3.0, 3.0, 3.0, 80.0, 80.0, 80.0),
                corner_atoms(),
            ),
            preset(
                "monoclinic",
                "Monoclinic",
                cell(3.0, 4.0, 5.0, 90.0, 110.0, 90.0),
                corner_atoms(),
            ),
            preset("triclinic", "Triclinic", cell(3.0, 4.0, 5.0, 70.0, 80.0, 90.0), corner_atoms()),
            preset(
                "hexagonal",
                "Hexagonal",
                LatticeParameters::hexagonal(3.0, 5.0),
                corner_atoms(),
            ),
            preset(
                "bcc",
                "Body-Centered Cubic",
                LatticeParameters::orthogonal(3.5, 3.5, 3.5),
                bcc,
            ),
            preset("fcc", "Face-Centered Cubic", LatticeParameters::orthogonal(4.0, 4.0, 4.0), fcc),
            preset("hcp", "Hexagonal Close-Packed", LatticeParameters::hexagonal(3.0, 4.9), hcp),
        ];
        Self { presets }
    }
}

impl<'a> IntoIterator for &'a PresetCatalog {
    type Item = &'a StructurePreset;
    type IntoIter = std::slice::Iter<'a, StructurePreset>;

    fn into_iter(self) -> Self::IntoIter {
        self.presets.iter()
    }
}
