use log::debug;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometries::{
    EdgeSegment, FitResult, build_cell_edges, build_hexagonal_prism, fit_with_padding,
    hexagonal_prism_atoms,
};
use crate::lattice::{
    AtomKind, CartesianAtom, LatticeParameters, LatticeVectors, VectorConvention, expand, solve,
};
use crate::structure::presets::{PresetCatalog, StructurePreset};

/// How the cell wireframe is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellShape {
    /// The parallelepiped spanned by the lattice vectors.
    #[default]
    Parallelepiped,
    /// The hexagonal prism around the c-axis with an atom on each vertex.
    ///
    /// Only honoured for hexagonal-convention cells. Interior basis atoms are not drawn.
    HexagonalPrism,
}

/// Complete geometry of one displayed structure.
///
/// Built in one piece and never mutated; a new selection builds a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrystalStructure {
    pub key: String,
    pub name: String,
    pub lattice: LatticeParameters,
    pub shape: CellShape,
    pub vectors: LatticeVectors,
    pub edges: Vec<EdgeSegment>,
    pub atoms: Vec<CartesianAtom>,
    pub atom_radius: f64,
    pub fit: FitResult,
}

impl CrystalStructure {
    /// Every edge endpoint followed by every atom center.
    pub fn geometry_points(&self) -> impl Iterator<Item = Vector3<f64>> + '_ {
        collect_points(&self.edges, &self.atoms)
    }

    /// Copy of this structure translated so the fit center sits at the origin.
    pub fn recentered(&self) -> CrystalStructure {
        self.translated(-self.fit.center)
    }

    pub fn translated(&self, offset: Vector3<f64>) -> CrystalStructure {
        CrystalStructure {
            edges: self.edges.iter().map(|edge| edge.translate(offset)).collect(),
            atoms: self
                .atoms
                .iter()
                .map(|atom| CartesianAtom {
                    position: atom.position + offset,
                    kind: atom.kind,
                })
                .collect(),
            fit: self.fit.translate(offset),
            ..self.clone()
        }
    }

    /// Atoms that are not lattice points.
    pub fn interior_atoms(&self) -> impl Iterator<Item = &CartesianAtom> {
        self.atoms.iter().filter(|atom| atom.kind != AtomKind::Corner)
    }
}

/// Build the full geometry of a preset.
pub fn build_structure(
    preset: &StructurePreset,
    shape: CellShape,
    padding: f64,
) -> Result<CrystalStructure> {
    let vectors = solve(&preset.lattice)?;

    let shape = match shape {
        CellShape::HexagonalPrism
            if preset.lattice.convention() != VectorConvention::HexagonalConvention =>
        {
            debug!("Preset {} is not hexagonal; drawing the parallelepiped", preset.key);
            CellShape::Parallelepiped
        }
        other => other,
    };

    let (edges, atoms) = match shape {
        CellShape::Parallelepiped => {
            (build_cell_edges(&vectors), expand(&vectors, &preset.basis))
        }
        CellShape::HexagonalPrism => {
            // Only the 12 vertex atoms: the primitive basis does not tile the full prism
            let (a, c) = (preset.lattice.a, preset.lattice.c);
            (build_hexagonal_prism(a, c), hexagonal_prism_atoms(a, c))
        }
    };

    let fit = fit_with_padding(collect_points(&edges, &atoms), padding)?;

    debug!(
        "Built structure {} ({:?}): {} edges, {} atoms, framing scale {:.3}",
        preset.key,
        shape,
        edges.len(),
        atoms.len(),
        fit.framing_scale
    );

    Ok(CrystalStructure {
        key: preset.key.to_string(),
        name: preset.name.to_string(),
        lattice: preset.lattice,
        shape,
        vectors,
        edges,
        atoms,
        atom_radius: preset.atom_radius,
        fit,
    })
}

/// Look up `key` in the global catalog and build it.
pub fn build_preset(key: &str, shape: CellShape, padding: f64) -> Result<CrystalStructure> {
    let preset = PresetCatalog::global().lookup(key)?;
    build_structure(preset, shape, padding)
}

fn collect_points<'a>(
    edges: &'a [EdgeSegment],
    atoms: &'a [CartesianAtom],
) -> impl Iterator<Item = Vector3<f64>> + 'a {
    edges
        .iter()
        .flat_map(|edge| [edge.start, edge.end])
        .chain(atoms.iter().map(|atom| atom.position))
}
