use crystal_lattice::geometries::{AxisLine, EdgeSegment};
use crystal_lattice::lattice::CartesianAtom;
use crystal_lattice::structure::{CrystalStructure, StructurePreset};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// 3D Point structure for JavaScript interop
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Vector3<f64>> for Point3D {
    fn from(v: Vector3<f64>) -> Self {
        Point3D {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// Dropdown entry
#[derive(Serialize, Deserialize)]
pub struct PresetEntry {
    pub key: String,
    pub name: String,
}

impl From<&StructurePreset> for PresetEntry {
    fn from(preset: &StructurePreset) -> Self {
        PresetEntry {
            key: preset.key.to_string(),
            name: preset.name.to_string(),
        }
    }
}

/// Line segment for JavaScript interop
#[derive(Serialize, Deserialize)]
pub struct SegmentData {
    pub start: Point3D,
    pub end: Point3D,
}

impl From<&EdgeSegment> for SegmentData {
    fn from(edge: &EdgeSegment) -> Self {
        SegmentData {
            start: edge.start.into(),
            end: edge.end.into(),
        }
    }
}

/// Atom with its material category and colour
#[derive(Serialize, Deserialize)]
pub struct AtomData {
    pub position: Point3D,
    pub kind: String,
    pub category: String,
    pub color: u32,
}

impl From<&CartesianAtom> for AtomData {
    fn from(atom: &CartesianAtom) -> Self {
        let category = atom.render_category();
        AtomData {
            position: atom.position.into(),
            kind: format!("{:?}", atom.kind),
            category: category.tag().to_string(),
            color: category.color(),
        }
    }
}

/// Labelled axis for JavaScript interop
#[derive(Serialize, Deserialize)]
pub struct AxisData {
    pub label: String,
    pub start: Point3D,
    pub end: Point3D,
    pub label_position: Point3D,
}

impl From<&AxisLine> for AxisData {
    fn from(axis: &AxisLine) -> Self {
        AxisData {
            label: axis.label.to_string(),
            start: axis.start.into(),
            end: axis.end.into(),
            label_position: axis.label_position.into(),
        }
    }
}

/// Everything the viewer draws for one structure
#[derive(Serialize, Deserialize)]
pub struct StructureData {
    pub key: String,
    pub name: String,
    pub vectors: [Point3D; 3],
    pub edges: Vec<SegmentData>,
    pub atoms: Vec<AtomData>,
    pub atom_radius: f64,
    pub center: Point3D,
    pub extent: Point3D,
    pub framing_scale: f64,
}

impl From<&CrystalStructure> for StructureData {
    fn from(structure: &CrystalStructure) -> Self {
        let vectors = &structure.vectors;
        StructureData {
            key: structure.key.clone(),
            name: structure.name.clone(),
            vectors: [vectors.v1.into(), vectors.v2.into(), vectors.v3.into()],
            edges: structure.edges.iter().map(SegmentData::from).collect(),
            atoms: structure.atoms.iter().map(AtomData::from).collect(),
            atom_radius: structure.atom_radius,
            center: structure.fit.center.into(),
            extent: structure.fit.extent.into(),
            framing_scale: structure.fit.framing_scale,
        }
    }
}
