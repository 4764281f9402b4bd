use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::lattice::lattice_vectors::LatticeVectors;

/// Crystallographic role of an atom in a basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AtomKind {
    Corner,
    BodyCenter,
    FaceCenter,
    InterstitialHcp,
}

/// Colour/material bucket a renderer uses for an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RenderCategory {
    #[default]
    A,
    B,
    C,
}

impl AtomKind {
    /// Every kind, in declaration order.
    pub const ALL: [AtomKind; 4] = [
        AtomKind::Corner,
        AtomKind::BodyCenter,
        AtomKind::FaceCenter,
        AtomKind::InterstitialHcp,
    ];

    /// Default rendering category: lattice points are `A`, everything inside the cell is `B`.
    pub const fn render_category(self) -> RenderCategory {
        match self {
            AtomKind::Corner => RenderCategory::A,
            AtomKind::BodyCenter | AtomKind::FaceCenter | AtomKind::InterstitialHcp => {
                RenderCategory::B
            }
        }
    }

    /// Parse a textual kind tag.
    ///
    /// Accepts the descriptive names (`corner`, `center-body`, `center-face`,
    /// `interstitial-hcp`) and the bare category letters `A`/`B`, which map to
    /// the most common kind in that category.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "corner" | "a" => Some(AtomKind::Corner),
            "center-body" | "body-center" | "b" => Some(AtomKind::BodyCenter),
            "center-face" | "face-center" => Some(AtomKind::FaceCenter),
            "interstitial-hcp" | "hcp" => Some(AtomKind::InterstitialHcp),
            _ => None,
        }
    }

    /// Like [`AtomKind::from_tag`], falling back to [`AtomKind::Corner`].
    pub fn from_tag_or_default(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or(AtomKind::Corner)
    }
}

impl RenderCategory {
    /// RGB colour as `0xRRGGBB`.
    pub const fn color(self) -> u32 {
        match self {
            RenderCategory::A => 0x4444ff,
            RenderCategory::B => 0xff4444,
            RenderCategory::C => 0x44ff44,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            RenderCategory::A => "A",
            RenderCategory::B => "B",
            RenderCategory::C => "C",
        }
    }

    /// Unknown tags fall back to the default category.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "B" | "b" => RenderCategory::B,
            "C" | "c" => RenderCategory::C,
            _ => RenderCategory::default(),
        }
    }
}

/// An atom in fractional coordinates relative to the lattice vectors.
///
/// Coordinates are not clamped; values outside [0, 1] place the atom outside the cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasisAtom {
    pub position: Vector3<f64>,
    pub kind: AtomKind,
}

impl BasisAtom {
    pub fn new(u: f64, v: f64, w: f64, kind: AtomKind) -> Self {
        Self {
            position: Vector3::new(u, v, w),
            kind,
        }
    }
}

/// An atom mapped into Cartesian space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianAtom {
    pub position: Vector3<f64>,
    pub kind: AtomKind,
}

impl CartesianAtom {
    pub fn render_category(&self) -> RenderCategory {
        self.kind.render_category()
    }
}

/// Map fractional basis atoms to Cartesian positions, preserving order.
pub fn expand(vectors: &LatticeVectors, basis: &[BasisAtom]) -> Vec<CartesianAtom> {
    basis
        .iter()
        .map(|atom| CartesianAtom {
            position: vectors.frac_to_cart(atom.position),
            kind: atom.kind,
        })
        .collect()
}

/// The 8 cell corners.
pub fn corners(kind: AtomKind) -> Vec<BasisAtom> {
    [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 1.0, 0.0],
        [1.0, 0.0, 1.0],
        [0.0, 1.0, 1.0],
        [1.0, 1.0, 1.0],
    ]
    .into_iter()
    .map(|[u, v, w]| BasisAtom::new(u, v, w, kind))
    .collect()
}

/// The body center (½, ½, ½).
pub fn body_center(kind: AtomKind) -> Vec<BasisAtom> {
    vec![BasisAtom::new(0.5, 0.5, 0.5, kind)]
}

/// The six face centers.
pub fn face_centers(kind: AtomKind) -> Vec<BasisAtom> {
    [
        [0.5, 0.5, 0.0],
        [0.5, 0.0, 0.5],
        [0.0, 0.5, 0.5],
        [1.0, 0.5, 0.5],
        [0.5, 1.0, 0.5],
        [0.5, 0.5, 1.0],
    ]
    .into_iter()
    .map(|[u, v, w]| BasisAtom::new(u, v, w, kind))
    .collect()
}
