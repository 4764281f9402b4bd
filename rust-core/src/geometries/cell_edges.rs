use std::f64::consts::PI;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::lattice::{AtomKind, CartesianAtom, LatticeVectors};

/// Corner index pairs of the 12 parallelepiped edges.
///
/// Indices refer to [`LatticeVectors::corners`]: 3 edges leave the origin,
/// 6 connect the middle corners, 3 enter the far corner.
const CELL_EDGE_INDICES: [(usize, usize); 12] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (1, 4),
    (1, 5),
    (2, 4),
    (2, 6),
    (3, 5),
    (3, 6),
    (4, 7),
    (5, 7),
    (6, 7),
];

/// One wireframe edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSegment {
    pub start: Vector3<f64>,
    pub end: Vector3<f64>,
}

impl EdgeSegment {
    pub fn new(start: Vector3<f64>, end: Vector3<f64>) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    pub fn translate(&self, offset: Vector3<f64>) -> EdgeSegment {
        EdgeSegment::new(self.start + offset, self.end + offset)
    }

    /// Same segment regardless of direction.
    pub fn matches(&self, other: &EdgeSegment, tol: f64) -> bool {
        let close = |p: Vector3<f64>, q: Vector3<f64>| (p - q).norm() <= tol;
        (close(self.start, other.start) && close(self.end, other.end))
            || (close(self.start, other.end) && close(self.end, other.start))
    }
}

/// The 12 edges of the parallelepiped spanned by the lattice vectors.
pub fn build_cell_edges(vectors: &LatticeVectors) -> Vec<EdgeSegment> {
    let corners = vectors.corners();
    CELL_EDGE_INDICES
        .iter()
        .map(|&(i, j)| EdgeSegment::new(corners[i], corners[j]))
        .collect()
}

/// Vertices of a hexagonal prism with circumradius `a` and height `c`.
///
/// Indices 0..6 form the bottom ring at z = 0, 6..12 the top ring at z = c;
/// vertex `i` sits at angle `i·60°` and top vertex `i + 6` lies directly above it.
pub fn hexagonal_prism_vertices(a: f64, c: f64) -> [Vector3<f64>; 12] {
    let mut vertices = [Vector3::zeros(); 12];
    for i in 0..6 {
        let angle = i as f64 * PI / 3.0;
        let (x, y) = (a * angle.cos(), a * angle.sin());
        vertices[i] = Vector3::new(x, y, 0.0);
        vertices[i + 6] = Vector3::new(x, y, c);
    }
    vertices
}

/// Corner atoms at the 12 prism vertices, in vertex order.
pub fn hexagonal_prism_atoms(a: f64, c: f64) -> Vec<CartesianAtom> {
    hexagonal_prism_vertices(a, c)
        .into_iter()
        .map(|position| CartesianAtom {
            position,
            kind: AtomKind::Corner,
        })
        .collect()
}

/// The 18 edges of a hexagonal prism.
///
/// Emitted per vertex `i`: the vertical edge, then the bottom-ring and top-ring
/// edges from `i` to `i + 1` (wrapping).
pub fn build_hexagonal_prism(a: f64, c: f64) -> Vec<EdgeSegment> {
    let vertices = hexagonal_prism_vertices(a, c);
    let mut edges = Vec::with_capacity(18);
    for i in 0..6 {
        let next = (i + 1) % 6;
        edges.push(EdgeSegment::new(vertices[i], vertices[i + 6]));
        edges.push(EdgeSegment::new(vertices[i], vertices[next]));
        edges.push(EdgeSegment::new(vertices[i + 6], vertices[next + 6]));
    }
    edges
}
