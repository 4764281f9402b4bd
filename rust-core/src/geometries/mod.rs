// Geometries module: Contains the wireframe, bounding and camera geometry of a structure
// This module turns lattice vectors into drawable data without knowing how it is drawn

// ======================== MODULE DECLARATIONS ========================
pub mod axes;
pub mod camera;
pub mod cell_edges;
pub mod fit;
pub mod geometry3d_bounding_box;

mod _tests_cell_edges;

// ======================== CELL WIREFRAMES ========================
pub use cell_edges::{
    EdgeSegment,              // struct - one wireframe edge (start, end)
    build_cell_edges,         // fn(vectors: &LatticeVectors) -> Vec<EdgeSegment> - the 12 parallelepiped edges
    build_hexagonal_prism,    // fn(a: f64, c: f64) -> Vec<EdgeSegment> - the 18 hexagonal prism edges
    hexagonal_prism_atoms,    // fn(a: f64, c: f64) -> Vec<CartesianAtom> - corner atoms at the prism vertices
    hexagonal_prism_vertices, // fn(a: f64, c: f64) -> [Vector3<f64>; 12] - bottom ring then top ring
};
// EdgeSegment impl methods:
//   new(start, end) -> Self                                  - creates a segment
//   length(&self) -> f64                                     - distance between endpoints
//   translate(&self, offset) -> EdgeSegment                  - moves both endpoints
//   matches(&self, other, tol) -> bool                       - same segment in either direction

// ======================== REFERENCE AXES ========================
pub use axes::{
    AxisLine,   // struct - labelled axis line with a label anchor
    build_axes, // fn(length: f64) -> [AxisLine; 3] - a/b/c along +x/+y/+z
};

// ======================== BOUNDS & FRAMING ========================
pub use geometry3d_bounding_box::BoundingBox3D; // struct - 3D axis-aligned bounding box
// BoundingBox3D impl methods:
//   new(min, max) -> Self                                    - creates bounding box from corners
//   from_point(point) -> Self                                - zero-size box around a point
//   from_points(points) -> Option<Self>                      - smallest box containing all points
//   include(&mut self, point)                                - grows the box to contain a point
//   contains(&self, point) -> bool                           - inclusive containment test
//   union(&self, other) -> BoundingBox3D                     - box containing both boxes
//   center(&self) -> Vector3<f64>                            - (min + max) / 2
//   size(&self) -> Vector3<f64>                              - max - min
//   max_extent(&self) -> f64                                 - largest component of size
//   expand(&self, margin) -> BoundingBox3D                   - grows the box in every direction
//   translate(&self, offset) -> BoundingBox3D                - moves the box

pub use fit::{
    FitResult,        // struct - bounds, center, extent and framing scale
    fit,              // fn(points) -> Result<FitResult> - fit with the default padding
    fit_with_padding, // fn(points, padding: f64) -> Result<FitResult> - fit with explicit padding
};

pub use camera::{
    CameraPose,          // struct - camera position and target
    OrthographicFrustum, // struct - left/right/top/bottom/near/far bounds
};
// OrthographicFrustum impl methods:
//   new(size: f64, aspect: f64) -> Self                      - frustum of height `size`
//   from_fit(fit: &FitResult, aspect: f64) -> Self           - frustum sized by the fit's framing scale
//   resized(&self, aspect: f64) -> Self                      - same height, new aspect
