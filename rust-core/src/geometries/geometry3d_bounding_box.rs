// 3D bounding box module: axis-aligned bounds over structure geometry
// Used to center a structure and to size the camera frustum around it

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// 3D axis-aligned bounding box
///
/// Represents a box in 3D space defined by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox3D {
    /// Minimum corner
    pub min: Vector3<f64>,
    /// Maximum corner
    pub max: Vector3<f64>,
}

impl BoundingBox3D {
    /// Create a new bounding box from minimum and maximum corners
    ///
    /// # Panics
    /// This function will panic in debug mode if min coordinates are greater than max coordinates
    pub fn new(min: Vector3<f64>, max: Vector3<f64>) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y && min.z <= max.z,
            "Minimum coordinates must be less than or equal to maximum coordinates"
        );
        Self { min, max }
    }

    /// Create a zero-size bounding box around a single point
    pub fn from_point(point: Vector3<f64>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Create a bounding box from a collection of points
    ///
    /// # Returns
    /// * `Some(BoundingBox3D)` if there are points to bound
    /// * `None` if the iterator is empty
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector3<f64>>,
    {
        let mut points_iter = points.into_iter();
        let mut bbox = Self::from_point(points_iter.next()?);

        for point in points_iter {
            bbox.include(point);
        }

        Some(bbox)
    }

    /// Grow the box so it contains `point`
    pub fn include(&mut self, point: Vector3<f64>) {
        self.min = self.min.inf(&point);
        self.max = self.max.sup(&point);
    }

    /// Check if a point is inside the bounding box (inclusive of boundaries)
    pub fn contains(&self, point: Vector3<f64>) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    /// Compute the union of this bounding box with another
    pub fn union(&self, other: &BoundingBox3D) -> BoundingBox3D {
        BoundingBox3D {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Get the center point of the bounding box
    pub fn center(&self) -> Vector3<f64> {
        (self.min + self.max) / 2.0
    }

    /// Get the size (extent along x, y, z) of the bounding box
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Largest of the three extents
    pub fn max_extent(&self) -> f64 {
        self.size().max()
    }

    /// Expand the bounding box by a given margin in all directions
    pub fn expand(&self, margin: f64) -> BoundingBox3D {
        let margin_vec = Vector3::repeat(margin);
        BoundingBox3D {
            min: self.min - margin_vec,
            max: self.max + margin_vec,
        }
    }

    /// Translate the bounding box by an offset
    pub fn translate(&self, offset: Vector3<f64>) -> BoundingBox3D {
        BoundingBox3D {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}
