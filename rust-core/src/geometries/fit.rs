use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_CAMERA_PADDING;
use crate::error::{LatticeError, Result};
use crate::geometries::geometry3d_bounding_box::BoundingBox3D;

/// Centering offset and framing scale for a structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Axis-aligned bounds of every geometry point.
    pub bounds: BoundingBox3D,
    /// (min + max) / 2
    pub center: Vector3<f64>,
    /// max - min
    pub extent: Vector3<f64>,
    /// Largest extent times the padding factor; the orthographic frustum height.
    pub framing_scale: f64,
}

/// Fit with the default padding factor.
///
/// Atom positions are bounded by their centers only, not their render radius.
pub fn fit<I>(points: I) -> Result<FitResult>
where
    I: IntoIterator<Item = Vector3<f64>>,
{
    fit_with_padding(points, DEFAULT_CAMERA_PADDING)
}

/// Fit with an explicit padding factor, which must be positive and finite.
pub fn fit_with_padding<I>(points: I, padding: f64) -> Result<FitResult>
where
    I: IntoIterator<Item = Vector3<f64>>,
{
    if !(padding.is_finite() && padding > 0.0) {
        return Err(LatticeError::InvalidParameter {
            name: "padding",
            value: padding,
        });
    }
    let bounds = BoundingBox3D::from_points(points).ok_or(LatticeError::EmptyGeometry)?;
    Ok(FitResult::from_bounds(bounds, padding))
}

impl FitResult {
    pub fn from_bounds(bounds: BoundingBox3D, padding: f64) -> Self {
        Self {
            bounds,
            center: bounds.center(),
            extent: bounds.size(),
            framing_scale: bounds.max_extent() * padding,
        }
    }

    /// The same fit after moving the geometry by `offset`.
    pub fn translate(&self, offset: Vector3<f64>) -> FitResult {
        FitResult {
            bounds: self.bounds.translate(offset),
            center: self.center + offset,
            ..*self
        }
    }
}
