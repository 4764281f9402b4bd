use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::{CAMERA_FAR, CAMERA_NEAR, CAMERA_OFFSET};
use crate::geometries::fit::FitResult;

/// Bounds of an orthographic viewing volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrthographicFrustum {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub near: f64,
    pub far: f64,
}

impl OrthographicFrustum {
    /// Frustum of height `size` for a viewport of the given width / height ratio.
    pub fn new(size: f64, aspect: f64) -> Self {
        Self {
            left: -size * aspect / 2.0,
            right: size * aspect / 2.0,
            top: size / 2.0,
            bottom: -size / 2.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }

    pub fn from_fit(fit: &FitResult, aspect: f64) -> Self {
        Self::new(fit.framing_scale, aspect)
    }

    /// Recompute the horizontal bounds for a new viewport, keeping the height.
    pub fn resized(&self, aspect: f64) -> Self {
        Self {
            near: self.near,
            far: self.far,
            ..Self::new(self.height(), aspect)
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

/// Camera position and look-at target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vector3<f64>,
    pub target: Vector3<f64>,
}

impl CameraPose {
    /// The reset view: looking at `target` from the (+x, +y, +z) diagonal.
    pub fn default_view(target: Vector3<f64>) -> Self {
        let [x, y, z] = CAMERA_OFFSET;
        Self {
            position: target + Vector3::new(x, y, z),
            target,
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::default_view(Vector3::zeros())
    }
}
