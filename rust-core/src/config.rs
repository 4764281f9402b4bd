// Constants

use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, Result};

// Tolerances
pub const ANGLE_SNAP_TOLERANCE: f64 = 1e-15; // cos(alpha), cos(beta) below this are snapped to zero
pub const SIN_GAMMA_TOLERANCE: f64 = 1e-10; // |sin(gamma)| below this makes the cell degenerate
pub const HEXAGONAL_ANGLE_TOLERANCE: f64 = 1e-9; // Degrees; selects the hexagonal vector convention
pub const LATTICE_TOLERANCE: f64 = 1e-10; // For classification and geometric comparisons

// Rendering defaults
pub const DEFAULT_ATOM_RADIUS: f64 = 0.25;
pub const DEFAULT_CAMERA_PADDING: f64 = 2.0;
pub const DEFAULT_ASPECT: f64 = 1.0;
pub const AXIS_LENGTH: f64 = 3.0;
pub const AXIS_LABEL_OFFSET: f64 = 0.2;
pub const CAMERA_OFFSET: [f64; 3] = [5.0, 5.0, 5.0];
pub const CAMERA_NEAR: f64 = 0.1;
pub const CAMERA_FAR: f64 = 100.0;

/// Tunable settings of an interactive viewing session.
///
/// Every field has a default, so an empty TOML document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Multiplier applied to the largest bounding-box extent to size the frustum.
    pub padding: f64,
    /// Length of the labelled a/b/c axes.
    pub axis_length: f64,
    /// Viewport width / height used when no explicit aspect is given.
    pub aspect: f64,
    /// Draw hexagonal-convention presets as a full hexagonal prism.
    pub prism_for_hexagonal: bool,
    /// Translate each built structure so its bounding-box center is the origin.
    pub recenter: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_CAMERA_PADDING,
            axis_length: AXIS_LENGTH,
            aspect: DEFAULT_ASPECT,
            prism_for_hexagonal: false,
            recenter: true,
        }
    }
}

impl ViewerConfig {
    /// Parse a configuration from TOML text; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reject settings that would yield an empty or inverted view.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("padding", self.padding),
            ("axis_length", self.axis_length),
            ("aspect", self.aspect),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(LatticeError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}
