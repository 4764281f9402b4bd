use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::AXIS_LABEL_OFFSET;

/// A labelled reference axis starting at the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLine {
    pub label: char,
    pub start: Vector3<f64>,
    pub end: Vector3<f64>,
    /// Where the label is anchored, just past the end of the line.
    pub label_position: Vector3<f64>,
}

/// The a/b/c axes along +x, +y, +z.
pub fn build_axes(length: f64) -> [AxisLine; 3] {
    let axis = |label, direction: Vector3<f64>| AxisLine {
        label,
        start: Vector3::zeros(),
        end: direction * length,
        label_position: direction * (length + AXIS_LABEL_OFFSET),
    };
    [
        axis('a', Vector3::x()),
        axis('b', Vector3::y()),
        axis('c', Vector3::z()),
    ]
}
