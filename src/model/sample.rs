use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// One arrow glyph of the field visualization: where it sits and which way
/// it points. The orientation composes the global placement rotation about
/// the vertical axis with the local tangent rotation about the depth axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSample {
    pub position: Vector3<f32>,
    pub orientation: UnitQuaternion<f32>,
}

impl FieldSample {
    pub fn new(position: Vector3<f32>, orientation: UnitQuaternion<f32>) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

impl Default for FieldSample {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
        }
    }
}
