//! Affine transform composition.

use nalgebra::{Matrix4, Point3, Vector3};

/// Accumulated 4x4 affine transform.
///
/// Every builder call right-multiplies the accumulator by the new primitive
/// matrix and returns a new value, so a chain like
/// `Transform::identity().translate(0.0, 0.0, 5.0).rotate(a, 0.0, 1.0, 0.0)`
/// spins a vertex about the object origin first and then pushes it out to
/// depth 5: the last-called operation sits nearest the vertex when the
/// combined matrix is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Matrix4<f32>,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    pub fn matrix(&self) -> &Matrix4<f32> {
        &self.matrix
    }

    /// Compose a translation by `(x, y, z)`.
    pub fn translate(&self, x: f32, y: f32, z: f32) -> Self {
        Self {
            matrix: self.matrix * Matrix4::new_translation(&Vector3::new(x, y, z)),
        }
    }

    /// Compose a rotation of `angle` radians about the axis `(x, y, z)`.
    ///
    /// The axis is normalized unless its squared length is already 0 or 1.
    /// A zero axis selects no direction at all and composes nothing.
    pub fn rotate(&self, angle: f32, x: f32, y: f32, z: f32) -> Self {
        let axis = Vector3::new(x, y, z);
        let len_sq = axis.norm_squared();
        if len_sq == 0.0 {
            return *self;
        }
        let axis = if len_sq == 1.0 { axis } else { axis / len_sq.sqrt() };
        Self {
            matrix: self.matrix * Matrix4::new_rotation(axis * angle),
        }
    }

    /// Compose a per-axis scale.
    pub fn scale(&self, x: f32, y: f32, z: f32) -> Self {
        Self {
            matrix: self.matrix * Matrix4::new_nonuniform_scaling(&Vector3::new(x, y, z)),
        }
    }

    /// Apply the accumulated transform to a point (homogeneous `w = 1`).
    pub fn apply(&self, point: &Point3<f32>) -> Point3<f32> {
        self.matrix.transform_point(point)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
