//! Camera and perspective projection.
//!
//! One convention holds throughout the pipeline: the camera sits at the
//! origin looking down +Z, so visible geometry has positive view-space depth.
//! Clip `w` is the view-space z and NDC z spans [0, 1] between the near and
//! far planes. Occlusion depth is the reciprocal `-1 / viewZ`, which grows
//! with distance, so nearer is numerically smaller.

use nalgebra::{Matrix4, Point3, Vector3};

use crate::error::RenderError;
use crate::math;

/// Perspective camera with a projection matrix derived once at construction.
pub struct Camera {
    pub fov: f32, // vertical field of view, degrees
    pub near: f32,
    pub far: f32,
    projection: Matrix4<f32>,
}

impl Camera {
    pub fn new(fov: f32, near: f32, far: f32) -> Self {
        let s = 1.0 / (fov.to_radians() * 0.5).tan();
        let depth_scale = far / (far - near);
        #[rustfmt::skip]
        let projection = Matrix4::new(
            s,   0.0, 0.0,         0.0,
            0.0, s,   0.0,         0.0,
            0.0, 0.0, depth_scale, -depth_scale * near,
            0.0, 0.0, 1.0,         0.0,
        );
        Self {
            fov,
            near,
            far,
            projection,
        }
    }

    pub fn projection(&self) -> &Matrix4<f32> {
        &self.projection
    }

    /// Project a view-space point to normalized device coordinates.
    ///
    /// A point with `w == 0` after the matrix multiply has no finite
    /// projection; the caller drops the primitive it belongs to.
    pub fn project(&self, view: &Point3<f32>) -> Result<Vector3<f32>, RenderError> {
        let clip = self.projection * view.to_homogeneous();
        math::perspective_divide(clip).ok_or(RenderError::PointAtInfinity)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(60.0, 0.1, 100.0)
    }
}

/// True when an NDC point lands inside the visible unit square in X and Y.
pub fn on_screen(ndc: &Vector3<f32>) -> bool {
    ndc.x >= -1.0 && ndc.x <= 1.0 && ndc.y >= -1.0 && ndc.y <= 1.0
}
