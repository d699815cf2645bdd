//! Scalar helpers shared by the projection and rasterization stages.
//!
//! Vectors and matrices themselves are nalgebra fixed-size value types, so
//! operand shapes are checked by the compiler. Only the operations nalgebra
//! does not ship live here.

use nalgebra::{Vector2, Vector3, Vector4};

/// Signed double-area of the triangle `(a, b, c)`.
///
/// The sign tells which side of the directed line `a -> b` the point `c`
/// lies on; zero means the three points are collinear.
#[inline]
pub fn edge_function(a: Vector2<f32>, b: Vector2<f32>, c: Vector2<f32>) -> f32 {
    (c.x - a.x) * (b.y - a.y) - (c.y - a.y) * (b.x - a.x)
}

/// Homogeneous divide. Returns `None` when `w == 0` (point at infinity).
#[inline]
pub fn perspective_divide(v: Vector4<f32>) -> Option<Vector3<f32>> {
    if v.w == 0.0 {
        return None;
    }
    if v.w == 1.0 {
        Some(Vector3::new(v.x, v.y, v.z))
    } else {
        Some(Vector3::new(v.x / v.w, v.y / v.w, v.z / v.w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_function_signs_by_side() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(2.0, 0.0);
        assert_eq!(edge_function(a, b, Vector2::new(1.0, 1.0)), -2.0);
        assert_eq!(edge_function(a, b, Vector2::new(1.0, -1.0)), 2.0);
    }

    #[test]
    fn test_edge_function_collinear_is_zero() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(2.0, 2.0);
        assert_eq!(edge_function(a, b, Vector2::new(5.0, 5.0)), 0.0);
    }

    #[test]
    fn test_perspective_divide_unit_w_passes_through() {
        let v = perspective_divide(Vector4::new(3.0, -2.0, 7.0, 1.0)).unwrap();
        assert_eq!(v, Vector3::new(3.0, -2.0, 7.0));
    }

    #[test]
    fn test_perspective_divide_scales_by_w() {
        let v = perspective_divide(Vector4::new(4.0, 2.0, 8.0, 2.0)).unwrap();
        assert_eq!(v, Vector3::new(2.0, 1.0, 4.0));
    }

    #[test]
    fn test_perspective_divide_rejects_zero_w() {
        assert!(perspective_divide(Vector4::new(1.0, 1.0, 1.0, 0.0)).is_none());
    }
}
