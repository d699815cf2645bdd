//! Property tests for the transform builder.

use nalgebra::{Point3, Vector3};
use proptest::prelude::*;
use rast3d_core::Transform;

use std::f32::consts::PI;

proptest! {
    #[test]
    fn rotation_preserves_vector_length(
        px in -10.0f32..10.0,
        py in -10.0f32..10.0,
        pz in -10.0f32..10.0,
        ax in -1.0f32..1.0,
        ay in -1.0f32..1.0,
        az in -1.0f32..1.0,
        angle in -PI..PI,
    ) {
        prop_assume!(Vector3::new(ax, ay, az).norm_squared() > 1e-2);
        let point = Point3::new(px, py, pz);
        let rotated = Transform::identity().rotate(angle, ax, ay, az).apply(&point);
        prop_assert!(
            (rotated.coords.norm() - point.coords.norm()).abs() < 1e-3,
            "|{rotated}| != |{point}|"
        );
    }

    #[test]
    fn rotating_back_restores_the_point(
        px in -10.0f32..10.0,
        py in -10.0f32..10.0,
        pz in -10.0f32..10.0,
        ax in -1.0f32..1.0,
        ay in -1.0f32..1.0,
        az in -1.0f32..1.0,
        angle in -PI..PI,
    ) {
        prop_assume!(Vector3::new(ax, ay, az).norm_squared() > 1e-2);
        let point = Point3::new(px, py, pz);
        let round_trip = Transform::identity()
            .rotate(angle, ax, ay, az)
            .rotate(-angle, ax, ay, az)
            .apply(&point);
        prop_assert!((round_trip - point).norm() < 1e-3, "{round_trip} != {point}");
    }

    #[test]
    fn identity_transform_is_exact(
        px in -100.0f32..100.0,
        py in -100.0f32..100.0,
        pz in -100.0f32..100.0,
    ) {
        let point = Point3::new(px, py, pz);
        prop_assert_eq!(Transform::identity().apply(&point), point);
    }
}
