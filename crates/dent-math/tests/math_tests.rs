//! Integration tests for dent-math.

use std::f32::consts::FRAC_PI_2;

use dent_math::{MeshTransform, Quat, Vec3};

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

// ─── Transform Tests ──────────────────────────────────────────

#[test]
fn identity_round_trip() {
    let t = MeshTransform::IDENTITY;
    let p = Vec3::new(1.0, -2.0, 3.5);
    assert_eq!(t.world_to_local_point(p), p);
    assert_eq!(t.local_to_world_point(p), p);
}

#[test]
fn translated_point_to_local() {
    let t = MeshTransform::from_translation(Vec3::new(10.0, 0.0, 0.0));
    let local = t.world_to_local_point(Vec3::new(11.0, 1.0, 0.0));
    assert!(approx(local, Vec3::new(1.0, 1.0, 0.0)));
}

#[test]
fn scaled_and_rotated_round_trip() {
    let t = MeshTransform::new(
        Vec3::new(0.5, 1.0, -2.0),
        Quat::from_rotation_y(FRAC_PI_2),
        Vec3::new(2.0, 3.0, 0.5),
    );
    let p = Vec3::new(0.3, -0.7, 1.1);
    let world = t.local_to_world_point(p);
    assert!(approx(t.world_to_local_point(world), p));
}

#[test]
fn direction_ignores_scale() {
    let t = MeshTransform::IDENTITY
        .with_uniform_scale(4.0)
        .with_rotation(Quat::from_rotation_z(FRAC_PI_2));
    let d = t.local_to_world_direction(Vec3::X);
    assert!(approx(d, Vec3::Y));
    assert!((d.length() - 1.0).abs() < 1e-6);
}

#[test]
fn radius_uses_x_scale() {
    let t = MeshTransform {
        scale: Vec3::new(2.0, 5.0, 7.0),
        ..MeshTransform::IDENTITY
    };
    assert_eq!(t.world_to_local_radius(1.0), 0.5);
    assert_eq!(t.local_to_world_radius(0.5), 1.0);
}

#[test]
fn zero_scale_is_not_invertible() {
    let t = MeshTransform {
        scale: Vec3::new(1.0, 0.0, 1.0),
        ..MeshTransform::IDENTITY
    };
    assert!(!t.is_invertible());
    assert!(MeshTransform::IDENTITY.is_invertible());
}

#[test]
fn transform_is_serializable() {
    let t = MeshTransform::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let json = serde_json::to_string(&t).unwrap();
    let recovered: MeshTransform = serde_json::from_str(&json).unwrap();
    assert_eq!(t, recovered);
}
