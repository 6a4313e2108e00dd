//! Easing and interpolation helpers.

use glam::Vec3;

/// Cubic Hermite smoothstep on an already-normalized parameter.
///
/// Returns `t² (3 − 2t)`. The input is not clamped; callers pass values in
/// `[0, 1]`.
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation between two points: `a + (b - a) * t`.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}
