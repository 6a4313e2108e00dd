//! # dent-math
//!
//! Math primitives for the dent deformation engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Quat`, etc.)
//! - [`MeshTransform`] for moving probes between world and mesh-local frames
//! - Scalar easing helpers used by the force integrator

pub mod easing;
pub mod transform;

// Re-export glam types as the canonical math types for dent.
pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

pub use easing::{lerp_vec3, smoothstep};
pub use transform::MeshTransform;
