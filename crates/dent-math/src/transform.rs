//! Mesh-to-world transform.
//!
//! The simulator works entirely in the mesh's local frame. The host hands
//! in a `MeshTransform` describing where the mesh sits in the world, and the
//! simulator uses it to bring the probe into the local frame and to send
//! reaction directions back out.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Translation, rotation and (possibly non-uniform) scale of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshTransform {
    /// World-space position of the mesh origin.
    pub translation: Vec3,
    /// World-space orientation of the mesh.
    pub rotation: Quat,
    /// Per-axis scale. Components must be non-zero.
    pub scale: Vec3,
}

impl MeshTransform {
    /// The identity transform (mesh-local == world).
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Creates a transform from its components.
    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Pure translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Sets a uniform scale.
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// Sets the rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Maps a world-space point into the mesh-local frame.
    #[inline]
    pub fn world_to_local_point(&self, point: Vec3) -> Vec3 {
        (self.rotation.inverse() * (point - self.translation)) / self.scale
    }

    /// Maps a mesh-local point into world space.
    #[inline]
    pub fn local_to_world_point(&self, point: Vec3) -> Vec3 {
        self.rotation * (point * self.scale) + self.translation
    }

    /// Rotates a mesh-local direction into world space.
    ///
    /// Scale is ignored, so unit directions stay unit length.
    #[inline]
    pub fn local_to_world_direction(&self, direction: Vec3) -> Vec3 {
        self.rotation * direction
    }

    /// Converts a world-space radius to mesh-local units using the X scale.
    #[inline]
    pub fn world_to_local_radius(&self, radius: f32) -> f32 {
        radius / self.scale.x
    }

    /// Converts a mesh-local radius to world units using the X scale.
    #[inline]
    pub fn local_to_world_radius(&self, radius: f32) -> f32 {
        radius * self.scale.x
    }

    /// Returns true if every scale component is finite and non-zero.
    pub fn is_invertible(&self) -> bool {
        self.scale.is_finite()
            && self.scale.x != 0.0
            && self.scale.y != 0.0
            && self.scale.z != 0.0
            && self.rotation.is_finite()
            && self.translation.is_finite()
    }
}

impl Default for MeshTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
