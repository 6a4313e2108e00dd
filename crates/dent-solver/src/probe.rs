//! The probe boundary.
//!
//! The probe is owned by the host (usually a rigid body in a physics
//! engine). The simulator only reads its world-space sphere each tick and,
//! optionally, pushes a reaction force back through [`ProbeBody`].

use dent_math::Vec3;
use serde::{Deserialize, Serialize};

/// World-space sphere sampled from the probe each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereProbe {
    /// Sphere center in world space.
    pub center: Vec3,
    /// Sphere radius in world units, already scaled by the probe's own
    /// transform.
    pub radius: f32,
}

impl SphereProbe {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Receives the reaction force produced by penetrating vertices.
///
/// Implemented by whatever owns the probe's rigid-body dynamics.
pub trait ProbeBody {
    /// Applies a continuous world-space force for this frame.
    fn apply_force(&mut self, force: Vec3);
}

/// Accumulates applied forces; handy for hosts without a physics engine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ForceAccumulator {
    /// Sum of every force applied so far.
    pub total: Vec3,
    /// Number of `apply_force` calls.
    pub applications: u32,
}

impl ProbeBody for ForceAccumulator {
    fn apply_force(&mut self, force: Vec3) {
        self.total += force;
        self.applications += 1;
    }
}
