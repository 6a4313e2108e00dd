//! Force integrator.
//!
//! Zone-specific velocity updates followed by damping and a semi-implicit
//! Euler position step. All math here is in mesh-local space; the caller
//! rotates reaction contributions into world space.

use dent_math::{smoothstep, Vec3};

use crate::config::SimulationParams;
use crate::proximity::{ProbeFrame, Proximity, Zone};

/// Per-tick integrator settings.
pub struct Integrator<'a> {
    params: &'a SimulationParams,
    frame: &'a ProbeFrame,
    dt: f32,
}

impl<'a> Integrator<'a> {
    pub fn new(params: &'a SimulationParams, frame: &'a ProbeFrame, dt: f32) -> Self {
        Self { params, frame, dt }
    }

    /// Advance one vertex by one tick.
    ///
    /// Returns the mesh-local reaction contribution for penetrating
    /// vertices, `None` otherwise.
    pub fn step_vertex(
        &self,
        rest: Vec3,
        position: &mut Vec3,
        velocity: &mut Vec3,
        proximity: &Proximity,
    ) -> Option<Vec3> {
        let reaction = self.apply_zone(rest, position, velocity, proximity);
        self.advance(position, velocity);
        reaction
    }

    fn apply_zone(
        &self,
        rest: Vec3,
        position: &mut Vec3,
        velocity: &mut Vec3,
        proximity: &Proximity,
    ) -> Option<Vec3> {
        let p = self.params;
        match proximity.zone {
            Zone::Outside => {
                *velocity += (rest - *position) * p.stiffness * self.dt;
                None
            }
            Zone::Penetrating => {
                let depth = self.frame.radius - proximity.distance;
                let correction = proximity.push_dir * depth;
                *position += correction;
                *velocity += correction * p.stiffness * p.deformation_strength;
                Some(-proximity.push_dir * depth * p.collision_force * p.reaction_scale)
            }
            Zone::Influenced => {
                let amount = self.frame.max_dist - proximity.distance;
                let influence = (amount / self.frame.influence_radius).clamp(0.0, 1.0);
                let eased = smoothstep(influence);
                *velocity +=
                    proximity.push_dir * amount * p.deformation_strength * eased * self.dt;
                None
            }
        }
    }

    /// Damping, then `p += v * dt` with the damped velocity.
    #[inline]
    fn advance(&self, position: &mut Vec3, velocity: &mut Vec3) {
        *velocity *= 1.0 - self.params.damping;
        *position += *velocity * self.dt;
    }
}
