//! Simulation parameters.
//!
//! Every field may be edited between ticks; changes take effect on the
//! next call to `tick`. Out-of-range values are clamped when a tick reads
//! them (see [`SimulationParams::sanitized`]).

use dent_types::constants::{
    DEFAULT_NORMAL_REFRESH_INTERVAL, DEFAULT_REACTION_SCALE, DEFAULT_REACTION_THRESHOLD_SQ,
};
use dent_types::{DentError, DentResult};
use serde::{Deserialize, Serialize};

/// Tunables for the deformation simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Spring constant pulling vertices back to rest.
    pub stiffness: f32,

    /// Width of the soft band beyond the probe surface (mesh-local units).
    pub influence_radius: f32,

    /// Velocity damping factor (0.0 = none, 1.0 = velocity killed every tick).
    pub damping: f32,

    /// Scales the push applied inside the influence band and on penetration.
    pub deformation_strength: f32,

    /// Temporal smoothing (0.0 = fully responsive, 1.0 = frozen).
    pub smoothing_strength: f32,

    /// Resolve vertices inside the probe and push back on it.
    pub prevent_penetration: bool,

    /// Scales the reaction force sent to the probe.
    pub collision_force: f32,

    /// Extra reaction multiplier applied to penetration depth.
    pub reaction_scale: f32,

    /// Squared reaction magnitude below which nothing is applied.
    pub reaction_threshold: f32,

    /// Only every `vertex_stride`-th vertex is simulated directly; the rest
    /// are interpolated from their sampled neighbours. The last vertex is
    /// always simulated, whatever its index.
    pub vertex_stride: usize,

    /// Normals are recomputed once every this many ticks.
    pub normal_refresh_interval: u32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            stiffness: 3.0,
            influence_radius: 1.0,
            damping: 0.7,
            deformation_strength: 2.0,
            smoothing_strength: 0.3,
            prevent_penetration: true,
            collision_force: 0.5,
            reaction_scale: DEFAULT_REACTION_SCALE,
            reaction_threshold: DEFAULT_REACTION_THRESHOLD_SQ,
            vertex_stride: 2,
            normal_refresh_interval: DEFAULT_NORMAL_REFRESH_INTERVAL,
        }
    }
}

impl SimulationParams {
    /// Every vertex simulated, no temporal smoothing.
    pub fn responsive() -> Self {
        Self {
            smoothing_strength: 0.0,
            vertex_stride: 1,
            normal_refresh_interval: 1,
            ..Default::default()
        }
    }

    /// Heavier smoothing and sparser sampling for dense meshes.
    pub fn stable() -> Self {
        Self {
            smoothing_strength: 0.6,
            vertex_stride: 3,
            damping: 0.8,
            ..Default::default()
        }
    }

    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_influence_radius(mut self, radius: f32) -> Self {
        self.influence_radius = radius;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_deformation_strength(mut self, strength: f32) -> Self {
        self.deformation_strength = strength;
        self
    }

    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing_strength = smoothing;
        self
    }

    pub fn with_prevent_penetration(mut self, enabled: bool) -> Self {
        self.prevent_penetration = enabled;
        self
    }

    pub fn with_collision_force(mut self, force: f32) -> Self {
        self.collision_force = force;
        self
    }

    pub fn with_reaction_scale(mut self, scale: f32) -> Self {
        self.reaction_scale = scale;
        self
    }

    pub fn with_stride(mut self, stride: usize) -> Self {
        self.vertex_stride = stride;
        self
    }

    /// Copy with every field forced into its usable range.
    ///
    /// Non-finite values fall back to their defaults. Damping and smoothing
    /// are then clamped to `[0, 1]`, the stride and the normal interval to at
    /// least 1, and the influence radius to a small positive minimum so the
    /// influence falloff never divides by zero.
    pub fn sanitized(&self) -> Self {
        let d = Self::default();
        Self {
            stiffness: finite_or(self.stiffness, d.stiffness).max(0.0),
            influence_radius: finite_or(self.influence_radius, d.influence_radius).max(1e-4),
            damping: finite_or(self.damping, d.damping).clamp(0.0, 1.0),
            deformation_strength: finite_or(self.deformation_strength, d.deformation_strength)
                .max(0.0),
            smoothing_strength: finite_or(self.smoothing_strength, d.smoothing_strength)
                .clamp(0.0, 1.0),
            prevent_penetration: self.prevent_penetration,
            collision_force: finite_or(self.collision_force, d.collision_force).max(0.0),
            reaction_scale: finite_or(self.reaction_scale, d.reaction_scale).max(0.0),
            reaction_threshold: finite_or(self.reaction_threshold, d.reaction_threshold).max(0.0),
            vertex_stride: self.vertex_stride.max(1),
            normal_refresh_interval: self.normal_refresh_interval.max(1),
        }
    }

    /// Strict validation for parameters loaded from configuration files.
    pub fn validate(&self) -> DentResult<()> {
        let finite = [
            ("stiffness", self.stiffness),
            ("influence_radius", self.influence_radius),
            ("damping", self.damping),
            ("deformation_strength", self.deformation_strength),
            ("smoothing_strength", self.smoothing_strength),
            ("collision_force", self.collision_force),
            ("reaction_scale", self.reaction_scale),
            ("reaction_threshold", self.reaction_threshold),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(DentError::InvalidConfig(format!("{name} must be finite")));
            }
            if value < 0.0 {
                return Err(DentError::InvalidConfig(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        if self.influence_radius <= 0.0 {
            return Err(DentError::InvalidConfig(
                "influence_radius must be positive".into(),
            ));
        }
        if self.damping > 1.0 {
            return Err(DentError::InvalidConfig(format!(
                "damping must be in [0, 1], got {}",
                self.damping
            )));
        }
        if self.smoothing_strength > 1.0 {
            return Err(DentError::InvalidConfig(format!(
                "smoothing_strength must be in [0, 1], got {}",
                self.smoothing_strength
            )));
        }
        if self.vertex_stride == 0 {
            return Err(DentError::InvalidConfig(
                "vertex_stride must be >= 1".into(),
            ));
        }
        if self.normal_refresh_interval == 0 {
            return Err(DentError::InvalidConfig(
                "normal_refresh_interval must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
