//! Scripted probe motion.
//!
//! Stands in for the rigid body that would normally carry the probe: the
//! driver samples the path at the simulated time of each frame.

use std::f32::consts::TAU;

use dent_math::{lerp_vec3, Vec3};
use serde::{Deserialize, Serialize};

/// How the probe center moves over time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProbePath {
    /// Probe held still.
    Static { center: Vec3 },

    /// Straight sweep from `from` to `to` over `duration` seconds, then
    /// held at `to`.
    Linear { from: Vec3, to: Vec3, duration: f32 },

    /// Repeated press: starts at `center`, travels `amplitude` along
    /// `direction` and back, `frequency` times per second.
    Oscillate {
        center: Vec3,
        direction: Vec3,
        amplitude: f32,
        frequency: f32,
    },
}

impl Default for ProbePath {
    fn default() -> Self {
        ProbePath::Static { center: Vec3::ZERO }
    }
}

impl ProbePath {
    /// Probe center at simulated time `t` (seconds).
    pub fn position_at(&self, t: f32) -> Vec3 {
        match *self {
            ProbePath::Static { center } => center,
            ProbePath::Linear { from, to, duration } => {
                if duration <= 0.0 {
                    return to;
                }
                lerp_vec3(from, to, (t / duration).clamp(0.0, 1.0))
            }
            ProbePath::Oscillate {
                center,
                direction,
                amplitude,
                frequency,
            } => {
                let depth = 0.5 * (1.0 - (TAU * frequency * t).cos());
                center + direction.normalize_or_zero() * amplitude * depth
            }
        }
    }

    /// Time after which the path stops moving, if it ever does.
    pub fn settle_time(&self) -> Option<f32> {
        match *self {
            ProbePath::Static { .. } => Some(0.0),
            ProbePath::Linear { duration, .. } => Some(duration.max(0.0)),
            ProbePath::Oscillate { .. } => None,
        }
    }
}
