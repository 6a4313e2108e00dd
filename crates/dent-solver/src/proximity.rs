//! Proximity classifier.
//!
//! Classifies a vertex against the probe in mesh-local space. The squared
//! distance is tested first so vertices outside the influence sphere never
//! pay for a square root.

use dent_math::Vec3;
use dent_types::constants::SINGULARITY_EPSILON;

/// Which force regime a vertex falls into this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Beyond `probe_radius + influence_radius`: spring back to rest.
    Outside,
    /// In the soft band around the probe: eased push away.
    Influenced,
    /// Inside the probe: positional correction plus reaction.
    Penetrating,
}

impl Zone {
    /// True for the zones that count as "affected" in diagnostics.
    #[inline]
    pub fn is_affected(self) -> bool {
        !matches!(self, Zone::Outside)
    }
}

/// Classification of one vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proximity {
    pub zone: Zone,
    /// Distance from the probe center. Only meaningful inside the influence
    /// sphere; `Outside` vertices report `f32::INFINITY`.
    pub distance: f32,
    /// Unit direction from the probe center to the vertex. Local +Y when the
    /// vertex sits on the center.
    pub push_dir: Vec3,
}

/// The probe expressed in mesh-local space, with derived thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeFrame {
    /// Probe center in mesh-local coordinates.
    pub center: Vec3,
    /// Probe radius in mesh-local units.
    pub radius: f32,
    /// Soft band width beyond the probe surface.
    pub influence_radius: f32,
    /// `radius + influence_radius`.
    pub max_dist: f32,
    max_dist_sq: f32,
    prevent_penetration: bool,
}

impl ProbeFrame {
    pub fn new(center: Vec3, radius: f32, influence_radius: f32, prevent_penetration: bool) -> Self {
        let max_dist = radius + influence_radius;
        Self {
            center,
            radius,
            influence_radius,
            max_dist,
            max_dist_sq: max_dist * max_dist,
            prevent_penetration,
        }
    }

    /// Classify a vertex position.
    ///
    /// ```
    /// use dent_math::Vec3;
    /// use dent_solver::{ProbeFrame, Zone};
    ///
    /// let frame = ProbeFrame::new(Vec3::ZERO, 0.5, 1.0, true);
    /// assert_eq!(frame.classify(Vec3::new(0.2, 0.0, 0.0)).zone, Zone::Penetrating);
    /// assert_eq!(frame.classify(Vec3::new(1.0, 0.0, 0.0)).zone, Zone::Influenced);
    /// assert_eq!(frame.classify(Vec3::new(2.0, 0.0, 0.0)).zone, Zone::Outside);
    /// ```
    pub fn classify(&self, position: Vec3) -> Proximity {
        let offset = position - self.center;
        let dist_sq = offset.length_squared();

        if dist_sq > self.max_dist_sq {
            return Proximity {
                zone: Zone::Outside,
                distance: f32::INFINITY,
                push_dir: Vec3::ZERO,
            };
        }

        let distance = dist_sq.sqrt();
        let push_dir = if distance > SINGULARITY_EPSILON {
            offset / distance
        } else {
            Vec3::Y
        };

        let zone = if self.prevent_penetration && distance < self.radius {
            Zone::Penetrating
        } else if distance < self.max_dist {
            Zone::Influenced
        } else {
            // dist == max_dist exactly
            Zone::Outside
        };

        Proximity {
            zone,
            distance,
            push_dir,
        }
    }
}
