//! Debug overlay: wire spheres for the probe and its influence band, and
//! a ray along the last reaction force.
//!
//! The overlay only reads simulator state. Shapes are in world space.

use std::f32::consts::TAU;

use dent_math::Vec3;
use dent_solver::{DeformationSimulator, SphereProbe};
use dent_types::constants::DEBUG_FORCE_RAY_SCALE;
use serde::{Deserialize, Serialize};

/// Linear RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const RED: Color = Color([1.0, 0.0, 0.0, 1.0]);
    pub const YELLOW: Color = Color([1.0, 0.92, 0.016, 1.0]);
    pub const CYAN: Color = Color([0.0, 1.0, 1.0, 1.0]);
}

/// A primitive to draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DebugShape {
    WireSphere {
        center: Vec3,
        radius: f32,
        color: Color,
    },
    Ray {
        origin: Vec3,
        direction: Vec3,
        color: Color,
    },
}

impl DebugShape {
    pub fn color(&self) -> Color {
        match self {
            DebugShape::WireSphere { color, .. } | DebugShape::Ray { color, .. } => *color,
        }
    }

    /// Tessellates the shape into line segments.
    ///
    /// Spheres become three axis-aligned great circles of `segments`
    /// edges each; rays are a single segment.
    pub fn line_segments(&self, segments: usize) -> Vec<[Vec3; 2]> {
        match *self {
            DebugShape::Ray {
                origin, direction, ..
            } => vec![[origin, origin + direction]],
            DebugShape::WireSphere { center, radius, .. } => {
                let segments = segments.max(3);
                let circle = move |a: Vec3, b: Vec3| {
                    (0..segments).map(move |k| {
                        let point = |k: usize| {
                            let theta = TAU * k as f32 / segments as f32;
                            center + (a * theta.cos() + b * theta.sin()) * radius
                        };
                        [point(k), point(k + 1)]
                    })
                };
                circle(Vec3::X, Vec3::Y)
                    .chain(circle(Vec3::Y, Vec3::Z))
                    .chain(circle(Vec3::Z, Vec3::X))
                    .collect()
            }
        }
    }
}

/// Builds overlay shapes for one simulator and its probe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebugOverlay {
    /// Master switch; a disabled overlay draws nothing.
    pub enabled: bool,
    /// Edges per great circle when tessellating spheres.
    pub circle_segments: usize,
}

impl Default for DebugOverlay {
    fn default() -> Self {
        Self {
            enabled: true,
            circle_segments: 32,
        }
    }
}

impl DebugOverlay {
    /// Shapes for the current frame.
    ///
    /// - probe radius, red
    /// - probe radius plus the world-space influence radius, yellow
    /// - last reaction × 0.1 from the probe center, cyan (only when the
    ///   reaction is above the application threshold)
    pub fn shapes(&self, probe: &SphereProbe, sim: &DeformationSimulator) -> Vec<DebugShape> {
        if !self.enabled {
            return Vec::new();
        }
        let influence_world = sim.params().influence_radius * sim.transform().scale.x;
        let mut shapes = vec![
            DebugShape::WireSphere {
                center: probe.center,
                radius: probe.radius,
                color: Color::RED,
            },
            DebugShape::WireSphere {
                center: probe.center,
                radius: probe.radius + influence_world,
                color: Color::YELLOW,
            },
        ];
        let reaction = sim.last_reaction();
        if sim.is_ready() && reaction.length_squared() > sim.params().reaction_threshold {
            shapes.push(DebugShape::Ray {
                origin: probe.center,
                direction: reaction * DEBUG_FORCE_RAY_SCALE,
                color: Color::CYAN,
            });
        }
        shapes
    }

    /// All shapes tessellated into colored line segments.
    pub fn lines(
        &self,
        probe: &SphereProbe,
        sim: &DeformationSimulator,
    ) -> Vec<([Vec3; 2], Color)> {
        self.shapes(probe, sim)
            .iter()
            .flat_map(|shape| {
                let color = shape.color();
                shape
                    .line_segments(self.circle_segments)
                    .into_iter()
                    .map(move |seg| (seg, color))
            })
            .collect()
    }
}
