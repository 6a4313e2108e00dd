//! Geometry cache — per-vertex buffers owned by the simulator.
//!
//! Four buffers of identical, fixed length:
//!
//! ```text
//! rest:       undeformed reference shape (never written after init)
//! current:    live, rendered positions
//! previous:   snapshot of `current` taken at the start of each tick
//! velocities: per-vertex elastic momentum, persistent across ticks
//! ```

use dent_math::Vec3;
use dent_types::{DentError, DentResult};

/// Rest, current, previous and velocity buffers for one mesh.
#[derive(Debug, Clone)]
pub struct GeometryCache {
    pub(crate) rest: Vec<Vec3>,
    pub(crate) current: Vec<Vec3>,
    pub(crate) previous: Vec<Vec3>,
    pub(crate) velocities: Vec<Vec3>,
}

impl GeometryCache {
    /// Builds the cache from rest positions.
    ///
    /// `current` and `previous` start equal to `rest`; velocities are zero.
    pub fn from_rest(rest: Vec<Vec3>) -> DentResult<Self> {
        if rest.is_empty() {
            return Err(DentError::MissingGeometry);
        }
        let n = rest.len();
        Ok(Self {
            current: rest.clone(),
            previous: rest.clone(),
            velocities: vec![Vec3::ZERO; n],
            rest,
        })
    }

    /// Number of vertices. Fixed for the lifetime of the cache.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.rest.len()
    }

    pub fn rest(&self) -> &[Vec3] {
        &self.rest
    }

    pub fn current(&self) -> &[Vec3] {
        &self.current
    }

    pub fn previous(&self) -> &[Vec3] {
        &self.previous
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    /// Save current positions as "previous" for this tick's smoothing.
    pub fn save_previous(&mut self) {
        self.previous.copy_from_slice(&self.current);
    }

    /// Restore the rest pose and zero all velocities, in place.
    pub fn reset(&mut self) {
        self.current.copy_from_slice(&self.rest);
        self.previous.copy_from_slice(&self.rest);
        self.velocities.fill(Vec3::ZERO);
    }

    /// Offset of vertex `i` from its rest position.
    #[inline]
    pub fn displacement(&self, i: usize) -> Vec3 {
        self.current[i] - self.rest[i]
    }

    /// Largest displacement magnitude over all vertices.
    pub fn max_displacement(&self) -> f32 {
        (0..self.vertex_count())
            .map(|i| self.displacement(i).length())
            .fold(0.0, f32::max)
    }

    /// Total kinetic energy assuming unit mass per vertex: 0.5 * Σ ||v_i||².
    pub fn kinetic_energy(&self) -> f64 {
        self.velocities
            .iter()
            .map(|v| 0.5 * v.length_squared() as f64)
            .sum()
    }

    /// True if every position and velocity is finite.
    pub fn is_finite(&self) -> bool {
        self.current.iter().all(|p| p.is_finite()) && self.velocities.iter().all(|v| v.is_finite())
    }
}
