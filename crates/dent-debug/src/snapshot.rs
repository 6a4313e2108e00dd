//! State snapshot serialization for replay and debugging.
//!
//! A snapshot captures the geometry cache at one tick: rest pose, live
//! positions and velocities.

use std::fs;
use std::path::Path;

use dent_math::Vec3;
use dent_solver::GeometryCache;
use dent_types::{DentError, DentResult};
use serde::{Deserialize, Serialize};

/// A geometry cache snapshot, serialized with `bincode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Tick index when this snapshot was taken.
    pub tick: u64,
    /// Simulated time in seconds.
    pub sim_time: f64,
    /// Rest positions (flat: [x0, y0, z0, x1, ...]).
    pub rest: Vec<f32>,
    /// Live positions, same layout.
    pub positions: Vec<f32>,
    /// Velocities, same layout.
    pub velocities: Vec<f32>,
    pub vertex_count: usize,
}

fn flatten(points: &[Vec3]) -> Vec<f32> {
    points.iter().flat_map(|p| p.to_array()).collect()
}

impl StateSnapshot {
    /// Captures the buffers of `cache`.
    pub fn from_cache(tick: u64, sim_time: f64, cache: &GeometryCache) -> Self {
        Self {
            tick,
            sim_time,
            rest: flatten(cache.rest()),
            positions: flatten(cache.current()),
            velocities: flatten(cache.velocities()),
            vertex_count: cache.vertex_count(),
        }
    }

    /// Live position of vertex `i`.
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[i * 3..i * 3 + 3])
    }

    /// Rest position of vertex `i`.
    pub fn rest_position(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.rest[i * 3..i * 3 + 3])
    }

    /// Largest distance of any vertex from its rest position.
    pub fn max_displacement(&self) -> f32 {
        (0..self.vertex_count)
            .map(|i| self.position(i).distance(self.rest_position(i)))
            .fold(0.0, f32::max)
    }

    /// Number of vertices displaced by more than `epsilon`.
    pub fn displaced_count(&self, epsilon: f32) -> usize {
        (0..self.vertex_count)
            .filter(|&i| self.position(i).distance(self.rest_position(i)) > epsilon)
            .count()
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> DentResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| DentError::Serialization(e.to_string()))
    }

    /// Deserializes from binary format, checking buffer lengths.
    pub fn from_bytes(data: &[u8]) -> DentResult<Self> {
        let snapshot: Self = bincode::deserialize(data)
            .map_err(|e| DentError::Serialization(format!("snapshot decode failed: {e}")))?;
        let expected = snapshot.vertex_count * 3;
        if snapshot.rest.len() != expected
            || snapshot.positions.len() != expected
            || snapshot.velocities.len() != expected
        {
            return Err(DentError::Serialization(format!(
                "snapshot buffers do not match vertex count {}",
                snapshot.vertex_count
            )));
        }
        Ok(snapshot)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> DentResult<()> {
        fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    pub fn read_from(path: impl AsRef<Path>) -> DentResult<Self> {
        Self::from_bytes(&fs::read(path)?)
    }
}
