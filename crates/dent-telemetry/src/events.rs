//! Simulation event types.
//!
//! Structured events emitted by the simulator at various points in each
//! tick. Events are lightweight value types that carry just enough data to
//! be useful for monitoring and debugging.

use dent_types::RuntimeWarning;
use serde::{Deserialize, Serialize};

/// A simulation event emitted by the engine.
///
/// Events are tagged with a tick index and carry domain-specific data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Tick number. Zero for events raised before the first tick.
    pub tick: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// Simulator initialized from source geometry.
    Initialized {
        /// Vertex count of the mesh.
        vertex_count: usize,
    },

    /// Initialization failed; the simulator stays uninitialized.
    InitFailed {
        /// Human-readable reason.
        reason: String,
    },

    /// Non-fatal diagnostic.
    Warning(RuntimeWarning),

    /// Geometry restored to its rest pose.
    Reset,

    /// Tick started.
    TickBegin {
        /// Frame delta time (seconds).
        dt: f32,
    },

    /// Proximity pass completed.
    Proximity {
        /// Vertices classified this tick.
        sampled: usize,
        /// Vertices in the influenced or penetrating zones.
        affected: usize,
        /// Vertices in the penetrating zone.
        penetrating: usize,
    },

    /// Reaction force pushed onto the probe (world frame).
    Reaction {
        /// Force vector `[fx, fy, fz]`.
        force: [f32; 3],
    },

    /// Tick completed.
    TickEnd {
        /// Wall-clock time for the tick (seconds).
        wall_time: f64,
        /// Whether normals were recomputed this tick.
        normals_refreshed: bool,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given tick.
    pub fn new(tick: u64, kind: EventKind) -> Self {
        Self { tick, kind }
    }
}
