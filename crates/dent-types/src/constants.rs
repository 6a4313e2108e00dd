//! Tuning constants and simulation defaults.

/// Default frame timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Vertex count above which initialization reports a performance warning.
pub const HIGH_VERTEX_COUNT_THRESHOLD: usize = 3000;

/// Distances at or below this use the fallback push direction.
pub const SINGULARITY_EPSILON: f32 = 1.0e-3;

/// Squared reaction magnitude below which no force is applied to the probe.
pub const DEFAULT_REACTION_THRESHOLD_SQ: f32 = 0.01;

/// Multiplier applied to penetration depth when accumulating reaction force.
pub const DEFAULT_REACTION_SCALE: f32 = 10.0;

/// Normals are recomputed once every this many ticks.
pub const DEFAULT_NORMAL_REFRESH_INTERVAL: u32 = 3;

/// Length multiplier for the debug force ray.
pub const DEBUG_FORCE_RAY_SCALE: f32 = 0.1;
