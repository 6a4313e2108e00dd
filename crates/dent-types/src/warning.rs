//! Non-fatal diagnostics.

use serde::{Deserialize, Serialize};

/// Informational warnings raised by the simulator.
///
/// Warnings never block an operation. They are logged, emitted as
/// telemetry, and handed back to the caller for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuntimeWarning {
    /// The mesh has more vertices than is comfortable for per-frame updates.
    HighVertexCount {
        /// Vertex count of the initialized mesh.
        vertex_count: usize,
        /// Threshold that was exceeded.
        threshold: usize,
    },
}

impl std::fmt::Display for RuntimeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeWarning::HighVertexCount {
                vertex_count,
                threshold,
            } => write!(
                f,
                "high vertex count ({vertex_count} > {threshold}); consider simplifying the mesh"
            ),
        }
    }
}
