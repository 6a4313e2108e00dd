//! JSON frame exporter — records per-frame vertex positions and the probe
//! sphere, then writes the whole animation on `finalize()`.

use std::path::PathBuf;

use dent_mesh::TriangleMesh;
use dent_types::{DentError, DentResult};
use serde::{Deserialize, Serialize};

use crate::renderer::{RenderFrame, Renderer};

/// One captured frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameData {
    pub tick: u64,
    /// Interleaved `[x0, y0, z0, x1, ...]`.
    pub positions: Vec<f32>,
    /// `[cx, cy, cz, radius]` when a probe was present.
    pub probe: Option<[f32; 4]>,
}

/// Complete animation written by the exporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationData {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub indices: Vec<u32>,
    pub frames: Vec<FrameData>,
}

/// Exports simulation frames to a JSON file.
///
/// ```text
/// let mut exporter = JsonFrameExporter::new("run.json");
/// exporter.init(&mesh)?;
/// // ... submit_frame() after every tick ...
/// exporter.finalize()?;
/// ```
pub struct JsonFrameExporter {
    output_path: PathBuf,
    /// Keep one frame out of every `frame_stride` submitted.
    frame_stride: usize,
    submitted: usize,
    animation: AnimationData,
}

impl JsonFrameExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            frame_stride: 1,
            submitted: 0,
            animation: AnimationData {
                vertex_count: 0,
                triangle_count: 0,
                indices: Vec::new(),
                frames: Vec::new(),
            },
        }
    }

    /// Records only every `stride`-th submitted frame.
    pub fn with_frame_stride(mut self, stride: usize) -> Self {
        self.frame_stride = stride.max(1);
        self
    }

    /// The animation captured so far.
    pub fn animation(&self) -> &AnimationData {
        &self.animation
    }

    pub fn to_json(&self) -> DentResult<String> {
        serde_json::to_string(&self.animation)
            .map_err(|e| DentError::Serialization(format!("JSON serialization failed: {e}")))
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, mesh: &TriangleMesh) -> DentResult<()> {
        self.animation.vertex_count = mesh.vertex_count();
        self.animation.triangle_count = mesh.triangle_count();
        self.animation.indices = mesh.indices.clone();
        self.animation.frames.clear();
        self.submitted = 0;
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> DentResult<()> {
        if frame.positions.len() != self.animation.vertex_count {
            return Err(DentError::InvalidMesh(format!(
                "frame has {} vertices, mesh has {}",
                frame.positions.len(),
                self.animation.vertex_count
            )));
        }
        let keep = self.submitted % self.frame_stride == 0;
        self.submitted += 1;
        if keep {
            self.animation.frames.push(FrameData {
                tick: frame.tick,
                positions: frame.interleaved(),
                probe: frame.probe.map(|(c, r)| [c.x, c.y, c.z, r]),
            });
        }
        Ok(())
    }

    fn finalize(&mut self) -> DentResult<()> {
        let json = self.to_json()?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> usize {
        self.animation.frames.len()
    }
}
