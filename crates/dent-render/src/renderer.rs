//! Renderer trait and the headless renderer.
//!
//! The host driver submits one frame per tick after the simulator has
//! replaced the mesh buffer.

use dent_math::Vec3;
use dent_mesh::TriangleMesh;
use dent_types::DentResult;

/// A single render frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Tick this frame corresponds to.
    pub tick: u64,
    /// Mesh-local vertex positions.
    pub positions: Vec<Vec3>,
    /// Probe sphere in world space (center, radius), if one is present.
    pub probe: Option<(Vec3, f32)>,
}

impl RenderFrame {
    /// Copies the live positions for `tick`.
    pub fn from_positions(tick: u64, positions: &[Vec3]) -> Self {
        Self {
            tick,
            positions: positions.to_vec(),
            probe: None,
        }
    }

    pub fn with_probe(mut self, center: Vec3, radius: f32) -> Self {
        self.probe = Some((center, radius));
        self
    }

    /// Positions interleaved as `[x0, y0, z0, x1, ...]`.
    pub fn interleaved(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| p.to_array()).collect()
    }
}

/// Trait for presenting simulation output.
///
/// # Implementations
/// - [`HeadlessRenderer`] — discards frames (benchmarks, CI)
/// - [`JsonFrameExporter`](crate::JsonFrameExporter) — writes the run to JSON
pub trait Renderer: Send {
    /// Initialize the renderer with the mesh topology.
    fn init(&mut self, mesh: &TriangleMesh) -> DentResult<()>;

    /// Submit a frame for rendering.
    fn submit_frame(&mut self, frame: &RenderFrame) -> DentResult<()>;

    /// Flush buffers, close files.
    fn finalize(&mut self) -> DentResult<()>;

    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> usize;
}

/// Headless renderer — discards all frames.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, _mesh: &TriangleMesh) -> DentResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, _frame: &RenderFrame) -> DentResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> DentResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> usize {
        self.frames
    }
}
