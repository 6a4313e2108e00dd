//! Run configuration types.
//!
//! ```toml
//! dt = 0.016
//! frames = 240
//!
//! [mesh]
//! kind = "grid"
//! cols = 20
//! rows = 20
//! width = 2.0
//! height = 2.0
//!
//! [probe]
//! radius = 0.3
//! path = { kind = "linear", from = [-1.5, 0.0, 0.1], to = [1.5, 0.0, 0.1], duration = 3.0 }
//!
//! [params]
//! stiffness = 3.0
//! vertex_stride = 2
//! ```

use std::path::{Path, PathBuf};

use dent_math::MeshTransform;
use dent_mesh::generators::{polyline, quad_grid, uv_sphere};
use dent_mesh::TriangleMesh;
use dent_solver::{SimulationParams, SphereProbe};
use dent_types::constants::DEFAULT_DT;
use dent_types::{DentError, DentResult};
use serde::{Deserialize, Serialize};

use crate::mesh_io::load_mesh_json;
use crate::probe_path::ProbePath;

/// Where the deformable mesh comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MeshSource {
    /// Flat grid in the XY plane facing +Z.
    Grid {
        cols: usize,
        rows: usize,
        width: f32,
        height: f32,
    },
    /// UV sphere centered at the origin.
    Sphere {
        radius: f32,
        stacks: usize,
        slices: usize,
    },
    /// Unconnected vertices along +X.
    Polyline { count: usize, spacing: f32 },
    /// A `TriangleMesh` serialized as JSON. Relative paths resolve
    /// against the config file's directory.
    File { path: PathBuf },
}

impl MeshSource {
    /// Builds (or loads) the mesh.
    pub fn build(&self, base_dir: Option<&Path>) -> DentResult<TriangleMesh> {
        match self {
            MeshSource::Grid {
                cols,
                rows,
                width,
                height,
            } => Ok(quad_grid(*cols, *rows, *width, *height)),
            MeshSource::Sphere {
                radius,
                stacks,
                slices,
            } => Ok(uv_sphere(*radius, *stacks, *slices)),
            MeshSource::Polyline { count, spacing } => Ok(polyline(*count, *spacing)),
            MeshSource::File { path } => {
                let resolved = match base_dir {
                    Some(dir) if path.is_relative() => dir.join(path),
                    _ => path.clone(),
                };
                load_mesh_json(resolved)
            }
        }
    }
}

/// The probe sphere and its motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// World-space radius.
    pub radius: f32,
    #[serde(default)]
    pub path: ProbePath,
}

impl ProbeConfig {
    /// The probe at simulated time `t`.
    pub fn probe_at(&self, t: f32) -> SphereProbe {
        SphereProbe::new(self.path.position_at(t), self.radius)
    }
}

/// Everything needed for one headless run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Fixed frame delta (seconds).
    #[serde(default = "default_dt")]
    pub dt: f32,
    /// Number of frames to simulate.
    #[serde(default = "default_frames")]
    pub frames: u32,
    pub mesh: MeshSource,
    pub probe: ProbeConfig,
    #[serde(default)]
    pub params: SimulationParams,
    #[serde(default)]
    pub transform: MeshTransform,
    /// Directory of the file this config was read from.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_dt() -> f32 {
    DEFAULT_DT
}

fn default_frames() -> u32 {
    240
}

impl RunConfig {
    pub fn from_toml_str(text: &str) -> DentResult<Self> {
        toml::from_str(text).map_err(|e| DentError::InvalidConfig(e.to_string()))
    }

    pub fn to_toml_string(&self) -> DentResult<String> {
        toml::to_string_pretty(self).map_err(|e| DentError::Serialization(e.to_string()))
    }

    /// Reads a TOML config from disk.
    pub fn load(path: impl AsRef<Path>) -> DentResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&text)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        tracing::debug!(path = %path.display(), frames = config.frames, "run config loaded");
        Ok(config)
    }

    /// Builds the mesh named by the config.
    pub fn build_mesh(&self) -> DentResult<TriangleMesh> {
        self.mesh.build(self.base_dir.as_deref())
    }

    /// Simulated duration (seconds).
    pub fn duration(&self) -> f32 {
        self.dt * self.frames as f32
    }
}
