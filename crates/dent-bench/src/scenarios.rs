//! Benchmark scenarios: a mesh, a probe path and parameters.
//!
//! Three canonical scenarios for regression testing:
//! 1. **Grid press** — a probe repeatedly presses into a flat sheet
//! 2. **Sphere sweep** — a probe slides across the top of a sphere
//! 3. **Dense sheet** — a mesh above the vertex-count warning threshold,
//!    run with the stable preset

use dent_io::{ProbeConfig, ProbePath, RunConfig};
use dent_math::{MeshTransform, Vec3};
use dent_mesh::generators::{quad_grid, uv_sphere};
use dent_mesh::TriangleMesh;
use dent_solver::SimulationParams;
use dent_types::DentResult;
use serde::{Deserialize, Serialize};

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    GridPress,
    SphereSweep,
    DenseSheet,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::GridPress,
            ScenarioKind::SphereSweep,
            ScenarioKind::DenseSheet,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::GridPress => "grid_press",
            ScenarioKind::SphereSweep => "sphere_sweep",
            ScenarioKind::DenseSheet => "dense_sheet",
        }
    }

    /// Parses a scenario name as printed by [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<ScenarioKind> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// A fully specified run.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Label used in metrics.
    pub name: String,
    pub mesh: TriangleMesh,
    pub probe: ProbeConfig,
    pub params: SimulationParams,
    pub transform: MeshTransform,
    /// Number of frames to simulate.
    pub frames: u32,
    /// Frame delta (seconds).
    pub dt: f32,
}

impl Scenario {
    /// A 2 × 2 sheet at 20 × 20 resolution; a 0.3 probe presses 0.5 deep
    /// into its center once every two seconds, at 60 fps.
    pub fn grid_press() -> Self {
        Self {
            name: ScenarioKind::GridPress.name().into(),
            mesh: quad_grid(20, 20, 2.0, 2.0),
            probe: ProbeConfig {
                radius: 0.3,
                path: ProbePath::Oscillate {
                    center: Vec3::new(0.0, 0.0, 0.35),
                    direction: Vec3::NEG_Z,
                    amplitude: 0.5,
                    frequency: 0.5,
                },
            },
            params: SimulationParams::default(),
            transform: MeshTransform::IDENTITY,
            frames: 240,
            dt: 1.0 / 60.0,
        }
    }

    /// A unit sphere; a 0.25 probe sweeps across its north pole in 3 s.
    pub fn sphere_sweep() -> Self {
        Self {
            name: ScenarioKind::SphereSweep.name().into(),
            mesh: uv_sphere(1.0, 16, 32),
            probe: ProbeConfig {
                radius: 0.25,
                path: ProbePath::Linear {
                    from: Vec3::new(-1.2, 1.1, 0.0),
                    to: Vec3::new(1.2, 1.1, 0.0),
                    duration: 3.0,
                },
            },
            params: SimulationParams::default(),
            transform: MeshTransform::IDENTITY,
            frames: 180,
            dt: 1.0 / 60.0,
        }
    }

    /// A 64 × 64 sheet (4225 vertices) under a static probe.
    pub fn dense_sheet() -> Self {
        Self {
            name: ScenarioKind::DenseSheet.name().into(),
            mesh: quad_grid(64, 64, 2.0, 2.0),
            probe: ProbeConfig {
                radius: 0.4,
                path: ProbePath::Static {
                    center: Vec3::new(0.0, 0.0, 0.1),
                },
            },
            params: SimulationParams::stable(),
            transform: MeshTransform::IDENTITY,
            frames: 120,
            dt: 1.0 / 60.0,
        }
    }

    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::GridPress => Self::grid_press(),
            ScenarioKind::SphereSweep => Self::sphere_sweep(),
            ScenarioKind::DenseSheet => Self::dense_sheet(),
        }
    }

    /// Builds a scenario from a run configuration, loading its mesh.
    pub fn from_config(name: impl Into<String>, config: &RunConfig) -> DentResult<Self> {
        Ok(Self {
            name: name.into(),
            mesh: config.build_mesh()?,
            probe: config.probe,
            params: config.params.clone(),
            transform: config.transform,
            frames: config.frames,
            dt: config.dt,
        })
    }

    pub fn with_frames(mut self, frames: u32) -> Self {
        self.frames = frames;
        self
    }
}
