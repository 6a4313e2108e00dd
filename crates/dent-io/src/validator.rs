//! Run configuration and mesh validation.
//!
//! Catches data-level errors before the simulator sees them. The
//! simulator itself clamps parameters at tick time; configs are held to
//! a stricter standard.

use dent_mesh::TriangleMesh;
use dent_types::{DentError, DentResult};

use crate::contract::{MeshSource, RunConfig};
use crate::probe_path::ProbePath;

/// Validates a complete run configuration.
///
/// Checks:
/// - Simulation parameters are in range
/// - Timestep and frame count are usable
/// - Probe radius and path are finite and sensible
/// - The mesh transform is invertible
/// - Procedural mesh sources have non-zero resolution
pub fn validate_run_config(config: &RunConfig) -> DentResult<()> {
    config.params.validate()?;

    if !config.dt.is_finite() || config.dt <= 0.0 {
        return Err(DentError::InvalidConfig("dt must be positive".into()));
    }
    if config.dt > 1.0 {
        return Err(DentError::InvalidConfig(
            "dt > 1.0 is unreasonably large".into(),
        ));
    }
    if config.frames == 0 {
        return Err(DentError::InvalidConfig("frames must be >= 1".into()));
    }

    let radius = config.probe.radius;
    if !radius.is_finite() || radius <= 0.0 {
        return Err(DentError::InvalidConfig(format!(
            "probe radius must be positive, got {radius}"
        )));
    }
    validate_path(&config.probe.path)?;

    if !config.transform.is_invertible() {
        return Err(DentError::InvalidConfig(
            "mesh transform must be finite with non-zero scale".into(),
        ));
    }

    validate_source(&config.mesh)
}

fn validate_path(path: &ProbePath) -> DentResult<()> {
    match *path {
        ProbePath::Static { center } if !center.is_finite() => Err(DentError::InvalidConfig(
            "probe center must be finite".into(),
        )),
        ProbePath::Linear { from, to, duration }
            if !from.is_finite() || !to.is_finite() || !positive(duration) =>
        {
            Err(DentError::InvalidConfig(
                "linear probe path needs finite endpoints and a positive duration".into(),
            ))
        }
        ProbePath::Oscillate {
            center,
            direction,
            amplitude,
            frequency,
        } if !center.is_finite()
            || direction.length_squared() == 0.0
            || !direction.is_finite()
            || !amplitude.is_finite()
            || !positive(frequency) =>
        {
            Err(DentError::InvalidConfig(
                "oscillating probe path needs a non-zero direction and a positive frequency"
                    .into(),
            ))
        }
        _ => Ok(()),
    }
}

fn positive(x: f32) -> bool {
    x.is_finite() && x > 0.0
}

fn validate_source(source: &MeshSource) -> DentResult<()> {
    let ok = match *source {
        MeshSource::Grid {
            cols,
            rows,
            width,
            height,
        } => cols > 0 && rows > 0 && width > 0.0 && height > 0.0,
        MeshSource::Sphere {
            radius,
            stacks,
            slices,
        } => radius > 0.0 && stacks >= 2 && slices >= 3,
        MeshSource::Polyline { count, spacing } => count > 0 && spacing.is_finite(),
        MeshSource::File { .. } => true,
    };
    if ok {
        Ok(())
    } else {
        Err(DentError::InvalidConfig(format!(
            "mesh source has degenerate dimensions: {source:?}"
        )))
    }
}

/// Validates a mesh the simulator is about to receive.
///
/// Mirrors the simulator's initialization checks so that problems surface
/// with a specific message before any run starts.
pub fn validate_mesh(mesh: &TriangleMesh) -> DentResult<()> {
    if !mesh.readable {
        return Err(DentError::UnreadableGeometry(
            "mesh is flagged as not CPU-readable".into(),
        ));
    }
    if mesh.vertex_count() == 0 {
        return Err(DentError::MissingGeometry);
    }
    mesh.validate()?;
    if (0..mesh.vertex_count()).any(|i| !mesh.position_vec3(i).is_finite()) {
        return Err(DentError::InvalidMesh("non-finite vertex position".into()));
    }
    Ok(())
}
