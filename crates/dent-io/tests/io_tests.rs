//! Integration tests for dent-io.

use dent_math::{MeshTransform, Vec3};
use dent_io::contract::{MeshSource, ProbeConfig, RunConfig};
use dent_io::mesh_io::{load_mesh_json, save_mesh_json};
use dent_io::probe_path::ProbePath;
use dent_io::validator::{validate_mesh, validate_run_config};
use dent_mesh::generators::quad_grid;
use dent_solver::SimulationParams;
use dent_types::DentError;

const SAMPLE: &str = r#"
dt = 0.02
frames = 120

[mesh]
kind = "grid"
cols = 10
rows = 10
width = 2.0
height = 2.0

[probe]
radius = 0.3
path = { kind = "linear", from = [-1.5, 0.0, 0.1], to = [1.5, 0.0, 0.1], duration = 2.0 }

[params]
stiffness = 5.0
vertex_stride = 1
"#;

fn sample() -> RunConfig {
    RunConfig::from_toml_str(SAMPLE).unwrap()
}

// ─── Probe Path Tests ─────────────────────────────────────────

#[test]
fn static_path_never_moves() {
    let path = ProbePath::Static {
        center: Vec3::new(1.0, 2.0, 3.0),
    };
    assert_eq!(path.position_at(0.0), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(path.position_at(100.0), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(path.settle_time(), Some(0.0));
}

#[test]
fn linear_path_interpolates_then_holds() {
    let path = ProbePath::Linear {
        from: Vec3::ZERO,
        to: Vec3::new(2.0, 0.0, 0.0),
        duration: 2.0,
    };
    assert_eq!(path.position_at(0.0), Vec3::ZERO);
    assert!((path.position_at(1.0) - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
    assert_eq!(path.position_at(5.0), Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(path.position_at(-1.0), Vec3::ZERO);
}

#[test]
fn oscillating_path_presses_and_returns() {
    let path = ProbePath::Oscillate {
        center: Vec3::new(0.0, 0.0, 1.0),
        direction: Vec3::new(0.0, 0.0, -2.0),
        amplitude: 0.5,
        frequency: 1.0,
    };
    assert!((path.position_at(0.0) - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);
    assert!((path.position_at(0.5) - Vec3::new(0.0, 0.0, 0.5)).length() < 1e-5);
    assert!((path.position_at(1.0) - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
    assert_eq!(path.settle_time(), None);
}

// ─── Contract Tests ───────────────────────────────────────────

#[test]
fn parse_sample_config() {
    let config = sample();
    assert_eq!(config.frames, 120);
    assert!((config.dt - 0.02).abs() < 1e-7);
    assert_eq!(config.params.stiffness, 5.0);
    assert_eq!(config.params.damping, 0.7);
    assert_eq!(config.transform, MeshTransform::IDENTITY);
    assert!(matches!(config.mesh, MeshSource::Grid { cols: 10, .. }));
    assert!(matches!(config.probe.path, ProbePath::Linear { .. }));
    assert!((config.duration() - 2.4).abs() < 1e-5);
}

#[test]
fn defaults_fill_missing_sections() {
    let config = RunConfig::from_toml_str(
        r#"
[mesh]
kind = "polyline"
count = 4
spacing = 1.0

[probe]
radius = 0.5
"#,
    )
    .unwrap();
    assert_eq!(config.frames, 240);
    assert_eq!(config.params, SimulationParams::default());
    assert_eq!(config.probe.path, ProbePath::default());
}

#[test]
fn partial_transform_uses_identity_for_the_rest() {
    let text = format!("{SAMPLE}\n[transform]\ntranslation = [0.0, 1.0, 0.0]\n");
    let config = RunConfig::from_toml_str(&text).unwrap();
    assert_eq!(config.transform.translation, Vec3::Y);
    assert_eq!(config.transform.scale, Vec3::ONE);
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = RunConfig::from_toml_str("frames = \"many\"").unwrap_err();
    assert!(matches!(err, DentError::InvalidConfig(_)));
}

#[test]
fn toml_round_trip() {
    let config = sample();
    let text = config.to_toml_string().unwrap();
    let recovered = RunConfig::from_toml_str(&text).unwrap();
    assert_eq!(recovered, config);
}

#[test]
fn probe_config_samples_path() {
    let probe = ProbeConfig {
        radius: 0.25,
        path: ProbePath::Linear {
            from: Vec3::ZERO,
            to: Vec3::X,
            duration: 1.0,
        },
    };
    let sphere = probe.probe_at(0.5);
    assert_eq!(sphere.radius, 0.25);
    assert!((sphere.center.x - 0.5).abs() < 1e-6);
}

#[test]
fn build_procedural_mesh() {
    let mesh = sample().build_mesh().unwrap();
    assert_eq!(mesh.vertex_count(), 121);
}

// ─── Mesh I/O Tests ───────────────────────────────────────────

#[test]
fn mesh_file_round_trip_via_config() {
    let dir = std::env::temp_dir().join(format!("dent_io_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let mesh = quad_grid(3, 3, 1.0, 1.0);
    save_mesh_json(&mesh, dir.join("plate.json")).unwrap();

    let config_path = dir.join("run.toml");
    std::fs::write(
        &config_path,
        r#"
[mesh]
kind = "file"
path = "plate.json"

[probe]
radius = 0.2
"#,
    )
    .unwrap();

    let config = RunConfig::load(&config_path).unwrap();
    let loaded = config.build_mesh().unwrap();
    let direct = load_mesh_json(dir.join("plate.json")).unwrap();
    let _ = std::fs::remove_dir_all(&dir);

    assert_eq!(loaded.positions(), mesh.positions());
    assert_eq!(loaded.indices, mesh.indices);
    assert_eq!(loaded.bounds, mesh.bounds);
    assert_eq!(direct.vertex_count(), 16);
}

#[test]
fn missing_mesh_file_is_io_error() {
    let err = load_mesh_json("/nonexistent/dent/mesh.json").unwrap_err();
    assert!(matches!(err, DentError::Io(_)));
}

// ─── Validator Tests ──────────────────────────────────────────

#[test]
fn valid_config_passes() {
    assert!(validate_run_config(&sample()).is_ok());
}

#[test]
fn bad_timestep_rejected() {
    let mut config = sample();
    config.dt = -0.01;
    assert!(validate_run_config(&config).is_err());
    config.dt = 2.0;
    assert!(validate_run_config(&config).is_err());
}

#[test]
fn zero_frames_rejected() {
    let mut config = sample();
    config.frames = 0;
    assert!(validate_run_config(&config).is_err());
}

#[test]
fn bad_probe_rejected() {
    let mut config = sample();
    config.probe.radius = 0.0;
    assert!(validate_run_config(&config).is_err());

    let mut config = sample();
    config.probe.path = ProbePath::Oscillate {
        center: Vec3::ZERO,
        direction: Vec3::ZERO,
        amplitude: 0.2,
        frequency: 1.0,
    };
    assert!(validate_run_config(&config).is_err());

    let mut config = sample();
    config.probe.path = ProbePath::Linear {
        from: Vec3::ZERO,
        to: Vec3::X,
        duration: 0.0,
    };
    assert!(validate_run_config(&config).is_err());
}

#[test]
fn out_of_range_params_rejected() {
    let mut config = sample();
    config.params.damping = 1.5;
    assert!(matches!(
        validate_run_config(&config),
        Err(DentError::InvalidConfig(_))
    ));
}

#[test]
fn zero_scale_transform_rejected() {
    let mut config = sample();
    config.transform.scale = Vec3::new(1.0, 0.0, 1.0);
    assert!(validate_run_config(&config).is_err());
}

#[test]
fn degenerate_grid_rejected() {
    let mut config = sample();
    config.mesh = MeshSource::Grid {
        cols: 0,
        rows: 4,
        width: 1.0,
        height: 1.0,
    };
    assert!(validate_run_config(&config).is_err());
}

#[test]
fn mesh_validation_matches_simulator_checks() {
    assert!(validate_mesh(&quad_grid(2, 2, 1.0, 1.0)).is_ok());
    assert!(matches!(
        validate_mesh(&quad_grid(2, 2, 1.0, 1.0).with_readable(false)),
        Err(DentError::UnreadableGeometry(_))
    ));

    let mut broken = quad_grid(2, 2, 1.0, 1.0);
    broken.indices.push(0);
    assert!(validate_mesh(&broken).is_err());

    let mut nan = quad_grid(2, 2, 1.0, 1.0);
    nan.pos_x[0] = f32::NAN;
    assert!(matches!(validate_mesh(&nan), Err(DentError::InvalidMesh(_))));
}
