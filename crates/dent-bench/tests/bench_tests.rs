//! Integration tests for dent-bench.

use std::sync::{Arc, Mutex};

use dent_bench::metrics::BenchmarkMetrics;
use dent_bench::runner::BenchmarkRunner;
use dent_bench::scenarios::{Scenario, ScenarioKind};
use dent_debug::hooks::{InspectionHook, TelemetryHook};
use dent_io::RunConfig;
use dent_math::{MeshTransform, Vec3};
use dent_render::renderer::{HeadlessRenderer, Renderer};
use dent_render::JsonFrameExporter;
use dent_solver::TickReport;

fn sample_metrics(name: &str) -> BenchmarkMetrics {
    BenchmarkMetrics {
        scenario: name.into(),
        total_wall_time: 1.5,
        ticks: 100,
        avg_step_time: 0.015,
        min_step_time: 0.01,
        max_step_time: 0.02,
        max_displacement: 0.5,
        final_displacement: 0.1,
        final_kinetic_energy: 0.0,
        total_reaction_impulse: 2.0,
        reaction_frames: 40,
        avg_affected: 12.5,
        vertex_count: 441,
        triangle_count: 800,
        warnings: 0,
    }
}

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn grid_press_setup() {
    let s = Scenario::grid_press();
    assert_eq!(s.name, "grid_press");
    assert_eq!(s.mesh.vertex_count(), 441); // 21×21
    assert_eq!(s.mesh.triangle_count(), 800); // 20×20×2
    assert_eq!(s.frames, 240);
}

#[test]
fn dense_sheet_exceeds_warning_threshold() {
    let s = Scenario::dense_sheet();
    assert_eq!(s.mesh.vertex_count(), 4225);
}

#[test]
fn all_scenarios() {
    assert_eq!(ScenarioKind::all().len(), 3);
    for &kind in ScenarioKind::all() {
        assert_eq!(ScenarioKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(ScenarioKind::from_name("nope"), None);
}

#[test]
fn scenario_from_config() {
    let config = RunConfig::from_toml_str(
        r#"
frames = 10

[mesh]
kind = "grid"
cols = 4
rows = 4
width = 1.0
height = 1.0

[probe]
radius = 0.2
path = { kind = "static", center = [0.0, 0.0, 0.05] }
"#,
    )
    .unwrap();
    let scenario = Scenario::from_config("custom", &config).unwrap();
    assert_eq!(scenario.name, "custom");
    assert_eq!(scenario.frames, 10);
    assert_eq!(scenario.mesh.vertex_count(), 25);
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn run_grid_press() {
    let scenario = Scenario::grid_press().with_frames(60);
    let metrics = BenchmarkRunner::run(&scenario).unwrap();

    assert_eq!(metrics.scenario, "grid_press");
    assert_eq!(metrics.ticks, 60);
    assert!(metrics.total_wall_time > 0.0);
    assert!(metrics.max_displacement > 0.0);
    assert!(metrics.reaction_frames > 0);
    assert!(metrics.total_reaction_impulse > 0.0);
    assert!(metrics.avg_affected > 0.0);
    assert_eq!(metrics.warnings, 0);
    assert!(metrics.final_kinetic_energy.is_finite());
    assert!(metrics.final_kinetic_energy >= 0.0);
}

#[test]
fn run_dense_sheet_reports_warning() {
    let scenario = Scenario::dense_sheet().with_frames(2);
    let metrics = BenchmarkRunner::run(&scenario).unwrap();
    assert_eq!(metrics.warnings, 1);
    assert_eq!(metrics.ticks, 2);
}

#[test]
fn run_all_scenarios_short() {
    for &kind in ScenarioKind::all() {
        let scenario = Scenario::from_kind(kind).with_frames(3);
        let metrics = BenchmarkRunner::run(&scenario).unwrap();
        assert_eq!(metrics.scenario, kind.name());
        assert_eq!(metrics.ticks, 3);
        assert!(metrics.total_wall_time >= 0.0);
    }
}

#[test]
fn run_with_hooks_and_renderer() {
    let scenario = Scenario::sphere_sweep().with_frames(20);
    let mut hooks: Vec<Box<dyn InspectionHook>> = vec![Box::new(TelemetryHook::new())];
    let mut renderer = HeadlessRenderer::new();
    let output = BenchmarkRunner::run_with(&scenario, &mut hooks, &mut renderer).unwrap();

    assert_eq!(renderer.frame_count(), 20);
    assert_eq!(output.simulator.tick_count(), 20);
    assert_eq!(output.probe_body.applications, output.metrics.reaction_frames);
}

#[derive(Default)]
struct Counts {
    begins: u32,
    ends: u32,
    finished: bool,
}

struct CountingHook(Arc<Mutex<Counts>>);

impl InspectionHook for CountingHook {
    fn on_tick_begin(&mut self, _tick: u64, _dt: f32) {
        self.0.lock().unwrap().begins += 1;
    }

    fn on_tick_end(&mut self, _report: &TickReport) {
        self.0.lock().unwrap().ends += 1;
    }

    fn on_simulation_end(&mut self) {
        self.0.lock().unwrap().finished = true;
    }

    fn name(&self) -> &str {
        "counter"
    }
}

#[test]
fn hooks_see_every_tick() {
    let counts = Arc::new(Mutex::new(Counts::default()));
    let scenario = Scenario::grid_press().with_frames(5);
    let mut hooks: Vec<Box<dyn InspectionHook>> = vec![
        Box::new(CountingHook(Arc::clone(&counts))),
        Box::new(TelemetryHook::new()),
    ];
    let mut renderer = HeadlessRenderer::new();
    BenchmarkRunner::run_with(&scenario, &mut hooks, &mut renderer).unwrap();

    let counts = counts.lock().unwrap();
    assert_eq!(counts.begins, 5);
    assert_eq!(counts.ends, 5);
    assert!(counts.finished);
}

#[test]
fn exporter_records_probe_track() {
    let scenario = Scenario::grid_press().with_frames(4);
    let path = std::env::temp_dir().join(format!("dent_bench_{}.json", std::process::id()));
    let mut exporter = JsonFrameExporter::new(&path);
    BenchmarkRunner::run_with(&scenario, &mut [], &mut exporter).unwrap();
    let written = path.exists();
    let _ = std::fs::remove_file(&path);

    assert!(written);
    let anim = exporter.animation();
    assert_eq!(anim.frames.len(), 4);
    assert!(anim.frames.iter().all(|f| f.probe.is_some()));
}

#[test]
fn frames_are_exported_in_world_space() {
    let mut scenario = Scenario::grid_press().with_frames(2);
    let offset = Vec3::new(0.0, 0.0, 100.0);
    scenario.transform = MeshTransform::from_translation(offset);
    let path = std::env::temp_dir().join(format!("dent_world_{}.json", std::process::id()));
    let mut exporter = JsonFrameExporter::new(&path);
    let output = BenchmarkRunner::run_with(&scenario, &mut [], &mut exporter).unwrap();
    let _ = std::fs::remove_file(&path);

    // The probe never reaches the shifted sheet, so it stays at rest.
    assert_eq!(output.metrics.reaction_frames, 0);
    assert_eq!(output.metrics.final_kinetic_energy, 0.0);
    let frame = &exporter.animation().frames[0];
    let expected = scenario.mesh.position_vec3(0) + offset;
    let got = Vec3::new(frame.positions[0], frame.positions[1], frame.positions[2]);
    assert!((got - expected).length() < 1e-5, "{got:?} vs {expected:?}");
}

// ─── Metrics Tests ────────────────────────────────────────────

#[test]
fn metrics_csv_output() {
    let csv_row = sample_metrics("test").to_csv_row();
    assert!(csv_row.starts_with("test,441,800,100,"));
    assert_eq!(
        csv_row.split(',').count(),
        BenchmarkMetrics::to_csv_header().split(',').count()
    );
}

#[test]
fn metrics_csv_multi() {
    let csv = BenchmarkMetrics::to_csv(&[sample_metrics("a"), sample_metrics("b")]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("scenario"));
}

#[test]
fn metrics_json_round_trip() {
    let metrics = vec![sample_metrics("test")];
    let json = BenchmarkMetrics::to_json(&metrics).unwrap();
    let recovered: Vec<BenchmarkMetrics> = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, metrics);
}
