//! CLI command implementations.

use std::error::Error;

use dent_bench::metrics::BenchmarkMetrics;
use dent_bench::runner::BenchmarkRunner;
use dent_bench::scenarios::{Scenario, ScenarioKind};
use dent_debug::hooks::{InspectionHook, TelemetryHook};
use dent_debug::snapshot::StateSnapshot;
use dent_io::mesh_io::{load_mesh_json, save_mesh_json};
use dent_io::{validate_mesh, validate_run_config, RunConfig};
use dent_render::{HeadlessRenderer, JsonFrameExporter, Renderer};

type CliResult = Result<(), Box<dyn Error>>;

/// Options for `dent simulate`.
pub struct SimulateArgs<'a> {
    pub config_path: &'a str,
    pub export_path: Option<&'a str>,
    pub frame_stride: usize,
    pub snapshot_path: Option<&'a str>,
    pub mesh_out: Option<&'a str>,
}

/// Run a simulation from a config file.
pub fn simulate(args: &SimulateArgs<'_>) -> CliResult {
    println!("dent simulation");
    println!("───────────────");
    println!("Config: {}", args.config_path);

    let config = RunConfig::load(args.config_path)?;
    validate_run_config(&config)?;
    let scenario = Scenario::from_config(args.config_path, &config)?;
    validate_mesh(&scenario.mesh)?;

    println!(
        "Mesh:   {} verts, {} tris",
        scenario.mesh.vertex_count(),
        scenario.mesh.triangle_count()
    );
    println!("Frames: {} at dt = {:.4}s", scenario.frames, scenario.dt);
    println!();

    let mut renderer: Box<dyn Renderer> = match args.export_path {
        Some(path) => {
            Box::new(JsonFrameExporter::new(path).with_frame_stride(args.frame_stride))
        }
        None => Box::new(HeadlessRenderer::new()),
    };
    let mut hooks: Vec<Box<dyn InspectionHook>> = vec![Box::new(TelemetryHook::new())];

    let output = BenchmarkRunner::run_with(&scenario, &mut hooks, renderer.as_mut()).map_err(
        |e| -> Box<dyn Error> {
            if e.is_init_error() {
                format!("Mesh rejected by the simulator: {e}").into()
            } else {
                e.into()
            }
        },
    )?;
    let metrics = &output.metrics;

    println!("  Wall time:       {:.3}s", metrics.total_wall_time);
    println!("  Avg step:        {:.3}ms", metrics.avg_step_time * 1000.0);
    println!("  Max displace:    {:.4}", metrics.max_displacement);
    println!("  Final displace:  {:.4}", metrics.final_displacement);
    println!("  Final energy:    {:.6}", metrics.final_kinetic_energy);
    println!("  Reaction frames: {}", metrics.reaction_frames);
    println!(
        "  Probe impulse:   {:.4} (total force {:?})",
        metrics.total_reaction_impulse,
        output.probe_body.total.to_array()
    );
    if let Some(path) = args.export_path {
        println!("  Frames written:  {path} ({})", renderer.frame_count());
    }

    if let Some(path) = args.snapshot_path {
        let cache = output
            .simulator
            .cache()
            .ok_or("simulator has no geometry")?;
        let sim_time = f64::from(scenario.dt) * output.simulator.tick_count() as f64;
        StateSnapshot::from_cache(output.simulator.tick_count(), sim_time, cache).write_to(path)?;
        println!("  Snapshot:        {path}");
    }

    if let Some(path) = args.mesh_out {
        let mesh = output.simulator.mesh().ok_or("simulator has no geometry")?;
        save_mesh_json(mesh, path)?;
        println!("  Final mesh:      {path}");
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(
    scenario_name: &str,
    output_path: Option<&str>,
    json: bool,
    frames: Option<u32>,
) -> CliResult {
    println!("dent benchmark suite");
    println!("════════════════════");
    println!();

    let kinds: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        let kind = ScenarioKind::from_name(scenario_name).ok_or_else(|| {
            let names: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
            format!(
                "Unknown scenario: '{scenario_name}'. Available: {}, all",
                names.join(", ")
            )
        })?;
        vec![kind]
    };

    let mut all_metrics = Vec::new();
    for kind in kinds {
        let mut scenario = Scenario::from_kind(kind);
        if let Some(frames) = frames {
            scenario = scenario.with_frames(frames);
        }

        println!(
            "Running: {} ({} verts, {} tris, {} frames)",
            kind.name(),
            scenario.mesh.vertex_count(),
            scenario.mesh.triangle_count(),
            scenario.frames,
        );

        let metrics = BenchmarkRunner::run(&scenario)
            .map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Max displace:  {:.4}", metrics.max_displacement);
        println!("  Avg affected:  {:.1}", metrics.avg_affected);
        println!();

        all_metrics.push(metrics);
    }

    let text = if json {
        BenchmarkMetrics::to_json(&all_metrics)?
    } else {
        BenchmarkMetrics::to_csv(&all_metrics)
    };

    match output_path {
        Some(path) => {
            std::fs::write(path, &text)?;
            println!("Results written to: {path}");
        }
        None => println!("{text}"),
    }

    Ok(())
}

/// Inspect a state snapshot.
pub fn inspect(path: &str) -> CliResult {
    println!("dent snapshot inspector");
    println!("───────────────────────");
    println!();

    let snapshot = StateSnapshot::read_from(path)?;

    println!("Tick:         {}", snapshot.tick);
    println!("Sim time:     {:.4}s", snapshot.sim_time);
    println!("Vertices:     {}", snapshot.vertex_count);
    println!("Max displace: {:.6}", snapshot.max_displacement());
    println!("Displaced:    {}", snapshot.displaced_count(1e-5));

    let speed = (0..snapshot.vertex_count)
        .map(|i| {
            let v = &snapshot.velocities[i * 3..i * 3 + 3];
            (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
        })
        .fold(0.0f32, f32::max);
    println!("Max speed:    {speed:.6}");

    Ok(())
}

/// Validate a run config or a mesh.
pub fn validate(path: &str) -> CliResult {
    println!("dent validator");
    println!("──────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating config: {path}");
        let config = RunConfig::load(path)?;
        validate_run_config(&config)?;
        let mesh = config.build_mesh()?;
        validate_mesh(&mesh)?;
        println!(
            "✅ Config is valid ({} verts, {} frames).",
            mesh.vertex_count(),
            config.frames
        );
    } else if path.ends_with(".json") {
        println!("Validating mesh: {path}");
        let mesh = load_mesh_json(path)?;
        match validate_mesh(&mesh) {
            Ok(()) => println!(
                "✅ Mesh is valid ({} verts, {} tris).",
                mesh.vertex_count(),
                mesh.triangle_count()
            ),
            Err(e) => println!("❌ Mesh validation failed: {e}"),
        }
    } else {
        println!("Unsupported file format. Use .toml (config) or .json (mesh).");
    }

    Ok(())
}
