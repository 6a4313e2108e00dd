//! Benchmark runner — the headless host loop.
//!
//! Each frame the runner samples the probe path, ticks the simulator,
//! hands the reaction force to a [`ForceAccumulator`] standing in for the
//! probe's rigid body, notifies hooks and submits a render frame in world
//! space, the same frame the probe lives in.
//! Simulator telemetry is forwarded to `tracing`.

use std::time::Instant;

use dent_debug::hooks::InspectionHook;
use dent_math::Vec3;
use dent_render::renderer::{HeadlessRenderer, RenderFrame, Renderer};
use dent_solver::{DeformationSimulator, ForceAccumulator, TickOutcome};
use dent_telemetry::{EventBus, TracingSink};
use dent_types::DentResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Metrics plus the simulator in its final state.
pub struct RunOutput {
    pub metrics: BenchmarkMetrics,
    pub simulator: DeformationSimulator,
    /// Reaction forces as received by the probe body.
    pub probe_body: ForceAccumulator,
}

/// Runs scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario headless, without hooks.
    pub fn run(scenario: &Scenario) -> DentResult<BenchmarkMetrics> {
        let mut renderer = HeadlessRenderer::new();
        Ok(Self::run_with(scenario, &mut [], &mut renderer)?.metrics)
    }

    /// Run a scenario, calling `hooks` around every tick and submitting one
    /// frame per tick to `renderer`.
    pub fn run_with(
        scenario: &Scenario,
        hooks: &mut [Box<dyn InspectionHook>],
        renderer: &mut dyn Renderer,
    ) -> DentResult<RunOutput> {
        let bus = EventBus::new().with_sink(Box::new(TracingSink::new()));
        let mut sim = DeformationSimulator::new(scenario.params.clone())
            .with_transform(scenario.transform)
            .with_event_bus(bus);
        let init = sim.initialize(Some(&scenario.mesh))?;
        renderer.init(&scenario.mesh)?;

        let mut body = ForceAccumulator::default();
        let mut step_times: Vec<f64> = Vec::with_capacity(scenario.frames as usize);
        let mut max_displacement = 0.0f32;
        let mut impulse = 0.0f32;
        let mut reaction_frames = 0u32;
        let mut affected_total = 0usize;
        let mut world: Vec<Vec3> = Vec::with_capacity(scenario.mesh.vertex_count());

        let total_start = Instant::now();

        for frame in 0..scenario.frames {
            let t = frame as f32 * scenario.dt;
            let probe = scenario.probe.probe_at(t);
            let tick = sim.tick_count() + 1;

            for hook in hooks.iter_mut() {
                hook.on_tick_begin(tick, scenario.dt);
            }

            let outcome = sim.tick_with_body(Some(&probe), scenario.dt, &mut body);
            let TickOutcome::Stepped(report) = outcome else {
                continue;
            };

            step_times.push(report.wall_time);
            affected_total += report.affected;
            if let Some(force) = report.reaction {
                impulse += force.length() * scenario.dt;
                reaction_frames += 1;
            }
            if let Some(cache) = sim.cache() {
                max_displacement = max_displacement.max(cache.max_displacement());
            }

            for hook in hooks.iter_mut() {
                hook.on_tick_end(&report);
            }

            world.clear();
            world.extend(
                sim.positions()
                    .iter()
                    .map(|&p| scenario.transform.local_to_world_point(p)),
            );
            let render_frame = RenderFrame::from_positions(report.tick, &world)
                .with_probe(probe.center, probe.radius);
            renderer.submit_frame(&render_frame)?;
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();

        for hook in hooks.iter_mut() {
            hook.on_simulation_end();
        }
        renderer.finalize()?;
        if let Some(bus) = sim.event_bus_mut() {
            bus.finish();
        }

        let ticks = step_times.len() as u32;
        let avg_step_time = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step_time = step_times.iter().copied().fold(f64::MAX, f64::min);
        let max_step_time = step_times.iter().copied().fold(0.0, f64::max);
        let avg_affected = if ticks > 0 {
            affected_total as f32 / ticks as f32
        } else {
            0.0
        };
        let final_displacement = sim.cache().map_or(0.0, |c| c.max_displacement());
        let final_kinetic_energy = sim.cache().map_or(0.0, |c| c.kinetic_energy());

        let metrics = BenchmarkMetrics {
            scenario: scenario.name.clone(),
            total_wall_time,
            ticks,
            avg_step_time,
            min_step_time: if ticks > 0 { min_step_time } else { 0.0 },
            max_step_time,
            max_displacement,
            final_displacement,
            final_kinetic_energy,
            total_reaction_impulse: impulse,
            reaction_frames,
            avg_affected,
            vertex_count: scenario.mesh.vertex_count(),
            triangle_count: scenario.mesh.triangle_count(),
            warnings: init.warnings.len(),
        };

        tracing::info!(
            scenario = %metrics.scenario,
            ticks,
            wall_time = metrics.total_wall_time,
            max_displacement,
            "scenario finished"
        );

        Ok(RunOutput {
            metrics,
            simulator: sim,
            probe_body: body,
        })
    }

    /// Run all built-in scenarios and return metrics for each.
    pub fn run_all() -> DentResult<Vec<BenchmarkMetrics>> {
        ScenarioKind::all()
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind)))
            .collect()
    }
}
