//! Inspection hooks for live debugging.
//!
//! Hooks are called by the host driver around each tick to capture
//! metrics or events without touching the simulator itself.

use dent_solver::TickReport;
use dent_telemetry::{EventKind, SimulationEvent};

/// Trait for simulation inspection hooks.
///
/// # Lifecycle
///
/// ```text
/// for each frame:
///   hook.on_tick_begin(...)
///   simulator.tick(...)
///   hook.on_tick_end(...)       // only if the tick ran
/// hook.on_simulation_end()
/// ```
pub trait InspectionHook: Send {
    /// Called before the simulator is ticked.
    fn on_tick_begin(&mut self, tick: u64, dt: f32) {
        let _ = (tick, dt);
    }

    /// Called after a tick that actually ran.
    fn on_tick_end(&mut self, report: &TickReport) {
        let _ = report;
    }

    /// Called after the geometry was restored to rest.
    fn on_reset(&mut self) {}

    /// Called when the run completes.
    fn on_simulation_end(&mut self) {}

    /// Returns the hook's name for logging.
    fn name(&self) -> &str;
}

/// Hook that records lifecycle calls as telemetry events.
pub struct TelemetryHook {
    events: Vec<SimulationEvent>,
}

impl TelemetryHook {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Drains collected events for dispatch.
    pub fn drain_events(&mut self) -> Vec<SimulationEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for TelemetryHook {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectionHook for TelemetryHook {
    fn on_tick_begin(&mut self, tick: u64, dt: f32) {
        self.events
            .push(SimulationEvent::new(tick, EventKind::TickBegin { dt }));
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        self.events.push(SimulationEvent::new(
            report.tick,
            EventKind::Proximity {
                sampled: report.sampled,
                affected: report.affected,
                penetrating: report.penetrating,
            },
        ));
        if let Some(force) = report.reaction {
            self.events.push(SimulationEvent::new(
                report.tick,
                EventKind::Reaction {
                    force: force.to_array(),
                },
            ));
        }
        self.events.push(SimulationEvent::new(
            report.tick,
            EventKind::TickEnd {
                wall_time: report.wall_time,
                normals_refreshed: report.normals_refreshed,
            },
        ));
    }

    fn on_reset(&mut self) {
        let tick = self.events.last().map_or(0, |e| e.tick);
        self.events.push(SimulationEvent::new(tick, EventKind::Reset));
    }

    fn name(&self) -> &str {
        "telemetry_hook"
    }
}
