//! Pluggable event sinks.

use std::sync::{Arc, Mutex};

use crate::events::{EventKind, SimulationEvent};

/// Trait for event consumers.
///
/// Implement this to create custom telemetry outputs.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called when the run ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events into a `Vec` for inspection.
#[derive(Default)]
pub struct VecSink {
    pub events: Vec<SimulationEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.events.push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A `VecSink` whose storage stays reachable after the sink is boxed
/// into a bus.
#[derive(Clone, Default)]
pub struct SharedVecSink {
    events: Arc<Mutex<Vec<SimulationEvent>>>,
}

impl SharedVecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies out everything received so far.
    pub fn events(&self) -> Vec<SimulationEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventSink for SharedVecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }

    fn name(&self) -> &str {
        "shared_vec_sink"
    }
}

/// Forwards events to `tracing`.
///
/// Warnings and init failures go out at `WARN`, per-tick chatter at
/// `TRACE`, everything else at `DEBUG`.
#[derive(Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        match &event.kind {
            EventKind::Warning(warning) => {
                tracing::warn!(tick = event.tick, %warning, "simulation_warning");
            }
            EventKind::InitFailed { reason } => {
                tracing::warn!(tick = event.tick, %reason, "init_failed");
            }
            EventKind::TickBegin { .. } | EventKind::TickEnd { .. } => {
                tracing::trace!(tick = event.tick, event = ?event.kind, "simulation_event");
            }
            _ => {
                tracing::debug!(tick = event.tick, event = ?event.kind, "simulation_event");
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
