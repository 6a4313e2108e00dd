//! Event bus: the simulator queues events during a tick and hands them to
//! every registered sink when the tick is committed.
//!
//! Queueing goes through a `std::sync::mpsc` channel so producers only
//! need `&self`.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::events::SimulationEvent;
use crate::sinks::EventSink;

/// Fan-out of simulation events to pluggable sinks.
pub struct EventBus {
    tx: Sender<SimulationEvent>,
    rx: Receiver<SimulationEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    enabled: bool,
    delivered: u64,
}

impl EventBus {
    /// An enabled bus with no sinks.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            sinks: Vec::new(),
            enabled: true,
            delivered: 0,
        }
    }

    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    pub fn with_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// While disabled, `emit` drops events on the floor.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Queues `event` for the next [`flush`](Self::flush).
    pub fn emit(&self, event: SimulationEvent) {
        if self.enabled {
            // `rx` is owned by the bus, so the channel is never closed here.
            let _ = self.tx.send(event);
        }
    }

    /// Delivers every queued event to every sink, in emission order.
    ///
    /// Returns the number of events delivered.
    pub fn flush(&mut self) -> usize {
        let mut count = 0;
        for event in self.rx.try_iter() {
            self.sinks.iter_mut().for_each(|sink| sink.handle(&event));
            count += 1;
        }
        self.delivered += count as u64;
        count
    }

    /// Final flush, then [`EventSink::finalize`] on every sink.
    pub fn finish(&mut self) {
        self.flush();
        self.sinks.iter_mut().for_each(|sink| sink.finalize());
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Names of the registered sinks, in registration order.
    pub fn sink_names(&self) -> Vec<&str> {
        self.sinks.iter().map(|sink| sink.name()).collect()
    }

    /// Total events delivered since the bus was created.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
